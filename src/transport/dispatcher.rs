//! Routes decoded commands to sessions and collects the replies.
//!
//! The dispatcher never sleeps. A resolved tie-break round yields a
//! [`FollowUp`] that the host schedules after its delay and hands back to
//! [`Dispatcher::run_follow_up`].

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::command::{Command, Event, Reply};
use crate::core::{GameId, PlayerId, Seat, SessionConfig, DEFAULT_GOAL_PILE_SIZE};
use crate::registry::{self, SessionRegistry};
use crate::session::{Discard, PlayCard, RoundResult, RoundStatus, Session};

/// Sent to the actor when a card play is refused.
pub const MOVE_NOT_ALLOWED: &str = "move not allowed";
/// Sent to a joiner naming a game that does not exist.
pub const GAME_NOT_FOUND: &str = "game not found or already over";
/// Sent to a third player trying to join.
pub const GAME_FULL: &str = "game is full";

/// Which tie-break continuation to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreakStep {
    /// The round was drawn; start another.
    Reset,
    /// The round was decisive; start the game.
    Finalize,
}

/// A deferred tie-break continuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FollowUp {
    pub game_id: GameId,
    pub delay: Duration,
    pub step: TieBreakStep,
}

/// Everything one command produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub replies: Vec<Reply>,
    pub follow_up: Option<FollowUp>,
}

impl Dispatch {
    fn replies(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            follow_up: None,
        }
    }

    fn reply(reply: Reply) -> Self {
        Self::replies(vec![reply])
    }
}

/// Command router over a session registry.
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: SessionRegistry,
    defaults: SessionConfig,
}

impl Dispatcher {
    #[must_use]
    pub fn new(registry: SessionRegistry) -> Self {
        Self::with_defaults(registry, SessionConfig::default())
    }

    /// `defaults` seeds every created session's config; the command's goal
    /// size overrides its goal pile size.
    #[must_use]
    pub fn with_defaults(registry: SessionRegistry, defaults: SessionConfig) -> Self {
        Self { registry, defaults }
    }

    #[must_use]
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Apply one command.
    #[instrument(skip(self, command), fields(command = command.name(), player = %command.player_id()))]
    pub fn handle(&self, command: Command) -> Dispatch {
        match command {
            Command::CreateGame {
                player_id,
                player_name,
                goal_size,
            } => self.create_game(player_id, player_name, goal_size),
            Command::JoinGame {
                game_id,
                player_id,
                player_name,
            } => self.join_game(&game_id, player_id, player_name),
            Command::PlayCard {
                game_id,
                player_id,
                card_id,
                source,
                source_index,
                target_index,
            } => {
                let play = PlayCard {
                    card_id,
                    source,
                    source_index,
                    target_index,
                };
                self.with_session(&game_id, |session| match session.play_card(&player_id, &play) {
                    Ok(()) => Dispatch::replies(broadcast(session)),
                    Err(err) => {
                        debug!(%game_id, %err, "card play rejected");
                        Dispatch::reply(Reply::error(player_id.clone(), MOVE_NOT_ALLOWED))
                    }
                })
            }
            Command::DiscardCard {
                game_id,
                player_id,
                card_id,
                target_index,
            } => {
                let discard = Discard::new(card_id, target_index);
                self.with_session(&game_id, |session| match session.discard(&player_id, &discard) {
                    Ok(()) => Dispatch::replies(broadcast(session)),
                    Err(err) => {
                        debug!(%game_id, %err, "discard rejected");
                        Dispatch::default()
                    }
                })
            }
            Command::RpsChoice {
                game_id,
                player_id,
                choice,
            } => self.with_session(&game_id, |session| match session.play_rps(&player_id, choice) {
                Ok(status) => Dispatch {
                    replies: broadcast(session),
                    follow_up: follow_up_for(session, status),
                },
                Err(err) => {
                    debug!(%game_id, %err, "tie-break choice rejected");
                    Dispatch::default()
                }
            }),
            Command::Restore { game_id, player_id } => self.restore(&game_id, player_id),
            Command::Disconnect { player_id } => {
                info!(player = %player_id, "client disconnected");
                Dispatch::default()
            }
        }
    }

    /// Run a deferred tie-break step. A session that has gone away or left
    /// the tie-break in the meantime produces no replies.
    #[instrument(skip(self, follow_up), fields(game_id = %follow_up.game_id, step = ?follow_up.step))]
    pub fn run_follow_up(&self, follow_up: &FollowUp) -> Dispatch {
        self.with_session(&follow_up.game_id, |session| {
            let applied = match follow_up.step {
                TieBreakStep::Reset => session.reset_rps_round(),
                TieBreakStep::Finalize => session.finalize_rps().map(|_| ()),
            };
            match applied {
                Ok(()) => Dispatch::replies(broadcast(session)),
                Err(err) => {
                    debug!(%err, "stale tie-break follow-up ignored");
                    Dispatch::default()
                }
            }
        })
    }

    fn create_game(&self, player_id: PlayerId, player_name: String, goal_size: Option<usize>) -> Dispatch {
        let goal_pile_size = match goal_size {
            Some(0) | None => DEFAULT_GOAL_PILE_SIZE,
            Some(size) => size,
        };
        let config = self.defaults.clone().with_goal_pile_size(goal_pile_size);

        match self.registry.create(player_id.clone(), player_name, config) {
            Ok((game_id, handle)) => {
                let session = registry::lock(&handle);
                info!(%game_id, "game created");
                session
                    .game_state(&player_id)
                    .map(|view| Dispatch::reply(Reply::state(view)))
                    .unwrap_or_default()
            }
            Err(err) => {
                warn!(%err, "game creation rejected");
                Dispatch::reply(Reply::error(player_id, err.to_string()))
            }
        }
    }

    fn join_game(&self, game_id: &GameId, player_id: PlayerId, player_name: String) -> Dispatch {
        let Some(handle) = self.registry.get(game_id) else {
            warn!(%game_id, "join for unknown game");
            return Dispatch::reply(Reply::error(player_id, GAME_NOT_FOUND));
        };
        let mut session = registry::lock(&handle);

        match session.join(player_id.clone(), player_name) {
            Ok(_) => Dispatch::replies(broadcast(&*session)),
            Err(_) => Dispatch::reply(Reply::error(player_id, GAME_FULL)),
        }
    }

    fn restore(&self, game_id: &GameId, player_id: PlayerId) -> Dispatch {
        let view = self
            .registry
            .get(game_id)
            .and_then(|handle| registry::lock(&handle).game_state(&player_id));

        match view {
            Some(view) => Dispatch::reply(Reply::state(view)),
            None => {
                debug!(%game_id, player = %player_id, "restore for expired session");
                Dispatch::reply(Reply {
                    to: player_id,
                    event: Event::SessionExpired,
                })
            }
        }
    }

    /// Run `f` on the locked session; unknown games are silently ignored.
    fn with_session(&self, game_id: &GameId, f: impl FnOnce(&mut Session) -> Dispatch) -> Dispatch {
        match self.registry.get(game_id) {
            Some(handle) => f(&mut *registry::lock(&handle)),
            None => {
                debug!(%game_id, "command for unknown game ignored");
                Dispatch::default()
            }
        }
    }
}

/// Each seated player's own view.
fn broadcast(session: &Session) -> Vec<Reply> {
    Seat::both()
        .filter_map(|seat| session.player(seat))
        .filter_map(|player| session.game_state(player.id()))
        .map(Reply::state)
        .collect()
}

fn follow_up_for(session: &Session, status: RoundStatus) -> Option<FollowUp> {
    let RoundStatus::Resolved(result) = status else {
        return None;
    };
    let step = match result {
        RoundResult::Draw => TieBreakStep::Reset,
        RoundResult::P1Wins | RoundResult::P2Wins => TieBreakStep::Finalize,
    };
    Some(FollowUp {
        game_id: session.game_id().clone(),
        delay: session.config().tie_break_delay(),
        step,
    })
}

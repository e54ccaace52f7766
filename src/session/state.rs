//! The per-game session state machine.
//!
//! ```text
//! Waiting ──join──▶ setup ──┬─▶ Playing ──goal pile emptied──▶ Finished
//!                           └─▶ ResolvingTie ──finalize_rps──▶ Playing
//! ```
//!
//! Every mutating operation validates fully before touching state, so a
//! rejected action leaves the session exactly as it was. Callers must
//! serialize mutating calls on one session.

use tracing::{debug, info, warn};

use super::action::{CardSource, Discard, PlayCard};
use super::player::PlayerState;
use super::tie_break::{RoundStatus, RpsChoice, TieBreakState};
use super::view::{GameView, PlayerView, Status, TieBreakView};
use crate::cards::Card;
use crate::core::config::{SessionConfig, DISCARD_SLOT_COUNT, HAND_SIZE, SHARED_PILE_COUNT};
use crate::core::error::{ActionError, ConfigError};
use crate::core::game_id::GameId;
use crate::core::player::{PlayerId, Seat};
use crate::core::rng::GameRng;
use crate::deck::DrawPile;
use crate::rules;

/// Where a session is in its lifecycle.
///
/// The tie-break payload only exists while a tie is being resolved, and a
/// finished game always has a winner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Only the creator is seated.
    Waiting,
    /// Goal tops tied; a rock/paper/scissors round picks the starter.
    ResolvingTie(TieBreakState),
    Playing,
    Finished { winner: Seat },
}

impl Phase {
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Phase::Waiting => Status::Waiting,
            Phase::ResolvingTie(_) => Status::ResolvingTie,
            Phase::Playing => Status::Playing,
            Phase::Finished { .. } => Status::Finished,
        }
    }
}

/// Result of a successful join.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinOutcome {
    /// An already seated player came back; only the display name changed.
    Reconnected(Seat),
    /// A second player took the open seat and the game was set up.
    Seated,
}

/// One game between two players.
#[derive(Clone, Debug)]
pub struct Session {
    game_id: GameId,
    config: SessionConfig,
    deck: DrawPile,
    host: PlayerState,
    guest: Option<PlayerState>,
    shared_piles: [Vec<Card>; SHARED_PILE_COUNT],
    phase: Phase,
    current: Option<Seat>,
}

impl Session {
    /// Create a session with a freshly shuffled deck, seating the creator.
    pub fn new(
        game_id: GameId,
        creator: PlayerId,
        creator_name: impl Into<String>,
        config: SessionConfig,
    ) -> Result<Self, ConfigError> {
        let rng = GameRng::from_seed_or_entropy(config.seed).for_context("deck");
        Self::with_draw_pile(game_id, creator, creator_name, config, DrawPile::new(rng))
    }

    /// Create a session around a prepared draw pile.
    pub fn with_draw_pile(
        game_id: GameId,
        creator: PlayerId,
        creator_name: impl Into<String>,
        config: SessionConfig,
        deck: DrawPile,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(%game_id, creator = %creator, goal_pile_size = config.goal_pile_size, "session created");

        Ok(Self {
            game_id,
            config,
            deck,
            host: PlayerState::new(creator, creator_name.into()),
            guest: None,
            shared_piles: Default::default(),
            phase: Phase::Waiting,
            current: None,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.phase.status()
    }

    /// Seat whose turn it is. `None` before the game starts.
    #[must_use]
    pub fn current_seat(&self) -> Option<Seat> {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.current.and_then(|seat| self.player(seat)).map(PlayerState::id)
    }

    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        match self.phase {
            Phase::Finished { winner } => self.player(winner).map(PlayerState::id),
            _ => None,
        }
    }

    #[must_use]
    pub fn tie_break(&self) -> Option<&TieBreakState> {
        match &self.phase {
            Phase::ResolvingTie(tie) => Some(tie),
            _ => None,
        }
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> Option<&PlayerState> {
        match seat {
            Seat::First => Some(&self.host),
            Seat::Second => self.guest.as_ref(),
        }
    }

    fn player_mut(&mut self, seat: Seat) -> Option<&mut PlayerState> {
        match seat {
            Seat::First => Some(&mut self.host),
            Seat::Second => self.guest.as_mut(),
        }
    }

    #[must_use]
    pub fn seat_of(&self, player_id: &PlayerId) -> Option<Seat> {
        Seat::both().find(|&seat| self.player(seat).is_some_and(|p| p.id() == player_id))
    }

    /// Is `player_id` seated in this session? Used to restore a session
    /// after a reconnect.
    #[must_use]
    pub fn is_player_in_game(&self, player_id: &PlayerId) -> bool {
        self.seat_of(player_id).is_some()
    }

    #[must_use]
    pub fn shared_piles(&self) -> &[Vec<Card>; SHARED_PILE_COUNT] {
        &self.shared_piles
    }

    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.deck
    }

    /// Cards across every container. Always equals `DECK_SIZE`.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let players: usize = Seat::both()
            .filter_map(|seat| self.player(seat))
            .map(PlayerState::card_count)
            .sum();
        let shared: usize = self.shared_piles.iter().map(Vec::len).sum();
        self.deck.count() + self.deck.pending_len() + players + shared
    }

    // === Seating and setup ===

    /// Seat a second player, or refresh the name of a returning one.
    pub fn join(
        &mut self,
        player_id: PlayerId,
        name: impl Into<String>,
    ) -> Result<JoinOutcome, ActionError> {
        let name = name.into();

        if let Some(seat) = self.seat_of(&player_id) {
            if let Some(player) = self.player_mut(seat) {
                player.name = name;
            }
            debug!(game_id = %self.game_id, player = %player_id, %seat, "player reconnected");
            return Ok(JoinOutcome::Reconnected(seat));
        }

        if self.phase != Phase::Waiting || self.guest.is_some() {
            warn!(game_id = %self.game_id, player = %player_id, "join rejected, game is full");
            return Err(ActionError::GameFull);
        }

        info!(game_id = %self.game_id, player = %player_id, "opponent seated");
        self.guest = Some(PlayerState::new(player_id, name));
        self.setup();
        Ok(JoinOutcome::Seated)
    }

    /// Deal goal piles and pick the starter from the revealed goal tops.
    fn setup(&mut self) {
        let goal_size = self.config.goal_pile_size;
        for seat in Seat::both() {
            let goal = self.deck.draw(goal_size);
            if let Some(player) = self.player_mut(seat) {
                player.goal_pile = goal;
            }
        }

        // Raw rank: a wild top counts as 0, the lowest possible.
        let top_rank = |seat| {
            self.player(seat)
                .and_then(PlayerState::goal_top)
                .map_or(0, Card::rank)
        };
        let (first, second) = (top_rank(Seat::First), top_rank(Seat::Second));

        match first.cmp(&second) {
            std::cmp::Ordering::Less => self.start_game(Seat::First),
            std::cmp::Ordering::Greater => self.start_game(Seat::Second),
            std::cmp::Ordering::Equal => {
                let guest_id = self.guest.as_ref().map(|g| g.id().clone());
                if let Some(guest_id) = guest_id {
                    info!(game_id = %self.game_id, rank = first, "goal tops tied, resolving");
                    self.phase = Phase::ResolvingTie(TieBreakState::new(self.host.id().clone(), guest_id));
                    self.current = None;
                }
            }
        }
    }

    /// Hand the first turn to `starter`. Only the starter gets a hand now;
    /// the other player is dealt in when their first turn begins.
    fn start_game(&mut self, starter: Seat) {
        self.phase = Phase::Playing;
        self.current = Some(starter);

        let hand = self.deck.draw(HAND_SIZE);
        if let Some(player) = self.player_mut(starter) {
            player.hand.extend(hand);
        }
        info!(game_id = %self.game_id, %starter, "game started");
    }

    // === Tie-break ===

    /// Submit a rock/paper/scissors choice.
    pub fn play_rps(
        &mut self,
        player_id: &PlayerId,
        choice: RpsChoice,
    ) -> Result<RoundStatus, ActionError> {
        let seat = self
            .seat_of(player_id)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.clone()))?;
        let Phase::ResolvingTie(tie) = &mut self.phase else {
            return Err(ActionError::NoTieBreak);
        };

        let status = tie.choose(seat, choice)?;
        if let RoundStatus::Resolved(result) = status {
            info!(game_id = %self.game_id, round = tie.round_id(), ?result, "tie-break round resolved");
        }
        Ok(status)
    }

    /// Clear a drawn round and start the next one.
    pub fn reset_rps_round(&mut self) -> Result<(), ActionError> {
        let Phase::ResolvingTie(tie) = &mut self.phase else {
            return Err(ActionError::NoTieBreak);
        };
        tie.reset();
        debug!(game_id = %self.game_id, round = tie.round_id(), "tie-break round reset");
        Ok(())
    }

    /// Leave the tie-break and start the game with the round's winner.
    ///
    /// Returns the starting seat.
    pub fn finalize_rps(&mut self) -> Result<Seat, ActionError> {
        let Phase::ResolvingTie(tie) = &self.phase else {
            return Err(ActionError::NoTieBreak);
        };
        let winner = tie.winner().ok_or(ActionError::NoRoundWinner)?;
        self.start_game(winner);
        Ok(winner)
    }

    // === Turn play ===

    /// Seat of `player_id` if the game is running and it is their turn.
    fn acting_seat(&self, player_id: &PlayerId) -> Result<Seat, ActionError> {
        if self.phase != Phase::Playing {
            return Err(ActionError::NotPlaying);
        }
        let seat = self
            .seat_of(player_id)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.clone()))?;
        if self.current != Some(seat) {
            return Err(ActionError::NotYourTurn(player_id.clone()));
        }
        Ok(seat)
    }

    /// Play a card from hand, goal pile or a discard slot onto a shared pile.
    pub fn play_card(&mut self, player_id: &PlayerId, play: &PlayCard) -> Result<(), ActionError> {
        let seat = self.acting_seat(player_id)?;
        let target = play.target_index;
        let pile = self
            .shared_piles
            .get(target)
            .ok_or(ActionError::NoSuchPile(target))?;
        let player = self
            .player(seat)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.clone()))?;

        let unavailable = ActionError::CardUnavailable {
            card: play.card_id,
            from: play.source,
        };
        let card = match play.source {
            CardSource::Hand => player
                .hand_position(play.card_id)
                .map(|pos| player.hand()[pos]),
            CardSource::Goal => player.goal_top().copied(),
            CardSource::Discard => play
                .source_index
                .and_then(|slot| player.discard_top(slot))
                .copied(),
        }
        .filter(|card| card.id() == play.card_id)
        .ok_or(unavailable)?;

        if !rules::is_valid_move(pile, &card) {
            return Err(ActionError::IllegalMove {
                card: card.id(),
                pile: target,
            });
        }

        // Validated; apply.
        let player = self
            .player_mut(seat)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.clone()))?;
        match play.source {
            CardSource::Hand => {
                if let Some(pos) = player.hand_position(card.id()) {
                    player.hand.remove(pos);
                }
            }
            CardSource::Goal => {
                player.goal_pile.pop();
            }
            CardSource::Discard => {
                if let Some(slot) = play.source_index.and_then(|s| player.discards.get_mut(s)) {
                    slot.pop();
                }
            }
        }
        let goal_emptied = play.source == CardSource::Goal && player.goal_pile.is_empty();
        let hand_emptied = player.hand.is_empty();

        if goal_emptied {
            self.phase = Phase::Finished { winner: seat };
            info!(game_id = %self.game_id, winner = %player_id, "goal pile emptied, game finished");
        }

        let pile = &mut self.shared_piles[target];
        pile.push(card);
        debug!(game_id = %self.game_id, player = %player_id, %card, pile = target, height = pile.len(), "card played");

        if rules::is_pile_complete(pile) {
            let completed = std::mem::take(pile);
            let recycled = self.deck.push_to_pending(completed);
            debug!(game_id = %self.game_id, pile = target, recycled, "shared pile completed");
        }

        if hand_emptied && self.phase == Phase::Playing {
            self.refill_hand(seat);
        }
        Ok(())
    }

    /// Move a hand card to a discard slot and pass the turn.
    pub fn discard(&mut self, player_id: &PlayerId, discard: &Discard) -> Result<(), ActionError> {
        let seat = self.acting_seat(player_id)?;
        let slot = discard.target_index;
        if slot >= DISCARD_SLOT_COUNT {
            return Err(ActionError::NoSuchDiscardSlot(slot));
        }

        let player = self
            .player_mut(seat)
            .ok_or_else(|| ActionError::UnknownPlayer(player_id.clone()))?;
        let pos = player
            .hand_position(discard.card_id)
            .ok_or(ActionError::CardUnavailable {
                card: discard.card_id,
                from: CardSource::Hand,
            })?;
        let card = player.hand.remove(pos);
        player.discards[slot].push(card);

        let next = seat.other();
        self.current = Some(next);
        self.refill_hand(next);
        debug!(game_id = %self.game_id, player = %player_id, %card, slot, next = %next, "card discarded, turn passed");
        Ok(())
    }

    /// Top `seat`'s hand back up to five cards.
    fn refill_hand(&mut self, seat: Seat) {
        let Self { host, guest, deck, .. } = self;
        let player = match seat {
            Seat::First => Some(host),
            Seat::Second => guest.as_mut(),
        };
        if let Some(player) = player {
            player.refill_hand(deck);
        }
    }

    // === View projection ===

    /// Project the session for `viewer`. `None` if they are not seated.
    #[must_use]
    pub fn game_state(&self, viewer: &PlayerId) -> Option<GameView> {
        let seat = self.seat_of(viewer)?;
        let me = self.player(seat)?;

        Some(GameView {
            game_id: self.game_id.clone(),
            status: self.status(),
            current_player_id: self.current_player().cloned(),
            shared_piles: self.shared_piles.to_vec(),
            me: PlayerView::revealed(me),
            opponent: self.player(seat.other()).map(PlayerView::redacted),
            draw_pile_count: self.deck.count(),
            piles_to_recycle_count: self.deck.pending_count(),
            winner_id: self.winner().cloned(),
            tie_break: self.tie_break().map(|tie| TieBreakView::for_viewer(tie, seat)),
        })
    }
}

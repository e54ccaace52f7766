//! Wire shapes of inbound commands and outbound replies.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{GameId, PlayerId};
use crate::session::{CardSource, GameView, RpsChoice};

/// A client command, tagged by `type`.
///
/// ```
/// use skipbo_engine::transport::Command;
///
/// let json = r#"{"type":"join_game","gameId":"game_abc1234","playerId":"p2","playerName":"Bob"}"#;
/// let cmd: Command = serde_json::from_str(json).unwrap();
/// assert_eq!(cmd.name(), "join_game");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    CreateGame {
        player_id: PlayerId,
        player_name: String,
        /// Absent or zero means the default goal pile size.
        #[serde(default)]
        goal_size: Option<usize>,
    },
    #[serde(rename_all = "camelCase")]
    JoinGame {
        game_id: GameId,
        player_id: PlayerId,
        player_name: String,
    },
    #[serde(rename_all = "camelCase")]
    PlayCard {
        game_id: GameId,
        player_id: PlayerId,
        card_id: CardId,
        source: CardSource,
        #[serde(default)]
        source_index: Option<usize>,
        target_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    DiscardCard {
        game_id: GameId,
        player_id: PlayerId,
        card_id: CardId,
        target_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    RpsChoice {
        game_id: GameId,
        player_id: PlayerId,
        choice: RpsChoice,
    },
    /// A reconnecting client asks for its view back.
    #[serde(rename_all = "camelCase")]
    Restore { game_id: GameId, player_id: PlayerId },
    #[serde(rename_all = "camelCase")]
    Disconnect { player_id: PlayerId },
}

impl Command {
    /// The wire tag of this command.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateGame { .. } => "create_game",
            Command::JoinGame { .. } => "join_game",
            Command::PlayCard { .. } => "play_card",
            Command::DiscardCard { .. } => "discard_card",
            Command::RpsChoice { .. } => "rps_choice",
            Command::Restore { .. } => "restore",
            Command::Disconnect { .. } => "disconnect",
        }
    }

    /// The player who sent the command.
    #[must_use]
    pub fn player_id(&self) -> &PlayerId {
        match self {
            Command::CreateGame { player_id, .. }
            | Command::JoinGame { player_id, .. }
            | Command::PlayCard { player_id, .. }
            | Command::DiscardCard { player_id, .. }
            | Command::RpsChoice { player_id, .. }
            | Command::Restore { player_id, .. }
            | Command::Disconnect { player_id } => player_id,
        }
    }

    /// The game the command targets. `None` for commands that precede or
    /// outlive a game.
    #[must_use]
    pub fn game_id(&self) -> Option<&GameId> {
        match self {
            Command::JoinGame { game_id, .. }
            | Command::PlayCard { game_id, .. }
            | Command::DiscardCard { game_id, .. }
            | Command::RpsChoice { game_id, .. }
            | Command::Restore { game_id, .. } => Some(game_id),
            Command::CreateGame { .. } | Command::Disconnect { .. } => None,
        }
    }
}

/// Payload of an outbound message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// The recipient's redacted view of the game.
    GameState(GameView),
    /// A rejected command.
    Error { message: String },
    /// The session the client tried to restore no longer has them seated.
    SessionExpired,
}

/// One outbound message addressed to one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub to: PlayerId,
    #[serde(flatten)]
    pub event: Event,
}

impl Reply {
    pub(crate) fn state(view: GameView) -> Self {
        Self {
            to: view.me.id.clone(),
            event: Event::GameState(view),
        }
    }

    pub(crate) fn error(to: PlayerId, message: impl Into<String>) -> Self {
        Self {
            to,
            event: Event::Error {
                message: message.into(),
            },
        }
    }

    /// The view carried by a `GameState` reply.
    #[must_use]
    pub fn view(&self) -> Option<&GameView> {
        match &self.event {
            Event::GameState(view) => Some(view),
            _ => None,
        }
    }
}

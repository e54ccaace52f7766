//! Error types.
//!
//! Every rejected action is local: the session that returned the error is
//! left exactly as it was and stays usable for the next valid action.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;
use crate::session::CardSource;

/// Why a session refused a player action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("game is not in progress")]
    NotPlaying,
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("player {0} is not seated in this game")]
    UnknownPlayer(PlayerId),
    #[error("game is already full")]
    GameFull,
    #[error("card {card} is not the playable card in {from}")]
    CardUnavailable { card: CardId, from: CardSource },
    #[error("shared pile {0} does not exist")]
    NoSuchPile(usize),
    #[error("discard slot {0} does not exist")]
    NoSuchDiscardSlot(usize),
    #[error("card {card} cannot be placed on shared pile {pile}")]
    IllegalMove { card: CardId, pile: usize },
    #[error("no tie-break is in progress")]
    NoTieBreak,
    #[error("tie-break round {0} is already resolved")]
    RoundAlreadyResolved(u32),
    #[error("tie-break round has no winner yet")]
    NoRoundWinner,
}

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("goal pile size must be between 1 and {max}, got {got}")]
    GoalPileSize { got: usize, max: usize },
}

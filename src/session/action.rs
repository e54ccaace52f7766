//! Player action payloads.
//!
//! Field names match the wire format (`cardId`, `sourceIndex`, ...), so the
//! same types are used by the command dispatcher.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Where a played card is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSource {
    /// Any card in the hand, looked up by id.
    Hand,
    /// The top card of the goal pile.
    Goal,
    /// The top card of one discard slot.
    Discard,
}

impl std::fmt::Display for CardSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSource::Hand => write!(f, "hand"),
            CardSource::Goal => write!(f, "goal pile"),
            CardSource::Discard => write!(f, "discard slot"),
        }
    }
}

/// Play a card onto a shared pile.
///
/// ```
/// use skipbo_engine::cards::CardId;
/// use skipbo_engine::session::{CardSource, PlayCard};
///
/// let play = PlayCard::from_discard(CardId::new(12), 3, 0);
/// assert_eq!(play.source, CardSource::Discard);
/// assert_eq!(play.source_index, Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayCard {
    /// Card the client believes it is playing.
    pub card_id: CardId,
    pub source: CardSource,
    /// Discard slot (0..4); only read when `source` is `Discard`.
    #[serde(default)]
    pub source_index: Option<usize>,
    /// Shared pile (0..4).
    pub target_index: usize,
}

impl PlayCard {
    #[must_use]
    pub fn from_hand(card_id: CardId, target_index: usize) -> Self {
        Self {
            card_id,
            source: CardSource::Hand,
            source_index: None,
            target_index,
        }
    }

    #[must_use]
    pub fn from_goal(card_id: CardId, target_index: usize) -> Self {
        Self {
            card_id,
            source: CardSource::Goal,
            source_index: None,
            target_index,
        }
    }

    #[must_use]
    pub fn from_discard(card_id: CardId, slot: usize, target_index: usize) -> Self {
        Self {
            card_id,
            source: CardSource::Discard,
            source_index: Some(slot),
            target_index,
        }
    }
}

/// Discard a hand card into one of the four discard slots, ending the turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discard {
    pub card_id: CardId,
    /// Discard slot (0..4).
    pub target_index: usize,
}

impl Discard {
    #[must_use]
    pub fn new(card_id: CardId, target_index: usize) -> Self {
        Self {
            card_id,
            target_index,
        }
    }
}

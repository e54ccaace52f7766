//! The card value type.
//!
//! A `Card` never changes once created. A wild card stores rank 0; the
//! value it stands for on a shared pile is derived from its position there
//! (see `rules::effective_value`) and is never written back to the card.

use serde::{Deserialize, Serialize};

use crate::core::config::MAX_RANK;

/// Unique identifier for one physical card in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u16);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Display color, derived from rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    /// Ranks 1-4.
    Blue,
    /// Ranks 5-8.
    Green,
    /// Ranks 9-12.
    Red,
    /// Wild cards (rendered orange).
    Wild,
}

impl CardColor {
    /// Color band for a numbered rank.
    #[must_use]
    pub const fn for_rank(rank: u8) -> Self {
        match rank {
            1..=4 => CardColor::Blue,
            5..=8 => CardColor::Green,
            _ => CardColor::Red,
        }
    }
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    id: CardId,
    rank: u8,
    is_wild: bool,
    color: CardColor,
}

impl Card {
    /// Create a numbered card.
    ///
    /// Panics if `rank` is outside 1..=12.
    #[must_use]
    pub fn numbered(id: CardId, rank: u8) -> Self {
        assert!((1..=MAX_RANK).contains(&rank), "rank must be 1-12, got {rank}");
        Self {
            id,
            rank,
            is_wild: false,
            color: CardColor::for_rank(rank),
        }
    }

    /// Create a wild card.
    #[must_use]
    pub const fn wild(id: CardId) -> Self {
        Self {
            id,
            rank: 0,
            is_wild: true,
            color: CardColor::Wild,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Stored rank. Always 0 for a wild card at rest.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.is_wild
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.color
    }

    /// The card as it re-enters circulation: wilds back at rank 0.
    #[must_use]
    pub const fn at_rest(self) -> Self {
        if self.is_wild {
            Self::wild(self.id)
        } else {
            self
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_wild {
            write!(f, "W{}", self.id)
        } else {
            write!(f, "{}{}", self.rank, self.id)
        }
    }
}

//! Player identification and seating.
//!
//! ## PlayerId
//!
//! Opaque identifier supplied by the client. The engine only compares it.
//!
//! ## Seat
//!
//! A session has exactly two seats. The creator always occupies
//! `Seat::First`; whoever joins second occupies `Seat::Second`.

use serde::{Deserialize, Serialize};

/// Client-supplied player identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The player who created the session.
    First,
    /// The player who joined it.
    Second,
}

impl Seat {
    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Both seats in seating order.
    pub fn both() -> impl Iterator<Item = Seat> {
        [Seat::First, Seat::Second].into_iter()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "seat 1"),
            Seat::Second => write!(f, "seat 2"),
        }
    }
}

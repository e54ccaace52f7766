//! Session identifiers.
//!
//! Game ids look like `game_k3x9q2a`: a fixed prefix followed by seven
//! base-36 characters. They are generated by the registry and treated as
//! opaque everywhere else.
//!
//! ```
//! use skipbo_engine::core::{GameId, GameRng};
//!
//! let mut rng = GameRng::new(7);
//! let id = GameId::generate(&mut rng);
//! assert!(id.as_str().starts_with("game_"));
//! assert_eq!(id.as_str().len(), "game_".len() + 7);
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

const PREFIX: &str = "game_";
const SUFFIX_LEN: usize = 7;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Unique identifier for a live session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    /// Wrap an existing identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut id = String::with_capacity(PREFIX.len() + SUFFIX_LEN);
        id.push_str(PREFIX);
        for _ in 0..SUFFIX_LEN {
            id.push(ALPHABET[rng.gen_range_usize(0..ALPHABET.len())] as char);
        }
        Self(id)
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

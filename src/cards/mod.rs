//! Card model.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of one physical card within a session
//! - `Card`: Immutable value (id, rank, wild flag, derived color)
//! - `CardColor`: Display band derived from rank

pub mod card;

pub use card::{Card, CardColor, CardId};

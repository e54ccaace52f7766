//! Session state machine: seating, setup, tie-break, turn play and the
//! per-viewer view.
//!
//! ## Key Types
//!
//! - `Session`: One game's complete state and its mutating operations
//! - `Phase`: Lifecycle state; carries the tie-break while resolving a tie
//! - `PlayCard` / `Discard`: Turn action payloads
//! - `TieBreakState`: Rock/paper/scissors round used to pick the starter
//! - `GameView`: Redacted projection for one viewer

pub mod action;
pub mod player;
pub mod state;
pub mod tie_break;
pub mod view;

pub use action::{CardSource, Discard, PlayCard};
pub use player::{Hand, PlayerState};
pub use state::{JoinOutcome, Phase, Session};
pub use tie_break::{RoundResult, RoundStatus, RpsChoice, TieBreakState};
pub use view::{ChoiceView, GameView, PlayerView, Status, TieBreakView};

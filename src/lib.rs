//! # skipbo-engine
//!
//! Authoritative rules engine for two-player Skip-Bo sessions.
//!
//! ## Design Principles
//!
//! 1. **Server-Authoritative**: Clients send intents; every move is
//!    validated against the session before anything changes. A rejected
//!    move leaves the session untouched.
//!
//! 2. **Redacted Views**: The only thing that leaves a session is a
//!    per-viewer `GameView`. Opponent hands and buried goal cards never do.
//!
//! 3. **Reproducible**: Every shuffle draws from a seedable `GameRng`, so a
//!    fixed seed replays a game card for card.
//!
//! ## Modules
//!
//! - `core`: Player and game ids, seats, RNG, configuration, errors
//! - `cards`: The immutable card value
//! - `deck`: Draw pile generation, dealing and recycling
//! - `rules`: Pure move validation
//! - `session`: Per-game state machine and view projection
//! - `registry`: Live sessions keyed by game id
//! - `transport`: Command decoding, routing and reply addressing
//!
//! ## Example
//!
//! ```
//! use skipbo_engine::{GameId, PlayerId, Session, SessionConfig, Status};
//!
//! let config = SessionConfig::new().with_goal_pile_size(5).with_seed(42);
//! let mut session = Session::new(GameId::from("game_demo123"), PlayerId::new("ann"), "Ann", config).unwrap();
//! assert_eq!(session.status(), Status::Waiting);
//!
//! session.join(PlayerId::new("bob"), "Bob").unwrap();
//! assert_ne!(session.status(), Status::Waiting);
//! assert_eq!(session.total_cards(), 162);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod registry;
pub mod rules;
pub mod session;
pub mod transport;

// Re-export commonly used types
pub use crate::core::{
    ActionError, ConfigError, GameId, GameRng, PlayerId, Seat, SessionConfig, DECK_SIZE,
    DEFAULT_GOAL_PILE_SIZE, HAND_SIZE,
};

pub use crate::cards::{Card, CardColor, CardId};

pub use crate::deck::DrawPile;

pub use crate::rules::{is_pile_complete, is_valid_move};

pub use crate::session::{
    CardSource, Discard, GameView, JoinOutcome, Phase, PlayCard, PlayerView, RoundResult,
    RoundStatus, RpsChoice, Session, Status,
};

pub use crate::registry::{SessionHandle, SessionRegistry};

pub use crate::transport::{Command, Dispatch, Dispatcher, Event, FollowUp, Reply, TieBreakStep};

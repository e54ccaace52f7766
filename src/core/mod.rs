//! Core types shared by every layer: ids, seats, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod game_id;
pub mod player;
pub mod rng;

pub use config::{
    SessionConfig, COMPLETED_PILE_SIZE, COPIES_PER_RANK, DECK_SIZE, DEFAULT_GOAL_PILE_SIZE,
    DEFAULT_TIE_BREAK_DELAY_MS, DISCARD_SLOT_COUNT, HAND_SIZE, MAX_GOAL_PILE_SIZE, MAX_RANK,
    RECYCLE_THRESHOLD, SHARED_PILE_COUNT, WILD_COUNT,
};
pub use error::{ActionError, ConfigError};
pub use game_id::GameId;
pub use player::{PlayerId, Seat};
pub use rng::GameRng;

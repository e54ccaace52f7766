//! Command-level front end: decode a client command, apply it to the right
//! session and address the resulting views.

pub mod command;
pub mod dispatcher;

pub use command::{Command, Event, Reply};
pub use dispatcher::{Dispatch, Dispatcher, FollowUp, TieBreakStep, GAME_FULL, GAME_NOT_FOUND, MOVE_NOT_ALLOWED};

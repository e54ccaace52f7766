//! Move validation.
//!
//! Pure functions with no hidden state. Callable from any server-side
//! validation path without a session.

pub mod validator;

pub use validator::{effective_value, is_pile_complete, is_valid_move, top_value};

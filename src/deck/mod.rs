//! Draw engine: card generation, shuffling, dealing and recycling.
//!
//! ## Key Types
//!
//! - `DrawPile`: The single shared draw pile and the buffer of completed
//!   shared piles waiting to be shuffled back in

pub mod draw_pile;

pub use draw_pile::DrawPile;

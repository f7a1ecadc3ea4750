//! Glyph Galaxy: spot the target glyph among look-alikes.
//!
//! Every round draws a similarity group, picks a target inside it and
//! builds a pool of 12 options dominated by the group's glyphs.
//! Generation is always local and synchronous.

mod game;
mod round;

pub use game::{MatchingGame, MatchingGameBuilder};
pub use round::MatchingRound;

//! Mini-games built on the round engine.
//!
//! - `quiz`: letter-name quiz, static or AI-generated questions
//! - `matching`: Glyph Galaxy, find the target among look-alikes

pub mod quiz;
pub mod matching;

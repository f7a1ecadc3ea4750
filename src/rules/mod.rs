//! Round engine trait shared by the mini-games.
//!
//! Games implement `RoundEngine` to define:
//! - What the correct answer is for the current round
//! - How long the feedback lock lasts
//! - What happens when a new round starts
//!
//! Scoring, turn rotation, the feedback lock and termination live in the
//! trait's provided methods so both games behave identically.

pub mod engine;

pub use engine::{AnswerOutcome, GameResult, RoundEngine};

//! Session state shared by both round engines.
//!
//! ## SessionState
//!
//! Everything a host needs to draw the HUD:
//! - Phase (loading, playing, feedback lock, finished)
//! - Roster with running scores
//! - Turn number, round index and round limit
//! - Answer history
//!
//! ## Invariants
//!
//! - The active team is always `turn_number mod team_count`
//! - `round_index` only grows and never reaches `round_limit`
//! - Once `Finished`, nothing mutates the state again

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::answer::{AnswerRecord, FeedbackKind};
use super::team::{Roster, TeamId};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Round data is still being prepared.
    Loading,
    /// Waiting for the active team's answer.
    Playing,
    /// Showing correctness feedback; answers are rejected.
    Feedback(FeedbackKind),
    /// Round limit reached.
    Finished,
}

/// What happened when a feedback lock was released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundAdvance {
    /// Moved on to the given round.
    NextRound(usize),
    /// That was the last round.
    Finished,
}

/// Mutable state of one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    roster: Roster,
    phase: Phase,
    turn_number: u32,
    round_index: usize,
    round_limit: usize,
    history: Vector<AnswerRecord>,
}

impl SessionState {
    /// Create a session in the `Loading` phase.
    #[must_use]
    pub fn new(roster: Roster, round_limit: usize) -> Self {
        assert!(round_limit > 0, "Round limit must be at least 1");

        Self {
            roster,
            phase: Phase::Loading,
            turn_number: 0,
            round_index: 0,
            round_limit,
            history: Vector::new(),
        }
    }

    /// Leave `Loading` and start accepting answers.
    pub fn start(&mut self) {
        if self.phase == Phase::Loading {
            self.phase = Phase::Playing;
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.roster.team_count()
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Current round (0-based).
    #[must_use]
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    #[must_use]
    pub fn round_limit(&self) -> usize {
        self.round_limit
    }

    /// Team whose turn it is.
    #[must_use]
    pub fn active_team(&self) -> TeamId {
        TeamId::new((self.turn_number as usize % self.team_count()) as u8)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// True only while waiting for an answer.
    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Answers submitted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<AnswerRecord> {
        &self.history
    }

    /// Score an answer for the active team and enter the feedback lock.
    ///
    /// Returns `None` without touching anything unless the session is `Playing`.
    pub fn record_answer(&mut self, answer: impl Into<String>, correct: bool) -> Option<FeedbackKind> {
        if !self.accepts_answers() {
            return None;
        }

        let team = self.active_team();
        let feedback = FeedbackKind::from_correct(correct);
        if correct {
            self.roster.award(team);
        }

        self.history.push_back(AnswerRecord {
            team,
            round: self.round_index,
            answer: answer.into(),
            feedback,
        });
        self.phase = Phase::Feedback(feedback);

        debug!("round {} answered by {}: {:?}", self.round_index, team, feedback);
        Some(feedback)
    }

    /// Clear the feedback lock and move to the next round or finish.
    ///
    /// Returns `None` if no lock was held.
    pub fn release_feedback(&mut self) -> Option<RoundAdvance> {
        if !matches!(self.phase, Phase::Feedback(_)) {
            return None;
        }

        if self.round_index + 1 >= self.round_limit {
            self.phase = Phase::Finished;
            debug!("session finished after {} rounds", self.round_limit);
            return Some(RoundAdvance::Finished);
        }

        self.round_index += 1;
        self.turn_number += 1;
        self.phase = Phase::Playing;
        Some(RoundAdvance::NextRound(self.round_index))
    }
}

//! Round engine trait for the mini-games.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::answer::FeedbackKind;
use crate::core::state::{RoundAdvance, SessionState};
use crate::core::team::{Roster, Team, TeamId};

/// Final standings of a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Teams by descending score; roster order breaks ties.
    pub ranking: Vec<Team>,
    /// More than one team and every score equal.
    pub tie: bool,
}

impl GameResult {
    /// Rank a roster.
    #[must_use]
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            ranking: roster.ranking(),
            tie: roster.is_tie(),
        }
    }

    /// Top of the ranking. With a tie this is simply the first team listed.
    #[must_use]
    pub fn winner(&self) -> &Team {
        &self.ranking[0]
    }

    /// Check if a team won outright.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        !self.tie && self.winner().id == team
    }

    /// Headline for the results screen.
    #[must_use]
    pub fn headline(&self) -> String {
        if self.tie {
            "It's a Tie!".to_string()
        } else {
            format!("{} Wins!", self.winner().name)
        }
    }
}

/// What `submit_answer` reports back to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub team: TeamId,
    pub feedback: FeedbackKind,
    /// The glyph that was expected.
    pub correct_answer: String,
    /// How long to wait before calling `release_feedback`.
    pub lock: Duration,
}

/// Round engine trait.
///
/// ## Implementation Notes
///
/// - `correct_answer`: the glyph that wins the current round
/// - `start_round`: called once per new round after the first; regenerate round data here
/// - All mutation happens inside synchronous calls, so hosts never need locks
///   around a single engine
pub trait RoundEngine {
    /// Session state (roster, phase, indices).
    fn state(&self) -> &SessionState;

    /// Mutable session state.
    fn state_mut(&mut self) -> &mut SessionState;

    /// Correct glyph for the current round.
    fn correct_answer(&self) -> &str;

    /// Duration of the feedback lock.
    fn feedback_delay(&self) -> Duration;

    /// Prepare data for `round`. Default does nothing.
    fn start_round(&mut self, _round: usize) {}

    // === Provided ===

    /// Answer the current round for the active team.
    ///
    /// Returns `None` (and changes nothing) during a feedback lock, before
    /// the session starts, or after it finished.
    fn submit_answer(&mut self, answer: &str) -> Option<AnswerOutcome> {
        if !self.state().accepts_answers() {
            return None;
        }

        let team = self.state().active_team();
        let correct_answer = self.correct_answer().to_string();
        let feedback = self
            .state_mut()
            .record_answer(answer, answer == correct_answer)?;

        Some(AnswerOutcome {
            team,
            feedback,
            correct_answer,
            lock: self.feedback_delay(),
        })
    }

    /// End the feedback lock: advance to the next round or finish.
    fn release_feedback(&mut self) -> Option<RoundAdvance> {
        let advance = self.state_mut().release_feedback()?;

        match advance {
            RoundAdvance::NextRound(round) => self.start_round(round),
            RoundAdvance::Finished => {
                if let Some(result) = self.is_terminal() {
                    info!("session finished: {}", result.headline());
                }
            }
        }

        Some(advance)
    }

    /// Team whose turn it is.
    fn active_team(&self) -> TeamId {
        self.state().active_team()
    }

    /// Final result once the session has finished.
    fn is_terminal(&self) -> Option<GameResult> {
        self.state()
            .is_finished()
            .then(|| GameResult::from_roster(self.state().roster()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Phase;
    use crate::core::team::TeamNaming;

    /// Engine whose answer is always "ا".
    struct FixedEngine {
        state: SessionState,
        rounds_started: Vec<usize>,
    }

    impl FixedEngine {
        fn new(teams: usize, rounds: usize) -> Self {
            let mut state = SessionState::new(Roster::new(teams, TeamNaming::Groups), rounds);
            state.start();
            Self { state, rounds_started: Vec::new() }
        }
    }

    impl RoundEngine for FixedEngine {
        fn state(&self) -> &SessionState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut SessionState {
            &mut self.state
        }

        fn correct_answer(&self) -> &str {
            "ا"
        }

        fn feedback_delay(&self) -> Duration {
            Duration::from_millis(5)
        }

        fn start_round(&mut self, round: usize) {
            self.rounds_started.push(round);
        }
    }

    #[test]
    fn test_game_result_winner() {
        let mut roster = Roster::new(2, TeamNaming::Groups);
        roster.award(TeamId::new(1));
        let result = GameResult::from_roster(&roster);

        assert!(!result.tie);
        assert!(result.is_winner(TeamId::new(1)));
        assert!(!result.is_winner(TeamId::new(0)));
        assert_eq!(result.headline(), "Group 2 Wins!");
    }

    #[test]
    fn test_game_result_tie() {
        let roster = Roster::new(3, TeamNaming::Groups);
        let result = GameResult::from_roster(&roster);

        assert!(result.tie);
        assert!(!result.is_winner(TeamId::new(0)));
        assert_eq!(result.headline(), "It's a Tie!");
    }

    #[test]
    fn test_submit_and_release() {
        let mut engine = FixedEngine::new(2, 3);

        let outcome = engine.submit_answer("ا").unwrap();
        assert_eq!(outcome.team, TeamId::new(0));
        assert_eq!(outcome.feedback, FeedbackKind::Correct);
        assert_eq!(outcome.lock, Duration::from_millis(5));
        assert!(engine.submit_answer("ا").is_none());

        assert_eq!(engine.release_feedback(), Some(RoundAdvance::NextRound(1)));
        assert_eq!(engine.active_team(), TeamId::new(1));
        assert_eq!(engine.rounds_started, vec![1]);

        let outcome = engine.submit_answer("ب").unwrap();
        assert_eq!(outcome.feedback, FeedbackKind::Wrong);
        assert_eq!(outcome.correct_answer, "ا");
    }

    #[test]
    fn test_terminal_only_when_finished() {
        let mut engine = FixedEngine::new(1, 1);
        assert!(engine.is_terminal().is_none());

        engine.submit_answer("ا");
        assert!(engine.is_terminal().is_none());

        assert_eq!(engine.release_feedback(), Some(RoundAdvance::Finished));
        assert_eq!(engine.state().phase(), Phase::Finished);

        let result = engine.is_terminal().unwrap();
        assert_eq!(result.winner().score, 10);
        assert!(!result.tie);
        assert!(engine.submit_answer("ا").is_none());
        assert!(engine.rounds_started.is_empty());
    }
}

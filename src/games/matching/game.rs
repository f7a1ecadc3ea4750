//! Glyph Galaxy engine.

use std::time::Duration;

use log::info;

use super::round::MatchingRound;
use crate::alphabet::{AlphabetTable, SimilarityGroup, SIMILARITY_GROUPS};
use crate::core::{ArenaConfig, GameMode, GameRng, Roster, SessionState, TeamNaming};
use crate::rules::RoundEngine;

/// A running Glyph Galaxy session.
#[derive(Clone, Debug)]
pub struct MatchingGame {
    state: SessionState,
    table: AlphabetTable,
    groups: &'static [SimilarityGroup],
    pool_size: usize,
    feedback: Duration,
    round: MatchingRound,
    rng: GameRng,
}

/// Builder for creating a MatchingGame.
#[derive(Clone, Debug)]
pub struct MatchingGameBuilder {
    mode: GameMode,
    config: ArenaConfig,
    table: AlphabetTable,
    groups: &'static [SimilarityGroup],
}

impl Default for MatchingGameBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::Solo,
            config: ArenaConfig::default(),
            table: AlphabetTable::standard(),
            groups: &SIMILARITY_GROUPS,
        }
    }
}

impl MatchingGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(mut self, config: ArenaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn table(mut self, table: AlphabetTable) -> Self {
        self.table = table;
        self
    }

    pub fn groups(mut self, groups: &'static [SimilarityGroup]) -> Self {
        assert!(!groups.is_empty(), "Need at least 1 similarity group");
        assert!(groups.iter().all(|g| !g.is_empty()), "Similarity groups must not be empty");
        self.groups = groups;
        self
    }

    /// Build the game and draw the first round.
    pub fn build(self, mut rng: GameRng) -> MatchingGame {
        let roster = Roster::new(self.mode.team_count(), TeamNaming::Groups);
        let mut state = SessionState::new(roster, self.config.matching_rounds);

        let pool_size = self.config.matching_pool_size;
        let round = MatchingRound::generate(self.groups, &self.table, pool_size, &mut rng);
        state.start();

        info!(
            "glyph galaxy started: {} team(s), {} rounds",
            self.mode.team_count(),
            self.config.matching_rounds
        );

        MatchingGame {
            state,
            table: self.table,
            groups: self.groups,
            pool_size,
            feedback: self.config.matching_feedback(),
            round,
            rng,
        }
    }
}

impl MatchingGame {
    /// Current round's target and pool.
    #[must_use]
    pub fn round(&self) -> &MatchingRound {
        &self.round
    }

    /// "STAR 3 / 10" style progress, 1-based.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.state.round_index() + 1, self.state.round_limit())
    }
}

impl RoundEngine for MatchingGame {
    fn state(&self) -> &SessionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    fn correct_answer(&self) -> &str {
        self.round.target
    }

    fn feedback_delay(&self) -> Duration {
        self.feedback
    }

    fn start_round(&mut self, _round: usize) {
        self.round = MatchingRound::generate(self.groups, &self.table, self.pool_size, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackKind, Phase, RoundAdvance, TeamId};

    #[test]
    fn test_game_creation() {
        let game = MatchingGameBuilder::new().mode(GameMode::Teams2).build(GameRng::new(42));

        assert_eq!(game.state().phase(), Phase::Playing);
        assert_eq!(game.state().round_limit(), 10);
        assert_eq!(game.progress(), (1, 10));
        assert_eq!(game.round().pool.len(), 12);
        assert_eq!(game.feedback_delay(), Duration::from_millis(1200));
    }

    #[test]
    fn test_solo_is_named_group() {
        let game = MatchingGameBuilder::new().build(GameRng::new(1));
        assert_eq!(game.state().roster()[TeamId::new(0)].name, "Group 1");
    }

    #[test]
    fn test_round_regenerates_after_release() {
        let mut game = MatchingGameBuilder::new().build(GameRng::new(42));
        let mut rounds = vec![game.round().clone()];

        for _ in 0..9 {
            let target = game.round().target;
            assert_eq!(game.submit_answer(target).unwrap().feedback, FeedbackKind::Correct);
            assert!(matches!(game.release_feedback(), Some(RoundAdvance::NextRound(_))));
            rounds.push(game.round().clone());
        }

        // Ten rounds drawn; they are not all the same
        assert!(rounds.windows(2).any(|w| w[0] != w[1]));
        assert!(rounds.iter().all(|r| r.pool.len() == 12 && r.pool.contains(&r.target)));
    }

    #[test]
    fn test_full_game() {
        let mut game = MatchingGameBuilder::new().mode(GameMode::Teams2).build(GameRng::new(9));

        // Team 0 always right, team 1 always wrong
        while !game.state().is_finished() {
            let answer = if game.active_team() == TeamId::new(0) {
                game.round().target
            } else {
                "not-a-glyph"
            };
            game.submit_answer(answer).unwrap();
            game.release_feedback();
        }

        let result = game.is_terminal().unwrap();
        assert_eq!(result.winner().id, TeamId::new(0));
        assert_eq!(result.winner().score, 50);
        assert_eq!(result.ranking[1].score, 0);
        assert!(!result.tie);
    }

    #[test]
    fn test_custom_round_count() {
        let config = ArenaConfig::default().with_matching_rounds(3);
        let mut game = MatchingGameBuilder::new().config(config).build(GameRng::new(2));

        for _ in 0..3 {
            game.submit_answer("x").unwrap();
            game.release_feedback();
        }
        assert!(game.state().is_finished());
        assert!(game.submit_answer("x").is_none());
    }
}

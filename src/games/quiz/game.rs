//! Quiz engine.

use std::time::Duration;

use log::info;

use super::question::RoundQuestion;
use super::source::{prepare_questions, static_questions, QuestionOrigin};
use crate::alphabet::AlphabetTable;
use crate::core::{ArenaConfig, GameMode, GameRng, Phase, Roster, SessionState, TeamNaming};
use crate::gateway::{ContentGateway, RequestSlot, RequestState};
use crate::rules::RoundEngine;

/// A running quiz session.
#[derive(Clone, Debug)]
pub struct QuizGame {
    state: SessionState,
    questions: Vec<RoundQuestion>,
    origin: QuestionOrigin,
    feedback: Duration,
    /// Guards the "read the question aloud" button.
    prompt_audio: RequestSlot<()>,
}

/// Builder for creating a QuizGame.
#[derive(Clone, Debug)]
pub struct QuizGameBuilder {
    mode: GameMode,
    config: ArenaConfig,
    table: AlphabetTable,
}

impl Default for QuizGameBuilder {
    fn default() -> Self {
        Self {
            mode: GameMode::Solo,
            config: ArenaConfig::default(),
            table: AlphabetTable::standard(),
        }
    }
}

impl QuizGameBuilder {
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
        assert!(table.len() >= 4, "Quiz needs at least 4 letters");
        self.table = table;
        self
    }

    /// Questions needed so every team gets a full quota.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.mode.team_count() * self.config.rounds_per_player
    }

    /// Build with locally generated questions.
    pub fn build(self, rng: &mut GameRng) -> QuizGame {
        let questions = static_questions(&self.table, self.total_questions(), rng);
        self.from_questions(questions, QuestionOrigin::Static)
    }

    /// Build using the configured question source.
    ///
    /// The gateway is only consulted for `QuestionSource::Generated`; any
    /// failure there still yields a playable session.
    pub async fn build_with<G: ContentGateway>(self, gateway: &G, rng: &mut GameRng) -> QuizGame {
        let (questions, origin) = prepare_questions(
            self.config.question_source,
            gateway,
            &self.table,
            self.total_questions(),
            rng,
        )
        .await;
        self.from_questions(questions, origin)
    }

    /// Build from an explicit question list.
    pub fn from_questions(self, questions: Vec<RoundQuestion>, origin: QuestionOrigin) -> QuizGame {
        assert!(!questions.is_empty(), "Quiz needs at least 1 question");

        let roster = Roster::new(self.mode.team_count(), TeamNaming::PlayerWhenSolo);
        let mut state = SessionState::new(roster, questions.len());
        state.start();

        info!(
            "quiz started: {} team(s), {} questions ({:?})",
            self.mode.team_count(),
            questions.len(),
            origin
        );

        QuizGame {
            state,
            questions,
            origin,
            feedback: self.config.quiz_feedback(),
            prompt_audio: RequestSlot::new(),
        }
    }
}

impl QuizGame {
    /// Question for the current round.
    #[must_use]
    pub fn current_question(&self) -> &RoundQuestion {
        &self.questions[self.state.round_index()]
    }

    #[must_use]
    pub fn questions(&self) -> &[RoundQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Where this session's questions came from.
    #[must_use]
    pub fn origin(&self) -> QuestionOrigin {
        self.origin
    }

    /// "3 / 10" style progress, 1-based.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.state.round_index() + 1, self.questions.len())
    }

    /// Start reading the current question aloud.
    ///
    /// Returns the sentence to synthesize, or `None` if audio is already
    /// playing or the session is not in play.
    pub fn begin_prompt_audio(&mut self) -> Option<String> {
        if matches!(self.state.phase(), Phase::Loading | Phase::Finished) {
            return None;
        }
        if !self.prompt_audio.begin() {
            return None;
        }
        Some(self.current_question().spoken_prompt())
    }

    /// Playback ended (or failed); the button is usable again.
    pub fn settle_prompt_audio<E>(&mut self, result: Result<(), E>) {
        self.prompt_audio.settle(result);
    }

    #[must_use]
    pub fn prompt_audio(&self) -> &RequestState<()> {
        self.prompt_audio.state()
    }
}

impl RoundEngine for QuizGame {
    fn state(&self) -> &SessionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    fn correct_answer(&self) -> &str {
        &self.current_question().correct
    }

    fn feedback_delay(&self) -> Duration {
        self.feedback
    }
}

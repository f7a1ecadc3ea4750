//! Top-level view state.
//!
//! `AppState` is owned by whoever hosts the app (the terminal binary, a UI
//! shell, a test). It tracks which screen is showing, owns the lesson deck,
//! and holds at most one live game session.

use log::info;

use super::catalog::{self, CatalogEntry};
use crate::alphabet::AlphabetTable;
use crate::core::{ArenaConfig, GameMode, GameRng, GameType, Phase, SessionState};
use crate::flashcard::{deck, LetterCard};
use crate::games::matching::{MatchingGame, MatchingGameBuilder};
use crate::games::quiz::{QuizGame, QuizGameBuilder};
use crate::gateway::ContentGateway;
use crate::rules::{AnswerOutcome, GameResult};
use crate::session::Session;

/// Screens reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Lessons,
    Games,
}

/// A live session of either mini-game.
#[derive(Debug)]
pub enum ArenaSession {
    Quiz(Session<QuizGame>),
    Matching(Session<MatchingGame>),
}

impl ArenaSession {
    pub fn submit_answer(&self, answer: &str) -> Option<AnswerOutcome> {
        match self {
            ArenaSession::Quiz(s) => s.submit_answer(answer),
            ArenaSession::Matching(s) => s.submit_answer(answer),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            ArenaSession::Quiz(s) => s.phase(),
            ArenaSession::Matching(s) => s.phase(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        match self {
            ArenaSession::Quiz(s) => s.snapshot(),
            ArenaSession::Matching(s) => s.snapshot(),
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            ArenaSession::Quiz(s) => s.result(),
            ArenaSession::Matching(s) => s.result(),
        }
    }

    /// What the active team is asked to find: a letter name for the quiz,
    /// the target glyph for Glyph Galaxy.
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            ArenaSession::Quiz(s) => s.with(|g| g.current_question().prompt.clone()),
            ArenaSession::Matching(s) => s.with(|g| g.round().target.to_string()),
        }
    }

    /// Glyphs to pick from this round.
    #[must_use]
    pub fn options(&self) -> Vec<String> {
        match self {
            ArenaSession::Quiz(s) => s.with(|g| g.current_question().options.to_vec()),
            ArenaSession::Matching(s) => s.with(|g| g.round().pool.iter().map(|o| o.to_string()).collect()),
        }
    }

    /// Current round and round count, 1-based.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        match self {
            ArenaSession::Quiz(s) => s.with(QuizGame::progress),
            ArenaSession::Matching(s) => s.with(MatchingGame::progress),
        }
    }

    pub async fn wait_released(&self) {
        match self {
            ArenaSession::Quiz(s) => s.wait_released().await,
            ArenaSession::Matching(s) => s.wait_released().await,
        }
    }

    pub fn close(self) {
        match self {
            ArenaSession::Quiz(s) => s.close(),
            ArenaSession::Matching(s) => s.close(),
        }
    }
}

/// The game currently on screen.
#[derive(Debug)]
pub struct ActiveGame {
    pub entry: &'static CatalogEntry,
    /// Seed of the stream this session was dealt from.
    pub seed: u64,
    pub session: ArenaSession,
}

/// Application state: current view, lesson deck and active game.
#[derive(Debug)]
pub struct AppState {
    view: View,
    config: ArenaConfig,
    table: AlphabetTable,
    lessons: Vec<LetterCard>,
    active: Option<ActiveGame>,
    rng: GameRng,
}

impl AppState {
    /// Start on the home screen. Each game gets a fork of `rng`.
    #[must_use]
    pub fn new(config: ArenaConfig, rng: GameRng) -> Self {
        let table = AlphabetTable::standard();
        info!("app started with seed {}", rng.seed());

        Self {
            view: View::Home,
            config,
            lessons: deck(&table),
            table,
            active: None,
            rng,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    // === Navigation ===

    /// Switch screens. Any running game is closed first.
    pub fn navigate(&mut self, view: View) {
        self.quit_game();
        self.view = view;
    }

    pub fn go_home(&mut self) {
        self.navigate(View::Home);
    }

    pub fn open_lessons(&mut self) {
        self.navigate(View::Lessons);
    }

    pub fn open_games(&mut self) {
        self.navigate(View::Games);
    }

    // === Lessons ===

    #[must_use]
    pub fn lessons(&self) -> &[LetterCard] {
        &self.lessons
    }

    pub fn lesson_mut(&mut self, index: usize) -> Option<&mut LetterCard> {
        self.lessons.get_mut(index)
    }

    // === Games ===

    #[must_use]
    pub fn active_game(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    /// Start a mini-game, replacing any game already running.
    ///
    /// The gateway is only used by a quiz configured with generated questions.
    pub async fn start_game<G: ContentGateway>(
        &mut self,
        game: GameType,
        mode: GameMode,
        gateway: &G,
    ) -> &ActiveGame {
        self.quit_game();

        let entry = catalog::lookup(game, mode);
        let mut rng = self.rng.fork();
        let seed = rng.seed();
        info!("starting {} with seed {}", entry.title, seed);

        let session = match game {
            GameType::Quiz => {
                let quiz = QuizGameBuilder::new()
                    .mode(mode)
                    .config(self.config.clone())
                    .table(self.table.clone())
                    .build_with(gateway, &mut rng)
                    .await;
                ArenaSession::Quiz(Session::new(quiz))
            }
            GameType::GlyphGalaxy => {
                let matching = MatchingGameBuilder::new()
                    .mode(mode)
                    .config(self.config.clone())
                    .table(self.table.clone())
                    .build(rng);
                ArenaSession::Matching(Session::new(matching))
            }
        };

        self.view = View::Games;
        self.active.insert(ActiveGame { entry, seed, session })
    }

    /// Leave the active game, if any. Its pending feedback timer is dropped.
    pub fn quit_game(&mut self) {
        if let Some(active) = self.active.take() {
            info!("quit {}", active.entry.title);
            active.session.close();
        }
    }
}

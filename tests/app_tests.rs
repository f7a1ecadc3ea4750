//! End-to-end tests through `AppState`: navigation, timed sessions and
//! flashcards against scripted gateways.

use std::cell::Cell;
use std::time::Duration;

use alif_arena::app::{AppState, ArenaSession, View};
use alif_arena::core::{ArenaConfig, FeedbackKind, GameMode, GameRng, GameType, Phase, QuestionSource};
use alif_arena::games::quiz::{QuestionOrigin, RoundQuestion};
use alif_arena::gateway::{AudioClip, ContentGateway, GatewayError, OfflineGateway, RequestState, MNEMONIC_FALLBACK};
use alif_arena::LetterRecord;

/// Gateway with a working mnemonic and speech service that counts calls.
#[derive(Default)]
struct FriendlyGateway {
    calls: Cell<usize>,
}

impl ContentGateway for FriendlyGateway {
    async fn mnemonic(&self, letter: &LetterRecord) -> Result<String, GatewayError> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("{} looks like a smile.", letter.name))
    }

    async fn quiz_questions(&self, _letter_names: &[&str]) -> Result<Vec<RoundQuestion>, GatewayError> {
        Err(GatewayError::ParseFailure("no questions today".into()))
    }

    async fn speech(&self, _prompt: &str) -> Result<AudioClip, GatewayError> {
        self.calls.set(self.calls.get() + 1);
        // One second of silence
        AudioClip::from_pcm_bytes(&[0u8; 48_000], 24_000, 1)
    }
}

fn app(config: ArenaConfig) -> AppState {
    AppState::new(config, GameRng::new(2024))
}

fn quiz_correct(session: &ArenaSession) -> String {
    match session {
        ArenaSession::Quiz(s) => s.with(|g| g.current_question().correct.clone()),
        ArenaSession::Matching(_) => panic!("expected a quiz"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_timed_solo_quiz() {
    let mut app = app(ArenaConfig::default());
    let active = app.start_game(GameType::Quiz, GameMode::Solo, &OfflineGateway).await;
    let session = &active.session;

    for round in 1..=5 {
        assert_eq!(session.progress(), (round, 5));
        let outcome = session.submit_answer(&quiz_correct(session)).unwrap();
        assert_eq!(outcome.feedback, FeedbackKind::Correct);
        assert_eq!(outcome.lock, Duration::from_millis(1500));

        // Locked until the timer fires
        assert!(session.submit_answer(&outcome.correct_answer).is_none());
        session.wait_released().await;
    }

    assert_eq!(session.phase(), Phase::Finished);
    let result = session.result().unwrap();
    assert_eq!(result.winner().score, 50);
    assert!(!result.tie);
}

#[tokio::test(start_paused = true)]
async fn test_timed_matching_duel() {
    let mut app = app(ArenaConfig::default().with_matching_rounds(4));
    let active = app.start_game(GameType::GlyphGalaxy, GameMode::Teams2, &OfflineGateway).await;
    let session = &active.session;

    while session.result().is_none() {
        let target = session.prompt();
        assert!(session.options().contains(&target));
        session.submit_answer(&target).unwrap();
        session.wait_released().await;
    }

    let result = session.result().unwrap();
    assert!(result.tie);
    assert_eq!(result.ranking[0].score, 20);
    assert_eq!(result.ranking[1].score, 20);
}

#[tokio::test(start_paused = true)]
async fn test_quit_during_feedback() {
    let mut app = app(ArenaConfig::default());
    let active = app.start_game(GameType::GlyphGalaxy, GameMode::Solo, &OfflineGateway).await;
    active.session.submit_answer("x").unwrap();

    app.quit_game();
    assert!(app.active_game().is_none());

    // The pending release fires into nothing
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(app.active_game().is_none());
}

#[tokio::test]
async fn test_generated_quiz_offline_still_playable() {
    let config = ArenaConfig::default().with_question_source(QuestionSource::Generated);
    let mut app = app(config);
    let active = app.start_game(GameType::Quiz, GameMode::Teams3, &OfflineGateway).await;

    assert_eq!(active.session.phase(), Phase::Playing);
    match &active.session {
        ArenaSession::Quiz(s) => {
            assert_eq!(s.with(|g| g.origin()), QuestionOrigin::Fallback);
            assert_eq!(s.with(|g| g.question_count()), 2);
        }
        ArenaSession::Matching(_) => panic!("expected a quiz"),
    }
    assert_eq!(active.session.prompt(), "ALIF");
}

#[tokio::test]
async fn test_flashcard_mnemonic_cached() {
    let gateway = FriendlyGateway::default();
    let mut app = app(ArenaConfig::default());
    app.open_lessons();
    assert_eq!(app.view(), View::Lessons);

    let card = app.lesson_mut(1).unwrap();
    card.flip();
    assert_eq!(card.request_mnemonic(&gateway).await, Some("Ba looks like a smile."));

    // Second tap does not call the gateway again
    assert_eq!(card.request_mnemonic(&gateway).await, None);
    assert_eq!(card.mnemonic_text(), Some("Ba looks like a smile."));
    assert_eq!(gateway.calls.get(), 1);
}

#[tokio::test]
async fn test_flashcard_mnemonic_offline() {
    let mut app = app(ArenaConfig::default());
    let card = app.lesson_mut(0).unwrap();

    assert_eq!(card.request_mnemonic(&OfflineGateway).await, Some(MNEMONIC_FALLBACK));
    assert_eq!(card.mnemonic_state(), &RequestState::Failed);

    // A later attempt can still succeed
    let gateway = FriendlyGateway::default();
    assert_eq!(card.request_mnemonic(&gateway).await, Some("Alif looks like a smile."));
}

#[tokio::test]
async fn test_flashcard_pronunciation() {
    let gateway = FriendlyGateway::default();
    let mut app = app(ArenaConfig::default());
    let card = app.lesson_mut(2).unwrap();

    let clip = card.pronounce(&gateway).await.unwrap();
    assert_eq!(clip.frame_count(), 24_000);
    assert_eq!(clip.duration(), Duration::from_secs(1));

    // Still playing: the button is claimed
    assert!(card.is_pronouncing());
    assert!(card.pronounce(&gateway).await.is_none());
    assert_eq!(gateway.calls.get(), 1);

    card.settle_pronunciation::<()>(Ok(()));
    assert!(!card.is_pronouncing());
}

#[tokio::test]
async fn test_flashcard_pronunciation_offline_releases_button() {
    let mut app = app(ArenaConfig::default());
    let card = app.lesson_mut(2).unwrap();

    assert!(card.pronounce(&OfflineGateway).await.is_none());
    assert!(!card.is_pronouncing());
}

//! Question sources for the quiz.
//!
//! `Static` builds questions locally from the alphabet table. `Generated`
//! asks the content gateway and falls back to `fallback_questions` when the
//! gateway fails or returns nothing usable.

use log::{info, warn};

use super::question::{fallback_questions, RoundQuestion};
use crate::alphabet::{AlphabetTable, LetterRecord};
use crate::core::{GameRng, QuestionSource};
use crate::gateway::ContentGateway;

/// Which path actually produced a session's questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionOrigin {
    Static,
    Generated,
    Fallback,
}

/// Pick `count` letters: a random permutation of the table, cycled when
/// `count` exceeds the number of letters.
pub fn select_letters(table: &AlphabetTable, count: usize, rng: &mut GameRng) -> Vec<&'static LetterRecord> {
    let mut shuffled: Vec<&'static LetterRecord> = table.letters().iter().collect();
    rng.shuffle(&mut shuffled);
    shuffled.truncate(count.min(table.len()));

    (0..count).map(|i| shuffled[i % shuffled.len()]).collect()
}

/// Build `count` questions locally.
pub fn static_questions(table: &AlphabetTable, count: usize, rng: &mut GameRng) -> Vec<RoundQuestion> {
    select_letters(table, count, rng)
        .into_iter()
        .map(|letter| RoundQuestion::from_letter(letter, table, rng))
        .collect()
}

/// Ask the gateway for up to `count` questions.
///
/// Invalid records are dropped. If the call fails or nothing valid comes
/// back, the static fallback set is returned instead; this never fails.
pub async fn generated_questions<G: ContentGateway>(
    gateway: &G,
    table: &AlphabetTable,
    count: usize,
    rng: &mut GameRng,
) -> (Vec<RoundQuestion>, QuestionOrigin) {
    let names: Vec<&str> = select_letters(table, count, rng)
        .into_iter()
        .map(|l| l.name)
        .collect();

    match gateway.quiz_questions(&names).await {
        Ok(batch) => {
            let received = batch.len();
            let mut valid: Vec<RoundQuestion> = batch.into_iter().filter(RoundQuestion::is_valid).collect();
            valid.truncate(count);

            if valid.is_empty() {
                warn!("no usable generated questions ({} received), using fallback set", received);
                (fallback_questions(), QuestionOrigin::Fallback)
            } else {
                info!("using {} generated questions ({} received)", valid.len(), received);
                (valid, QuestionOrigin::Generated)
            }
        }
        Err(err) => {
            warn!("question generation failed, using fallback set: {}", err);
            (fallback_questions(), QuestionOrigin::Fallback)
        }
    }
}

/// Produce questions from whichever source is configured.
pub async fn prepare_questions<G: ContentGateway>(
    source: QuestionSource,
    gateway: &G,
    table: &AlphabetTable,
    count: usize,
    rng: &mut GameRng,
) -> (Vec<RoundQuestion>, QuestionOrigin) {
    match source {
        QuestionSource::Static => (static_questions(table, count, rng), QuestionOrigin::Static),
        QuestionSource::Generated => generated_questions(gateway, table, count, rng).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LETTER_COUNT;

    #[test]
    fn test_select_letters_without_repeats() {
        let table = AlphabetTable::standard();
        let mut rng = GameRng::new(1);
        let picked = select_letters(&table, 15, &mut rng);

        assert_eq!(picked.len(), 15);
        let mut glyphs: Vec<_> = picked.iter().map(|l| l.glyph).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 15);
    }

    #[test]
    fn test_select_letters_cycles() {
        let table = AlphabetTable::standard();
        let mut rng = GameRng::new(1);
        let picked = select_letters(&table, LETTER_COUNT + 5, &mut rng);

        assert_eq!(picked.len(), LETTER_COUNT + 5);
        for i in 0..5 {
            assert_eq!(picked[i].glyph, picked[i + LETTER_COUNT].glyph);
        }
    }

    #[test]
    fn test_static_questions() {
        let table = AlphabetTable::standard();
        let questions = static_questions(&table, 10, &mut GameRng::new(3));
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(RoundQuestion::is_valid));
    }
}

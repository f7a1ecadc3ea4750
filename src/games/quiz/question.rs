//! Quiz questions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::alphabet::{AlphabetTable, LetterRecord};
use crate::core::GameRng;

/// Options shown per question.
pub const OPTION_COUNT: usize = 4;

/// One multiple-choice question: find the glyph for a letter name.
///
/// Field names on the wire match what the question generator produces
/// (`question`, `options`, `correctAnswer`, `letter`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundQuestion {
    /// Letter name in capitals, e.g. "BA".
    #[serde(rename = "question")]
    pub prompt: String,
    /// Candidate glyphs in display order.
    pub options: SmallVec<[String; OPTION_COUNT]>,
    #[serde(rename = "correctAnswer")]
    pub correct: String,
    /// Letter name as spoken, e.g. "Ba".
    #[serde(rename = "letter")]
    pub letter_name: String,
}

impl RoundQuestion {
    /// Build a question for `letter` with three distractors drawn from the
    /// rest of `table`, then shuffle the options.
    pub fn from_letter(letter: &LetterRecord, table: &AlphabetTable, rng: &mut GameRng) -> Self {
        let others: Vec<&'static str> = table.glyphs().filter(|g| *g != letter.glyph).collect();

        let mut options: SmallVec<[String; OPTION_COUNT]> = SmallVec::new();
        options.push(letter.glyph.to_string());
        options.extend(
            rng.sample(&others, OPTION_COUNT - 1)
                .into_iter()
                .map(|g| (*g).to_string()),
        );
        rng.shuffle(options.as_mut_slice());

        Self {
            prompt: letter.prompt(),
            options,
            correct: letter.glyph.to_string(),
            letter_name: letter.name.to_string(),
        }
    }

    /// Exactly four distinct options, the correct one among them, and a prompt.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if self.prompt.trim().is_empty() || self.options.len() != OPTION_COUNT {
            return false;
        }
        let distinct = self
            .options
            .iter()
            .enumerate()
            .all(|(i, a)| self.options[i + 1..].iter().all(|b| a != b));
        distinct && self.options.contains(&self.correct)
    }

    #[must_use]
    pub fn is_correct(&self, glyph: &str) -> bool {
        self.correct == glyph
    }

    /// Sentence read aloud when the speaker button is pressed.
    #[must_use]
    pub fn spoken_prompt(&self) -> String {
        format!("Find the letter {}.", self.letter_name)
    }
}

fn fixed(prompt: &str, options: [&str; OPTION_COUNT], correct: &str, letter_name: &str) -> RoundQuestion {
    RoundQuestion {
        prompt: prompt.to_string(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        correct: correct.to_string(),
        letter_name: letter_name.to_string(),
    }
}

/// Hard-coded questions used when generated questions are unavailable.
#[must_use]
pub fn fallback_questions() -> Vec<RoundQuestion> {
    vec![
        fixed("ALIF", ["أ", "ب", "ت", "ث"], "أ", "Alif"),
        fixed("BA", ["ت", "ب", "ن", "ث"], "ب", "Ba"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letter_shape() {
        let table = AlphabetTable::standard();
        let mut rng = GameRng::new(42);

        for letter in table.letters() {
            let q = RoundQuestion::from_letter(letter, &table, &mut rng);
            assert!(q.is_valid(), "invalid question {:?}", q);
            assert_eq!(q.options.iter().filter(|o| **o == q.correct).count(), 1);
            assert_eq!(q.prompt, letter.name.to_uppercase());
            assert_eq!(q.letter_name, letter.name);
        }
    }

    #[test]
    fn test_from_letter_is_deterministic() {
        let table = AlphabetTable::standard();
        let letter = &table.letters()[5];

        let q1 = RoundQuestion::from_letter(letter, &table, &mut GameRng::new(9));
        let q2 = RoundQuestion::from_letter(letter, &table, &mut GameRng::new(9));
        assert_eq!(q1, q2);
    }

    #[test]
    fn test_validation() {
        let mut q = fixed("BA", ["ب", "ت", "ث", "ن"], "ب", "Ba");
        assert!(q.is_valid());

        q.options[1] = "ب".to_string();
        assert!(!q.is_valid(), "duplicate options");

        let missing = fixed("BA", ["ت", "ث", "ن", "ج"], "ب", "Ba");
        assert!(!missing.is_valid());

        let blank = fixed("  ", ["ب", "ت", "ث", "ن"], "ب", "Ba");
        assert!(!blank.is_valid());

        let mut short = fixed("BA", ["ب", "ت", "ث", "ن"], "ب", "Ba");
        short.options.pop();
        assert!(!short.is_valid());
    }

    #[test]
    fn test_fallback_questions_are_valid() {
        let questions = fallback_questions();
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(RoundQuestion::is_valid));
        assert_eq!(questions[0].prompt, "ALIF");
    }

    #[test]
    fn test_spoken_prompt() {
        let q = fixed("BA", ["ب", "ت", "ث", "ن"], "ب", "Ba");
        assert_eq!(q.spoken_prompt(), "Find the letter Ba.");
        assert!(q.is_correct("ب"));
        assert!(!q.is_correct("ت"));
    }

    #[test]
    fn test_wire_format() {
        let q = fixed("BA", ["ب", "ت", "ث", "ن"], "ب", "Ba");
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["question"], "BA");
        assert_eq!(json["correctAnswer"], "ب");
        assert_eq!(json["letter"], "Ba");
        assert_eq!(json["options"].as_array().unwrap().len(), 4);
    }
}

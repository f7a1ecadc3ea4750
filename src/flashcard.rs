//! Flashcards for the lessons screen.
//!
//! A card shows one letter. Tapping flips it; the front has a speaker
//! button (pronunciation via the speech service) and the back has a
//! "Memory Magic" button (a shape-based mnemonic from the text service).
//! Each button owns a `RequestSlot` so a second tap while waiting does
//! nothing.

use log::warn;

use crate::alphabet::{AlphabetTable, LetterRecord};
use crate::gateway::{AudioClip, ContentGateway, GatewayError, RequestSlot, RequestState, MNEMONIC_FALLBACK};

/// One letter's flashcard.
#[derive(Clone, Debug)]
pub struct LetterCard {
    letter: &'static LetterRecord,
    flipped: bool,
    mnemonic: RequestSlot<String>,
    pronunciation: RequestSlot<()>,
}

impl LetterCard {
    #[must_use]
    pub fn new(letter: &'static LetterRecord) -> Self {
        Self {
            letter,
            flipped: false,
            mnemonic: RequestSlot::new(),
            pronunciation: RequestSlot::new(),
        }
    }

    #[must_use]
    pub fn letter(&self) -> &'static LetterRecord {
        self.letter
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Turn the card over.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    // === Mnemonic ===

    /// Claim the mnemonic button.
    ///
    /// Refused while a request is pending or once a mnemonic has arrived.
    /// A failed request may be retried.
    pub fn begin_mnemonic(&mut self) -> bool {
        if self.mnemonic.value().is_some() {
            return false;
        }
        self.mnemonic.begin()
    }

    /// Store the gateway's answer.
    pub fn settle_mnemonic(&mut self, result: Result<String, GatewayError>) {
        if let Err(err) = &result {
            warn!("mnemonic for {} unavailable: {}", self.letter, err);
        }
        self.mnemonic.settle(result);
    }

    /// Text to show on the back of the card, if any.
    ///
    /// After a failed request this is the apology sentence.
    #[must_use]
    pub fn mnemonic_text(&self) -> Option<&str> {
        match self.mnemonic.state() {
            RequestState::Done(text) => Some(text),
            RequestState::Failed => Some(MNEMONIC_FALLBACK),
            RequestState::Idle | RequestState::Pending => None,
        }
    }

    #[must_use]
    pub fn mnemonic_state(&self) -> &RequestState<String> {
        self.mnemonic.state()
    }

    /// Request a mnemonic and wait for it.
    ///
    /// Returns the text to show, or `None` if the request was refused.
    pub async fn request_mnemonic<G: ContentGateway>(&mut self, gateway: &G) -> Option<&str> {
        if !self.begin_mnemonic() {
            return None;
        }
        let result = gateway.mnemonic(self.letter).await;
        self.settle_mnemonic(result);
        self.mnemonic_text()
    }

    // === Pronunciation ===

    /// Claim the speaker button; returns the sentence to synthesize.
    pub fn begin_pronunciation(&mut self) -> Option<String> {
        self.pronunciation
            .begin()
            .then(|| self.letter.pronunciation_prompt())
    }

    /// Playback ended or the request failed; the button is usable again.
    pub fn settle_pronunciation<E>(&mut self, result: Result<(), E>) {
        self.pronunciation.settle(result);
    }

    #[must_use]
    pub fn is_pronouncing(&self) -> bool {
        self.pronunciation.is_pending()
    }

    /// Synthesize the pronunciation.
    ///
    /// The button stays claimed until the host calls `settle_pronunciation`
    /// when playback ends. On failure the button is released immediately and
    /// `None` is returned; nothing is played.
    pub async fn pronounce<G: ContentGateway>(&mut self, gateway: &G) -> Option<AudioClip> {
        let prompt = self.begin_pronunciation()?;
        match gateway.speech(&prompt).await {
            Ok(clip) => Some(clip),
            Err(err) => {
                warn!("pronunciation for {} unavailable: {}", self.letter, err);
                self.settle_pronunciation(Err(err));
                None
            }
        }
    }
}

/// One card per letter, in table order.
#[must_use]
pub fn deck(table: &AlphabetTable) -> Vec<LetterCard> {
    table.letters().iter().map(LetterCard::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;

    #[test]
    fn test_flip() {
        let mut card = LetterCard::new(&ALPHABET[1]);
        assert!(!card.is_flipped());
        card.flip();
        assert!(card.is_flipped());
        card.flip();
        assert!(!card.is_flipped());
    }

    #[test]
    fn test_mnemonic_success_is_cached() {
        let mut card = LetterCard::new(&ALPHABET[1]);
        assert!(card.begin_mnemonic());
        assert!(!card.begin_mnemonic());

        card.settle_mnemonic(Ok("Ba is a boat with one dot below.".into()));
        assert_eq!(card.mnemonic_text(), Some("Ba is a boat with one dot below."));
        assert!(!card.begin_mnemonic());
    }

    #[test]
    fn test_mnemonic_failure_shows_apology() {
        let mut card = LetterCard::new(&ALPHABET[1]);
        assert!(card.mnemonic_text().is_none());

        card.begin_mnemonic();
        card.settle_mnemonic(Err(GatewayError::Unavailable("offline".into())));
        assert_eq!(card.mnemonic_text(), Some(MNEMONIC_FALLBACK));

        // Can try again
        assert!(card.begin_mnemonic());
    }

    #[test]
    fn test_pronunciation_guard() {
        let mut card = LetterCard::new(&ALPHABET[0]);
        let prompt = card.begin_pronunciation().unwrap();
        assert!(prompt.starts_with("Say the Arabic letter أ also known as Alif."));
        assert!(card.is_pronouncing());
        assert!(card.begin_pronunciation().is_none());

        card.settle_pronunciation::<()>(Ok(()));
        assert!(!card.is_pronouncing());
        assert!(card.begin_pronunciation().is_some());
    }

    #[test]
    fn test_deck() {
        let cards = deck(&AlphabetTable::standard());
        assert_eq!(cards.len(), 28);
        assert_eq!(cards[0].letter().name, "Alif");
    }
}

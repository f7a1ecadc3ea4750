//! Letter records: one flashcard's worth of static content.

use serde::Serialize;

/// Card color family for a letter.
///
/// Hosts turn this into their own styling; `card_class` and `text_class`
/// give the utility-class names the web front end uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Amber,
    Blue,
    Cyan,
    Emerald,
    Fuchsia,
    Green,
    Indigo,
    Lime,
    Orange,
    Pink,
    Purple,
    Red,
    Rose,
    Sky,
    Slate,
    Teal,
    Violet,
    Yellow,
}

impl Palette {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Palette::Amber => "amber",
            Palette::Blue => "blue",
            Palette::Cyan => "cyan",
            Palette::Emerald => "emerald",
            Palette::Fuchsia => "fuchsia",
            Palette::Green => "green",
            Palette::Indigo => "indigo",
            Palette::Lime => "lime",
            Palette::Orange => "orange",
            Palette::Pink => "pink",
            Palette::Purple => "purple",
            Palette::Red => "red",
            Palette::Rose => "rose",
            Palette::Sky => "sky",
            Palette::Slate => "slate",
            Palette::Teal => "teal",
            Palette::Violet => "violet",
            Palette::Yellow => "yellow",
        }
    }

    /// Light background for the card face.
    #[must_use]
    pub fn card_class(self) -> String {
        format!("bg-{}-100", self.name())
    }

    /// Dark foreground for the glyph.
    #[must_use]
    pub fn text_class(self) -> String {
        format!("text-{}-600", self.name())
    }
}

/// Static content for one letter of the alphabet.
///
/// Never mutated after startup. Glyphs are unique across the table;
/// names are not (there are two "Ta" and two "Ha").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LetterRecord {
    /// The letter as written (a single grapheme cluster).
    pub glyph: &'static str,
    pub name: &'static str,
    pub transliteration: &'static str,
    /// Arabic word starting with this letter.
    pub example_word: &'static str,
    /// English meaning of `example_word`.
    pub example_translation: &'static str,
    /// Picture of the example word.
    pub example_image: &'static str,
    pub palette: Palette,
}

impl LetterRecord {
    #[must_use]
    pub const fn new(
        glyph: &'static str,
        name: &'static str,
        transliteration: &'static str,
        example_word: &'static str,
        example_translation: &'static str,
        example_image: &'static str,
        palette: Palette,
    ) -> Self {
        Self {
            glyph,
            name,
            transliteration,
            example_word,
            example_translation,
            example_image,
            palette,
        }
    }

    /// Prompt text for quiz questions: the name in capitals.
    #[must_use]
    pub fn prompt(&self) -> String {
        self.name.to_uppercase()
    }

    /// What the speech service is asked to say for this letter's card.
    #[must_use]
    pub fn pronunciation_prompt(&self) -> String {
        format!(
            "Say the Arabic letter {} also known as {}. Then say the word {} which means {}.",
            self.glyph, self.name, self.example_word, self.example_translation
        )
    }
}

impl std::fmt::Display for LetterRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.glyph, self.name)
    }
}

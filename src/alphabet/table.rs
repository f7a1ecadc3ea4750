//! The alphabet reference table.
//!
//! `ALPHABET` holds the 28 letters in order. `AlphabetTable` wraps it with a
//! glyph index for O(1) lookup and is what the engines sample from.

use rustc_hash::FxHashMap;

use super::letter::{LetterRecord, Palette};

/// Number of letters in the table.
pub const LETTER_COUNT: usize = 28;

/// Every letter, in alphabetical order.
pub static ALPHABET: [LetterRecord; LETTER_COUNT] = [
    LetterRecord::new(
        "أ", "Alif", "a", "أرنب", "Rabbit",
        "https://images.unsplash.com/photo-1585110396000-c9ffd4e4b308?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Orange,
    ),
    LetterRecord::new(
        "ب", "Ba", "b", "بطة", "Duck",
        "https://images.unsplash.com/photo-1465153690352-10c1b29577f8?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Pink,
    ),
    LetterRecord::new(
        "ت", "Ta", "t", "تفاح", "Apple",
        "https://images.unsplash.com/photo-1560806887-1e4cd0b6cbd6?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Red,
    ),
    LetterRecord::new(
        "ث", "Tha", "th", "ثعلب", "Fox",
        "https://images.unsplash.com/photo-1644125003076-ce465d331769?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Amber,
    ),
    LetterRecord::new(
        "ج", "Jeem", "j", "جمل", "Camel",
        "https://images.unsplash.com/photo-1456926631375-92c8ce872def?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Emerald,
    ),
    LetterRecord::new(
        "ح", "Ha", "h", "حصان", "Horse",
        "https://images.unsplash.com/photo-1553284965-83fd3e82fa5a?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Teal,
    ),
    LetterRecord::new(
        "خ", "Kha", "kh", "خبز", "Bread",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Lime,
    ),
    LetterRecord::new(
        "د", "Dal", "d", "دب", "Bear",
        "https://images.unsplash.com/photo-1530595467537-0b5996c41f2d?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Blue,
    ),
    LetterRecord::new(
        "ذ", "Thal", "dh", "ذرة", "Corn",
        "https://images.unsplash.com/photo-1551754655-cd27e38d2076?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Indigo,
    ),
    LetterRecord::new(
        "ر", "Ra", "r", "رمان", "Pomegranate",
        "https://images.unsplash.com/photo-1615485925600-97237c4fc1ec?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Violet,
    ),
    LetterRecord::new(
        "ز", "Zay", "z", "زرافة", "Giraffe",
        "https://images.unsplash.com/photo-1612358405970-e1aeba9d76c2?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Purple,
    ),
    LetterRecord::new(
        "س", "Seen", "s", "سمكة", "Fish",
        "https://images.unsplash.com/photo-1535591273668-578e31182c4f?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Fuchsia,
    ),
    LetterRecord::new(
        "ش", "Sheen", "sh", "شمس", "Sun",
        "https://images.unsplash.com/photo-1534067783941-51c9c23ecefd?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Rose,
    ),
    LetterRecord::new(
        "ص", "Sad", "s", "صقر", "Falcon",
        "https://images.unsplash.com/photo-1611637576109-b6f76185ec9b?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Sky,
    ),
    LetterRecord::new(
        "ض", "Dad", "d", "ضفدع", "Frog",
        "https://images.unsplash.com/photo-1559190394-df5a28aab5c5?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Cyan,
    ),
    LetterRecord::new(
        "ط", "Ta", "t", "طائرة", "Plane",
        "https://images.unsplash.com/photo-1529074963764-98f45c47344b?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Orange,
    ),
    LetterRecord::new(
        "ظ", "Za", "z", "ظرف", "Envelope",
        "https://images.unsplash.com/photo-1577563908411-5077b6dc7624?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Yellow,
    ),
    LetterRecord::new(
        "ع", "Ain", "a", "عصفور", "Bird",
        "https://images.unsplash.com/photo-1486365227551-f3f90034a57c?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Blue,
    ),
    LetterRecord::new(
        "غ", "Ghain", "gh", "غزالة", "Gazelle",
        "https://images.unsplash.com/photo-1484406566174-9da000fda645?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Green,
    ),
    LetterRecord::new(
        "ف", "Fa", "f", "فيل", "Elephant",
        "https://images.unsplash.com/photo-1557050543-4d5f4e07ef46?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Slate,
    ),
    LetterRecord::new(
        "ق", "Qaf", "q", "قرد", "Monkey",
        "https://images.unsplash.com/photo-1540573133985-87b6da6d54a9?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Purple,
    ),
    LetterRecord::new(
        "ك", "Kaf", "k", "كتاب", "Book",
        "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Amber,
    ),
    LetterRecord::new(
        "ل", "Lam", "l", "ليمون", "Lemon",
        "https://images.unsplash.com/photo-1582979512210-99b6a53386f9?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Yellow,
    ),
    LetterRecord::new(
        "م", "Meem", "m", "موز", "Banana",
        "https://images.unsplash.com/photo-1587132137056-bfbf0166836e?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Orange,
    ),
    LetterRecord::new(
        "ن", "Noon", "n", "نحلة", "Bee",
        "https://images.unsplash.com/photo-1587334274328-64186a80aeee?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Yellow,
    ),
    LetterRecord::new(
        "هـ", "Ha", "h", "هلال", "Crescent",
        "https://images.unsplash.com/photo-1565619866477-23f88e6a5f58?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Blue,
    ),
    LetterRecord::new(
        "و", "Waw", "w", "ولد", "Boy",
        "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Pink,
    ),
    LetterRecord::new(
        "ي", "Ya", "y", "يد", "Hand",
        "https://images.unsplash.com/photo-1556848527-f7c548b972b2?auto=format&fit=crop&q=80&w=200&h=200",
        Palette::Cyan,
    ),
];

/// Read-only view over a letter list with glyph lookup.
///
/// ## Example
///
/// ```
/// use alif_arena::alphabet::AlphabetTable;
///
/// let table = AlphabetTable::standard();
/// assert_eq!(table.len(), 28);
///
/// let ba = table.by_glyph("ب").unwrap();
/// assert_eq!(ba.name, "Ba");
/// ```
#[derive(Clone, Debug)]
pub struct AlphabetTable {
    letters: &'static [LetterRecord],
    by_glyph: FxHashMap<&'static str, usize>,
}

impl AlphabetTable {
    /// Table over the bundled alphabet.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_letters(&ALPHABET)
    }

    /// Table over an arbitrary static letter list.
    ///
    /// Panics if the list is empty or repeats a glyph.
    #[must_use]
    pub fn from_letters(letters: &'static [LetterRecord]) -> Self {
        assert!(!letters.is_empty(), "Alphabet table must not be empty");

        let mut by_glyph = FxHashMap::default();
        for (i, letter) in letters.iter().enumerate() {
            if by_glyph.insert(letter.glyph, i).is_some() {
                panic!("Glyph {:?} appears twice in the alphabet table", letter.glyph);
            }
        }

        Self { letters, by_glyph }
    }

    /// All letters in table order.
    #[must_use]
    pub fn letters(&self) -> &'static [LetterRecord] {
        self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Look up a letter by glyph.
    #[must_use]
    pub fn by_glyph(&self, glyph: &str) -> Option<&'static LetterRecord> {
        let letters = self.letters;
        self.by_glyph.get(glyph).map(|&i| &letters[i])
    }

    #[must_use]
    pub fn contains(&self, glyph: &str) -> bool {
        self.by_glyph.contains_key(glyph)
    }

    /// First letter with this name, case-insensitively.
    ///
    /// Ambiguous names ("Ta", "Ha") resolve to the earlier letter.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'static LetterRecord> {
        let name = name.trim();
        self.letters.iter().find(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Glyphs in table order.
    pub fn glyphs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.letters.iter().map(|l| l.glyph)
    }
}

impl Default for AlphabetTable {
    fn default() -> Self {
        Self::standard()
    }
}

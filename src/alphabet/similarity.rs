//! Clusters of visually confusable glyphs.
//!
//! Glyph Galaxy samples its option pools from these groups so that the
//! distractors look like the target (dots above vs. below, one dot vs. two).

use serde::Serialize;

/// A set of 2-3 glyphs that are easy to mix up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SimilarityGroup(pub &'static [&'static str]);

impl SimilarityGroup {
    #[must_use]
    pub fn glyphs(&self) -> &'static [&'static str] {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, glyph: &str) -> bool {
        self.0.contains(&glyph)
    }
}

/// The bundled groups.
pub static SIMILARITY_GROUPS: [SimilarityGroup; 9] = [
    SimilarityGroup(&["ب", "ت", "ث"]),
    SimilarityGroup(&["ج", "ح", "خ"]),
    SimilarityGroup(&["د", "ذ"]),
    SimilarityGroup(&["ر", "ز"]),
    SimilarityGroup(&["س", "ش"]),
    SimilarityGroup(&["ص", "ض"]),
    SimilarityGroup(&["ط", "ظ"]),
    SimilarityGroup(&["ع", "غ"]),
    SimilarityGroup(&["ف", "ق"]),
];

//! Static content: the alphabet reference table and similarity groups.
//!
//! Both are leaf dependencies. They are built once and never mutated;
//! the engines only sample from them.

pub mod letter;
pub mod table;
pub mod similarity;

pub use letter::{LetterRecord, Palette};
pub use table::{AlphabetTable, ALPHABET, LETTER_COUNT};
pub use similarity::{SimilarityGroup, SIMILARITY_GROUPS};

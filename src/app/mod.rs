//! View controller: screens, lesson deck, game catalog and the live game.

pub mod catalog;
pub mod state;

pub use catalog::{CatalogEntry, CatalogSection, CATALOG};
pub use state::{ActiveGame, AppState, ArenaSession, View};

//! Game catalog for the games screen.
//!
//! Two sections of three entries, one per `GameMode`. The catalog is the
//! only place titles and blurbs live; `AppState::start_game` looks the
//! picked entry up here.

use serde::Serialize;

use crate::alphabet::Palette;
use crate::core::{GameMode, GameType};

/// One playable mission card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub palette: Palette,
    pub game: GameType,
    pub mode: GameMode,
}

/// A heading and the entries under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogSection {
    pub title: &'static str,
    pub icon: &'static str,
    pub entries: [CatalogEntry; 3],
}

const fn entry(
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    palette: Palette,
    game: GameType,
    mode: GameMode,
) -> CatalogEntry {
    CatalogEntry { title, description, icon, palette, game, mode }
}

/// Everything on the games screen, in display order.
pub static CATALOG: [CatalogSection; 2] = [
    CatalogSection {
        title: "Glyph Galaxy",
        icon: "🚀",
        entries: [
            entry("Lone Ranger", "Visual Match Practice", "👩‍🚀", Palette::Sky, GameType::GlyphGalaxy, GameMode::Solo),
            entry("Duo Duel", "2-Group Team Battle", "👯‍♂️", Palette::Pink, GameType::GlyphGalaxy, GameMode::Teams2),
            entry("Triple Threat", "3-Group Chaos Mode", "👪", Palette::Emerald, GameType::GlyphGalaxy, GameMode::Teams3),
        ],
    },
    CatalogSection {
        title: "Brain Battle",
        icon: "🧠",
        entries: [
            entry("IQ Training", "Solo Letter Quiz", "🏋️", Palette::Sky, GameType::Quiz, GameMode::Solo),
            entry("Group Rumble", "2-Group Knowledge War", "⚔️", Palette::Pink, GameType::Quiz, GameMode::Teams2),
            entry("Battle Royale", "3-Group Free For All", "👑", Palette::Emerald, GameType::Quiz, GameMode::Teams3),
        ],
    },
];

/// All entries, flattened in display order.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().flat_map(|section| section.entries.iter())
}

/// Entry for a game and mode.
#[must_use]
pub fn lookup(game: GameType, mode: GameMode) -> &'static CatalogEntry {
    entries()
        .find(|e| e.game == game && e.mode == mode)
        .expect("catalog covers every game and mode")
}

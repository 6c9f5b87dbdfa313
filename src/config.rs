// Shared game UI/constants.
use std::path::PathBuf;

pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;

pub const BASE_SPEED_MS: u64 = 500;
pub const MIN_SPEED_MS: u64 = 100;
pub const SPEED_STEP_MS: u64 = 50;
pub const LINES_PER_LEVEL: u64 = 10;
pub const POINTS_PER_LINE: u64 = 100;

pub const EMPTY_GLYPH: &str = " .";
pub const BLOCK_GLYPH: &str = "[]";
pub const CELL_W: usize = 2; // every cell renders as two characters
pub const PLAY_W: usize = BOARD_W * CELL_W + 6; // "<! " + cells + " !>"
pub const PLAY_H: usize = BOARD_H + 1; // rows plus floor
pub const SIDEBAR_W: u16 = 26;
// Well plus sidebar plus cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + SIDEBAR_W + 2;

// Input poll interval once no ticks are scheduled.
pub const IDLE_POLL_MS: u64 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkinKind {
    Classic,
    Retro84,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyLayout {
    Arrows,
    Numpad,
}

impl SkinKind {
    pub fn default_keys(self) -> KeyLayout {
        match self {
            SkinKind::Classic => KeyLayout::Arrows,
            SkinKind::Retro84 => KeyLayout::Numpad,
        }
    }
}

/// Runtime settings resolved from the command line and environment.
#[derive(Clone, Debug)]
pub struct Settings {
    pub skin: SkinKind,
    pub keys: KeyLayout,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

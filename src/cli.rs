use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{KeyLayout, Settings, SkinKind};

#[derive(Parser, Debug)]
#[command(name = "pytris", version, about = "Falling-block puzzle in a text grid")]
pub struct Args {
    #[arg(long, value_enum, env = "PYTRIS_SKIN", default_value = "classic")]
    pub skin: SkinArg,

    #[arg(long, value_enum, env = "PYTRIS_KEYS", help = "Override the skin's key layout")]
    pub keys: Option<KeysArg>,

    #[arg(long, env = "PYTRIS_SEED", help = "Seed the piece sequence for a reproducible game")]
    pub seed: Option<u64>,

    #[arg(
        long,
        value_name = "FILE",
        env = "PYTRIS_LOG_FILE",
        help = "Write tracing output to FILE (filtered by RUST_LOG)",
        value_hint = clap::ValueHint::FilePath
    )]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SkinArg {
    Classic,
    Retro84,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KeysArg {
    Arrows,
    Numpad,
}

impl From<SkinArg> for SkinKind {
    fn from(arg: SkinArg) -> Self {
        match arg {
            SkinArg::Classic => SkinKind::Classic,
            SkinArg::Retro84 => SkinKind::Retro84,
        }
    }
}

impl From<KeysArg> for KeyLayout {
    fn from(arg: KeysArg) -> Self {
        match arg {
            KeysArg::Arrows => KeyLayout::Arrows,
            KeysArg::Numpad => KeyLayout::Numpad,
        }
    }
}

impl Args {
    pub fn into_settings(self) -> Settings {
        let skin = SkinKind::from(self.skin);
        Settings {
            skin,
            keys: self.keys.map(KeyLayout::from).unwrap_or(skin.default_keys()),
            seed: self.seed,
            log_file: self.log_file,
        }
    }
}

use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod config;
mod game;
mod logging;
mod ui;

pub use config::{
    BLOCK_GLYPH, BOARD_W, CELL_W, EMPTY_GLYPH, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W,
};

fn main() -> Result<()> {
    let settings = cli::Args::parse().into_settings();
    logging::init(settings.log_file.as_deref())?;
    app::run(&settings)
}

pub mod driver;
pub mod keymap;

use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

pub use driver::{Driver, Renderer, SystemClock};
pub use keymap::{Command, map_key};

use crate::config::{IDLE_POLL_MS, Settings};
use crate::game::Game;
use crate::ui::{Skin, TuiRenderer};

type TermBackend = CrosstermBackend<Stdout>;

pub fn run(settings: &Settings) -> Result<()> {
    let _guard = TuiGuard::new()?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout())).context("creating terminal")?;
    let game = match settings.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    info!(skin = ?settings.skin, keys = ?settings.keys, seed = ?settings.seed, "starting");

    let renderer = TuiRenderer::new(terminal, Skin::new(settings.skin, settings.keys));
    let mut driver = Driver::new(game, renderer, SystemClock);
    run_loop(&mut driver, settings)
}

fn run_loop(
    driver: &mut Driver<TuiRenderer<TermBackend>, SystemClock>,
    settings: &Settings,
) -> Result<()> {
    driver.start()?;

    loop {
        let timeout = driver
            .time_until_tick()
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout).context("polling terminal events")? {
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match map_key(settings.keys, key) {
                        Some(Command::Quit) => break,
                        Some(Command::Game(action)) => {
                            driver.dispatch(action)?;
                        }
                        Some(Command::ShowPreview) => {
                            driver.renderer_mut().roll_preview();
                            driver.redraw()?;
                        }
                        Some(Command::ToggleHelp) => {
                            driver.renderer_mut().toggle_help();
                            driver.redraw()?;
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => driver.redraw()?,
                _ => {}
            }
        }

        driver.poll()?;
    }

    let game = driver.game();
    info!(
        score = game.score(),
        lines = game.lines_cleared(),
        level = game.level(),
        shape = ?game.current().shape,
        "quit"
    );
    Ok(())
}

/// Raw mode and alternate screen for as long as the guard lives.
struct TuiGuard;

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let guard = Self;
        execute!(stdout(), EnterAlternateScreen, Hide).context("entering alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, Show);
    }
}

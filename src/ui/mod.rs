pub mod render;
pub mod skin;

use anyhow::{Context, Result};
use rand::thread_rng;
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::app::Renderer;
use crate::game::{View, random_shape};
pub use render::Panel;
pub use skin::Skin;

/// Paints the game into a ratatui terminal.
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
    skin: Skin,
    panel: Panel,
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(terminal: Terminal<B>, skin: Skin) -> Self {
        Self {
            terminal,
            skin,
            panel: Panel::default(),
        }
    }

    /// Rolls a shape for the "next" line. Not tied to the real spawn order.
    pub fn roll_preview(&mut self) {
        self.panel.preview = Some(random_shape(&mut thread_rng()));
    }

    pub fn toggle_help(&mut self) {
        self.panel.hide_help = !self.panel.hide_help;
    }

    fn paint(&mut self, view: &View<'_>, game_over: bool) -> Result<()> {
        let skin = &self.skin;
        let panel = &self.panel;
        self.terminal
            .draw(|frame| render::draw_game(frame, view, skin, panel, game_over))
            .context("drawing frame")?;
        Ok(())
    }
}

impl<B: Backend> Renderer for TuiRenderer<B> {
    fn draw(&mut self, view: &View<'_>) -> Result<()> {
        self.paint(view, false)
    }

    fn show_game_over(&mut self, view: &View<'_>) -> Result<()> {
        self.paint(view, true)
    }
}

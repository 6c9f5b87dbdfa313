use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::game::{Cell, Shape, View};
use crate::ui::Skin;
use crate::{BLOCK_GLYPH, BOARD_W, CELL_W, EMPTY_GLYPH, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W};

/// Side panel state that lives outside the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct Panel {
    pub preview: Option<Shape>,
    pub hide_help: bool,
}

/// The well as text: `<! ` + cells + ` !>` per row, closed by a floor line.
pub fn well_lines(view: &View<'_>) -> Vec<String> {
    let mut grid: Vec<Vec<Cell>> = view.board.rows().map(|row| row.to_vec()).collect();
    if let Some(piece) = view.piece {
        for (x, y) in piece.positions() {
            if y >= 0 && (y as usize) < grid.len() && x >= 0 && (x as usize) < view.board.width {
                grid[y as usize][x as usize] = Cell::Filled;
            }
        }
    }

    let mut lines: Vec<String> = grid
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => EMPTY_GLYPH,
                    Cell::Filled => BLOCK_GLYPH,
                })
                .collect();
            format!("<! {cells} !>")
        })
        .collect();
    lines.push(format!("<!{}!>", "=".repeat(BOARD_W * CELL_W + 2)));
    lines
}

pub fn counter_lines(view: &View<'_>, skin: &Skin) -> [String; 3] {
    let s = skin.strings;
    [
        format!("{}: {}", s.score, view.score),
        format!("{}: {}", s.level, view.level),
        format!("{}: {}", s.lines, view.lines),
    ]
}

pub fn draw_game(frame: &mut Frame, view: &View<'_>, skin: &Skin, panel: &Panel, game_over: bool) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH || area.height < PLAY_H as u16 + 2 {
        let msg = Paragraph::new(format!("RESIZE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .style(skin.style)
            .block(Block::default().borders(Borders::ALL).title(skin.strings.title));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title(skin.strings.title)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left)
        .style(skin.style);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SIDEBAR_W),
            Constraint::Length(PLAY_W as u16 + 2),
            Constraint::Min(0),
        ])
        .split(cabinet_inner);
    let well_col = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PLAY_H as u16), Constraint::Min(0)])
        .split(cols[2]);

    draw_sidebar(frame, view, skin, panel, cols[1]);
    draw_well(frame, view, skin, game_over, well_col[0]);
}

fn draw_well(frame: &mut Frame, view: &View<'_>, skin: &Skin, game_over: bool, area: Rect) {
    let lines: Vec<Line> = well_lines(view).into_iter().map(Line::raw).collect();
    let well = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(skin.style);
    frame.render_widget(well, area);

    if game_over {
        let overlay_h = 4u16;
        let popup = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(overlay_h) / 2,
            width: area.width,
            height: overlay_h.min(area.height),
        };
        let overlay = Paragraph::new(vec![
            Line::raw(skin.strings.game_over),
            Line::raw(skin.restart_hint()),
        ])
        .alignment(Alignment::Center)
        .style(skin.style)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, popup);
        frame.render_widget(overlay, popup);
    }
}

fn draw_sidebar(frame: &mut Frame, view: &View<'_>, skin: &Skin, panel: &Panel, area: Rect) {
    let mut lines: Vec<Line> = counter_lines(view, skin).into_iter().map(Line::raw).collect();
    if let Some(shape) = panel.preview {
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("{}: {}", skin.strings.next, shape.letter())));
    }
    if !panel.hide_help {
        lines.push(Line::raw(""));
        lines.push(Line::raw(skin.strings.controls));
        lines.extend(skin.legend().into_iter().map(Line::raw));
    }

    let sidebar = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .style(skin.style);
    frame.render_widget(sidebar, area);
}

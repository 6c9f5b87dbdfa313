use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::KeyLayout;
use crate::game::Action;

/// What a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Game(Action),
    ShowPreview,
    ToggleHelp,
    Quit,
}

pub fn map_key(layout: KeyLayout, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
        _ => {}
    }
    match layout {
        KeyLayout::Arrows => arrows(key.code),
        KeyLayout::Numpad => numpad(key.code),
    }
}

fn arrows(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Left => Command::Game(Action::MoveLeft),
        KeyCode::Right => Command::Game(Action::MoveRight),
        KeyCode::Down => Command::Game(Action::SoftDrop),
        KeyCode::Up => Command::Game(Action::Rotate),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Game(Action::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Command::ShowPreview,
        KeyCode::Char('h') | KeyCode::Char('H') => Command::ToggleHelp,
        _ => return None,
    };
    Some(command)
}

fn numpad(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Char('7') => Command::Game(Action::MoveLeft),
        KeyCode::Char('9') => Command::Game(Action::MoveRight),
        KeyCode::Char('8') => Command::Game(Action::Rotate),
        KeyCode::Char('4') => Command::Game(Action::SoftDrop),
        KeyCode::Char('5') => Command::Game(Action::Restart),
        KeyCode::Char('1') => Command::ShowPreview,
        KeyCode::Char('0') => Command::ToggleHelp,
        _ => return None,
    };
    Some(command)
}

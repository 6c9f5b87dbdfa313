use ratatui::style::{Color, Style};

use crate::config::{KeyLayout, SkinKind};

pub struct Strings {
    pub title: &'static str,
    pub score: &'static str,
    pub level: &'static str,
    pub lines: &'static str,
    pub next: &'static str,
    pub controls: &'static str,
    pub game_over: &'static str,
    pub press_restart: &'static str,
    pub move_left: &'static str,
    pub move_right: &'static str,
    pub rotate: &'static str,
    pub soft_drop: &'static str,
    pub restart: &'static str,
    pub preview: &'static str,
    pub hide_help: &'static str,
    pub quit: &'static str,
}

const ENGLISH: Strings = Strings {
    title: "PYTRIS 84",
    score: "Score",
    level: "Level",
    lines: "Lines",
    next: "Next",
    controls: "CONTROLS",
    game_over: "GAME OVER",
    press_restart: "Press {key} to Restart",
    move_left: "Move Left",
    move_right: "Move Right",
    rotate: "Rotate the piece",
    soft_drop: "Speed up the piece",
    restart: "Restart the game",
    preview: "Show next",
    hide_help: "Hide help",
    quit: "Quit",
};

const RUSSIAN: Strings = Strings {
    title: "PYTRIS 84",
    score: "Очки",
    level: "Уровень",
    lines: "Линии",
    next: "Следующий",
    controls: "УПРАВЛЕНИЕ",
    game_over: "ИГРА ОКОНЧЕНА",
    press_restart: "Нажмите {key} для перезапуска",
    move_left: "ВЛЕВО",
    move_right: "ВПРАВО",
    rotate: "ПОВОРОТ",
    soft_drop: "УСКОРЕНИЕ",
    restart: "ПЕРЕЗАПУСК",
    preview: "СЛЕДУЮЩИЙ",
    hide_help: "СТЕРЕТЬ ТЕКСТ",
    quit: "ВЫХОД",
};

pub struct Skin {
    pub strings: &'static Strings,
    pub keys: KeyLayout,
    pub style: Style,
}

impl Skin {
    pub fn new(kind: SkinKind, keys: KeyLayout) -> Self {
        match kind {
            SkinKind::Classic => Self {
                strings: &ENGLISH,
                keys,
                style: Style::default(),
            },
            SkinKind::Retro84 => Self {
                strings: &RUSSIAN,
                keys,
                style: Style::default().fg(Color::Green).bg(Color::Black),
            },
        }
    }

    fn key_names(&self) -> [&'static str; 8] {
        match self.keys {
            KeyLayout::Arrows => ["←", "→", "↑", "↓", "R", "N", "H", "Q"],
            KeyLayout::Numpad => ["7", "9", "8", "4", "5", "1", "0", "Q"],
        }
    }

    pub fn restart_key(&self) -> &'static str {
        self.key_names()[4]
    }

    pub fn restart_hint(&self) -> String {
        self.strings.press_restart.replace("{key}", self.restart_key())
    }

    /// One legend line per binding, in the order the keys are listed.
    pub fn legend(&self) -> Vec<String> {
        let s = self.strings;
        let labels = [
            s.move_left,
            s.move_right,
            s.rotate,
            s.soft_drop,
            s.restart,
            s.preview,
            s.hide_help,
            s.quit,
        ];
        self.key_names()
            .iter()
            .zip(labels)
            .map(|(key, label)| format!("{key}: {label}"))
            .collect()
    }
}

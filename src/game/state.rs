use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::config::{
    BASE_SPEED_MS, BOARD_H, BOARD_W, LINES_PER_LEVEL, MIN_SPEED_MS, POINTS_PER_LINE, SPEED_STEP_MS,
};
use crate::game::{Board, Piece, random_shape};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Restart,
}

/// What a gravity tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Fell,
    Locked { cleared: usize },
    GameOver,
    /// Tick arrived after the game ended.
    Halted,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct View<'a> {
    pub board: &'a Board,
    pub piece: Option<&'a Piece>,
    pub score: u64,
    pub level: u64,
    pub lines: u64,
    pub status: Status,
}

pub struct Game {
    board: Board,
    current: Piece,
    status: Status,
    score: u64,
    level: u64,
    lines_cleared: u64,
    speed_ms: u64,
    rng: StdRng,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let current = Piece::spawn(random_shape(&mut rng));
        Self {
            board: Board::new(BOARD_W, BOARD_H),
            current,
            status: Status::Running,
            score: 0,
            level: 1,
            lines_cleared: 0,
            speed_ms: BASE_SPEED_MS,
            rng,
        }
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    /// Current gravity interval.
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn view(&self) -> View<'_> {
        View {
            board: &self.board,
            piece: (self.status == Status::Running).then_some(&self.current),
            score: self.score,
            level: self.level,
            lines: self.lines_cleared,
            status: self.status,
        }
    }

    /// One gravity tick: fall a row, or lock, clear, and spawn the next piece.
    pub fn step(&mut self) -> StepOutcome {
        if self.status == Status::GameOver {
            return StepOutcome::Halted;
        }

        self.current.translate(0, 1);
        if !self.board.collides(&self.current) {
            trace!(x = self.current.x, y = self.current.y, "piece fell");
            return StepOutcome::Fell;
        }

        self.current.translate(0, -1);
        self.board.place(&self.current);
        let (board, cleared) = self.board.clear_full_lines();
        self.board = board;
        debug!(
            shape = ?self.current.shape,
            x = self.current.x,
            y = self.current.y,
            cleared,
            "piece locked"
        );
        self.apply_clear(cleared);

        self.current = Piece::spawn(random_shape(&mut self.rng));
        if self.board.collides(&self.current) {
            self.status = Status::GameOver;
            info!(score = self.score, lines = self.lines_cleared, level = self.level, "game over");
            return StepOutcome::GameOver;
        }
        StepOutcome::Locked { cleared }
    }

    /// Applies a player action. Returns whether anything changed.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match (self.status, action) {
            (Status::GameOver, Action::Restart) => {
                self.restart();
                true
            }
            (Status::GameOver, _) | (Status::Running, Action::Restart) => false,
            (Status::Running, Action::MoveLeft) => self.try_move(-1, 0),
            (Status::Running, Action::MoveRight) => self.try_move(1, 0),
            (Status::Running, Action::SoftDrop) => self.try_move(0, 1),
            (Status::Running, Action::Rotate) => self.try_rotate(),
        }
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        self.current.translate(dx, dy);
        if self.board.collides(&self.current) {
            self.current.translate(-dx, -dy);
            return false;
        }
        true
    }

    fn try_rotate(&mut self) -> bool {
        let snapshot = self.current.blocks;
        self.current.rotate();
        if self.board.collides(&self.current) {
            self.current.blocks = snapshot;
            return false;
        }
        snapshot != self.current.blocks
    }

    fn apply_clear(&mut self, cleared: usize) {
        if cleared == 0 {
            return;
        }
        let cleared = cleared as u64;
        self.score += cleared * POINTS_PER_LINE;
        self.lines_cleared += cleared;

        let level = self.lines_cleared / LINES_PER_LEVEL + 1;
        if level != self.level {
            info!(level, "level up");
        }
        self.level = level;
        self.speed_ms = speed_for_level(level);
    }

    fn restart(&mut self) {
        self.board = Board::new(BOARD_W, BOARD_H);
        self.current = Piece::spawn(random_shape(&mut self.rng));
        self.status = Status::Running;
        self.score = 0;
        self.level = 1;
        self.lines_cleared = 0;
        self.speed_ms = BASE_SPEED_MS;
        info!("game restarted");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Game {
    /// A running game mid-play: given board, falling piece and line total.
    pub(crate) fn staged(seed: u64, board: Board, current: Piece, lines_cleared: u64) -> Self {
        let mut game = Self::with_seed(seed);
        let level = lines_cleared / LINES_PER_LEVEL + 1;
        game.board = board;
        game.current = current;
        game.lines_cleared = lines_cleared;
        game.level = level;
        game.speed_ms = speed_for_level(level);
        game
    }
}

pub fn speed_for_level(level: u64) -> u64 {
    BASE_SPEED_MS
        .saturating_sub(level.saturating_sub(1) * SPEED_STEP_MS)
        .max(MIN_SPEED_MS)
}

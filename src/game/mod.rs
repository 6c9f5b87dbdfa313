pub mod board;
pub mod piece;
pub mod state;

pub use board::{Board, Cell};
pub use piece::{Piece, Shape, random_shape};
pub use state::{Action, Game, Status, StepOutcome, View};

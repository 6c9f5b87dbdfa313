use crate::game::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Filled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) {
        let idx = self.idx(x, y);
        self.cells[idx] = value;
    }

    pub fn row(&self, y: usize) -> &[Cell] {
        let start = self.idx(0, y);
        &self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// True when any block of `piece` leaves the side walls, sinks through the floor
    /// or lands on a filled cell. Blocks above row 0 only check the side walls.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.positions().into_iter().any(|(x, y)| {
            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return true;
            }
            y >= 0 && self.get(x as usize, y as usize) == Cell::Filled
        })
    }

    /// Writes the piece into the grid. Blocks still above row 0 are dropped.
    pub fn place(&mut self, piece: &Piece) {
        for (x, y) in piece.positions() {
            if y >= 0 && (y as usize) < self.height {
                debug_assert!(x >= 0 && (x as usize) < self.width, "placing outside walls");
                self.set(x as usize, y as usize, Cell::Filled);
            }
        }
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        !self.row(y).contains(&Cell::Empty)
    }

    /// Drops every full row and tops the grid up with empty rows.
    pub fn clear_full_lines(&self) -> (Board, usize) {
        let mut cells = Vec::with_capacity(self.cells.len());
        let retained: Vec<&[Cell]> = (0..self.height)
            .filter(|&y| !self.is_row_full(y))
            .map(|y| self.row(y))
            .collect();
        let cleared = self.height - retained.len();

        cells.resize(cleared * self.width, Cell::Empty);
        for row in retained {
            cells.extend_from_slice(row);
        }

        let board = Board {
            width: self.width,
            height: self.height,
            cells,
        };
        (board, cleared)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::{BOARD_H, BOARD_W};
    use crate::game::Shape;

    fn fill_row(board: &mut Board, y: usize, hole: Option<usize>) {
        for x in 0..board.width {
            if Some(x) != hole {
                board.set(x, y, Cell::Filled);
            }
        }
    }

    fn filled_count(board: &Board) -> usize {
        board.rows().flatten().filter(|c| **c == Cell::Filled).count()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(BOARD_W, BOARD_H);
        assert_eq!(board.rows().count(), BOARD_H);
        assert!(board.rows().all(|row| row.len() == BOARD_W));
        assert_eq!(filled_count(&board), 0);
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new(BOARD_W, BOARD_H);
        let mut piece = Piece::spawn(Shape::O);
        assert!(!board.collides(&piece));

        piece.translate(-6, 0);
        assert!(board.collides(&piece), "left wall");
        piece.translate(10, 0);
        assert!(board.collides(&piece), "right wall");
        piece.translate(-4, 19);
        assert!(board.collides(&piece), "floor");
    }

    #[test]
    fn cells_above_the_grid_only_hit_side_walls() {
        let mut board = Board::new(BOARD_W, BOARD_H);
        fill_row(&mut board, 0, None);
        let mut piece = Piece::spawn(Shape::O);
        piece.translate(0, -2);
        assert!(!board.collides(&piece));

        piece.translate(-6, 0);
        assert!(board.collides(&piece));
    }

    #[test]
    fn filled_cell_collides() {
        let mut board = Board::new(BOARD_W, BOARD_H);
        board.set(6, 1, Cell::Filled);
        assert!(board.collides(&Piece::spawn(Shape::O)));
    }

    #[test]
    fn place_skips_cells_above_row_zero() {
        let mut board = Board::new(BOARD_W, BOARD_H);
        let mut piece = Piece::spawn(Shape::O);
        piece.translate(0, -1);
        board.place(&piece);

        assert_eq!(filled_count(&board), 2);
        assert_eq!(board.get(5, 0), Cell::Filled);
        assert_eq!(board.get(6, 0), Cell::Filled);
    }

    #[test]
    fn clear_removes_full_rows_and_shifts_down() {
        let mut board = Board::new(BOARD_W, BOARD_H);
        fill_row(&mut board, 19, None);
        fill_row(&mut board, 18, Some(3));
        fill_row(&mut board, 17, None);
        board.set(2, 16, Cell::Filled);

        let (cleared_board, cleared) = board.clear_full_lines();
        assert_eq!(cleared, 2);
        assert_eq!(cleared_board.row(19), board.row(18));
        assert_eq!(cleared_board.get(2, 18), Cell::Filled);
        assert!(cleared_board.row(0).iter().all(|c| *c == Cell::Empty));
        assert!(cleared_board.row(1).iter().all(|c| *c == Cell::Empty));
        // Nine survivors of row 18 plus the lone block from row 16.
        assert_eq!(filled_count(&cleared_board), 10);
    }

    #[test]
    fn clear_on_clean_board_is_identity() {
        let mut board = Board::new(BOARD_W, BOARD_H);
        fill_row(&mut board, 19, Some(0));
        let (same, cleared) = board.clear_full_lines();
        assert_eq!(cleared, 0);
        assert_eq!(same, board);
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(any::<bool>(), BOARD_W * BOARD_H).prop_map(|bits| {
            let mut board = Board::new(BOARD_W, BOARD_H);
            for (i, filled) in bits.into_iter().enumerate() {
                if filled {
                    board.set(i % BOARD_W, i / BOARD_W, Cell::Filled);
                }
            }
            board
        })
    }

    fn arb_piece() -> impl Strategy<Value = Piece> {
        (0..Shape::ALL.len(), 0..4usize, -4..14i32, -4..24i32).prop_map(
            |(shape, turns, x, y)| {
                let mut piece = Piece::spawn(Shape::ALL[shape]);
                for _ in 0..turns {
                    piece.rotate();
                }
                piece.translate(x - piece.x, y - piece.y);
                piece
            },
        )
    }

    proptest! {
        #[test]
        fn collides_matches_cellwise_predicate(board in arb_board(), piece in arb_piece()) {
            let expected = piece.positions().iter().any(|&(x, y)| {
                !(0..BOARD_W as i32).contains(&x)
                    || y >= BOARD_H as i32
                    || (y >= 0 && board.get(x as usize, y as usize) == Cell::Filled)
            });
            prop_assert_eq!(board.collides(&piece), expected);
        }

        #[test]
        fn clearing_keeps_dimensions_and_settles(board in arb_board()) {
            let (once, cleared) = board.clear_full_lines();
            prop_assert_eq!(once.width, BOARD_W);
            prop_assert_eq!(once.height, BOARD_H);
            prop_assert_eq!(once.rows().flatten().count(), BOARD_W * BOARD_H);
            prop_assert_eq!(filled_count(&once), filled_count(&board) - cleared * BOARD_W);

            let (twice, again) = once.clear_full_lines();
            prop_assert_eq!(again, 0);
            prop_assert_eq!(twice, once);
        }
    }
}

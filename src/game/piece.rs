use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::BOARD_W;

pub type Offset = (i32, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Canonical block offsets around the pivot.
    pub fn offsets(self) -> &'static [Offset; 4] {
        const I: [Offset; 4] = [(-1, 0), (0, 0), (1, 0), (2, 0)];
        const O: [Offset; 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];
        const T: [Offset; 4] = [(-1, 0), (0, 0), (1, 0), (0, 1)];
        const S: [Offset; 4] = [(0, 0), (1, 0), (-1, 1), (0, 1)];
        const Z: [Offset; 4] = [(-1, 0), (0, 0), (0, 1), (1, 1)];
        const J: [Offset; 4] = [(-1, 0), (0, 0), (1, 0), (1, 1)];
        const L: [Offset; 4] = [(-1, 0), (0, 0), (1, 0), (-1, 1)];

        match self {
            Shape::I => &I,
            Shape::O => &O,
            Shape::T => &T,
            Shape::S => &S,
            Shape::Z => &Z,
            Shape::J => &J,
            Shape::L => &L,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::S => 'S',
            Shape::Z => 'Z',
            Shape::J => 'J',
            Shape::L => 'L',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub blocks: [Offset; 4],
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            blocks: *shape.offsets(),
            x: (BOARD_W / 2) as i32,
            y: 0,
        }
    }

    /// Board coordinates of the four blocks, in offset order.
    pub fn positions(&self) -> [(i32, i32); 4] {
        self.blocks.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Quarter turn of the current offsets about the pivot. O never turns.
    pub fn rotate(&mut self) {
        if self.shape == Shape::O {
            return;
        }
        self.blocks = self.blocks.map(|(dx, dy)| (-dy, dx));
    }
}

pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    *Shape::ALL.choose(rng).unwrap_or(&Shape::I)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn spawn_copies_canonical_offsets_at_top_center() {
        for shape in Shape::ALL {
            let piece = Piece::spawn(shape);
            assert_eq!(&piece.blocks, shape.offsets());
            assert_eq!((piece.x, piece.y), (5, 0));
        }
    }

    #[test]
    fn rotating_a_piece_leaves_the_table_alone() {
        let mut first = Piece::spawn(Shape::T);
        let second = Piece::spawn(Shape::T);
        first.rotate();
        assert_ne!(first.blocks, second.blocks);
        assert_eq!(&second.blocks, Shape::T.offsets());
        assert_eq!(Shape::T.offsets()[0], (-1, 0));
    }

    #[test]
    fn positions_follow_offset_order() {
        let mut piece = Piece::spawn(Shape::L);
        piece.translate(-2, 3);
        assert_eq!(piece.positions(), [(2, 3), (3, 3), (4, 3), (2, 4)]);
    }

    #[test]
    fn rotation_is_cumulative() {
        let mut piece = Piece::spawn(Shape::T);
        piece.rotate();
        assert_eq!(piece.blocks, [(0, -1), (0, 0), (0, 1), (-1, 0)]);
        piece.rotate();
        assert_eq!(piece.blocks, [(1, 0), (0, 0), (-1, 0), (0, -1)]);
        piece.rotate();
        assert_eq!(piece.blocks, [(0, 1), (0, 0), (0, -1), (1, 0)]);
        piece.rotate();
        assert_eq!(&piece.blocks, Shape::T.offsets());
    }

    #[test]
    fn four_turns_restore_every_shape() {
        for shape in Shape::ALL {
            let mut piece = Piece::spawn(shape);
            for _ in 0..4 {
                piece.rotate();
            }
            assert_eq!(&piece.blocks, shape.offsets(), "{shape:?}");
        }
    }

    #[test]
    fn half_turn_of_i_swings_around_the_pivot() {
        let mut piece = Piece::spawn(Shape::I);
        piece.rotate();
        piece.rotate();
        assert_eq!(piece.blocks, [(1, 0), (0, 0), (-1, 0), (-2, 0)]);
        assert_eq!(piece.positions(), [(6, 0), (5, 0), (4, 0), (3, 0)]);
    }

    #[test]
    fn seeded_shapes_are_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let left: Vec<Shape> = (0..20).map(|_| random_shape(&mut a)).collect();
        let right: Vec<Shape> = (0..20).map(|_| random_shape(&mut b)).collect();
        assert_eq!(left, right);
    }

    proptest! {
        #[test]
        fn o_never_turns(turns in 0usize..16) {
            let mut piece = Piece::spawn(Shape::O);
            for _ in 0..turns {
                piece.rotate();
            }
            prop_assert_eq!(&piece.blocks, Shape::O.offsets());
        }
    }
}

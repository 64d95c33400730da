//! Puzzle piece definitions and orientation queries.
//!
//! Each piece is described by the pattern of holes it carries, indexed by the
//! board's hole numbering in the piece's base orientation. Placing a piece
//! rotates that pattern (and, for the one flippable piece, optionally mirrors
//! it) before it meets the pegs.

use crate::board::PegBoard;

/// Number of holes in the board (and in every piece's hole pattern).
pub const HOLE_COUNT: usize = 6;

/// Number of pieces in the full catalog.
pub const PIECE_COUNT: usize = 12;

/// A rotation/flip pair selecting one concrete pose of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Orientation {
    /// Rotation steps, counter-clockwise, in `0..max_rotation` for the piece.
    pub rotation: u8,
    /// Whether the piece is mirrored before rotating (flippable pieces only).
    pub flipped: bool,
}

impl Orientation {
    /// The unrotated, unflipped pose every piece starts from.
    pub const BASE: Self = Self {
        rotation: 0,
        flipped: false,
    };
}

/// One piece of the stacking puzzle.
///
/// Pieces are immutable: the catalog below is the only source of them, and
/// solving never modifies a piece, only queries its oriented hole pattern.
#[derive(Clone, Copy, Debug)]
pub struct Piece {
    /// Piece number as printed on the physical piece (1-based, unique).
    pub num: u8,
    /// Rotation period: rotating by this many steps reproduces an earlier
    /// pose, so only rotations in `0..max_rotation` are ever enumerated.
    pub max_rotation: u8,
    /// Hole flags in the base orientation, one per board hole.
    pub holes: [bool; HOLE_COUNT],
    /// Whether the mirrored pattern is a distinct, usable pose.
    pub flippable: bool,
}

impl Piece {
    /// Creates a piece definition with compile-time range validation.
    pub const fn new(num: u8, max_rotation: u8, holes: [bool; HOLE_COUNT], flippable: bool) -> Self {
        assert!(num >= 1 && num as usize <= PIECE_COUNT, "piece number out of range");
        assert!(
            max_rotation >= 1 && max_rotation as usize <= HOLE_COUNT,
            "rotation period out of range"
        );
        Self {
            num,
            max_rotation,
            holes,
            flippable,
        }
    }

    /// Whether the piece has a hole over board hole `hole` in the given pose.
    ///
    /// Rotating by `r` shifts the pattern so that board hole `i` meets pattern
    /// index `(i + r) mod 6`; flipping then reflects every nonzero index
    /// across hole 0.
    #[inline]
    pub fn active_hole(&self, hole: usize, orientation: Orientation) -> bool {
        let mut index = (hole + orientation.rotation as usize) % HOLE_COUNT;
        if orientation.flipped && index != 0 {
            index = HOLE_COUNT - index;
        }
        self.holes[index]
    }

    /// All poses in which this piece can go onto the current pegs.
    ///
    /// A pose is legal when every hole with a standing peg (nonzero height)
    /// lines up with a hole of the piece; empty holes are unconstrained. The
    /// result is ordered rotation-ascending, unflipped poses before flipped
    /// ones, and flipped poses appear only for the flippable piece.
    pub fn legal_orientations(&self, board: &PegBoard) -> Vec<Orientation> {
        let mut legal = Vec::new();

        for flipped in [false, true] {
            for rotation in 0..self.max_rotation {
                let orientation = Orientation { rotation, flipped };
                let fits = board
                    .iter()
                    .enumerate()
                    .all(|(hole, &height)| height == 0 || self.active_hole(hole, orientation));
                if fits {
                    legal.push(orientation);
                }
            }

            if !self.flippable {
                break;
            }
        }

        legal
    }
}

/// A piece placed in a specific pose, in placement order within a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedPiece {
    pub num: u8,
    pub rotation: u8,
    pub flipped: bool,
}

impl PlacedPiece {
    /// Records piece `num` placed in `orientation`.
    pub const fn new(num: u8, orientation: Orientation) -> Self {
        Self {
            num,
            rotation: orientation.rotation,
            flipped: orientation.flipped,
        }
    }

    /// The pose this placement was made in.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        Orientation {
            rotation: self.rotation,
            flipped: self.flipped,
        }
    }
}

/// The twelve pieces of the stacking puzzle.
///
/// The hole flags and rotation periods must match the physical set exactly —
/// solution counts are only comparable against reference output when this
/// table is reproduced verbatim.
pub const PIECES: [Piece; PIECE_COUNT] = [
    Piece::new(1, 6, [false, true, false, false, false, false], false),
    Piece::new(2, 6, [true, false, false, true, true, true], false),
    Piece::new(3, 6, [true, false, true, true, true, true], false),
    Piece::new(4, 6, [true, true, true, false, false, false], false),
    Piece::new(5, 3, [true, false, true, true, false, true], false),
    Piece::new(6, 3, [false, true, false, false, true, false], false),
    Piece::new(7, 6, [true, true, false, true, false, true], false),
    // the only piece whose mirror image is a distinct pose
    Piece::new(8, 6, [true, false, false, true, false, true], true),
    Piece::new(9, 6, [true, true, false, false, false, false], false),
    // covers the whole board; rotation never changes it
    Piece::new(10, 1, [true, true, true, true, true, true], false),
    Piece::new(11, 6, [false, false, true, false, true, false], false),
    Piece::new(12, 2, [true, false, true, false, true, false], false),
];

// Catalog-wide invariants, checked at compile time (per-piece ranges are
// already checked in `Piece::new`).
const _: () = {
    let mut flippable = 0;
    let mut i = 0;
    while i < PIECE_COUNT {
        assert!(
            PIECES[i].num as usize == i + 1,
            "catalog must be ordered by piece number"
        );
        if PIECES[i].flippable {
            flippable += 1;
        }
        i += 1;
    }
    assert!(flippable == 1, "exactly one piece is flippable");
};

/// Looks up a catalog piece by its printed number.
pub fn by_num(num: u8) -> Option<&'static Piece> {
    PIECES.iter().find(|piece| piece.num == num)
}

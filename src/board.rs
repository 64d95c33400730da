//! Peg board state and placement application.
//!
//! The board is a flat array of six peg heights, one per hole. A hole holding
//! 0 is empty; placing a piece over an empty hole stands a fresh peg in it,
//! and every later piece stacked over that hole drives the peg one layer
//! deeper. A board where every height is back to 0 is fully packed.

use crate::pieces::{self, Orientation, Piece, PlacedPiece, HOLE_COUNT};

/// Total layers of a peg. A freshly planted peg shows `PEG_LENGTH - 1`
/// remaining layers, since the planting piece itself consumes one.
pub const PEG_LENGTH: u8 = 3;

/// Remaining peg height per hole, each in `0..PEG_LENGTH`.
pub type PegBoard = [u8; HOLE_COUNT];

/// The board before any piece has been placed.
pub const EMPTY_BOARD: PegBoard = [0; HOLE_COUNT];

/// Whether every hole is at height 0 (no standing pegs).
#[inline]
pub fn is_clear(board: &PegBoard) -> bool {
    board.iter().all(|&height| height == 0)
}

/// Returns the board after placing `piece` in `orientation`.
///
/// Each active hole either plants a new peg (height 0 becomes
/// `PEG_LENGTH - 1`) or drives the standing one a layer deeper. The caller is
/// expected to have checked legality via `Piece::legal_orientations`; this
/// only applies the mask.
pub fn place(board: &PegBoard, piece: &Piece, orientation: Orientation) -> PegBoard {
    let mut next = *board;

    for (hole, height) in next.iter_mut().enumerate() {
        if piece.active_hole(hole, orientation) {
            if *height == 0 {
                *height = PEG_LENGTH - 1;
            } else {
                *height -= 1;
            }
        }
    }

    next
}

/// Re-applies a recorded solution from an empty board.
///
/// Returns the final board, or `None` if a placement names a piece number
/// outside the catalog. A well-formed complete solution ends clear.
pub fn replay(solution: &[PlacedPiece]) -> Option<PegBoard> {
    let mut board = EMPTY_BOARD;
    for placed in solution {
        let piece = pieces::by_num(placed.num)?;
        board = place(&board, piece, placed.orientation());
    }
    Some(board)
}

/// Formats one placement as a single line: piece number, pose tag, and the
/// oriented hole mask (`#` = hole, `.` = blank).
pub fn format_placement(placed: &PlacedPiece) -> String {
    let tag = format!(
        "r{}{}",
        placed.rotation,
        if placed.flipped { "f" } else { "" }
    );

    let mask: String = match pieces::by_num(placed.num) {
        Some(piece) => (0..HOLE_COUNT)
            .map(|hole| {
                if piece.active_hole(hole, placed.orientation()) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect(),
        None => "?".repeat(HOLE_COUNT),
    };

    format!("piece {:>2}  {:<4} {}", placed.num, tag, mask)
}

/// Formats a solution as numbered placement lines, one per step.
pub fn format_solution(solution: &[PlacedPiece]) -> String {
    let mut output = String::new();
    for (step, placed) in solution.iter().enumerate() {
        output.push_str(&format!("{:>2}. {}\n", step + 1, format_placement(placed)));
    }
    output
}

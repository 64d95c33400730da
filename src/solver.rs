//! Exhaustive backtracking solver over piece placement orders.
//!
//! The search tries every ordering of the unplaced pool and, within each
//! step, every pose that covers the standing pegs:
//! - The pool is a fixed arena of pieces plus a bitmask of which are still
//!   unplaced; a branch clears a bit in its own copy of the mask instead of
//!   mutating a shared list.
//! - Every recursion level gets its own copy of the board, so sibling
//!   branches never observe each other's pegs.
//! - A placement onto a clear board is a seed: with no pegs standing, every
//!   pose is equivalent up to whole-board symmetry, so only the base pose is
//!   tried.
//!
//! No pruning beyond peg validity, no memoization: every complete stacking
//! is enumerated, in a deterministic depth-first order.

use crate::board::{self, PegBoard, EMPTY_BOARD};
use crate::pieces::{Orientation, Piece, PlacedPiece, PIECE_COUNT};

/// One complete stacking: every pool piece placed, in order, with its pose.
pub type Solution = Vec<PlacedPiece>;

/// Finds all complete stackings of the given piece pool.
///
/// The pool is usually the full catalog but may be any subset of at most
/// `PIECE_COUNT` pieces (the bitmask bounds it). Solutions are returned in
/// discovery order, which is fixed by the pool order and the pose ordering
/// of `legal_orientations`.
pub fn solve(pieces: &[Piece]) -> Vec<Solution> {
    assert!(
        pieces.len() <= PIECE_COUNT,
        "piece pool larger than the catalog"
    );

    let remaining: u16 = (1u16 << pieces.len()) - 1;
    let mut stack = Vec::with_capacity(pieces.len());
    let mut solutions = Vec::new();

    explore(pieces, remaining, EMPTY_BOARD, &mut stack, &mut solutions);

    solutions
}

/// Depth-first exploration of every placement order and pose.
///
/// `remaining` has bit `i` set while arena index `i` is unplaced; the caller's
/// mask is untouched by the recursive call, so backtracking restores the pool
/// implicitly. The placement stack is shared and restored by push/pop around
/// each branch.
fn explore(
    pieces: &[Piece],
    remaining: u16,
    board: PegBoard,
    stack: &mut Solution,
    solutions: &mut Vec<Solution>,
) {
    if remaining == 0 {
        // success only when the last piece drove every peg flush
        if board::is_clear(&board) {
            solutions.push(stack.clone());
        }
        return;
    }

    let seeding = board::is_clear(&board);

    for (index, piece) in pieces.iter().enumerate() {
        if remaining & (1u16 << index) == 0 {
            continue;
        }

        let orientations = if seeding {
            vec![Orientation::BASE]
        } else {
            piece.legal_orientations(&board)
        };

        for orientation in orientations {
            stack.push(PlacedPiece::new(piece.num, orientation));
            explore(
                pieces,
                remaining & !(1u16 << index),
                board::place(&board, piece, orientation),
                stack,
                solutions,
            );
            stack.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces;

    /// Shorthand for expected records in the tests below.
    fn rec(num: u8, rotation: u8) -> PlacedPiece {
        PlacedPiece {
            num,
            rotation,
            flipped: false,
        }
    }

    #[test]
    fn test_empty_pool_records_one_empty_solution() {
        // no pieces to place and a clear board is immediately a success
        assert_eq!(solve(&[]), vec![Vec::new()]);
    }

    #[test]
    fn test_full_cover_piece_alone_has_no_solution() {
        // a single placement leaves every peg at height 2, never back at 0
        let pool = [*pieces::by_num(10).unwrap()];
        assert!(solve(&pool).is_empty());
    }

    #[test]
    fn test_identical_full_covers_solve_in_every_order() {
        // three all-hole pieces drive each peg 2 -> 1 -> 0 in any order
        let full = [true; pieces::HOLE_COUNT];
        let pool = [
            Piece::new(1, 1, full, false),
            Piece::new(2, 1, full, false),
            Piece::new(3, 1, full, false),
        ];

        let solutions = solve(&pool);
        let orders: Vec<Vec<u8>> = solutions
            .iter()
            .map(|solution| solution.iter().map(|placed| placed.num).collect())
            .collect();

        assert_eq!(
            orders,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn test_seed_poses_are_pinned_to_base() {
        // single-hole pieces with full rotation range: without the seed rule
        // each ordering would start from six poses instead of one
        let lone = [true, false, false, false, false, false];
        let pool = [
            Piece::new(1, 6, lone, false),
            Piece::new(2, 6, lone, false),
            Piece::new(3, 6, lone, false),
        ];

        let solutions = solve(&pool);
        assert_eq!(solutions.len(), 6);
        for solution in &solutions {
            for placed in solution {
                assert_eq!(placed.orientation(), Orientation::BASE);
            }
        }
    }

    #[test]
    fn test_search_records_the_pose_that_covered_the_pegs() {
        // pieces 1 and 3 cover holes {0,1}, piece 2 covers {1,2}; each
        // ordering fits together in exactly one combination of rotations
        let pool = [
            Piece::new(1, 6, [true, true, false, false, false, false], false),
            Piece::new(2, 6, [false, true, true, false, false, false], false),
            Piece::new(3, 6, [true, true, false, false, false, false], false),
        ];

        let solutions = solve(&pool);
        assert_eq!(
            solutions,
            vec![
                vec![rec(1, 0), rec(2, 1), rec(3, 0)],
                vec![rec(1, 0), rec(3, 0), rec(2, 1)],
                vec![rec(2, 0), rec(1, 5), rec(3, 5)],
                vec![rec(2, 0), rec(3, 5), rec(1, 5)],
                vec![rec(3, 0), rec(1, 0), rec(2, 1)],
                vec![rec(3, 0), rec(2, 1), rec(1, 0)],
            ]
        );
    }

    #[test]
    fn test_search_is_deterministic() {
        let pool = [
            Piece::new(1, 6, [true, true, false, false, false, false], false),
            Piece::new(2, 6, [false, true, true, false, false, false], false),
            Piece::new(3, 6, [true, true, false, false, false, false], false),
        ];
        assert_eq!(solve(&pool), solve(&pool));
    }
}

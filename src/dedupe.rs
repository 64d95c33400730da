//! Piece-order analysis of solved stackings.
//!
//! The raw search records one solution per placement order, so stackings that
//! use the pieces in the same sequence show up once per surviving pose
//! combination. Grouping by the piece-number sequence collapses those; the
//! reverse-symmetry tally then checks that unstacking order (the reversed
//! sequence) is also a recorded order — for a complete search every
//! solution's reverse must itself be a solution.

use rustc_hash::FxHashSet;

use crate::pieces::PlacedPiece;
use crate::solver::Solution;

/// The dedup key: piece numbers in placement order. Rotation and flip are
/// deliberately not part of the key — orderings are compared as sequences of
/// pieces, not poses.
fn piece_order(solution: &[PlacedPiece]) -> Vec<u8> {
    solution.iter().map(|placed| placed.num).collect()
}

/// Collapses solutions with equal piece orders, keeping the first seen.
///
/// Input order is preserved, so the representative of each group is the one
/// the search discovered first.
pub fn unique_solutions(solutions: &[Solution]) -> Vec<Solution> {
    let mut seen: FxHashSet<Vec<u8>> = FxHashSet::default();
    let mut uniques = Vec::new();

    for solution in solutions {
        if seen.insert(piece_order(solution)) {
            uniques.push(solution.clone());
        }
    }

    uniques
}

/// Counts the unique solutions whose reversed piece order is also present.
///
/// A palindromic order counts as its own reverse. For a sound, exhaustive
/// search this count equals `uniques.len()`: stacking order reversed is a
/// physically valid stacking, so its order must have been discovered too.
pub fn count_reverse_symmetric(uniques: &[Solution]) -> usize {
    let orders: FxHashSet<Vec<u8>> = uniques
        .iter()
        .map(|solution| piece_order(solution))
        .collect();

    uniques
        .iter()
        .filter(|solution| {
            let mut reversed = piece_order(solution);
            reversed.reverse();
            orders.contains(&reversed)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Orientation;

    /// Builds a solution with the given piece order, base poses throughout.
    fn sol(nums: &[u8]) -> Solution {
        nums.iter()
            .map(|&num| PlacedPiece::new(num, Orientation::BASE))
            .collect()
    }

    #[test]
    fn test_equal_piece_orders_collapse_regardless_of_pose() {
        let first = sol(&[1, 2, 3]);
        let mut repositioned = sol(&[1, 2, 3]);
        repositioned[1].rotation = 4;
        repositioned[2].flipped = true;

        let uniques = unique_solutions(&[first.clone(), repositioned]);
        // the first-seen representative survives, poses and all
        assert_eq!(uniques, vec![first]);
    }

    #[test]
    fn test_unique_solutions_keep_first_seen_order() {
        let solutions = vec![sol(&[1, 2, 3]), sol(&[2, 1, 3]), sol(&[1, 2, 3]), sol(&[3, 2, 1])];
        let uniques = unique_solutions(&solutions);
        assert_eq!(
            uniques,
            vec![sol(&[1, 2, 3]), sol(&[2, 1, 3]), sol(&[3, 2, 1])]
        );
    }

    #[test]
    fn test_reverse_symmetry_finds_mirrored_orders() {
        // [1,2,3] and [3,2,1] reverse onto each other; [1,3,2] reverses to
        // the absent [2,3,1]
        let uniques = vec![sol(&[1, 2, 3]), sol(&[3, 2, 1]), sol(&[1, 3, 2])];
        assert_eq!(count_reverse_symmetric(&uniques), 2);
    }

    #[test]
    fn test_palindromic_order_is_its_own_reverse() {
        let uniques = vec![sol(&[2, 5, 2])];
        assert_eq!(count_reverse_symmetric(&uniques), 1);
    }

    #[test]
    fn test_empty_sets_are_trivially_closed() {
        assert!(unique_solutions(&[]).is_empty());
        assert_eq!(count_reverse_symmetric(&[]), 0);
    }
}

//! Peg Stacking Puzzle Solver Library
//!
//! Provides the core search and piece-order analysis for a twelve-piece,
//! six-hole peg stacking puzzle.

pub mod board;
pub mod dedupe;
pub mod persistence;
pub mod pieces;
pub mod solver;

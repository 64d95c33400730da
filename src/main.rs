//! Peg Stacking Puzzle Solver
//!
//! Solves a peg stacking puzzle where twelve notched pieces must be stacked
//! onto a six-hole peg board until every peg sits flush. The solver finds
//! every valid placement order, and the analysis pass groups those by piece
//! order and tallies the solutions whose reverse order is also a solution.

use std::time::Instant;

use clap::{Parser, Subcommand};
use thousands::Separable;

use stacker::{dedupe, persistence, pieces, solver};
use pieces::PIECES;
use solver::Solution;

/// Solves a six-hole peg stacking puzzle and analyzes the solutions.
#[derive(Parser)]
#[command(name = "stacker")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and save solutions to disk.
    Solve,
    /// Show the number of saved solutions.
    Count,
    /// Group saved solutions by piece order and count reverse pairs.
    Uniques,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve) => {
            run_solver();
        }
        Some(Command::Count) => run_count(),
        Some(Command::Uniques) => run_uniques(),
        None => {
            // default: solve and analyze
            let solutions = run_solver();
            report_uniques(&solutions);
        }
    }
}

/// Solves the puzzle, saves to disk, and returns the solutions.
fn run_solver() -> Vec<Solution> {
    let stopwatch = Instant::now();
    let solutions = solver::solve(&PIECES);
    println!(
        "Found {} solutions in {:.2} seconds",
        solutions.len().separate_with_commas(),
        stopwatch.elapsed().as_secs_f64()
    );

    if let Err(e) = persistence::save(&solutions) {
        eprintln!("Failed to save solutions: {}", e);
    } else {
        println!("Wrote solutions.txt and solutions.bin");
    }

    solutions
}

/// Prints the count of saved solutions.
fn run_count() {
    match persistence::count() {
        Some(count) => println!("{} solutions", count.separate_with_commas()),
        None => eprintln!("No solutions.bin found. Run 'stacker solve' first."),
    }
}

/// Loads saved solutions and reports the piece-order analysis.
fn run_uniques() {
    match persistence::load_all() {
        Some(solutions) => report_uniques(&solutions),
        None => eprintln!("No solutions.bin found. Run 'stacker solve' first."),
    }
}

/// Prints the unique and reverse-symmetric counts for a solution set.
fn report_uniques(solutions: &[Solution]) {
    let uniques = dedupe::unique_solutions(solutions);
    let reverses = dedupe::count_reverse_symmetric(&uniques);

    println!("{} unique piece orders", uniques.len().separate_with_commas());
    println!(
        "{} with their reverse also present",
        reverses.separate_with_commas()
    );

    if reverses != uniques.len() {
        eprintln!(
            "Warning: {} unique orders lack their reverse; the search missed solutions",
            uniques.len() - reverses
        );
    }
}

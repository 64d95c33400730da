//! File I/O for saving and loading solved stackings.
//!
//! Binary format for `solutions.bin` (little endian):
//! - u32: solution count
//! - repeat per solution:
//!   - u32: placement count
//!   - repeat per placement: 3 bytes (piece number, rotation, flipped as 0/1)

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use crate::board::format_solution;
use crate::pieces::PlacedPiece;
use crate::solver::Solution;

const SOLUTIONS_BIN: &str = "solutions.bin";
const SOLUTIONS_TXT: &str = "solutions.txt";

/// Saves solutions to both binary and text files.
pub fn save(solutions: &[Solution]) -> std::io::Result<()> {
    save_text(solutions)?;
    save_binary(solutions)?;
    Ok(())
}

/// Saves solutions in human-readable text format.
fn save_text(solutions: &[Solution]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(SOLUTIONS_TXT)?);
    writeln!(file, "Found {} solutions:\n", solutions.len())?;
    for (i, solution) in solutions.iter().enumerate() {
        writeln!(file, "Solution {}:", i + 1)?;
        write!(file, "{}", format_solution(solution))?;
        writeln!(file)?;
    }
    file.flush()
}

/// Saves solutions in compact binary format for fast loading.
fn save_binary(solutions: &[Solution]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(SOLUTIONS_BIN)?);
    write_solutions(&mut file, solutions)?;
    file.flush()
}

/// Writes solutions in the binary format to any sink.
pub fn write_solutions<W: Write>(writer: &mut W, solutions: &[Solution]) -> std::io::Result<()> {
    writer.write_all(&(solutions.len() as u32).to_le_bytes())?;

    for solution in solutions {
        writer.write_all(&(solution.len() as u32).to_le_bytes())?;
        for placed in solution {
            writer.write_all(&[placed.num, placed.rotation, placed.flipped as u8])?;
        }
    }

    Ok(())
}

/// Reads solutions in the binary format from any source.
///
/// Returns `None` if the data runs out before the recorded counts are
/// satisfied.
pub fn read_solutions<R: Read>(reader: &mut R) -> Option<Vec<Solution>> {
    let mut u32_buffer = [0u8; 4];

    reader.read_exact(&mut u32_buffer).ok()?;
    let solution_count = u32::from_le_bytes(u32_buffer) as usize;

    let mut solutions = Vec::with_capacity(solution_count);

    for _ in 0..solution_count {
        reader.read_exact(&mut u32_buffer).ok()?;
        let placement_count = u32::from_le_bytes(u32_buffer) as usize;

        let mut solution = Vec::with_capacity(placement_count);
        for _ in 0..placement_count {
            let mut record = [0u8; 3];
            reader.read_exact(&mut record).ok()?;
            solution.push(PlacedPiece {
                num: record[0],
                rotation: record[1],
                flipped: record[2] != 0,
            });
        }
        solutions.push(solution);
    }

    Some(solutions)
}

/// Loads all solutions from the binary file.
pub fn load_all() -> Option<Vec<Solution>> {
    let file = File::open(SOLUTIONS_BIN).ok()?;
    read_solutions(&mut BufReader::new(file))
}

/// Returns the number of saved solutions without loading them all.
pub fn count() -> Option<usize> {
    let mut file = File::open(SOLUTIONS_BIN).ok()?;
    let mut u32_buffer = [0u8; 4];
    file.read_exact(&mut u32_buffer).ok()?;
    Some(u32::from_le_bytes(u32_buffer) as usize)
}

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use lutgen::prelude::*;

/// Generates the lookup tables consumed by the engine's move generation and writes
/// each one as a constant-array source text file.
#[derive(Parser)]
struct Args {
    /// Directory the table files are written to.
    #[arg(short, long, default_value = ".")]
    outdir: PathBuf,

    /// Tables to generate. Generates every table when omitted.
    tables: Vec<Table>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Table {
    /// Base attacks for all seven piece classes.
    Attacks,
    /// Squares strictly between every aligned pair, target square included.
    Between,
    /// The full rank/file/diagonal through every aligned pair.
    Line,
    /// Chebyshev distance between every pair of squares.
    Distances,
    /// Diagonal and antidiagonal masks for every square.
    Diagonals,
}

impl Table {
    const ALL: [Self; 5] = [
        Self::Attacks,
        Self::Between,
        Self::Line,
        Self::Distances,
        Self::Diagonals,
    ];
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tables = if args.tables.is_empty() {
        Table::ALL.to_vec()
    } else {
        args.tables
    };

    fs::create_dir_all(&args.outdir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.outdir.display()
        )
    })?;

    // Every derived table reads the base attacks, so generate them once up front.
    let base = generate_base_attacks();

    for table in tables {
        log::debug!("Generating {table:?} table");

        let (file_name, text) = match table {
            Table::Attacks => (
                "piece_base_attacks_table.txt",
                emit_base_attack_table("piece_base_attacks_table", &base),
            ),
            Table::Between => (
                "between_bitboards.txt",
                emit_square_pair_table("between_bitboards", &generate_between(&base)),
            ),
            Table::Line => (
                "line_bitboards.txt",
                emit_square_pair_table("line_bitboards", &generate_line(&base)),
            ),
            Table::Distances => (
                "square_distances.txt",
                emit_distance_table("square_distances", &generate_distances()),
            ),
            Table::Diagonals => {
                let (diagonals, antidiagonals) = generate_diagonal_masks();
                let text = format!(
                    "{}\n{}",
                    emit_bitboard_array("diagonal_bitboards", &diagonals),
                    emit_bitboard_array("antidiagonal_bitboards", &antidiagonals)
                );
                ("diagonal_bitboards.txt", text)
            }
        };

        let path = args.outdir.join(file_name);
        fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}

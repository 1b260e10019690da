//! Renders generated tables as constant-array source text.
//!
//! The output is compiled directly into the consuming engine, so every emitter is
//! deterministic down to the byte: regenerating an unchanged table produces no diff.
//! Scalars are fixed-width (16 hex digits for bitboards, 2 decimal digits for
//! distances) and rows follow rank-major square order.

use super::{BaseAttackTable, Bitboard, DistanceTable, PieceClass, Square, SquarePairTable};

/// Renders a per-square bitboard table as a `const Bitboard <name>[SQUARE_COUNT]`
/// block, one rank of 8 literals per row.
pub fn emit_bitboard_array(name: &str, table: &[Bitboard; Square::COUNT]) -> String {
    let mut s = format!("const Bitboard {name}[SQUARE_COUNT] = {{\n");

    for rank in 0..8 {
        s += "    ";
        for file in 0..8 {
            s += &format!("{:x}", table[Square::new(file, rank)]);
            if file != 7 {
                s += ", ";
            } else if rank != 7 {
                s += ",";
            }
        }
        if rank != 7 {
            s += "\n";
        }
    }

    s += "\n};";
    s
}

/// Renders a square-pair bitboard table as a
/// `const Bitboard <name>[SQUARE_COUNT][SQUARE_COUNT]` block: one brace block per
/// first square, its 64 entries laid out as 8 rank rows.
pub fn emit_square_pair_table(name: &str, table: &SquarePairTable) -> String {
    let mut s = format!("const Bitboard {name}[SQUARE_COUNT][SQUARE_COUNT] = {{\n");

    for s1 in Square::iter() {
        s += "    {";
        for rank in 0..8 {
            if rank != 0 {
                s += "     ";
            }
            for file in 0..8 {
                s += &format!("{:x}", table[s1][Square::new(file, rank)]);
                if file != 7 {
                    s += ", ";
                } else if rank != 7 {
                    s += ",";
                }
            }
            if rank != 7 {
                s += "\n";
            }
        }
        s += "}";
        if s1 != Square::H8 {
            s += ",\n\n";
        }
    }

    s += "\n};";
    s
}

/// Renders the distance table as a `const uint8_t <name>[SQUARE_COUNT][SQUARE_COUNT]`
/// block with zero-padded two-digit decimal scalars, in the same nested layout as
/// [`emit_square_pair_table`].
pub fn emit_distance_table(name: &str, table: &DistanceTable) -> String {
    let mut s = format!("const uint8_t {name}[SQUARE_COUNT][SQUARE_COUNT] = {{\n");

    for s1 in Square::iter() {
        s += "    {";
        for rank in 0..8 {
            if rank != 0 {
                s += "     ";
            }
            for file in 0..8 {
                s += &format!("{:02}", table[s1][Square::new(file, rank)]);
                if file != 7 {
                    s += ", ";
                } else if rank != 7 {
                    s += ",";
                }
            }
            if rank != 7 {
                s += "\n";
            }
        }
        s += "}";
        if s1 != Square::H8 {
            s += ",\n\n";
        }
    }

    s += "\n};";
    s
}

/// Renders the base attack table as a
/// `const Bitboard <name>[PIECE_TYPE_COUNT][SQUARE_COUNT]` block with one
/// designated-initializer row block per piece class, names right-padded so the `=`
/// signs line up.
pub fn emit_base_attack_table(name: &str, table: &BaseAttackTable) -> String {
    let width = PieceClass::iter()
        .map(|class| class.table_name().len())
        .max()
        .unwrap_or(0);

    let mut s = format!("const Bitboard {name}[PIECE_TYPE_COUNT][SQUARE_COUNT] = {{\n");

    for (idx, class) in PieceClass::iter().enumerate() {
        let table_name = class.table_name();
        let padding = " ".repeat(width - table_name.len());
        s += &format!("    [{table_name}]{padding} = {{\n");

        for rank in 0..8 {
            s += "        ";
            for file in 0..8 {
                s += &format!("{:x}", table[class][Square::new(file, rank)]);
                if file != 7 {
                    s += ", ";
                } else if rank != 7 {
                    s += ",";
                }
            }
            s += "\n";
        }

        s += "    }";
        if idx != PieceClass::COUNT - 1 {
            s += ",\n\n";
        }
    }

    s += "\n};";
    s
}

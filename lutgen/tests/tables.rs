//! End-to-end checks of the generated tables, including a cross-check against an
//! independent generator that finds attacks by file/rank arithmetic instead of
//! mask-then-shift.

use lutgen::prelude::*;

fn board_of(squares: &[Square]) -> Bitboard {
    let mut board = Bitboard::EMPTY_BOARD;
    for square in squares {
        board |= square.bitboard();
    }
    board
}

#[test]
fn between_on_the_main_diagonal() {
    let between = generate_between(&generate_base_attacks());

    assert_eq!(
        between[Square::A1][Square::H8],
        board_of(&[
            Square::B2,
            Square::C3,
            Square::D4,
            Square::E5,
            Square::F6,
            Square::G7,
            Square::H8,
        ])
    );
}

#[test]
fn between_depends_on_direction() {
    let between = generate_between(&generate_base_attacks());

    // The entry always ends at its second argument.
    assert_eq!(
        between[Square::A1][Square::A4],
        board_of(&[Square::A2, Square::A3, Square::A4])
    );
    assert_eq!(
        between[Square::A4][Square::A1],
        board_of(&[Square::A1, Square::A2, Square::A3])
    );
}

#[test]
fn between_of_unaligned_and_degenerate_pairs() {
    let between = generate_between(&generate_base_attacks());

    // A1 and B3 share no rank, file, or diagonal: just the target bit remains.
    assert_eq!(between[Square::A1][Square::B3], Square::B3.bitboard());

    for square in Square::iter() {
        assert_eq!(between[square][square], square.bitboard());
    }
}

#[test]
fn between_matches_a_walked_ray_for_every_pair() {
    let between = generate_between(&generate_base_attacks());

    for s1 in Square::iter() {
        for s2 in Square::iter() {
            assert_eq!(
                between[s1][s2],
                walked_between(s1, s2),
                "between[{s1}][{s2}] disagrees with a walked ray"
            );
        }
    }
}

#[test]
fn line_contains_both_endpoints_and_is_symmetric() {
    let lines = generate_line(&generate_base_attacks());

    assert_eq!(lines[Square::A1][Square::H8], Bitboard::A1_H8_DIAG);
    assert_eq!(lines[Square::A1][Square::A4], Bitboard::FILE_A);
    assert_eq!(lines[Square::B2][Square::F2], Bitboard::RANK_2);

    // Unaligned pairs stay empty: no fallback bit, unlike the between table.
    assert!(lines[Square::A1][Square::B3].is_empty());

    for s1 in Square::iter() {
        for s2 in Square::iter() {
            assert_eq!(lines[s1][s2], lines[s2][s1]);
            if lines[s1][s2].is_nonempty() {
                assert!(lines[s1][s2].get(s1));
                assert!(lines[s1][s2].get(s2));
            }
        }
    }
}

#[test]
fn distances_satisfy_the_chebyshev_metric() {
    let distances = generate_distances();

    assert_eq!(distances[Square::A1][Square::H8], 7);
    assert_eq!(distances[Square::A1][Square::A1], 0);
    assert_eq!(distances[Square::A1][Square::B1], 1);

    for s1 in Square::iter() {
        for s2 in Square::iter() {
            assert_eq!(distances[s1][s2], distances[s2][s1]);
            let expected = (s1.file() as i8 - s2.file() as i8)
                .unsigned_abs()
                .max((s1.rank() as i8 - s2.rank() as i8).unsigned_abs());
            assert_eq!(distances[s1][s2], expected);
        }
    }
}

#[test]
fn regeneration_is_deterministic() {
    let base = generate_base_attacks();
    assert_eq!(base, generate_base_attacks());
    assert_eq!(generate_between(&base), generate_between(&base));
    assert_eq!(generate_line(&base), generate_line(&base));
    assert_eq!(generate_distances(), generate_distances());

    let text = emit_square_pair_table("between_bitboards", &generate_between(&base));
    let again = emit_square_pair_table("between_bitboards", &generate_between(&base));
    assert_eq!(text, again);
}

// -----------------------------------------------------------------------------------
// Cross-check fixtures. These rebuild the attack sets with explicit file/rank bound
// checks, sharing no edge-handling code with the shift-based generators.
// -----------------------------------------------------------------------------------

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

fn leaper_attacks(square: Square, offsets: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY_BOARD;
    for (file_delta, rank_delta) in offsets {
        if let Some(target) = square.offset(*file_delta, *rank_delta) {
            attacks |= target.bitboard();
        }
    }
    attacks
}

fn rider_attacks(square: Square, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY_BOARD;
    for (file_delta, rank_delta) in directions {
        let mut ray = square;
        while let Some(target) = ray.offset(*file_delta, *rank_delta) {
            attacks |= target.bitboard();
            ray = target;
        }
    }
    attacks
}

/// Squares strictly between `s1` and `s2` along a shared ray, plus `s2` itself.
fn walked_between(s1: Square, s2: Square) -> Bitboard {
    let mut expected = s2.bitboard();

    let file_diff = s2.file() as i8 - s1.file() as i8;
    let rank_diff = s2.rank() as i8 - s1.rank() as i8;
    let aligned = s1 != s2
        && (file_diff == 0 || rank_diff == 0 || file_diff.abs() == rank_diff.abs());

    if aligned {
        let (file_step, rank_step) = (file_diff.signum(), rank_diff.signum());
        let mut ray = s1.offset(file_step, rank_step);
        while let Some(square) = ray {
            if square == s2 {
                break;
            }
            expected |= square.bitboard();
            ray = square.offset(file_step, rank_step);
        }
    }

    expected
}

#[test]
fn base_attacks_match_the_file_rank_generator() {
    let attacks = generate_base_attacks();

    for square in Square::iter() {
        assert_eq!(
            attacks[PieceClass::Knight][square],
            leaper_attacks(square, &KNIGHT_OFFSETS),
            "knight attacks from {square} disagree"
        );
        assert_eq!(
            attacks[PieceClass::King][square],
            leaper_attacks(square, &KING_OFFSETS),
            "king attacks from {square} disagree"
        );
        assert_eq!(
            attacks[PieceClass::Bishop][square],
            rider_attacks(square, &BISHOP_DIRECTIONS),
            "bishop attacks from {square} disagree"
        );
        assert_eq!(
            attacks[PieceClass::Rook][square],
            rider_attacks(square, &ROOK_DIRECTIONS),
            "rook attacks from {square} disagree"
        );
        assert_eq!(
            attacks[PieceClass::WhitePawn][square],
            leaper_attacks(square, &[(-1, 1), (1, 1)]),
            "white pawn attacks from {square} disagree"
        );
        assert_eq!(
            attacks[PieceClass::BlackPawn][square],
            leaper_attacks(square, &[(-1, -1), (1, -1)]),
            "black pawn attacks from {square} disagree"
        );
    }
}

#[test]
fn diagonal_masks_match_walked_diagonals() {
    let (diagonals, antidiagonals) = generate_diagonal_masks();

    for square in Square::iter() {
        let diagonal = rider_attacks(square, &[(1, 1), (-1, -1)]) | square.bitboard();
        let antidiagonal = rider_attacks(square, &[(1, -1), (-1, 1)]) | square.bitboard();
        assert_eq!(diagonals[square], diagonal);
        assert_eq!(antidiagonals[square], antidiagonal);
    }
}

use super::{Bitboard, Direction, PieceClass, Square};

/// Attack bitboards for every piece class on every square of an otherwise empty board.
///
/// Rows are indexed by [`PieceClass`], columns by [`Square`].
pub type BaseAttackTable = [[Bitboard; Square::COUNT]; PieceClass::COUNT];

/// One bitboard per ordered pair of squares.
pub type SquarePairTable = [[Bitboard; Square::COUNT]; Square::COUNT];

/// One Chebyshev distance per ordered pair of squares.
pub type DistanceTable = [[u8; Square::COUNT]; Square::COUNT];

/// Index steps for the movement of the Knight.
pub const KNIGHT_STEPS: [i8; 8] = [17, 10, -6, -15, -17, -10, 6, 15];

/// Index steps for the movement of the King.
pub const KING_STEPS: [i8; 8] = [8, 9, 1, -7, -8, -9, -1, 7];

/// Generates the base attack table: for each piece class and square, the set of squares
/// the piece attacks from there on an empty board.
///
/// Knights and Kings step through their fixed offsets with [`Square::step`], which
/// discards both off-board and wrapped destinations. Pawns shift one square diagonally
/// toward their color's promotion rank; a pawn already on its last rank harmlessly
/// attacks nothing useful, and the consumer never asks. Bishops and Rooks cast rays,
/// and the Queen's row is the union of theirs.
///
/// No row ever contains its own origin square.
pub fn generate_base_attacks() -> BaseAttackTable {
    let mut attacks = [[Bitboard::EMPTY_BOARD; Square::COUNT]; PieceClass::COUNT];

    for square in Square::iter() {
        let bb = square.bitboard();

        attacks[PieceClass::WhitePawn][square] = bb.northwest() | bb.northeast();
        attacks[PieceClass::BlackPawn][square] = bb.southwest() | bb.southeast();

        for step in KNIGHT_STEPS {
            attacks[PieceClass::Knight][square] |= square.step(step);
        }

        for step in KING_STEPS {
            attacks[PieceClass::King][square] |= square.step(step);
        }

        attacks[PieceClass::Bishop][square] = cast_rays(bb, &Direction::BISHOP);
        attacks[PieceClass::Rook][square] = cast_rays(bb, &Direction::ROOK);

        // The Queen casts no rays of her own.
        attacks[PieceClass::Queen][square] =
            attacks[PieceClass::Bishop][square] | attacks[PieceClass::Rook][square];
    }

    attacks
}

/// Accumulates every square reachable from `origin` along the provided directions.
///
/// Each ray is walked by repeated single-square shifts and stops when a shift yields
/// the empty board. That happens exactly when the previous square was on the edge in
/// that direction, since the shift itself masks bits that would cross the edge; there
/// is deliberately no separate boundary check for a ray to leak past.
fn cast_rays(origin: Bitboard, directions: &[Direction]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY_BOARD;

    for &direction in directions {
        let mut ray = origin.shifted(direction);
        while ray.is_nonempty() {
            attacks |= ray;
            ray = ray.shifted(direction);
        }
    }

    attacks
}

/// Generates the between table: for each ordered pair `(s1, s2)`, the squares strictly
/// between the two when they share a rank, file, or diagonal, plus `s2` itself.
///
/// The entry always has `s2`'s bit set, even for `s1 == s2` and for unaligned pairs
/// (where it reduces to exactly that one bit). The consumer treats an entry as "squares
/// to block to stop this attack", and the attacker's own square always qualifies. This
/// intentionally differs from [`generate_line`], which leaves unaligned pairs empty.
pub fn generate_between(base: &BaseAttackTable) -> SquarePairTable {
    let bishop = &base[PieceClass::Bishop];
    let rook = &base[PieceClass::Rook];
    let mut between = [[Bitboard::EMPTY_BOARD; Square::COUNT]; Square::COUNT];

    for s1 in Square::iter() {
        let bb1 = s1.bitboard();
        for s2 in Square::iter() {
            let bb2 = s2.bitboard();

            // Two distinct squares share at most one ray, and never one of each kind.
            let mut ray = if bishop[s1].intersects(bb2) {
                bishop[s1] & bishop[s2]
            } else if rook[s1].intersects(bb2) {
                rook[s1] & rook[s2]
            } else {
                Bitboard::EMPTY_BOARD
            };

            // Along any single ray, index order and geometric order coincide, so
            // restricting to the indices between s1 and s2 keeps exactly the
            // intervening squares. The endpoints are never in the intersection.
            let below1 = Bitboard::new(bb1.inner() - 1);
            let below2 = Bitboard::new(bb2.inner() - 1);
            ray &= if s1 < s2 {
                !below1 & below2
            } else {
                below1 & !below2
            };

            between[s1][s2] = ray | bb2;
        }
    }

    between
}

/// Generates the line table: for each ordered pair `(s1, s2)`, the full rank, file, or
/// diagonal through both squares when they are aligned, endpoints included.
///
/// Unaligned pairs stay empty. No fallback bit is set, unlike [`generate_between`];
/// the consumer relies on this asymmetry.
pub fn generate_line(base: &BaseAttackTable) -> SquarePairTable {
    let bishop = &base[PieceClass::Bishop];
    let rook = &base[PieceClass::Rook];
    let mut lines = [[Bitboard::EMPTY_BOARD; Square::COUNT]; Square::COUNT];

    for s1 in Square::iter() {
        let bb1 = s1.bitboard();
        for s2 in Square::iter() {
            let bb2 = s2.bitboard();

            if bishop[s1].intersects(bb2) {
                lines[s1][s2] = (bishop[s1] & bishop[s2]) | bb1 | bb2;
            } else if rook[s1].intersects(bb2) {
                lines[s1][s2] = (rook[s1] & rook[s2]) | bb1 | bb2;
            }
        }
    }

    lines
}

/// Generates the Chebyshev distance between every pair of squares.
pub fn generate_distances() -> DistanceTable {
    let mut distances = [[0; Square::COUNT]; Square::COUNT];

    for s1 in Square::iter() {
        for s2 in Square::iter() {
            distances[s1][s2] = s1.distance(s2);
        }
    }

    distances
}

/// Generates, for every square, the full diagonal and antidiagonal through it.
///
/// A square `(f, r)` lies on the same diagonal as `(file, rank)` when `r - f` matches,
/// and on the same antidiagonal when `r + f` matches. Both masks include the square
/// itself.
pub fn generate_diagonal_masks() -> ([Bitboard; Square::COUNT], [Bitboard; Square::COUNT]) {
    let mut diagonals = [Bitboard::EMPTY_BOARD; Square::COUNT];
    let mut antidiagonals = [Bitboard::EMPTY_BOARD; Square::COUNT];

    for square in Square::iter() {
        let file = square.file() as i8;
        let rank = square.rank() as i8;

        for other in Square::iter() {
            let f = other.file() as i8;
            let r = other.rank() as i8;

            if r - f == rank - file {
                diagonals[square] |= other.bitboard();
            }
            if r + f == rank + file {
                antidiagonals[square] |= other.bitboard();
            }
        }
    }

    (diagonals, antidiagonals)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_knight_attacks_in_the_corner() {
        let attacks = generate_base_attacks();
        assert_eq!(
            attacks[PieceClass::Knight][Square::A1].to_string(),
            ". . . . . . . . \n\
             . . . . . . . . \n\
             . . . . . . . . \n\
             . . . . . . . . \n\
             . . . . . . . . \n\
             . X . . . . . . \n\
             . . X . . . . . \n\
             . . . . . . . . \n"
        );
    }

    #[test]
    fn test_sliding_rays_never_wrap() {
        let attacks = generate_base_attacks();

        // A rook on H4 sees the H file and the fourth rank, and nothing on the A file.
        let rook_h4 = attacks[PieceClass::Rook][Square::H4];
        assert!(!rook_h4.get(Square::A5));
        assert_eq!(
            rook_h4,
            (Bitboard::FILE_H | Bitboard::RANK_4) ^ Square::H4.bitboard()
        );

        // A bishop on A1 sees the main diagonal and nothing else.
        let bishop_a1 = attacks[PieceClass::Bishop][Square::A1];
        assert_eq!(bishop_a1, Bitboard::A1_H8_DIAG ^ Square::A1.bitboard());
    }

    #[test]
    fn test_no_attack_includes_its_origin() {
        let attacks = generate_base_attacks();
        for class in PieceClass::iter() {
            for square in Square::iter() {
                assert!(
                    !attacks[class][square].get(square),
                    "{class:?} on {square} attacks its own square"
                );
            }
        }
    }

    #[test]
    fn test_queen_is_bishop_or_rook() {
        let attacks = generate_base_attacks();
        for square in Square::iter() {
            assert_eq!(
                attacks[PieceClass::Queen][square],
                attacks[PieceClass::Bishop][square] | attacks[PieceClass::Rook][square]
            );
        }
    }

    #[test]
    fn test_knight_attacks_are_l_shaped_and_symmetric() {
        let attacks = generate_base_attacks();
        for square in Square::iter() {
            for target in attacks[PieceClass::Knight][square].iter() {
                let file_diff = (target.file() as i8 - square.file() as i8).unsigned_abs();
                let rank_diff = (target.rank() as i8 - square.rank() as i8).unsigned_abs();
                assert!(
                    matches!((file_diff, rank_diff), (1, 2) | (2, 1)),
                    "{square} -> {target} is not a knight move"
                );
                assert!(attacks[PieceClass::Knight][target].get(square));
            }
            for target in attacks[PieceClass::King][square].iter() {
                assert!(attacks[PieceClass::King][target].get(square));
            }
        }
    }

    #[test]
    fn test_pawn_attacks() {
        let attacks = generate_base_attacks();

        let white_e4 = attacks[PieceClass::WhitePawn][Square::E4];
        assert_eq!(white_e4, Square::D5.bitboard() | Square::F5.bitboard());

        // On the A file only one capture exists.
        let white_a4 = attacks[PieceClass::WhitePawn][Square::A4];
        assert_eq!(white_a4, Square::B5.bitboard());

        let black_e4 = attacks[PieceClass::BlackPawn][Square::E4];
        assert_eq!(black_e4, Square::D3.bitboard() | Square::F3.bitboard());

        // Shifting off the promotion rank yields nothing.
        assert!(attacks[PieceClass::WhitePawn][Square::E8].is_empty());
        assert!(attacks[PieceClass::BlackPawn][Square::E1].is_empty());
    }

    #[test]
    fn test_diagonal_masks_cross_at_the_square() {
        let (diagonals, antidiagonals) = generate_diagonal_masks();
        for square in Square::iter() {
            assert!(diagonals[square].get(square));
            assert!(antidiagonals[square].get(square));
            assert_eq!(diagonals[square] & antidiagonals[square], square.bitboard());
        }
        assert_eq!(diagonals[Square::A1], Bitboard::A1_H8_DIAG);
        assert_eq!(antidiagonals[Square::H1], Bitboard::H1_A8_DIAG);
    }
}

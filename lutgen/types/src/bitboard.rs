use std::{fmt, ops::Not};

use anyhow::{anyhow, Result};

use super::Square;

/// A [`Bitboard`] represents a set of squares as a 64-bit binary number.
///
/// Bit index 0 is the least-significant bit (LSB = 2^0)
/// Bit index 63 is the most-significant bit (MSB = 2^63)
///
/// The internal encoding uses [Little-Endian Rank-File Mapping (LERF)](https://www.chessprogramming.org/Square_Mapping_Considerations#Little-Endian_Rank-File_Mapping),
/// so a bitboard of the first Rank would look like this in binary:
/// ```text
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 00000000
/// 11111111
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) u64);

impl Bitboard {
    pub const FILE_A: Self = Self(0x0101010101010101);
    pub const FILE_B: Self = Self(0x0202020202020202);
    pub const FILE_C: Self = Self(0x0404040404040404);
    pub const FILE_D: Self = Self(0x0808080808080808);
    pub const FILE_E: Self = Self(0x1010101010101010);
    pub const FILE_F: Self = Self(0x2020202020202020);
    pub const FILE_G: Self = Self(0x4040404040404040);
    pub const FILE_H: Self = Self(0x8080808080808080);
    pub const NOT_FILE_A: Self = Self(0xfefefefefefefefe);
    pub const NOT_FILE_H: Self = Self(0x7f7f7f7f7f7f7f7f);
    pub const RANK_1: Self = Self(0x00000000000000FF);
    pub const RANK_2: Self = Self(0x000000000000FF00);
    pub const RANK_3: Self = Self(0x0000000000FF0000);
    pub const RANK_4: Self = Self(0x00000000FF000000);
    pub const RANK_5: Self = Self(0x000000FF00000000);
    pub const RANK_6: Self = Self(0x0000FF0000000000);
    pub const RANK_7: Self = Self(0x00FF000000000000);
    pub const RANK_8: Self = Self(0xFF00000000000000);
    pub const A1_H8_DIAG: Self = Self(0x8040201008040201);
    pub const H1_A8_DIAG: Self = Self(0x0102040810204080);
    pub const EMPTY_BOARD: Self = Self(0x0000000000000000);
    pub const FULL_BOARD: Self = Self(0xFFFFFFFFFFFFFFFF);

    /// Constructs a new [`Bitboard`] from the provided bit pattern.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// let board = Bitboard::new(255);
    /// assert_eq!(board, Bitboard::RANK_1);
    /// ```
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Constructs a new [`Bitboard`] with only the bit of the provided [`Square`] set.
    ///
    /// # Example
    /// ```
    /// # use types::{Bitboard, Square};
    /// let board = Bitboard::from_square(Square::H8);
    /// assert_eq!(board.inner(), 0x8000000000000000);
    /// ```
    pub const fn from_square(square: Square) -> Self {
        Self(1 << square.index())
    }

    /// Constructs a new [`Bitboard`] from the provided string of binary or hexadecimal
    /// digits, optionally prefixed with `0b` or `0x`.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// let board = Bitboard::from_str("0x00FF000000000000").unwrap();
    /// assert_eq!(board, Bitboard::RANK_7);
    /// ```
    pub fn from_str(bits: &str) -> Result<Self> {
        let bits = bits.to_lowercase();

        if bits.len() == 64 || bits.len() == 66 {
            let bits = bits.trim_start_matches("0b");
            u64::from_str_radix(bits, 2)
                .map(Self)
                .map_err(|_| anyhow!("Invalid Bitboard string: Expected binary digits, got {bits}"))
        } else if bits.len() == 16 || bits.len() == 18 {
            let bits = bits.trim_start_matches("0x");
            u64::from_str_radix(bits, 16).map(Self).map_err(|_| {
                anyhow!("Invalid Bitboard string: Expected hexadecimal digits, got {bits}")
            })
        } else {
            Err(anyhow!(
                "Invalid Bitboard string: Invalid length {}. Length must be either 64 (binary) or 16 (hexadecimal)",
                bits.len()
            ))
        }
    }

    /// Returns the inner `u64` of this [`Bitboard`].
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Checks if this [`Bitboard`] is empty, or all zeros.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// assert!(Bitboard::EMPTY_BOARD.is_empty());
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Checks if this [`Bitboard`] contains at least one set bit.
    pub const fn is_nonempty(&self) -> bool {
        self.0 != 0
    }

    /// Checks if this [`Bitboard`] shares any set bits with `other`.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// assert!(Bitboard::RANK_1.intersects(Bitboard::FILE_A));
    /// assert!(!Bitboard::RANK_1.intersects(Bitboard::RANK_5));
    /// ```
    pub const fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Gets the value of the bit corresponding to the provided [`Square`].
    ///
    /// # Example
    /// ```
    /// # use types::{Bitboard, Square};
    /// assert!(Bitboard::FILE_A.get(Square::A3));
    /// ```
    pub const fn get(&self, square: Square) -> bool {
        self.0 & (1 << square.index()) != 0
    }

    /// Sets the bit corresponding to the provided [`Square`] to `1` (on).
    pub fn set(&mut self, square: Square) {
        self.0 |= 1 << square.index();
    }

    /// Yields the total number of set bits in this [`Bitboard`].
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// assert_eq!(Bitboard::RANK_1.population(), 8);
    /// ```
    pub const fn population(&self) -> u32 {
        self.0.count_ones()
    }

    /// Shifts this [`Bitboard`] by one rank up.
    ///
    /// Bits on the final rank (8) are discarded by the fixed-width shift.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// assert_eq!(Bitboard::RANK_4.north(), Bitboard::RANK_5);
    /// assert_eq!(Bitboard::RANK_8.north(), Bitboard::EMPTY_BOARD);
    /// ```
    pub const fn north(self) -> Self {
        Self(self.0 << 8)
    }

    /// Shifts this [`Bitboard`] by one rank down.
    ///
    /// Bits on the first rank (1) are discarded by the fixed-width shift.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// assert_eq!(Bitboard::RANK_4.south(), Bitboard::RANK_3);
    /// assert_eq!(Bitboard::RANK_1.south(), Bitboard::EMPTY_BOARD);
    /// ```
    pub const fn south(self) -> Self {
        Self(self.0 >> 8)
    }

    /// Shifts this [`Bitboard`] by one file up.
    ///
    /// Bits on the H file are masked out before the shift, so they vanish rather than
    /// wrapping onto the A file of the next rank.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// assert_eq!(Bitboard::FILE_C.east(), Bitboard::FILE_D);
    /// assert_eq!(Bitboard::FILE_H.east(), Bitboard::EMPTY_BOARD);
    /// ```
    pub const fn east(self) -> Self {
        // Pre-shift mask
        Self((self.0 & Self::NOT_FILE_H.0) << 1)
    }

    /// Shifts this [`Bitboard`] by one file down.
    ///
    /// Bits on the A file are masked out before the shift, so they vanish rather than
    /// wrapping onto the H file of the previous rank.
    ///
    /// # Example
    /// ```
    /// # use types::Bitboard;
    /// assert_eq!(Bitboard::FILE_C.west(), Bitboard::FILE_B);
    /// assert_eq!(Bitboard::FILE_A.west(), Bitboard::EMPTY_BOARD);
    /// ```
    pub const fn west(self) -> Self {
        // Pre-shift mask
        Self((self.0 & Self::NOT_FILE_A.0) >> 1)
    }

    /// Combination of [`Bitboard::north`] and [`Bitboard::east`], in a single shift.
    pub const fn northeast(self) -> Self {
        // Pre-shift mask
        Self((self.0 & Self::NOT_FILE_H.0) << 9)
    }

    /// Combination of [`Bitboard::south`] and [`Bitboard::east`], in a single shift.
    pub const fn southeast(self) -> Self {
        // Pre-shift mask
        Self((self.0 & Self::NOT_FILE_H.0) >> 7)
    }

    /// Combination of [`Bitboard::north`] and [`Bitboard::west`], in a single shift.
    pub const fn northwest(self) -> Self {
        // Pre-shift mask
        Self((self.0 & Self::NOT_FILE_A.0) << 7)
    }

    /// Combination of [`Bitboard::south`] and [`Bitboard::west`], in a single shift.
    pub const fn southwest(self) -> Self {
        // Pre-shift mask
        Self((self.0 & Self::NOT_FILE_A.0) >> 9)
    }

    /// Shifts this [`Bitboard`] one step in the provided [`Direction`].
    ///
    /// Bits that cross the board edge in that direction are discarded, so a ray walked
    /// by repeated shifts terminates with an empty board exactly when it steps off the
    /// edge.
    ///
    /// # Example
    /// ```
    /// # use types::{Bitboard, Direction, Square};
    /// let g7 = Square::G7.bitboard();
    /// let h8 = g7.shifted(Direction::Northeast);
    /// assert_eq!(h8, Square::H8.bitboard());
    /// assert!(h8.shifted(Direction::Northeast).is_empty());
    /// ```
    pub const fn shifted(self, direction: Direction) -> Self {
        match direction {
            Direction::North => self.north(),
            Direction::South => self.south(),
            Direction::East => self.east(),
            Direction::West => self.west(),
            Direction::Northeast => self.northeast(),
            Direction::Northwest => self.northwest(),
            Direction::Southeast => self.southeast(),
            Direction::Southwest => self.southwest(),
        }
    }

    /// Returns an iterator over the set bits of this [`Bitboard`], as [`Square`]s,
    /// from lowest index to highest.
    pub const fn iter(&self) -> BitboardIter {
        BitboardIter { bb: *self }
    }
}

/// One of the eight directions a single square can be shifted in, encoded as the
/// board-index delta the shift moves each bit by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Direction {
    North = 8,
    South = -8,
    East = 1,
    West = -1,
    Northeast = 9,
    Northwest = 7,
    Southeast = -7,
    Southwest = -9,
}

impl Direction {
    /// The four directions a Rook slides in.
    pub const ROOK: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four directions a Bishop slides in.
    pub const BISHOP: [Self; 4] = [
        Self::Northeast,
        Self::Southeast,
        Self::Southwest,
        Self::Northwest,
    ];

    /// The board-index delta of this [`Direction`].
    ///
    /// # Example
    /// ```
    /// # use types::Direction;
    /// assert_eq!(Direction::Northwest.delta(), 7);
    /// assert_eq!(Direction::Southwest.delta(), -9);
    /// ```
    pub const fn delta(&self) -> i8 {
        *self as i8
    }
}

macro_rules! impl_bitwise_op {
    // Impl op and op_assign for Self
    ($op:tt, $op_assign:tt, $func:ident, $func_assign:ident, $op_tok:tt) => {
        impl std::ops::$op for Bitboard {
            type Output = Self;
            fn $func(self, rhs: Self) -> Self::Output {
                Self(self.0 $op_tok rhs.0)
            }
        }

        impl std::ops::$op_assign for Bitboard {
            fn $func_assign(&mut self, rhs: Self) {
                *self = *self $op_tok rhs;
            }
        }
    };
}

impl_bitwise_op!(BitAnd, BitAndAssign, bitand, bitand_assign, &);
impl_bitwise_op!(BitOr, BitOrAssign, bitor, bitor_assign, |);
impl_bitwise_op!(BitXor, BitXorAssign, bitxor, bitxor_assign, ^);

impl Not for Bitboard {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl From<Square> for Bitboard {
    fn from(value: Square) -> Self {
        Self::from_square(value)
    }
}

impl From<u64> for Bitboard {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::LowerHex for Bitboard {
    /// Formats this [`Bitboard`] as a 16-character lowercase hexadecimal string,
    /// including the `0x` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0>16x}", self.0)
    }
}

impl fmt::UpperHex for Bitboard {
    /// Formats this [`Bitboard`] as a 16-character uppercase hexadecimal string,
    /// including the `0X` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0X{:0>16X}", self.0)
    }
}

impl fmt::Display for Bitboard {
    /// Formats this [`Bitboard`] as an `8x8` grid of `X` and `.`, with rank 8 on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Allocate just enough capacity
        let mut board = String::with_capacity(136);

        for rank in (0..8).rev() {
            for file in 0..8 {
                let square = Square::new(file, rank);
                let occupant = if self.get(square) { 'X' } else { '.' };

                board += &format!("{occupant} ");
            }
            board += "\n";
        }

        write!(f, "{board}")
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}\nHex: {self:x}")
    }
}

pub struct BitboardIter {
    bb: Bitboard,
}

impl Iterator for BitboardIter {
    type Item = Square;
    fn next(&mut self) -> Option<Self::Item> {
        if self.bb.is_empty() {
            None
        } else {
            let next = Square::from_index_unchecked(self.bb.0.trailing_zeros() as usize);
            self.bb.0 &= self.bb.0.wrapping_sub(1);
            Some(next)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bb.population() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter { bb: self }
    }
}

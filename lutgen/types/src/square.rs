use std::{
    fmt,
    ops::{Index, IndexMut},
};

use anyhow::{bail, Result};

use super::Bitboard;

/// Represents a single square on an `8x8` chess board.
///
/// Internally encoded using the following bit pattern:
/// ```text
///     00 000 000
///      |  |   |
///      |  |   +- Represents the File.
///      |  +- Represents the Rank.
///      +- Unused.
/// ```
///
/// This is [Least Significant File Mapping](https://www.chessprogramming.org/Square_Mapping_Considerations#Deduction_on_Files_and_Ranks),
/// so `square = file + rank * 8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Square(pub(crate) u8);

impl Square {
    pub const A1: Self = Self::new(0, 0);
    pub const B1: Self = Self::new(1, 0);
    pub const C1: Self = Self::new(2, 0);
    pub const D1: Self = Self::new(3, 0);
    pub const E1: Self = Self::new(4, 0);
    pub const F1: Self = Self::new(5, 0);
    pub const G1: Self = Self::new(6, 0);
    pub const H1: Self = Self::new(7, 0);

    pub const A2: Self = Self::new(0, 1);
    pub const B2: Self = Self::new(1, 1);
    pub const C2: Self = Self::new(2, 1);
    pub const D2: Self = Self::new(3, 1);
    pub const E2: Self = Self::new(4, 1);
    pub const F2: Self = Self::new(5, 1);
    pub const G2: Self = Self::new(6, 1);
    pub const H2: Self = Self::new(7, 1);

    pub const A3: Self = Self::new(0, 2);
    pub const B3: Self = Self::new(1, 2);
    pub const C3: Self = Self::new(2, 2);
    pub const D3: Self = Self::new(3, 2);
    pub const E3: Self = Self::new(4, 2);
    pub const F3: Self = Self::new(5, 2);
    pub const G3: Self = Self::new(6, 2);
    pub const H3: Self = Self::new(7, 2);

    pub const A4: Self = Self::new(0, 3);
    pub const B4: Self = Self::new(1, 3);
    pub const C4: Self = Self::new(2, 3);
    pub const D4: Self = Self::new(3, 3);
    pub const E4: Self = Self::new(4, 3);
    pub const F4: Self = Self::new(5, 3);
    pub const G4: Self = Self::new(6, 3);
    pub const H4: Self = Self::new(7, 3);

    pub const A5: Self = Self::new(0, 4);
    pub const B5: Self = Self::new(1, 4);
    pub const C5: Self = Self::new(2, 4);
    pub const D5: Self = Self::new(3, 4);
    pub const E5: Self = Self::new(4, 4);
    pub const F5: Self = Self::new(5, 4);
    pub const G5: Self = Self::new(6, 4);
    pub const H5: Self = Self::new(7, 4);

    pub const A6: Self = Self::new(0, 5);
    pub const B6: Self = Self::new(1, 5);
    pub const C6: Self = Self::new(2, 5);
    pub const D6: Self = Self::new(3, 5);
    pub const E6: Self = Self::new(4, 5);
    pub const F6: Self = Self::new(5, 5);
    pub const G6: Self = Self::new(6, 5);
    pub const H6: Self = Self::new(7, 5);

    pub const A7: Self = Self::new(0, 6);
    pub const B7: Self = Self::new(1, 6);
    pub const C7: Self = Self::new(2, 6);
    pub const D7: Self = Self::new(3, 6);
    pub const E7: Self = Self::new(4, 6);
    pub const F7: Self = Self::new(5, 6);
    pub const G7: Self = Self::new(6, 6);
    pub const H7: Self = Self::new(7, 6);

    pub const A8: Self = Self::new(0, 7);
    pub const B8: Self = Self::new(1, 7);
    pub const C8: Self = Self::new(2, 7);
    pub const D8: Self = Self::new(3, 7);
    pub const E8: Self = Self::new(4, 7);
    pub const F8: Self = Self::new(5, 7);
    pub const G8: Self = Self::new(6, 7);
    pub const H8: Self = Self::new(7, 7);

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 63;
    pub const COUNT: usize = 64;

    const FILE_MASK: u8 = 0b0000_0111;

    /// Returns an iterator over all available squares, from A1 (0) to H8 (63).
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.len(), 64);
    /// assert_eq!(iter.next().unwrap(), Square::A1);
    /// assert_eq!(iter.last().unwrap(), Square::H8);
    /// ```
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// Creates a new [`Square`] from the provided file and rank, both in `[0, 7]`.
    ///
    /// # Panics
    /// If `file > 7` or `rank > 7` with debug assertions enabled.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::new(2, 3), Square::C4);
    /// ```
    pub const fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file <= 7 && rank <= 7, "File and Rank must be between [0,8)");
        Self(file + rank * 8)
    }

    /// Creates a new [`Square`] from the provided index, if it is within `[0, 63]`.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::from_index(14).unwrap(), Square::G2);
    /// assert!(Square::from_index(64).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self> {
        if index > Self::MAX as usize {
            bail!("Invalid index for Square: Index must be between [0,64). Got {index}.");
        }
        Ok(Self::from_index_unchecked(index))
    }

    /// Creates a new [`Square`] from the provided index, ignoring safety checks.
    ///
    /// # Panics
    /// If `index > 63` with debug assertions enabled.
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Index must be between [0,64)");
        Self(index as u8)
    }

    /// Returns the inner `u8` of this [`Square`].
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Returns the index of this [`Square`], for indexing into lookup tables.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the file of this [`Square`], in `[0, 7]` where `0` is the A file.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::C4.file(), 2);
    /// ```
    pub const fn file(&self) -> u8 {
        self.0 & Self::FILE_MASK
    }

    /// Returns the rank of this [`Square`], in `[0, 7]` where `0` is the first rank.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::C4.rank(), 3);
    /// ```
    pub const fn rank(&self) -> u8 {
        self.0 >> 3
    }

    /// Returns a [`Bitboard`] with only this [`Square`]'s bit set.
    pub const fn bitboard(&self) -> Bitboard {
        Bitboard::from_square(*self)
    }

    /// Computes the [Chebyshev distance](https://www.chessprogramming.org/Distance#Chebyshev_Distance)
    /// between `self` and `other`: the maximum of the absolute file and rank differences.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::C4.distance(Square::C1), 3);
    /// assert_eq!(Square::A1.distance(Square::H8), 7);
    /// assert_eq!(Square::D6.distance(Square::D6), 0);
    /// ```
    pub const fn distance(&self, other: Self) -> u8 {
        let file_diff = (self.file() as i8 - other.file() as i8).unsigned_abs();
        let rank_diff = (self.rank() as i8 - other.rank() as i8).unsigned_abs();
        if file_diff > rank_diff {
            file_diff
        } else {
            rank_diff
        }
    }

    /// Steps this [`Square`] by `delta` board indices, yielding the singleton [`Bitboard`]
    /// of the destination, or an empty board if the step leaves the board.
    ///
    /// A destination index within `[0, 63]` is not enough: adding a knight offset such as
    /// `17` to a square on the H file lands on a "valid" index on the A file of a higher
    /// rank. So the destination must also stay within two files and two ranks of the
    /// source, which rules out every wrapped index that a knight or king offset can reach.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::A1.step(17), Square::B3.bitboard());
    /// // Off the bottom of the board.
    /// assert!(Square::A1.step(-17).is_empty());
    /// // Index 48 is in range, but it is A7: wrapped around the H file.
    /// assert!(Square::H4.step(17).is_empty());
    /// ```
    pub const fn step(&self, delta: i8) -> Bitboard {
        let destination = self.0 as i8 + delta;
        if destination < Self::MIN as i8 || destination > Self::MAX as i8 {
            return Bitboard::EMPTY_BOARD;
        }

        let destination = Self(destination as u8);
        let file_diff = (destination.file() as i8 - self.file() as i8).unsigned_abs();
        let rank_diff = (destination.rank() as i8 - self.rank() as i8).unsigned_abs();

        if file_diff <= 2 && rank_diff <= 2 {
            destination.bitboard()
        } else {
            Bitboard::EMPTY_BOARD
        }
    }

    /// Attempts to offset this [`Square`] by the file and rank offsets.
    ///
    /// Returns [`None`] if the result would leave the board.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::C4.offset(1, 1), Some(Square::D5));
    /// assert_eq!(Square::C4.offset(-1, -1), Some(Square::B3));
    /// assert_eq!(Square::A1.offset(-1, -1), None);
    /// ```
    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;

        ((0..8).contains(&file) && (0..8).contains(&rank))
            .then(|| Self::new(file as u8, rank as u8))
    }
}

impl<T> Index<Square> for [T; Square::COUNT] {
    type Output = T;
    fn index(&self, index: Square) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<Square> for [T; Square::COUNT] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl fmt::Display for Square {
    /// Formats this [`Square`] in algebraic notation.
    ///
    /// # Example
    /// ```
    /// # use types::Square;
    /// assert_eq!(Square::G2.to_string(), "g2");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} ({})", self.0)
    }
}

use std::ops::{Index, IndexMut};

use anyhow::{bail, Result};

/// Represents the class of a piece for the purpose of indexing attack tables.
///
/// The two pawn classes exist because pawns are the only piece whose attacks depend on
/// color. Discriminant order matches the row order of the emitted base attack table,
/// so a [`PieceClass`] is usable directly as a row index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceClass {
    WhitePawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    BlackPawn,
}

impl PieceClass {
    /// Number of piece class variants.
    pub const COUNT: usize = 7;

    /// An array of all piece classes, in table row order.
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::WhitePawn,
            Self::Knight,
            Self::Bishop,
            Self::Rook,
            Self::Queen,
            Self::King,
            Self::BlackPawn,
        ]
    }

    /// An iterator over all piece classes, in table row order.
    pub fn iter() -> impl ExactSizeIterator<Item = Self> {
        Self::all().into_iter()
    }

    /// Creates a new [`PieceClass`] from a table row index.
    ///
    /// # Example
    /// ```
    /// # use types::PieceClass;
    /// assert_eq!(PieceClass::from_index(4).unwrap(), PieceClass::Queen);
    /// assert!(PieceClass::from_index(7).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= Self::COUNT {
            bail!("Invalid index for PieceClass: Index must be between [0,7). Got {index}.");
        }
        Ok(Self::from_index_unchecked(index))
    }

    /// Creates a new [`PieceClass`] from a table row index, ignoring safety checks.
    ///
    /// # Panics
    /// If `index > 6` with debug assertions enabled.
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Index must be between [0,7)");

        // Safety: Since `PieceClass` is a `repr(u8)` enum, we can cast safely here.
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Returns the table row index of this [`PieceClass`].
    ///
    /// # Example
    /// ```
    /// # use types::PieceClass;
    /// assert_eq!(PieceClass::WhitePawn.index(), 0);
    /// assert_eq!(PieceClass::BlackPawn.index(), 6);
    /// ```
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the identifier this [`PieceClass`] is named by in emitted tables.
    ///
    /// # Example
    /// ```
    /// # use types::PieceClass;
    /// assert_eq!(PieceClass::Knight.table_name(), "PIECE_TYPE_KNIGHT");
    /// ```
    pub const fn table_name(&self) -> &'static str {
        match self {
            Self::WhitePawn => "PIECE_TYPE_WHITE_PAWN",
            Self::Knight => "PIECE_TYPE_KNIGHT",
            Self::Bishop => "PIECE_TYPE_BISHOP",
            Self::Rook => "PIECE_TYPE_ROOK",
            Self::Queen => "PIECE_TYPE_QUEEN",
            Self::King => "PIECE_TYPE_KING",
            Self::BlackPawn => "PIECE_TYPE_BLACK_PAWN",
        }
    }
}

impl<T> Index<PieceClass> for [T; PieceClass::COUNT] {
    type Output = T;
    fn index(&self, index: PieceClass) -> &Self::Output {
        &self[index.index()]
    }
}

impl<T> IndexMut<PieceClass> for [T; PieceClass::COUNT] {
    fn index_mut(&mut self, index: PieceClass) -> &mut Self::Output {
        &mut self[index.index()]
    }
}

impl std::fmt::Debug for PieceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, class) in PieceClass::iter().enumerate() {
            assert_eq!(class.index(), i);
            assert_eq!(PieceClass::from_index(i).unwrap(), class);
        }
    }
}

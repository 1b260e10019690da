/// All things related to Bitboards, including directional shifts.
pub mod bitboard;
/// The closed set of piece classes used to index attack tables.
pub mod piece;
/// Squares on a chessboard, plus offset stepping and distances.
pub mod square;

pub use bitboard::*;
pub use piece::*;
pub use square::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::bitboard::*;
    pub use crate::piece::*;
    pub use crate::square::*;
}

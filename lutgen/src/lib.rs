pub use types::*;

/// Serialization of finished tables into constant-array source text.
pub mod emit;
/// Generators for the attack, between, line, distance, and diagonal lookup tables.
pub mod tables;

pub use emit::*;
pub use tables::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::emit::*;
    pub use crate::tables::*;
    pub use types::prelude::*;
}

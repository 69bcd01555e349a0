//! Error types surfaced by the structure builders.

use thiserror::Error;

/// Errors produced while assembling or writing structure files.
///
/// Bad inputs are rejected at the call that receives them and nothing is
/// retried; file and codec failures pass through unchanged.
#[derive(Debug, Error)]
pub enum StructureError {
    /// An interaction mode spelling other than `TAKE` or `DEPOSIT`.
    #[error("mode must be TAKE or DEPOSIT, got {0:?}")]
    InvalidMode(String),
    /// A coordinate slice that does not hold exactly three components.
    #[error("expected a coordinate triple, got {0} components")]
    InvalidTriple(usize),
    /// File creation or write failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Failure inside the NBT codec.
    #[error("nbt codec error: {0}")]
    Nbt(#[from] quartz_nbt::io::NbtIoError),
}

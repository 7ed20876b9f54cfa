use thiserror::Error;

/// Result type used throughout the crate.
pub type RngResult<T> = Result<T, RngError>;

/// Faults raised by the generator.
///
/// The iterated map is only defined on finite positive values, so a bad seed
/// or a degenerate orbit is reported here instead of poisoning every later
/// draw with non-finite values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RngError {
    #[error("seed collapses the generator state to zero")]
    ZeroSeed,

    #[error("generator state diverged to a non-finite value")]
    Diverged,

    #[error("drawn code point {0:#06x} is not a valid char")]
    InvalidChar(u32),
}

mod error;
mod rng;
mod series;

#[cfg(feature = "rand")]
mod rand;

pub use error::*;
pub use rng::*;
pub use series::*;

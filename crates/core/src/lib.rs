pub mod error;
pub mod quantity;
pub mod sample;

pub use error::{BattError, Result};
pub use quantity::QuantitySource;
pub use sample::{DerivedSample, Reading, RawSample, RemainingTime};

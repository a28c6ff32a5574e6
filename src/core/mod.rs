//! Balance constants, shared formulas and the engine error type.

pub mod balance;
pub mod constants;
pub mod error;

pub use error::{EngineError, EngineResult};

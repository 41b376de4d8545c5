//! Boundary errors.
//!
//! The scoring core is a total function over valid enums and never fails;
//! the only failure mode is unparseable caller input, rejected here before
//! classification begins.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown solar sign: '{0}'")]
    InvalidSolarSign(String),

    #[error("unknown lunar animal: '{0}'")]
    InvalidLunarAnimal(String),
}

//! Dual-Zodiac Match Scorer
//!
//! Deterministic compatibility scoring between two people, each described
//! by a solar sign, a lunar animal, and a birth year. The engine fuses the
//! two taxonomies into a single 0-100 score plus one of seven ordered
//! tiers:
//! - `classify/`: pure classifiers (solar aspect, lunar pattern, Wu Xing)
//! - `scoring/`: score compositor and tier calibrator
//! - `explanation/`: rationale text and star ratings
//! - `overrides`: externally-owned sparse score/text override layer
//!
//! The whole pipeline is a pure function of its inputs: sub-microsecond
//! table lookups and arithmetic, no I/O, safe to call from any number of
//! threads without locking.

pub mod classify;
pub mod context;
pub mod derive;
pub mod error;
pub mod explanation;
pub mod overrides;
pub mod scorer;
pub mod scoring;
pub mod signs;
pub mod tables;

mod api_server;

// Re-export commonly used types
pub use context::{MatchContext, Profile};
pub use error::EngineError;
pub use scorer::{MatchResult, MatchScorer, MatrixCell};
pub use scoring::{MatchTier, ScoringConfig};
pub use signs::{Element, FiveElement, LunarAnimal, SolarSign, Trine};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};

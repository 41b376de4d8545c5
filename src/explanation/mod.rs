//! Human-readable result layers.
//!
//! Static pattern metadata, the east/west rationale builders, and the
//! chemistry/stability star mapper. Nothing here feeds back into scoring;
//! these modules only read the context and the calibrated score.

pub mod meta;
pub mod rationale;
pub mod stars;

pub use meta::{pattern_meta, PatternMeta};
pub use rationale::{east_rationale, west_rationale};
pub use stars::{star_ratings, StarRatings};

//! Score composition and tier calibration.
//!
//! `compositor` blends the two base scores under pattern-dependent weights
//! and applies the Wu Xing delta, the neutral-east correction, and the
//! same-solar-sign rule; `calibrator` maps the raw composite to a tier and
//! re-clamps it into the tier-legal band. `config` carries the externally
//! tunable rule values.

pub mod calibrator;
pub mod compositor;
pub mod config;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use calibrator::{assign_tier, calibrate_score};
pub use compositor::{base_chinese_score, base_western_score, raw_composite};
pub use config::{BlendWeights, SameSignRule, ScoringConfig};

/// The seven ordered compatibility tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchTier {
    Soulmate,
    TwinFlame,
    HarmoniousMatch,
    DynamicMatch,
    OppositesAttract,
    NeutralMatch,
    DifficultMatch,
}

impl MatchTier {
    pub const ALL: [MatchTier; 7] = [
        MatchTier::Soulmate,
        MatchTier::TwinFlame,
        MatchTier::HarmoniousMatch,
        MatchTier::DynamicMatch,
        MatchTier::OppositesAttract,
        MatchTier::NeutralMatch,
        MatchTier::DifficultMatch,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Soulmate => "Soulmate",
            MatchTier::TwinFlame => "Twin Flame",
            MatchTier::HarmoniousMatch => "Harmonious Match",
            MatchTier::DynamicMatch => "Dynamic Match",
            MatchTier::OppositesAttract => "Opposites Attract",
            MatchTier::NeutralMatch => "Neutral Match",
            MatchTier::DifficultMatch => "Difficult Match",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

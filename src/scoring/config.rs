//! Externally tunable scoring rules.
//!
//! Defaults carry the canonical rule values; deployments can load a JSON
//! override file instead of recompiling when product tuning changes the
//! same-sign penalties or blend weights.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// East/West blend weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlendWeights {
    pub chinese: f64,
    pub western: f64,
}

impl BlendWeights {
    pub fn sum(&self) -> f64 {
        self.chinese + self.western
    }
}

/// Same-solar-sign penalty and cap rule.
///
/// Applied even when an override score is present: the penalty hits the raw
/// score before tiering, and the cap binds again after band re-clamping.
/// Same-animal pairs are exempt from the lower caps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SameSignRule {
    pub enabled: bool,
    pub delta_default: f64,
    pub delta_same_trine: f64,
    pub delta_same_animal: f64,
    pub cap_default: u8,
    pub cap_same_trine: u8,
    pub cap_same_animal: u8,
}

impl Default for SameSignRule {
    fn default() -> Self {
        Self {
            enabled: true,
            delta_default: -4.0,
            delta_same_trine: -6.0,
            delta_same_animal: -9.0,
            cap_default: 94,
            cap_same_trine: 84,
            cap_same_animal: 100,
        }
    }
}

/// Complete scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Blend for strong patterns (San He, Liu He, same sign, and all four
    /// damage patterns).
    pub strong_weights: BlendWeights,
    /// Blend for weak/neutral patterns (same trine, cross trine).
    pub neutral_weights: BlendWeights,
    /// Spark bonus for the external lively-pair chart flag.
    pub lively_pair_bonus: f64,
    pub same_sign_rule: SameSignRule,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            strong_weights: BlendWeights {
                chinese: 0.70,
                western: 0.30,
            },
            neutral_weights: BlendWeights {
                chinese: 0.65,
                western: 0.35,
            },
            lively_pair_bonus: 3.0,
            same_sign_rule: SameSignRule::default(),
        }
    }
}

impl ScoringConfig {
    /// Load a configuration override from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config {:?}", path))?;
        let config: ScoringConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse scoring config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weight tables that do not sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        for (name, weights) in [
            ("strong_weights", &self.strong_weights),
            ("neutral_weights", &self.neutral_weights),
        ] {
            if (weights.sum() - 1.0).abs() > 1e-9 {
                anyhow::bail!(
                    "{} must sum to 1.0, got {} + {}",
                    name,
                    weights.chinese,
                    weights.western
                );
            }
        }
        Ok(())
    }
}

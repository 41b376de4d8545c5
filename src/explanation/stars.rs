//! Chemistry and stability star ratings.
//!
//! Maps (pattern, calibrated score) to a base star pair, then adjusts for
//! the solar aspect: soft aspects lift both axes, hard aspects and
//! opposition trade stability for chemistry. Damage patterns are capped so
//! they can never display as effortless. Values land on 0.5 steps.

use serde::{Deserialize, Serialize};

use crate::classify::{Aspect, LunarPattern};
use crate::context::MatchContext;

/// Star pair, 0-5 in 0.5 increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarRatings {
    pub chemistry: f32,
    pub stability: f32,
}

fn base_stars(pattern: LunarPattern, score: f64) -> StarRatings {
    let (chemistry, stability) = match pattern {
        LunarPattern::TrineHarmony => {
            if score >= 90.0 {
                (4.5, 5.0)
            } else if score >= 82.0 {
                (4.0, 4.5)
            } else {
                (3.5, 4.0)
            }
        }
        LunarPattern::SecretFriend => {
            if score >= 86.0 {
                (4.5, 4.5)
            } else if score >= 78.0 {
                (4.0, 4.0)
            } else {
                (3.5, 3.5)
            }
        }
        LunarPattern::SameSign | LunarPattern::SameSignSelfPunish => {
            if score >= 80.0 {
                (4.0, 3.5)
            } else if score >= 72.0 {
                (3.5, 3.0)
            } else {
                (3.0, 2.5)
            }
        }
        LunarPattern::SameTrine => {
            if score >= 80.0 {
                (4.0, 4.0)
            } else if score >= 70.0 {
                (3.5, 3.5)
            } else {
                (3.0, 3.0)
            }
        }
        LunarPattern::CrossTrine => {
            if score >= 68.0 {
                (3.5, 3.0)
            } else if score >= 58.0 {
                (3.0, 2.5)
            } else {
                (2.5, 2.0)
            }
        }
        LunarPattern::Clash => {
            if score >= 60.0 {
                (4.0, 2.5)
            } else if score >= 48.0 {
                (3.0, 2.0)
            } else {
                (2.5, 1.5)
            }
        }
        LunarPattern::Harm => {
            if score >= 58.0 {
                (3.5, 2.5)
            } else if score >= 45.0 {
                (3.0, 2.0)
            } else {
                (2.5, 1.5)
            }
        }
        LunarPattern::Punishment | LunarPattern::Break => {
            if score >= 55.0 {
                (3.0, 2.0)
            } else if score >= 44.0 {
                (2.5, 1.5)
            } else {
                (2.0, 1.0)
            }
        }
    };
    StarRatings {
        chemistry,
        stability,
    }
}

fn round_half(x: f32) -> f32 {
    (x * 2.0).round() / 2.0
}

/// Final star ratings for a scored match.
pub fn star_ratings(ctx: &MatchContext, score: u8) -> StarRatings {
    let base = base_stars(ctx.pattern, f64::from(score));
    let mut chemistry = base.chemistry;
    let mut stability = base.stability;

    let damage_pattern = ctx.pattern.is_difficult();

    match ctx.aspect {
        Aspect::Trine | Aspect::Sextile => {
            chemistry += 0.5;
            // Soft aspects do not make a damage pattern stable.
            if !damage_pattern {
                stability += 0.5;
            }
        }
        Aspect::Square | Aspect::Opposition => {
            chemistry += 0.5;
            stability -= 0.5;
        }
        Aspect::SameSign | Aspect::Quincunx | Aspect::None => {}
    }

    if damage_pattern {
        chemistry = chemistry.clamp(0.0, 4.0);
        stability = stability.clamp(0.0, 3.0);
    } else {
        chemistry = chemistry.clamp(0.0, 5.0);
        stability = stability.clamp(0.0, 5.0);
    }

    // San He with a mirrored sun: loads of chemistry, not effortless.
    if ctx.pattern == LunarPattern::TrineHarmony && ctx.same_solar_sign() {
        stability = stability.min(4.0);
    }

    StarRatings {
        chemistry: round_half(chemistry),
        stability: round_half(stability),
    }
}

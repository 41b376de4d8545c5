//! Tier calibrator.
//!
//! One-shot classification of the raw composite into one of the seven
//! tiers, then a re-clamp of the score into the band that tier is allowed
//! to occupy. Bands widen upward when the pair's year elements are in
//! harmony; the opposites and difficult tiers further cascade on the solar
//! element relation.

use crate::classify::{Aspect, ElementRelation, LunarPattern};
use crate::context::MatchContext;
use crate::scoring::MatchTier;

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Assign the tier for a raw composite score. Rules are evaluated top to
/// bottom; the first match wins.
pub fn assign_tier(raw: f64, ctx: &MatchContext) -> MatchTier {
    let pattern = ctx.pattern;
    let aspect = ctx.aspect;

    let super_harmonious = pattern == LunarPattern::TrineHarmony
        && matches!(aspect, Aspect::Trine | Aspect::SameSign);

    let twin_flame_shape = (pattern == LunarPattern::SameTrine
        && matches!(aspect, Aspect::Opposition | Aspect::SameSign))
        || (pattern == LunarPattern::SecretFriend && raw >= 84.0);

    if raw >= 85.0 && super_harmonious {
        return MatchTier::Soulmate;
    }

    if raw >= 80.0 && twin_flame_shape {
        return MatchTier::TwinFlame;
    }

    if raw >= 72.0 {
        return MatchTier::HarmoniousMatch;
    }

    if raw >= 63.0 {
        return MatchTier::DynamicMatch;
    }

    if (ctx.is_chinese_opposite || aspect == Aspect::Opposition) && raw >= 48.0 {
        return MatchTier::OppositesAttract;
    }

    if raw >= 52.0 && !pattern.is_difficult() {
        return MatchTier::NeutralMatch;
    }

    MatchTier::DifficultMatch
}

/// Band for an Opposites Attract score with a true Liu Chong pattern,
/// cascading on how the solar elements line up.
fn opposites_band(
    relation: ElementRelation,
    harmony: bool,
) -> (f64, f64) {
    if relation == ElementRelation::Same && harmony {
        // Peak magnetic opposite.
        (58.0, 62.0)
    } else if (relation == ElementRelation::Same && !harmony)
        || (relation == ElementRelation::Compatible && harmony)
    {
        (54.0, 60.0)
    } else if matches!(
        relation,
        ElementRelation::Compatible | ElementRelation::SemiCompatible
    ) {
        // Still attractive, more chaotic.
        (50.0, 56.0)
    } else {
        // Clash/neutral elements: hot but rough.
        (45.0, 52.0)
    }
}

/// Band for a Difficult Match carrying a genuine damage pattern; same
/// cascade shape as the opposites band, shifted down.
fn difficult_band(relation: ElementRelation, harmony: bool) -> (f64, f64) {
    if relation == ElementRelation::Same && harmony {
        (54.0, 60.0)
    } else if (relation == ElementRelation::Same && !harmony)
        || (relation == ElementRelation::Compatible && harmony)
    {
        (48.0, 56.0)
    } else if matches!(
        relation,
        ElementRelation::Compatible | ElementRelation::SemiCompatible
    ) {
        (42.0, 50.0)
    } else {
        (38.0, 46.0)
    }
}

/// Re-clamp the raw score into the band legal for its tier and round to the
/// nearest integer.
pub fn calibrate_score(raw: f64, tier: MatchTier, ctx: &MatchContext) -> u8 {
    let harmony = ctx.five_element_relation.is_harmonious();
    let score = clamp(raw, 0.0, 100.0);

    let banded = match tier {
        MatchTier::Soulmate => {
            let (min, max) = if harmony { (92.0, 98.0) } else { (88.0, 94.0) };
            clamp(score, min, max)
        }
        MatchTier::TwinFlame => {
            let (min, max) = if harmony { (86.0, 91.0) } else { (82.0, 87.0) };
            clamp(score, min, max)
        }
        MatchTier::HarmoniousMatch => {
            let (min, max) = if harmony { (78.0, 84.0) } else { (72.0, 79.0) };
            clamp(score, min, max)
        }
        // Dynamic matches keep their natural score.
        MatchTier::DynamicMatch => score,
        MatchTier::NeutralMatch => {
            let (min, max) = if harmony { (64.0, 68.0) } else { (58.0, 64.0) };
            clamp(score, min, max)
        }
        MatchTier::OppositesAttract => {
            if ctx.pattern == LunarPattern::Clash {
                let (min, max) = opposites_band(ctx.element_relation, harmony);
                clamp(score, min, max)
            } else {
                // Pure solar opposition without the Chinese clash.
                clamp(score, 54.0, 62.0)
            }
        }
        MatchTier::DifficultMatch => {
            if ctx.pattern.is_difficult() {
                let (min, max) = difficult_band(ctx.element_relation, harmony);
                clamp(score, min, max)
            } else {
                // Reached on low score alone: floor it, no upper re-clamp.
                clamp(score, 38.0, 100.0)
            }
        }
    };

    banded.round() as u8
}

/// The band a calibrated score must land in for a given tier/context.
/// Exposed for property tests.
pub fn tier_band(tier: MatchTier, ctx: &MatchContext) -> (u8, u8) {
    let harmony = ctx.five_element_relation.is_harmonious();
    let (min, max) = match tier {
        MatchTier::Soulmate => {
            if harmony {
                (92.0, 98.0)
            } else {
                (88.0, 94.0)
            }
        }
        MatchTier::TwinFlame => {
            if harmony {
                (86.0, 91.0)
            } else {
                (82.0, 87.0)
            }
        }
        MatchTier::HarmoniousMatch => {
            if harmony {
                (78.0, 84.0)
            } else {
                (72.0, 79.0)
            }
        }
        MatchTier::DynamicMatch => (0.0, 100.0),
        MatchTier::NeutralMatch => {
            if harmony {
                (64.0, 68.0)
            } else {
                (58.0, 64.0)
            }
        }
        MatchTier::OppositesAttract => {
            if ctx.pattern == LunarPattern::Clash {
                opposites_band(ctx.element_relation, harmony)
            } else {
                (54.0, 62.0)
            }
        }
        MatchTier::DifficultMatch => {
            if ctx.pattern.is_difficult() {
                difficult_band(ctx.element_relation, harmony)
            } else {
                (38.0, 100.0)
            }
        }
    };
    (min as u8, max as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Profile;
    use crate::signs::{LunarAnimal::*, SolarSign::*};

    fn ctx(
        a: (crate::signs::SolarSign, crate::signs::LunarAnimal, i32),
        b: (crate::signs::SolarSign, crate::signs::LunarAnimal, i32),
    ) -> MatchContext {
        MatchContext::new(Profile::new(a.0, a.1, a.2), Profile::new(b.0, b.1, b.2))
    }

    #[test]
    fn test_soulmate_requires_pattern_and_aspect() {
        // San He + trine aspect + high raw.
        let c = ctx((Aries, Rat, 1984), (Leo, Dragon, 1984));
        assert_eq!(assign_tier(94.0, &c), MatchTier::Soulmate);

        // Same raw without the San He pattern falls through to harmonious.
        let c = ctx((Aries, Rat, 1984), (Leo, Tiger, 1986));
        assert_eq!(assign_tier(94.0, &c), MatchTier::HarmoniousMatch);

        // San He but a square aspect also falls through.
        let c = ctx((Aries, Rat, 1984), (Cancer, Dragon, 1988));
        assert_eq!(assign_tier(94.0, &c), MatchTier::HarmoniousMatch);
    }

    #[test]
    fn test_twin_flame_secret_friend_gate() {
        let c = ctx((Aries, Rat, 1984), (Leo, Ox, 1985));
        // Liu He at 84+ qualifies.
        assert_eq!(assign_tier(84.0, &c), MatchTier::TwinFlame);
        // Liu He at 80-83 does not (falls to harmonious).
        assert_eq!(assign_tier(82.0, &c), MatchTier::HarmoniousMatch);
    }

    #[test]
    fn test_twin_flame_same_trine_shape() {
        use crate::classify::LunarPattern;
        let c = ctx((Aries, Rat, 1984), (Libra, Dragon, 1988))
            .with_pattern(LunarPattern::SameTrine);
        assert_eq!(c.aspect, Aspect::Opposition);
        assert_eq!(assign_tier(81.0, &c), MatchTier::TwinFlame);
    }

    #[test]
    fn test_threshold_ladder() {
        let c = ctx((Aries, Rat, 1984), (Leo, Tiger, 1986));
        assert_eq!(assign_tier(72.0, &c), MatchTier::HarmoniousMatch);
        assert_eq!(assign_tier(63.0, &c), MatchTier::DynamicMatch);
        assert_eq!(assign_tier(55.0, &c), MatchTier::NeutralMatch);
    }

    #[test]
    fn test_opposites_attract_gate() {
        // Rat-Horse is Liu Chong.
        let c = ctx((Aries, Rat, 1984), (Taurus, Horse, 1990));
        assert_eq!(assign_tier(50.0, &c), MatchTier::OppositesAttract);
        // Below 48 drops to difficult.
        assert_eq!(assign_tier(47.0, &c), MatchTier::DifficultMatch);

        // Solar opposition alone also qualifies.
        let c = ctx((Aries, Rat, 1984), (Libra, Tiger, 1986));
        assert_eq!(assign_tier(50.0, &c), MatchTier::OppositesAttract);
    }

    #[test]
    fn test_neutral_excludes_difficult_patterns() {
        // Rat-Goat is Liu Hai: 55 raw would be neutral otherwise.
        let c = ctx((Aries, Rat, 1984), (Taurus, Goat, 1991));
        assert_eq!(assign_tier(55.0, &c), MatchTier::DifficultMatch);
    }

    #[test]
    fn test_calibration_bands() {
        // Soulmate with Wu Xing harmony: 92-98.
        let c = ctx((Aries, Rat, 1984), (Leo, Dragon, 1984));
        assert_eq!(calibrate_score(99.0, MatchTier::Soulmate, &c), 98);
        assert_eq!(calibrate_score(85.0, MatchTier::Soulmate, &c), 92);

        // Neutral without harmony (Wood vs Earth years clash): 58-64.
        let c = ctx((Aries, Rat, 1984), (Taurus, Tiger, 1988));
        assert!(!c.five_element_relation.is_harmonious());
        assert_eq!(calibrate_score(70.0, MatchTier::NeutralMatch, &c), 64);
        assert_eq!(calibrate_score(40.0, MatchTier::NeutralMatch, &c), 58);
    }

    #[test]
    fn test_opposites_band_cascade() {
        // Same element + harmony peaks at 58-62.
        assert_eq!(opposites_band(ElementRelation::Same, true), (58.0, 62.0));
        assert_eq!(opposites_band(ElementRelation::Same, false), (54.0, 60.0));
        assert_eq!(
            opposites_band(ElementRelation::Compatible, true),
            (54.0, 60.0)
        );
        assert_eq!(
            opposites_band(ElementRelation::SemiCompatible, false),
            (50.0, 56.0)
        );
        assert_eq!(opposites_band(ElementRelation::Clash, false), (45.0, 52.0));
    }

    #[test]
    fn test_difficult_band_cascade() {
        assert_eq!(difficult_band(ElementRelation::Same, true), (54.0, 60.0));
        assert_eq!(
            difficult_band(ElementRelation::Compatible, true),
            (48.0, 56.0)
        );
        assert_eq!(
            difficult_band(ElementRelation::SemiCompatible, true),
            (42.0, 50.0)
        );
        assert_eq!(difficult_band(ElementRelation::Clash, false), (38.0, 46.0));
    }

    #[test]
    fn test_difficult_without_damage_pattern_keeps_score() {
        // Cross-trine pair dragged low by aspect alone: floor at 38 only.
        let c = ctx((Aries, Rat, 1984), (Cancer, Tiger, 1986));
        assert!(!c.pattern.is_difficult());
        assert_eq!(calibrate_score(45.0, MatchTier::DifficultMatch, &c), 45);
        assert_eq!(calibrate_score(20.0, MatchTier::DifficultMatch, &c), 38);
    }
}

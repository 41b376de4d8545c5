//! Score compositor.
//!
//! Builds the raw composite score for a pair: two base scores (one per
//! taxonomy), a pattern-dependent weighted blend, the Wu Xing year delta,
//! a correction for pairs whose lunar layer carries no signal, and the
//! same-solar-sign penalty rule.

use crate::classify::{Aspect, ElementRelation, FiveElementRelation, LunarPattern};
use crate::context::MatchContext;
use crate::scoring::config::{SameSignRule, ScoringConfig};

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

// ============================================================================
// BASE CHINESE SCORE
// ============================================================================

/// Pattern delta over the neutral baseline of 50.
///
/// The same-sign rows are element-unaware fallbacks; contexts with a known
/// element relation use the sub-table in [`base_chinese_score`] instead.
pub fn pattern_delta(pattern: LunarPattern) -> f64 {
    match pattern {
        LunarPattern::TrineHarmony => 53.0,
        LunarPattern::SecretFriend => 47.0,
        LunarPattern::SameTrine => 15.0,
        LunarPattern::SameSign | LunarPattern::SameSignSelfPunish => 8.0,
        LunarPattern::CrossTrine => 0.0,
        LunarPattern::Clash => -15.0,
        LunarPattern::Harm => -20.0,
        LunarPattern::Punishment => -20.0,
        LunarPattern::Break => -17.0,
    }
}

/// Element-aware base score for same-sign pairs. Self-punish animals sit
/// four points lower at every level. The defensive Neutral relation maps
/// like semi-compatible.
fn same_sign_base(relation: ElementRelation, self_punish: bool) -> f64 {
    let base = match relation {
        ElementRelation::Same => 70.0,
        ElementRelation::Compatible => 67.0,
        ElementRelation::SemiCompatible | ElementRelation::Neutral => 64.0,
        ElementRelation::Clash => 60.0,
    };
    if self_punish {
        base - 4.0
    } else {
        base
    }
}

/// Base Chinese score for the pair, clamped to [0, 100].
pub fn base_chinese_score(ctx: &MatchContext, config: &ScoringConfig) -> f64 {
    let mut score = match ctx.pattern {
        LunarPattern::SameSign => same_sign_base(ctx.element_relation, false),
        LunarPattern::SameSignSelfPunish => same_sign_base(ctx.element_relation, true),
        other => 50.0 + pattern_delta(other),
    };

    if ctx.is_lively_pair {
        // Spark, not necessarily stability.
        score += config.lively_pair_bonus;
    }

    clamp(score, 0.0, 100.0)
}

// ============================================================================
// BASE WESTERN SCORE
// ============================================================================

fn aspect_delta(aspect: Aspect) -> f64 {
    match aspect {
        Aspect::Trine => 10.0,
        Aspect::Sextile => 6.0,
        // Strong mirror: high recognition plus some friction.
        Aspect::SameSign => 6.0,
        // Chemistry but polarity.
        Aspect::Opposition => 2.0,
        Aspect::Square => -6.0,
        Aspect::Quincunx => -4.0,
        Aspect::None => 0.0,
    }
}

fn element_delta(relation: ElementRelation) -> f64 {
    match relation {
        ElementRelation::Same => 6.0,
        ElementRelation::Compatible => 4.0,
        ElementRelation::SemiCompatible => 2.0,
        ElementRelation::Clash => -6.0,
        ElementRelation::Neutral => 0.0,
    }
}

/// Base Western score for the pair, clamped to [0, 100].
pub fn base_western_score(aspect: Aspect, relation: ElementRelation) -> f64 {
    clamp(50.0 + aspect_delta(aspect) + element_delta(relation), 0.0, 100.0)
}

// ============================================================================
// MODIFIERS
// ============================================================================

/// Wu Xing delta, scaled by how the lunar pattern classifies: good patterns
/// get the full lift or full penalty, difficult patterns a damped one.
pub fn five_element_delta(relation: FiveElementRelation, pattern: LunarPattern) -> f64 {
    let good = pattern.is_good();
    let difficult = pattern.is_difficult();

    match relation {
        FiveElementRelation::Supportive => {
            if good {
                6.0
            } else if difficult {
                4.0
            } else {
                2.0
            }
        }
        FiveElementRelation::Same => {
            if good {
                4.0
            } else if difficult {
                1.0
            } else {
                2.0
            }
        }
        FiveElementRelation::Clashing => {
            if good {
                -6.0
            } else if difficult {
                -2.0
            } else {
                -4.0
            }
        }
        FiveElementRelation::Neutral => 0.0,
    }
}

/// Correction for pairs whose lunar layer carries no signal: a strong solar
/// aspect should not be suppressed by an absent Chinese pattern.
pub fn neutral_east_correction(pattern: LunarPattern, aspect: Aspect) -> f64 {
    if pattern != LunarPattern::CrossTrine {
        return 0.0;
    }
    match aspect {
        Aspect::Trine | Aspect::SameSign => 6.0,
        Aspect::Sextile => 4.0,
        _ => 0.0,
    }
}

// ============================================================================
// COMPOSITION
// ============================================================================

/// Raw composite score for the pair: weighted blend plus modifiers, clamped
/// to [0, 100] and rounded to the nearest integer.
pub fn raw_composite(ctx: &MatchContext, config: &ScoringConfig) -> f64 {
    let chinese = base_chinese_score(ctx, config);
    let western = base_western_score(ctx.aspect, ctx.element_relation);

    let weights = if ctx.pattern.is_strong() {
        config.strong_weights
    } else {
        config.neutral_weights
    };

    let mut raw = weights.chinese * chinese + weights.western * western;
    raw += five_element_delta(ctx.five_element_relation, ctx.pattern);
    raw += neutral_east_correction(ctx.pattern, ctx.aspect);

    clamp(raw, 0.0, 100.0).round()
}

/// Apply the same-solar-sign penalty and pick the score cap.
///
/// Returns the penalized raw score and the cap the calibrated score must
/// respect. The cascade is most-specific-first: same animal outranks same
/// trine outranks the baseline, and same-animal pairs are exempt from the
/// lower caps.
pub fn apply_same_sign_rule(
    raw: f64,
    ctx: &MatchContext,
    rule: &SameSignRule,
) -> (f64, Option<u8>) {
    if !rule.enabled || !ctx.same_solar_sign() {
        return (raw, None);
    }

    let (delta, cap) = if ctx.same_lunar_animal() {
        (rule.delta_same_animal, rule.cap_same_animal)
    } else if ctx.same_lunar_trine() {
        (rule.delta_same_trine, rule.cap_same_trine)
    } else {
        (rule.delta_default, rule.cap_default)
    };

    let penalized = clamp(raw + delta, 0.0, f64::from(cap));
    (penalized, Some(cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Profile;
    use crate::signs::{LunarAnimal::*, SolarSign::*};
    use approx::assert_relative_eq;

    fn ctx(
        a: (crate::signs::SolarSign, crate::signs::LunarAnimal, i32),
        b: (crate::signs::SolarSign, crate::signs::LunarAnimal, i32),
    ) -> MatchContext {
        MatchContext::new(Profile::new(a.0, a.1, a.2), Profile::new(b.0, b.1, b.2))
    }

    #[test]
    fn test_base_western_worked_example() {
        // Aries x Aries: same sign (+6) and same element (+6) over 50.
        let aspect = Aspect::SameSign;
        assert_relative_eq!(base_western_score(aspect, ElementRelation::Same), 62.0);
    }

    #[test]
    fn test_base_chinese_clamps_trine_harmony() {
        // Rat x Dragon: 50 + 53 exceeds the scale and clamps to 100.
        let config = ScoringConfig::default();
        let c = ctx((Aries, Rat, 1984), (Leo, Dragon, 1988));
        assert_relative_eq!(base_chinese_score(&c, &config), 100.0);
    }

    #[test]
    fn test_same_sign_sub_table() {
        let config = ScoringConfig::default();
        // Rat is not self-punishing; Aries-Aries shares an element.
        let c = ctx((Aries, Rat, 1984), (Aries, Rat, 1984));
        assert_relative_eq!(base_chinese_score(&c, &config), 70.0);

        // Dragon self-punishes: four points lower at the same level.
        let c = ctx((Aries, Dragon, 1988), (Aries, Dragon, 1988));
        assert_relative_eq!(base_chinese_score(&c, &config), 66.0);

        // Clashing elements bottom out the sub-table.
        let c = ctx((Aries, Rat, 1984), (Cancer, Rat, 1984));
        assert_relative_eq!(base_chinese_score(&c, &config), 60.0);
    }

    #[test]
    fn test_lively_pair_bonus() {
        let config = ScoringConfig::default();
        let base = ctx((Aries, Rat, 1984), (Taurus, Tiger, 1986));
        let lively = base.with_lively_pair(true);
        assert_relative_eq!(
            base_chinese_score(&lively, &config) - base_chinese_score(&base, &config),
            3.0
        );
    }

    #[test]
    fn test_pattern_delta_table() {
        assert_relative_eq!(pattern_delta(LunarPattern::TrineHarmony), 53.0);
        assert_relative_eq!(pattern_delta(LunarPattern::SecretFriend), 47.0);
        assert_relative_eq!(pattern_delta(LunarPattern::SameTrine), 15.0);
        assert_relative_eq!(pattern_delta(LunarPattern::SameSign), 8.0);
        assert_relative_eq!(pattern_delta(LunarPattern::CrossTrine), 0.0);
        assert_relative_eq!(pattern_delta(LunarPattern::Clash), -15.0);
        assert_relative_eq!(pattern_delta(LunarPattern::Harm), -20.0);
        assert_relative_eq!(pattern_delta(LunarPattern::Punishment), -20.0);
        assert_relative_eq!(pattern_delta(LunarPattern::Break), -17.0);
    }

    #[test]
    fn test_five_element_delta_matrix() {
        use FiveElementRelation::*;
        use LunarPattern::*;
        assert_relative_eq!(five_element_delta(Supportive, TrineHarmony), 6.0);
        assert_relative_eq!(five_element_delta(Supportive, Clash), 4.0);
        assert_relative_eq!(five_element_delta(Supportive, CrossTrine), 2.0);
        assert_relative_eq!(five_element_delta(Same, SecretFriend), 4.0);
        assert_relative_eq!(five_element_delta(Same, Harm), 1.0);
        assert_relative_eq!(five_element_delta(Same, SameSign), 2.0);
        assert_relative_eq!(five_element_delta(Clashing, SameTrine), -6.0);
        assert_relative_eq!(five_element_delta(Clashing, Punishment), -2.0);
        assert_relative_eq!(five_element_delta(Clashing, SameSignSelfPunish), -4.0);
        assert_relative_eq!(five_element_delta(Neutral, Break), 0.0);
    }

    #[test]
    fn test_neutral_east_correction_only_fires_cross_trine() {
        assert_relative_eq!(
            neutral_east_correction(LunarPattern::CrossTrine, Aspect::Trine),
            6.0
        );
        assert_relative_eq!(
            neutral_east_correction(LunarPattern::CrossTrine, Aspect::Sextile),
            4.0
        );
        assert_relative_eq!(
            neutral_east_correction(LunarPattern::CrossTrine, Aspect::Square),
            0.0
        );
        assert_relative_eq!(
            neutral_east_correction(LunarPattern::TrineHarmony, Aspect::Trine),
            0.0
        );
    }

    #[test]
    fn test_raw_composite_strong_blend() {
        let config = ScoringConfig::default();
        // Rat x Dragon, Aries x Leo (trine, same element), both Wood years:
        // 0.70 * 100 + 0.30 * 66 = 89.8, +4 for same Wu Xing on a good
        // pattern -> 93.8 -> 94.
        let c = ctx((Aries, Rat, 1984), (Leo, Dragon, 1984));
        assert_relative_eq!(raw_composite(&c, &config), 94.0);
    }

    #[test]
    fn test_raw_composite_in_range_for_extremes() {
        let config = ScoringConfig::default();
        // Worst stack: harm pattern, square aspect, clashing elements.
        let c = ctx((Aries, Rat, 1984), (Cancer, Goat, 1988));
        let raw = raw_composite(&c, &config);
        assert!((0.0..=100.0).contains(&raw));
    }

    #[test]
    fn test_same_sign_rule_cascade() {
        let rule = SameSignRule::default();

        // Baseline: different trine, different animal.
        let c = ctx((Aries, Rat, 1984), (Aries, Tiger, 1986));
        let (raw, cap) = apply_same_sign_rule(80.0, &c, &rule);
        assert_relative_eq!(raw, 76.0);
        assert_eq!(cap, Some(94));

        // Same trine escalates.
        let c = ctx((Aries, Rat, 1984), (Aries, Monkey, 1992));
        let (raw, cap) = apply_same_sign_rule(80.0, &c, &rule);
        assert_relative_eq!(raw, 74.0);
        assert_eq!(cap, Some(84));

        // Same animal: biggest delta, but exempt from the lower caps.
        let c = ctx((Aries, Rat, 1984), (Aries, Rat, 1984));
        let (raw, cap) = apply_same_sign_rule(80.0, &c, &rule);
        assert_relative_eq!(raw, 71.0);
        assert_eq!(cap, Some(100));

        // Different solar signs: untouched.
        let c = ctx((Aries, Rat, 1984), (Leo, Rat, 1984));
        let (raw, cap) = apply_same_sign_rule(80.0, &c, &rule);
        assert_relative_eq!(raw, 80.0);
        assert_eq!(cap, None);
    }
}

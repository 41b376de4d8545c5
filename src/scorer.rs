//! Match Scorer - Main coordinator for scoring a pair of profiles.
//!
//! Wires the classifiers, the compositor, the override layer, the
//! same-solar-sign rule, and the tier calibrator into one pipeline, then
//! assembles the outward-facing result. The whole path is pure: no I/O, no
//! shared mutable state, safe to call concurrently from any number of
//! threads. Identical inputs always produce identical output, so callers
//! may memoize freely.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classify::overlay_patterns;
use crate::context::{MatchContext, Profile};
use crate::explanation::{east_rationale, star_ratings, west_rationale};
use crate::overrides::OverrideTable;
use crate::scoring::{assign_tier, calibrate_score, compositor, MatchTier, ScoringConfig};
use crate::signs::{LunarAnimal, SolarSign};

/// Outward-facing match result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Calibrated score, always inside the tier-legal band.
    pub score: u8,
    pub tier: MatchTier,
    /// Display label for the tier ("Twin Flame", not "TwinFlame").
    pub tier_label: String,
    pub east_rationale: String,
    pub west_rationale: String,
    /// Snake_case signals: primary pattern, overlays, aspect, element
    /// relation, Wu Xing relation, and context flags.
    pub tags: Vec<String>,
    pub chemistry_stars: f32,
    pub stability_stars: f32,
}

/// One cell of a viewer's compatibility matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixCell {
    pub sign: SolarSign,
    pub animal: LunarAnimal,
    pub score: u8,
    pub tier: MatchTier,
}

/// Main match scorer. Holds the rule configuration and the externally
/// supplied override table; both are read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct MatchScorer {
    config: ScoringConfig,
    overrides: OverrideTable,
}

impl MatchScorer {
    /// Scorer with canonical rules and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            overrides: OverrideTable::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a pair of profiles.
    pub fn evaluate(&self, a: Profile, b: Profile) -> MatchResult {
        self.evaluate_context(MatchContext::new(a, b))
    }

    /// Score a pair with the external lively-pair chart flag set.
    pub fn evaluate_with_flags(&self, a: Profile, b: Profile, lively_pair: bool) -> MatchResult {
        self.evaluate_context(MatchContext::new(a, b).with_lively_pair(lively_pair))
    }

    /// Score a pre-built context. Entry point for callers that supply an
    /// explicit legacy pattern via [`MatchContext::with_pattern`].
    pub fn evaluate_context(&self, ctx: MatchContext) -> MatchResult {
        // 1) Compose the raw score from both taxonomies.
        let mut raw = compositor::raw_composite(&ctx, &self.config);

        // 2) Override layer: a pinned score replaces the composite but not
        //    the rules that follow.
        let override_entry = self
            .overrides
            .get(ctx.a.sign, ctx.a.animal, ctx.b.sign, ctx.b.animal);
        let score_overridden = matches!(override_entry, Some(o) if o.score.is_some());
        if let Some(score) = override_entry.and_then(|o| o.score) {
            raw = f64::from(score);
        }

        // 3) Same-solar-sign penalty, cap retained for after calibration.
        let (raw, cap) = compositor::apply_same_sign_rule(raw, &ctx, &self.config.same_sign_rule);

        // 4) Tier, then band re-clamp.
        let tier = assign_tier(raw, &ctx);
        let mut score = calibrate_score(raw, tier, &ctx);
        if let Some(cap) = cap {
            score = score.min(cap);
        }

        // 5) Assemble the outward result.
        let east = override_entry
            .and_then(|o| o.east_text.clone())
            .unwrap_or_else(|| east_rationale(&ctx));
        let west = override_entry
            .and_then(|o| o.west_text.clone())
            .unwrap_or_else(|| west_rationale(&ctx));
        let stars = star_ratings(&ctx, score);

        MatchResult {
            score,
            tier,
            tier_label: tier.label().to_string(),
            east_rationale: east,
            west_rationale: west,
            tags: build_tags(&ctx, score_overridden),
            chemistry_stars: stars.chemistry,
            stability_stars: stars.stability,
        }
    }

    /// Score one viewer against every (sign, animal) combination.
    ///
    /// 144 cells, embarrassingly parallel; the partner birth year is fixed
    /// by the caller since the matrix axes carry no year.
    pub fn score_matrix(&self, viewer: Profile, partner_year: i32) -> Vec<MatrixCell> {
        let combos: Vec<(SolarSign, LunarAnimal)> = SolarSign::ALL
            .iter()
            .flat_map(|&sign| LunarAnimal::ALL.iter().map(move |&animal| (sign, animal)))
            .collect();

        combos
            .into_par_iter()
            .map(|(sign, animal)| {
                let partner = Profile::new(sign, animal, partner_year);
                let result = self.evaluate(viewer, partner);
                MatrixCell {
                    sign,
                    animal,
                    score: result.score,
                    tier: result.tier,
                }
            })
            .collect()
    }
}

fn build_tags(ctx: &MatchContext, score_overridden: bool) -> Vec<String> {
    let mut tags = Vec::with_capacity(8);

    tags.push(ctx.pattern.id().to_string());

    for overlay in overlay_patterns(ctx.a.animal, ctx.b.animal) {
        if overlay != ctx.pattern_tag {
            tags.push(format!("overlay_{}", overlay.id()));
        }
    }

    tags.push(format!("aspect_{}", ctx.aspect.name()));
    tags.push(format!("elements_{}", ctx.element_relation.name()));
    tags.push(format!("wuxing_{}", ctx.five_element_relation.name()));

    if ctx.is_chinese_opposite {
        tags.push("chinese_opposite".to_string());
    }
    if ctx.same_solar_sign() {
        tags.push("same_solar_sign".to_string());
    }
    if ctx.is_lively_pair {
        tags.push("lively_pair".to_string());
    }
    if score_overridden {
        tags.push("score_override".to_string());
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::ScoreOverride;
    use crate::scoring::calibrator::tier_band;
    use crate::signs::{LunarAnimal::*, SolarSign::*};

    fn profile(sign: SolarSign, animal: LunarAnimal, year: i32) -> Profile {
        Profile::new(sign, animal, year)
    }

    #[test]
    fn test_trine_harmony_resolves_to_top_tier() {
        let scorer = MatchScorer::new();
        let result = scorer.evaluate(profile(Aries, Rat, 1984), profile(Leo, Dragon, 1984));
        assert!(
            matches!(result.tier, MatchTier::Soulmate | MatchTier::TwinFlame),
            "got {:?} at {}",
            result.tier,
            result.score
        );
        let ctx = MatchContext::new(profile(Aries, Rat, 1984), profile(Leo, Dragon, 1984));
        let (min, max) = tier_band(result.tier, &ctx);
        assert!((min..=max).contains(&result.score));
    }

    #[test]
    fn test_result_is_symmetric() {
        let scorer = MatchScorer::new();
        let a = profile(Gemini, Monkey, 1992);
        let b = profile(Scorpio, Snake, 1989);
        let forward = scorer.evaluate(a, b);
        let reverse = scorer.evaluate(b, a);
        assert_eq!(forward.score, reverse.score);
        assert_eq!(forward.tier, reverse.tier);
    }

    #[test]
    fn test_same_sign_same_animal_penalty_and_cap() {
        let scorer = MatchScorer::new();
        let result = scorer.evaluate(profile(Aries, Rat, 1984), profile(Aries, Rat, 1984));
        // Same animal takes the -9 delta but keeps the 100 cap; the score
        // still lands in its tier band.
        let ctx = MatchContext::new(profile(Aries, Rat, 1984), profile(Aries, Rat, 1984));
        let (min, max) = tier_band(result.tier, &ctx);
        assert!((min..=max).contains(&result.score));
        assert!(result.tags.contains(&"same_solar_sign".to_string()));
    }

    #[test]
    fn test_override_replaces_score_but_not_rules() {
        let mut overrides = OverrideTable::new();
        overrides.insert(
            Aquarius,
            Monkey,
            Aquarius,
            Monkey,
            ScoreOverride {
                score: Some(100),
                east_text: Some("Pinned east text.".to_string()),
                west_text: None,
            },
        );
        let scorer = MatchScorer::new().with_overrides(overrides);
        let result = scorer.evaluate(
            profile(Aquarius, Monkey, 1992),
            profile(Aquarius, Monkey, 1992),
        );

        // Pinned at 100, then -9 for same sign + same animal (cap 100);
        // the re-tiered score must still land in a tier-legal band.
        assert!(result.tags.contains(&"score_override".to_string()));
        assert_eq!(result.east_rationale, "Pinned east text.");
        // West text was not overridden.
        assert!(result.west_rationale.contains("Aquarius"));
        let ctx = MatchContext::new(
            profile(Aquarius, Monkey, 1992),
            profile(Aquarius, Monkey, 1992),
        );
        let (min, max) = tier_band(result.tier, &ctx);
        assert!((min..=max).contains(&result.score));
    }

    #[test]
    fn test_lively_pair_flag_threads_through() {
        let scorer = MatchScorer::new();
        let result = scorer.evaluate_with_flags(
            profile(Aries, Rat, 1984),
            profile(Taurus, Tiger, 1986),
            true,
        );
        assert!(result.tags.contains(&"lively_pair".to_string()));
    }

    #[test]
    fn test_overlay_tags_surface_shadowed_patterns() {
        let scorer = MatchScorer::new();
        // Ox-Goat: clash primary, punishment overlay.
        let result = scorer.evaluate(profile(Aries, Ox, 1985), profile(Taurus, Goat, 1991));
        assert!(result.tags.contains(&"liu_chong".to_string()));
        assert!(result.tags.contains(&"overlay_xing".to_string()));
        assert!(result.tags.contains(&"chinese_opposite".to_string()));
    }

    #[test]
    fn test_matrix_covers_all_combinations() {
        let scorer = MatchScorer::new();
        let matrix = scorer.score_matrix(profile(Aries, Rat, 1984), 1990);
        assert_eq!(matrix.len(), 144);
        for cell in &matrix {
            assert!(cell.score <= 100);
        }
    }
}

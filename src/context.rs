//! Match context construction.
//!
//! A `MatchContext` aggregates both parties and every derived
//! classification. It is built once per request, never mutated afterwards,
//! and discarded with the result; the scoring stages only read it.

use serde::{Deserialize, Serialize};

use crate::classify::{
    calculate_aspect, element_relation, five_element_relation, primary_pattern_tag, year_element,
    Aspect, ElementRelation, FiveElementRelation, LunarPattern, LunarPatternTag,
};
use crate::signs::{FiveElement, LunarAnimal, SolarSign};

/// One party's astrological profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub sign: SolarSign,
    pub animal: LunarAnimal,
    pub birth_year: i32,
}

impl Profile {
    pub fn new(sign: SolarSign, animal: LunarAnimal, birth_year: i32) -> Self {
        Self {
            sign,
            animal,
            birth_year,
        }
    }
}

/// Immutable classification context for one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchContext {
    pub a: Profile,
    pub b: Profile,

    // Solar layer
    pub aspect: Aspect,
    pub element_relation: ElementRelation,

    // Lunar layer
    pub pattern_tag: LunarPatternTag,
    pub pattern: LunarPattern,

    // Wu Xing layer
    pub year_element_a: FiveElement,
    pub year_element_b: FiveElement,
    pub five_element_relation: FiveElementRelation,

    /// True iff the pair sits on a Liu Chong axis.
    pub is_chinese_opposite: bool,
    /// External chart flag supplied by the caller; adds spark, not owned
    /// here.
    pub is_lively_pair: bool,
}

impl MatchContext {
    /// Derive every classification from the two profiles.
    pub fn new(a: Profile, b: Profile) -> Self {
        let aspect = calculate_aspect(a.sign, b.sign);
        let element_relation = element_relation(a.sign.element(), b.sign.element());

        let pattern_tag = primary_pattern_tag(a.animal, b.animal);
        let pattern = LunarPattern::from_tag(pattern_tag);

        let year_element_a = year_element(a.birth_year);
        let year_element_b = year_element(b.birth_year);
        let five_element_relation = five_element_relation(year_element_a, year_element_b);

        Self {
            a,
            b,
            aspect,
            element_relation,
            pattern_tag,
            pattern,
            year_element_a,
            year_element_b,
            five_element_relation,
            is_chinese_opposite: pattern == LunarPattern::Clash,
            is_lively_pair: false,
        }
    }

    /// Set the external lively-pair chart flag.
    pub fn with_lively_pair(mut self, lively: bool) -> Self {
        self.is_lively_pair = lively;
        self
    }

    /// Replace the compositor-level pattern with one supplied by an external
    /// source (legacy profile data may report `SameTrine` pairs that the
    /// tag classifier folds into San He). The primary tag and the opposite
    /// flag stay derived.
    pub fn with_pattern(mut self, pattern: LunarPattern) -> Self {
        self.pattern = pattern;
        self.is_chinese_opposite = pattern == LunarPattern::Clash;
        self
    }

    /// Same solar sign on both sides.
    pub fn same_solar_sign(&self) -> bool {
        self.a.sign == self.b.sign
    }

    /// Same lunar trine group on both sides.
    pub fn same_lunar_trine(&self) -> bool {
        self.a.animal.trine() == self.b.animal.trine()
    }

    /// Same lunar animal on both sides.
    pub fn same_lunar_animal(&self) -> bool {
        self.a.animal == self.b.animal
    }
}

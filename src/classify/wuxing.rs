//! Wu Xing year element classifier.
//!
//! Derives the five-element assignment for a birth year from the repeating
//! 10-year cycle and relates two year elements through the generating and
//! controlling cycles.

use serde::{Deserialize, Serialize};

use crate::signs::FiveElement;
use crate::tables::{
    controlling_target, generating_successor, WU_XING_REFERENCE_YEAR, WU_XING_YEAR_CYCLE,
};

/// Relation between two Wu Xing year elements. Symmetric: both directions of
/// each cycle are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElementRelation {
    Supportive,
    Same,
    Clashing,
    Neutral,
}

impl FiveElementRelation {
    pub fn name(self) -> &'static str {
        match self {
            FiveElementRelation::Supportive => "supportive",
            FiveElementRelation::Same => "same",
            FiveElementRelation::Clashing => "clashing",
            FiveElementRelation::Neutral => "neutral",
        }
    }

    /// Harmony feeds the calibrator's band selection.
    pub fn is_harmonious(self) -> bool {
        matches!(
            self,
            FiveElementRelation::Same | FiveElementRelation::Supportive
        )
    }
}

/// Year element for a birth year.
///
/// Euclidean remainder keeps pre-reference years on the cycle.
///
/// # Examples
/// ```
/// use match_scorer_rust::classify::year_element;
/// use match_scorer_rust::signs::FiveElement;
///
/// assert_eq!(year_element(1984), FiveElement::Wood);
/// assert_eq!(year_element(1994), FiveElement::Wood);
/// assert_eq!(year_element(1990), FiveElement::Metal);
/// ```
pub fn year_element(year: i32) -> FiveElement {
    let offset = (year - WU_XING_REFERENCE_YEAR).rem_euclid(10) as usize;
    WU_XING_YEAR_CYCLE[offset]
}

/// Relate two year elements.
pub fn five_element_relation(a: FiveElement, b: FiveElement) -> FiveElementRelation {
    if a == b {
        return FiveElementRelation::Same;
    }

    if generating_successor(a) == b || generating_successor(b) == a {
        return FiveElementRelation::Supportive;
    }

    if controlling_target(a) == b || controlling_target(b) == a {
        return FiveElementRelation::Clashing;
    }

    FiveElementRelation::Neutral
}

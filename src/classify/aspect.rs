//! Solar aspect and element relation classifier.
//!
//! Total over all 144 sign pairs; both outputs are symmetric in their
//! arguments. Opposition is decided by the explicit axis table rather than
//! the distance arithmetic, and same-element pairs (distance 4) report as
//! trine.

use serde::{Deserialize, Serialize};

use crate::signs::{Element, SolarSign};
use crate::tables::{in_pair_list, SOLAR_OPPOSITE_PAIRS};

/// Geometric relationship class between two solar signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aspect {
    SameSign,
    Trine,
    Sextile,
    Square,
    Quincunx,
    Opposition,
    None,
}

impl Aspect {
    pub fn name(self) -> &'static str {
        match self {
            Aspect::SameSign => "same_sign",
            Aspect::Trine => "trine",
            Aspect::Sextile => "sextile",
            Aspect::Square => "square",
            Aspect::Quincunx => "quincunx",
            Aspect::Opposition => "opposition",
            Aspect::None => "none",
        }
    }
}

/// Relationship between two solar elements.
///
/// `Neutral` is a defensive default: the four named categories plus `Same`
/// exhaustively cover all ten unordered element combinations, so it is never
/// produced in practice (asserted in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRelation {
    Same,
    Compatible,
    SemiCompatible,
    Clash,
    Neutral,
}

impl ElementRelation {
    pub fn name(self) -> &'static str {
        match self {
            ElementRelation::Same => "same",
            ElementRelation::Compatible => "compatible",
            ElementRelation::SemiCompatible => "semi_compatible",
            ElementRelation::Clash => "clash",
            ElementRelation::Neutral => "neutral",
        }
    }
}

/// Classify the aspect between two solar signs.
pub fn calculate_aspect(a: SolarSign, b: SolarSign) -> Aspect {
    if a == b {
        return Aspect::SameSign;
    }

    if in_pair_list(a, b, SOLAR_OPPOSITE_PAIRS) {
        return Aspect::Opposition;
    }

    // Circular distance over the fixed zodiacal ordering.
    let raw = (a.index() as i32 - b.index() as i32).unsigned_abs() as usize;
    let distance = raw.min(12 - raw);

    match distance {
        4 => Aspect::Trine, // same element group
        2 | 10 => Aspect::Sextile,
        3 | 9 => Aspect::Square,
        5 | 7 => Aspect::Quincunx,
        _ => Aspect::None,
    }
}

/// Classify the relation between two solar elements.
pub fn element_relation(a: Element, b: Element) -> ElementRelation {
    use Element::*;

    if a == b {
        return ElementRelation::Same;
    }

    match (a, b) {
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => ElementRelation::Compatible,
        (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => {
            ElementRelation::SemiCompatible
        }
        (Fire, Water) | (Water, Fire) | (Air, Earth) | (Earth, Air) => ElementRelation::Clash,
        // Unreachable: the arms above cover every distinct unordered pair of
        // the four elements.
        _ => ElementRelation::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signs::SolarSign::*;

    #[test]
    fn test_same_sign_detected_first() {
        for sign in SolarSign::ALL {
            assert_eq!(calculate_aspect(sign, sign), Aspect::SameSign);
        }
    }

    #[test]
    fn test_known_aspects() {
        assert_eq!(calculate_aspect(Aries, Leo), Aspect::Trine);
        assert_eq!(calculate_aspect(Aries, Gemini), Aspect::Sextile);
        assert_eq!(calculate_aspect(Aries, Cancer), Aspect::Square);
        assert_eq!(calculate_aspect(Aries, Virgo), Aspect::Quincunx);
        assert_eq!(calculate_aspect(Aries, Libra), Aspect::Opposition);
        assert_eq!(calculate_aspect(Aries, Taurus), Aspect::None);
        assert_eq!(calculate_aspect(Aries, Pisces), Aspect::None);
    }

    #[test]
    fn test_aspect_symmetry_over_all_pairs() {
        for a in SolarSign::ALL {
            for b in SolarSign::ALL {
                assert_eq!(
                    calculate_aspect(a, b),
                    calculate_aspect(b, a),
                    "aspect({}, {}) should not depend on argument order",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_opposition_equals_distance_six() {
        for a in SolarSign::ALL {
            for b in SolarSign::ALL {
                let raw = (a.index() as i32 - b.index() as i32).unsigned_abs() as usize;
                let d = raw.min(12 - raw);
                assert_eq!(
                    calculate_aspect(a, b) == Aspect::Opposition,
                    d == 6,
                    "{}-{}: opposition table must agree with distance 6",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_trine_pairs_share_element() {
        for a in SolarSign::ALL {
            for b in SolarSign::ALL {
                if calculate_aspect(a, b) == Aspect::Trine {
                    assert_eq!(a.element(), b.element());
                }
            }
        }
    }

    #[test]
    fn test_element_relation_known_pairs() {
        use crate::signs::Element::*;
        assert_eq!(element_relation(Fire, Fire), ElementRelation::Same);
        assert_eq!(element_relation(Fire, Air), ElementRelation::Compatible);
        assert_eq!(element_relation(Water, Earth), ElementRelation::Compatible);
        assert_eq!(element_relation(Fire, Earth), ElementRelation::SemiCompatible);
        assert_eq!(element_relation(Air, Water), ElementRelation::SemiCompatible);
        assert_eq!(element_relation(Fire, Water), ElementRelation::Clash);
        assert_eq!(element_relation(Earth, Air), ElementRelation::Clash);
    }

    /// The defensive Neutral arm must never fire for real sign pairs.
    #[test]
    fn test_element_relation_neutral_unreachable() {
        for a in SolarSign::ALL {
            for b in SolarSign::ALL {
                assert_ne!(
                    element_relation(a.element(), b.element()),
                    ElementRelation::Neutral,
                    "{}-{} produced the defensive Neutral default",
                    a,
                    b
                );
            }
        }
    }
}

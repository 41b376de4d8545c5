//! Lunar pattern classifier.
//!
//! One ordered-dispatch function decides the primary classical pattern for a
//! pair of animals; the first matching rule wins, which guarantees exactly
//! one tag per unordered pair. The precedence is a design decision, not an
//! accident of table ordering: conflict outranks harmony so a pair can never
//! read as both harmonious and damaging.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::signs::LunarAnimal;
use crate::tables::{
    in_pair_list, BREAK_PAIRS, CLASH_PAIRS, HARM_PAIRS, PUNISHMENT_PAIRS, SECRET_FRIEND_PAIRS,
    SELF_PUNISH_ANIMALS,
};

/// Primary classical pattern tag. Exactly one per unordered animal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPatternTag {
    SameSign,
    SameSignSelfPunish,
    TrineHarmony,
    SecretFriend,
    Clash,
    Harm,
    Punishment,
    Break,
    None,
}

impl LunarPatternTag {
    /// Classical identifier used in tags and serialized output.
    pub fn id(self) -> &'static str {
        match self {
            LunarPatternTag::SameSign => "same_sign",
            LunarPatternTag::SameSignSelfPunish => "same_sign_self_punish",
            LunarPatternTag::TrineHarmony => "san_he",
            LunarPatternTag::SecretFriend => "liu_he",
            LunarPatternTag::Clash => "liu_chong",
            LunarPatternTag::Harm => "liu_hai",
            LunarPatternTag::Punishment => "xing",
            LunarPatternTag::Break => "po",
            LunarPatternTag::None => "none",
        }
    }
}

/// Compositor-level pattern.
///
/// Extends the tag vocabulary with `SameTrine` (same trine group reported by
/// an external/legacy source without full San He standing) and folds the
/// no-pattern case into `CrossTrine`. Contexts derived from animals alone
/// never produce `SameTrine`; it only enters through an explicitly supplied
/// pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPattern {
    SameSign,
    SameSignSelfPunish,
    TrineHarmony,
    SameTrine,
    SecretFriend,
    Clash,
    Harm,
    Punishment,
    Break,
    CrossTrine,
}

impl LunarPattern {
    pub fn from_tag(tag: LunarPatternTag) -> Self {
        match tag {
            LunarPatternTag::SameSign => LunarPattern::SameSign,
            LunarPatternTag::SameSignSelfPunish => LunarPattern::SameSignSelfPunish,
            LunarPatternTag::TrineHarmony => LunarPattern::TrineHarmony,
            LunarPatternTag::SecretFriend => LunarPattern::SecretFriend,
            LunarPatternTag::Clash => LunarPattern::Clash,
            LunarPatternTag::Harm => LunarPattern::Harm,
            LunarPatternTag::Punishment => LunarPattern::Punishment,
            LunarPatternTag::Break => LunarPattern::Break,
            LunarPatternTag::None => LunarPattern::CrossTrine,
        }
    }

    /// Classically good patterns, used by the five-element bonus.
    pub fn is_good(self) -> bool {
        matches!(
            self,
            LunarPattern::TrineHarmony | LunarPattern::SecretFriend | LunarPattern::SameTrine
        )
    }

    /// Classically difficult patterns.
    pub fn is_difficult(self) -> bool {
        matches!(
            self,
            LunarPattern::Clash | LunarPattern::Harm | LunarPattern::Punishment | LunarPattern::Break
        )
    }

    /// Strong patterns carry the 0.70/0.30 blend; weak/neutral ones the
    /// 0.65/0.35 blend.
    pub fn is_strong(self) -> bool {
        !matches!(self, LunarPattern::SameTrine | LunarPattern::CrossTrine)
    }

    pub fn is_same_sign(self) -> bool {
        matches!(
            self,
            LunarPattern::SameSign | LunarPattern::SameSignSelfPunish
        )
    }

    /// Classical identifier used in tags and serialized output.
    pub fn id(self) -> &'static str {
        match self {
            LunarPattern::SameSign => "same_sign",
            LunarPattern::SameSignSelfPunish => "same_sign_self_punish",
            LunarPattern::TrineHarmony => "san_he",
            LunarPattern::SameTrine => "same_trine",
            LunarPattern::SecretFriend => "liu_he",
            LunarPattern::Clash => "liu_chong",
            LunarPattern::Harm => "liu_hai",
            LunarPattern::Punishment => "xing",
            LunarPattern::Break => "po",
            LunarPattern::CrossTrine => "cross_trine",
        }
    }
}

/// Classify the primary pattern for a pair of animals.
///
/// Fixed descending priority, first match wins:
/// 1. same animal (self-punish set decides the variant)
/// 2. Liu Chong clash
/// 3. Liu Hai harm
/// 4. San He trine harmony (distinct animals in the same trine)
/// 5. Liu He secret friend
/// 6. Xing punishment
/// 7. Po break
/// 8. none
pub fn primary_pattern_tag(a: LunarAnimal, b: LunarAnimal) -> LunarPatternTag {
    if a == b {
        if SELF_PUNISH_ANIMALS.contains(&a) {
            return LunarPatternTag::SameSignSelfPunish;
        }
        return LunarPatternTag::SameSign;
    }

    if in_pair_list(a, b, CLASH_PAIRS) {
        return LunarPatternTag::Clash;
    }

    if in_pair_list(a, b, HARM_PAIRS) {
        return LunarPatternTag::Harm;
    }

    if a.trine() == b.trine() {
        return LunarPatternTag::TrineHarmony;
    }

    if in_pair_list(a, b, SECRET_FRIEND_PAIRS) {
        return LunarPatternTag::SecretFriend;
    }

    if in_pair_list(a, b, PUNISHMENT_PAIRS) {
        return LunarPatternTag::Punishment;
    }

    if in_pair_list(a, b, BREAK_PAIRS) {
        return LunarPatternTag::Break;
    }

    LunarPatternTag::None
}

/// Every damage table the pair appears in, independent of precedence.
///
/// The primary tag alone drives scoring; overlays only enrich the result's
/// tag list (a San He pair can still sit on a Po axis, and readers care).
pub fn overlay_patterns(a: LunarAnimal, b: LunarAnimal) -> SmallVec<[LunarPatternTag; 4]> {
    let mut overlays = SmallVec::new();

    if in_pair_list(a, b, CLASH_PAIRS) {
        overlays.push(LunarPatternTag::Clash);
    }
    if in_pair_list(a, b, HARM_PAIRS) {
        overlays.push(LunarPatternTag::Harm);
    }
    if in_pair_list(a, b, PUNISHMENT_PAIRS) || (a == b && SELF_PUNISH_ANIMALS.contains(&a)) {
        overlays.push(LunarPatternTag::Punishment);
    }
    if in_pair_list(a, b, BREAK_PAIRS) {
        overlays.push(LunarPatternTag::Break);
    }

    overlays
}

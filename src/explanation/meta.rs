//! Pattern display metadata.
//!
//! Maps each compositor-level pattern to its labels and a one-sentence
//! tagline. The tagline seeds the east rationale; labels surface in UI
//! chips and serialized results.

use crate::classify::LunarPattern;

/// Display metadata for one lunar pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternMeta {
    pub label_en: &'static str,
    /// Bilingual full label, e.g. "San He 三合 · Triple Harmony".
    pub label_full: &'static str,
    pub tagline: &'static str,
}

static TRINE_HARMONY: PatternMeta = PatternMeta {
    label_en: "Triple Harmony",
    label_full: "San He 三合 · Triple Harmony",
    tagline: "High natural harmony and shared rhythm; when you're aligned, this connection moves fast and far.",
};

static SECRET_FRIEND: PatternMeta = PatternMeta {
    label_en: "Secret Friends",
    label_full: "Liu He 六合 · Secret Friends",
    tagline: "Quietly strong bond that feels safe, loyal, and steady when you choose each other.",
};

static SAME_SIGN: PatternMeta = PatternMeta {
    label_en: "Same Sign",
    label_full: "Same Sign 同生肖",
    tagline: "Mirror-match energy with strong familiarity and shared habits; comforting, but not automatically harmonious.",
};

static SAME_SIGN_SELF_PUNISH: PatternMeta = PatternMeta {
    label_en: "Same Sign (Self-Punish)",
    label_full: "Same Sign 同生肖 · Zi Xing 自刑",
    tagline: "Mirror-match energy that can turn inward; the pair shares blind spots as easily as habits.",
};

static SAME_TRINE: PatternMeta = PatternMeta {
    label_en: "Same Trine",
    label_full: "Same Trine · Kindred Temperaments",
    tagline: "Kindred temperaments from the same trine; easy day-to-day rhythm without the full classical harmony.",
};

static CROSS_TRINE: PatternMeta = PatternMeta {
    label_en: "Neutral",
    label_full: "Neutral 中",
    tagline: "No classical pattern; the connection depends more on timing, effort, and your Western signs.",
};

static CLASH: PatternMeta = PatternMeta {
    label_en: "Six Conflicts",
    label_full: "Liu Chong 六冲 · Six Conflicts",
    tagline: "Magnetic opposites with sharp edges; big lessons, not automatic comfort.",
};

static HARM: PatternMeta = PatternMeta {
    label_en: "Six Harms",
    label_full: "Liu Hai 六害 · Six Harms",
    tagline: "Sensitive pattern where small misreads can snowball; this match needs patience and very clear communication.",
};

static PUNISHMENT: PatternMeta = PatternMeta {
    label_en: "Punishment Pattern",
    label_full: "Xing 刑 · Punishment Pattern",
    tagline: "Tension and sharp edges; situations can feel strict or demanding.",
};

static BREAK: PatternMeta = PatternMeta {
    label_en: "Break Pattern",
    label_full: "Po 破 · Break Pattern",
    tagline: "This bond tends to disrupt old patterns; growth is possible but rarely feels easy or predictable.",
};

/// Metadata for a pattern.
pub fn pattern_meta(pattern: LunarPattern) -> &'static PatternMeta {
    match pattern {
        LunarPattern::TrineHarmony => &TRINE_HARMONY,
        LunarPattern::SecretFriend => &SECRET_FRIEND,
        LunarPattern::SameSign => &SAME_SIGN,
        LunarPattern::SameSignSelfPunish => &SAME_SIGN_SELF_PUNISH,
        LunarPattern::SameTrine => &SAME_TRINE,
        LunarPattern::CrossTrine => &CROSS_TRINE,
        LunarPattern::Clash => &CLASH,
        LunarPattern::Harm => &HARM,
        LunarPattern::Punishment => &PUNISHMENT,
        LunarPattern::Break => &BREAK,
    }
}

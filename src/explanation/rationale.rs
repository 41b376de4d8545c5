//! Rationale text builders.
//!
//! One short paragraph per taxonomy: the east side leads with the pattern
//! label and tagline plus a Wu Xing note, the west side phrases the aspect
//! and element relation. Plain sentences, no jargon the reader has to
//! decode.

use crate::classify::{Aspect, ElementRelation, FiveElementRelation};
use crate::context::MatchContext;
use crate::explanation::meta::pattern_meta;

fn aspect_phrase(aspect: Aspect) -> &'static str {
    match aspect {
        Aspect::SameSign => "the same sun sign mirrors strengths and blind spots alike",
        Aspect::Trine => "a flowing trine aspect gives the pair easy mutual understanding",
        Aspect::Sextile => "a friendly sextile keeps conversation and plans moving",
        Aspect::Square => "a square aspect adds friction that demands compromise",
        Aspect::Quincunx => "a quincunx aspect makes the two styles hard to reconcile",
        Aspect::Opposition => "opposite signs pull with magnetic, polarised energy",
        Aspect::None => "no major aspect links the two suns, so other factors lead",
    }
}

fn wu_xing_phrase(relation: FiveElementRelation) -> &'static str {
    match relation {
        FiveElementRelation::Supportive => {
            "The birth-year elements feed each other along the generating cycle."
        }
        FiveElementRelation::Same => {
            "Both birth years share the same element, doubling its temperament."
        }
        FiveElementRelation::Clashing => {
            "The birth-year elements sit on the controlling cycle and work at cross purposes."
        }
        FiveElementRelation::Neutral => "The birth-year elements neither feed nor check each other.",
    }
}

/// East (lunar) rationale: pattern label + tagline + Wu Xing note.
pub fn east_rationale(ctx: &MatchContext) -> String {
    let meta = pattern_meta(ctx.pattern);
    format!(
        "{} × {} — {}: {} {}",
        ctx.a.animal,
        ctx.b.animal,
        meta.label_full,
        meta.tagline,
        wu_xing_phrase(ctx.five_element_relation),
    )
}

/// West (solar) rationale: aspect phrase + element relation phrase.
pub fn west_rationale(ctx: &MatchContext) -> String {
    let elem_a = ctx.a.sign.element();
    let elem_b = ctx.b.sign.element();

    let element_sentence = match ctx.element_relation {
        ElementRelation::Same => format!("Both share the {} element.", elem_a),
        ElementRelation::Compatible => {
            format!("{} and {} elements feed each other.", elem_a, elem_b)
        }
        ElementRelation::SemiCompatible => format!(
            "{} and {} elements coexist with some translation needed.",
            elem_a, elem_b
        ),
        ElementRelation::Clash => format!(
            "{} and {} elements work at cross purposes.",
            elem_a, elem_b
        ),
        ElementRelation::Neutral => format!("{} and {} elements stay neutral.", elem_a, elem_b),
    };

    format!(
        "{} × {} — {}; {}",
        ctx.a.sign,
        ctx.b.sign,
        aspect_phrase(ctx.aspect),
        element_sentence,
    )
}

//! Pure classifiers.
//!
//! Each submodule is a total, symmetric, side-effect-free function over its
//! categorical inputs:
//! - `aspect`: geometric aspect + element relation between two solar signs
//! - `pattern`: priority-ordered classical pattern tag for two lunar animals
//! - `wuxing`: year element derivation and generating/controlling relation

pub mod aspect;
pub mod pattern;
pub mod wuxing;

pub use aspect::{calculate_aspect, element_relation, Aspect, ElementRelation};
pub use pattern::{
    overlay_patterns, primary_pattern_tag, LunarPattern, LunarPatternTag,
};
pub use wuxing::{five_element_relation, year_element, FiveElementRelation};

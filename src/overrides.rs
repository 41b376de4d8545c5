//! Manual score overrides.
//!
//! A sparse, externally-owned layer keyed by a canonical order-independent
//! pair identifier. An entry may replace the computed raw score and/or
//! supply narrative text. Overrides are consumed here, never authored: they
//! sit strictly on top of the penalty/cap rules, so a same-solar-sign pair
//! keeps its penalty even when its score is pinned.

use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::signs::{LunarAnimal, SolarSign};

/// Canonical pair identifier: `"{sign}_{animal}|{sign}_{animal}"`,
/// lowercase, halves sorted lexicographically so both argument orders
/// produce the same key.
pub fn pair_key(
    sign_a: SolarSign,
    animal_a: LunarAnimal,
    sign_b: SolarSign,
    animal_b: LunarAnimal,
) -> String {
    let a = format!(
        "{}_{}",
        sign_a.name().to_ascii_lowercase(),
        animal_a.name().to_ascii_lowercase()
    );
    let b = format!(
        "{}_{}",
        sign_b.name().to_ascii_lowercase(),
        animal_b.name().to_ascii_lowercase()
    );
    if a <= b {
        format!("{}|{}", a, b)
    } else {
        format!("{}|{}", b, a)
    }
}

/// One override entry. All fields optional: a text-only entry leaves the
/// computed score alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreOverride {
    /// Replacement for the raw composite score (0-100). Still subject to
    /// the same-sign penalty/cap and tier re-clamping.
    pub score: Option<u8>,
    /// Replacement east (lunar) rationale text.
    pub east_text: Option<String>,
    /// Replacement west (solar) rationale text.
    pub west_text: Option<String>,
}

/// Sparse override table. Small string keys, so FxHashMap.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: FxHashMap<String, ScoreOverride>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON object of `pair_key -> entry`. Keys are
    /// re-canonicalized on insert so hand-edited files may list either
    /// order.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read override table {:?}", path))?;
        let raw: FxHashMap<String, ScoreOverride> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse override table {:?}", path))?;

        let mut table = Self::new();
        for (key, entry) in raw {
            table.entries.insert(canonicalize_key(&key)?, entry);
        }
        Ok(table)
    }

    pub fn insert(
        &mut self,
        sign_a: SolarSign,
        animal_a: LunarAnimal,
        sign_b: SolarSign,
        animal_b: LunarAnimal,
        entry: ScoreOverride,
    ) {
        self.entries
            .insert(pair_key(sign_a, animal_a, sign_b, animal_b), entry);
    }

    pub fn get(
        &self,
        sign_a: SolarSign,
        animal_a: LunarAnimal,
        sign_b: SolarSign,
        animal_b: LunarAnimal,
    ) -> Option<&ScoreOverride> {
        self.entries
            .get(&pair_key(sign_a, animal_a, sign_b, animal_b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Re-sort the halves of a `a|b` key so lookups hit regardless of the order
/// the file author used.
fn canonicalize_key(key: &str) -> Result<String> {
    let (a, b) = key
        .split_once('|')
        .with_context(|| format!("Override key '{}' is missing the '|' separator", key))?;
    let a = a.trim().to_ascii_lowercase();
    let b = b.trim().to_ascii_lowercase();
    Ok(if a <= b {
        format!("{}|{}", a, b)
    } else {
        format!("{}|{}", b, a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signs::{LunarAnimal::*, SolarSign::*};

    #[test]
    fn test_pair_key_is_order_independent() {
        let forward = pair_key(Aquarius, Monkey, Gemini, Rat);
        let reverse = pair_key(Gemini, Rat, Aquarius, Monkey);
        assert_eq!(forward, reverse);
        assert_eq!(forward, "aquarius_monkey|gemini_rat");
    }

    #[test]
    fn test_lookup_both_orders() {
        let mut table = OverrideTable::new();
        table.insert(
            Libra,
            Dragon,
            Pisces,
            Dragon,
            ScoreOverride {
                score: Some(94),
                east_text: None,
                west_text: None,
            },
        );

        assert_eq!(
            table.get(Pisces, Dragon, Libra, Dragon).unwrap().score,
            Some(94)
        );
        assert!(table.get(Libra, Dragon, Libra, Dragon).is_none());
    }

    #[test]
    fn test_canonicalize_key_resorts_halves() {
        assert_eq!(
            canonicalize_key("gemini_rat|aquarius_monkey").unwrap(),
            "aquarius_monkey|gemini_rat"
        );
        assert!(canonicalize_key("no-separator").is_err());
    }
}

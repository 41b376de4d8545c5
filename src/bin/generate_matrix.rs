// Generate the full pairwise compatibility matrix.
//
// Scores every (sign, animal) x (sign, animal) combination at fixed
// reference years, writes the cells as JSON, and prints the tier
// distribution so table tweaks can be eyeballed before shipping.
//
// Usage: cargo run --release --bin generate_matrix [output.json]

use match_scorer_rust::{LunarAnimal, MatchScorer, Profile, SolarSign};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

// Fixed years so the matrix is reproducible. 1984 vs 1990 puts a Wood year
// against a Metal year, so the clashing Wu Xing path is exercised.
const VIEWER_YEAR: i32 = 1984;
const PARTNER_YEAR: i32 = 1990;

#[derive(Serialize)]
struct PairRow {
    sign_a: SolarSign,
    animal_a: LunarAnimal,
    sign_b: SolarSign,
    animal_b: LunarAnimal,
    score: u8,
    tier: String,
}

fn main() -> anyhow::Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "pair_matrix.json".to_string());

    let scorer = MatchScorer::new();
    let scorer = &scorer;

    let viewers: Vec<(SolarSign, LunarAnimal)> = SolarSign::ALL
        .iter()
        .flat_map(|&sign| LunarAnimal::ALL.iter().map(move |&animal| (sign, animal)))
        .collect();

    println!(
        "Scoring {} viewer combinations x 144 partners...",
        viewers.len()
    );

    let rows: Vec<PairRow> = viewers
        .par_iter()
        .flat_map_iter(|&(sign_a, animal_a)| {
            SolarSign::ALL.iter().flat_map(move |&sign_b| {
                LunarAnimal::ALL.iter().map(move |&animal_b| {
                    let result = scorer.evaluate(
                        Profile::new(sign_a, animal_a, VIEWER_YEAR),
                        Profile::new(sign_b, animal_b, PARTNER_YEAR),
                    );
                    PairRow {
                        sign_a,
                        animal_a,
                        sign_b,
                        animal_b,
                        score: result.score,
                        tier: result.tier_label,
                    }
                })
            })
        })
        .collect();

    // Tier distribution summary
    let mut distribution: FxHashMap<&str, usize> = FxHashMap::default();
    for row in &rows {
        *distribution.entry(row.tier.as_str()).or_default() += 1;
    }

    println!("\nTier distribution over {} pairs:", rows.len());
    let mut entries: Vec<_> = distribution.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    for (tier, count) in entries {
        println!(
            "  {:<18} {:>6} ({:.1}%)",
            tier,
            count,
            100.0 * count as f64 / rows.len() as f64
        );
    }

    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(&output_path, json)?;
    println!("\nWrote {} rows to {}", rows.len(), output_path);

    Ok(())
}

// Sanity-check the score distribution over random profile pairs.
//
// Samples N random pairs, prints a score histogram and the tier
// distribution. A table change that silently collapses everything into one
// tier shows up here immediately.
//
// Usage: cargo run --release --bin simulate_matches [n_pairs]

use match_scorer_rust::{LunarAnimal, MatchScorer, Profile, SolarSign};
use rand::prelude::*;
use rustc_hash::FxHashMap;

fn random_profile(rng: &mut impl Rng) -> Profile {
    let sign = SolarSign::ALL[rng.gen_range(0..12)];
    let animal = LunarAnimal::ALL[rng.gen_range(0..12)];
    let year = rng.gen_range(1950..=2010);
    Profile::new(sign, animal, year)
}

fn main() {
    let n_pairs: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100_000);

    let scorer = MatchScorer::new();
    let mut rng = StdRng::seed_from_u64(42); // reproducible runs

    let mut histogram = [0usize; 11]; // 10-point buckets
    let mut tiers: FxHashMap<String, usize> = FxHashMap::default();
    let mut min_score = u8::MAX;
    let mut max_score = 0u8;

    println!("Scoring {} random pairs...", n_pairs);

    for _ in 0..n_pairs {
        let a = random_profile(&mut rng);
        let b = random_profile(&mut rng);
        let result = scorer.evaluate(a, b);

        histogram[(result.score / 10) as usize] += 1;
        *tiers.entry(result.tier_label).or_default() += 1;
        min_score = min_score.min(result.score);
        max_score = max_score.max(result.score);
    }

    println!("\nScore histogram (10-point buckets):");
    for (bucket, count) in histogram.iter().enumerate() {
        let bar_len = count * 60 / n_pairs.max(1);
        println!(
            "  {:>3}-{:<3} {:>7} {}",
            bucket * 10,
            (bucket * 10 + 9).min(100),
            count,
            "#".repeat(bar_len)
        );
    }

    println!("\nTier distribution:");
    let mut entries: Vec<_> = tiers.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    for (tier, count) in entries {
        println!(
            "  {:<18} {:>7} ({:.1}%)",
            tier,
            count,
            100.0 * count as f64 / n_pairs as f64
        );
    }

    println!("\nScore range observed: {} - {}", min_score, max_score);
}

// Score one match from the command line.
//
// Usage: cargo run --bin inspect_match -- <sign_a> <animal_a> <year_a> <sign_b> <animal_b> <year_b>
// Example: cargo run --bin inspect_match -- Aries Rat 1984 Leo Dragon 1988

use match_scorer_rust::{LunarAnimal, MatchScorer, Profile, SolarSign};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 6 {
        anyhow::bail!(
            "expected 6 arguments: <sign_a> <animal_a> <year_a> <sign_b> <animal_b> <year_b>"
        );
    }

    // Fail fast on bad input before any classification runs.
    let sign_a: SolarSign = args[0].parse()?;
    let animal_a: LunarAnimal = args[1].parse()?;
    let year_a: i32 = args[2].parse()?;
    let sign_b: SolarSign = args[3].parse()?;
    let animal_b: LunarAnimal = args[4].parse()?;
    let year_b: i32 = args[5].parse()?;

    let scorer = MatchScorer::new();
    let result = scorer.evaluate(
        Profile::new(sign_a, animal_a, year_a),
        Profile::new(sign_b, animal_b, year_b),
    );

    println!(
        "{} {} ({}) x {} {} ({})",
        sign_a, animal_a, year_a, sign_b, animal_b, year_b
    );
    println!();
    println!("  Score: {}%  ·  {}", result.score, result.tier_label);
    println!(
        "  Chemistry {:.1} / Stability {:.1}",
        result.chemistry_stars, result.stability_stars
    );
    println!();
    println!("  East: {}", result.east_rationale);
    println!("  West: {}", result.west_rationale);
    println!();
    println!("  Tags: {}", result.tags.join(", "));

    Ok(())
}

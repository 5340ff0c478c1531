// ============================================================================
// Basic Usage Example
// ============================================================================

use pifind::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Pifind Example ===\n");

    // Size the run for 200 trustworthy fractional digits
    let config = ComputeConfig::for_digits(200)
        .with_term_generation(TermGenerationKind::Incremental);

    let engine = create_from_config(&config, Arc::new(NoOpObserver)).unwrap();

    // 15 terms converge just over 200 fractional digits
    let result = engine.run(&IterationBudget::new(15)).unwrap();
    println!(
        "Completed {} terms in {:?} ({} trusted fractional digits)\n",
        result.completed_terms(),
        result.elapsed(),
        result.trusted_decimal_digits()
    );

    let digits = result.digits(config.fractional_digits);
    println!("pi = {}\n", digits);

    // Search within the converged prefix only
    for pattern in ["14159", "358979", "123456"] {
        match find_sequence(&digits, pattern, SearchScope::TrustedOnly).unwrap() {
            SearchOutcome::Found { decimal_place } => {
                println!("{pattern}: found at decimal place {decimal_place}");
            },
            SearchOutcome::NotFound => {
                println!("{pattern}: not found in the first {} digits", digits.trusted_digits());
            },
        }
    }
}

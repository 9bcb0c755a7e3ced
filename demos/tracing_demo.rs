//! Demonstrates tracing output from rule builders
//!
//! Run with: cargo run --example tracing_demo --features tracing

use tideline::prelude::*;

fn main() {
    // Builders log at trace and debug level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Building rules");

    let rules = [
        present(["a", "b", "c"], PresenceOptions::new()),
        absent(["a", "b", "c"], AbsenceOptions::new().at_least(1).at_most(2)),
        attributes_absent("deleted_at", AbsenceOptions::new()),
        // Rejected: identifiers cannot contain spaces
        confirm("email", "email confirmation"),
    ];

    for result in rules {
        match result {
            Ok(rule) => tracing::info!(kind = %rule.kind(), "built"),
            Err(e) => tracing::warn!("rejected: {}", e),
        }
    }
}

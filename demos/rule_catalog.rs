//! Rule catalog example - declaring the validations of a signup resource
//!
//! Run with: cargo run --example rule_catalog

use tideline::prelude::*;

fn signup_validations() -> Result<Vec<ValidationEntry>, BuildError> {
    Ok(vec![
        // Identity fields are required on create
        ValidationEntry::new(present(["email", "username"], PresenceOptions::new())?)
            .on([ActionType::Create]),
        ValidationEntry::new(confirm("password", "password_confirmation")?)
            .when(changing("password", ChangingOptions::new())?)
            .with_message("passwords do not match"),
        ValidationEntry::new(string_length(
            "username",
            LengthOptions::new().min(3).max(20),
        )?),
        ValidationEntry::new(matches("username", "^[a-z0-9_]+$")?),
        ValidationEntry::new(numericality(
            "age",
            CompareOptions::new().greater_than_or_equal_to(13),
        )?),
        // Accounts are contactable through at most one channel
        ValidationEntry::new(absent(
            ["phone", "fax", "pager"],
            AbsenceOptions::new().at_least(2),
        )?),
        ValidationEntry::new(one_of("plan", [Value::symbol("free"), Value::symbol("pro")])?)
            .when(negate(action_is("import")?)),
    ])
}

fn main() {
    println!("=== Signup resource ===\n");

    let entries = match signup_validations() {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("invalid declaration: {}", e);
            return;
        }
    };

    for entry in &entries {
        let rule = entry.rule();
        let fields: Vec<&str> = rule.fields().iter().map(|f| f.as_str()).collect();
        println!("{:<20} fields={:?}", rule.kind(), fields);
        if let Some(q) = rule.quantifier() {
            println!("{:<20} quantifier={:?}", "", q);
        }
        if !entry.conditions().is_empty() {
            println!("{:<20} where={} guard(s)", "", entry.conditions().len());
        }
    }

    println!("\n=== Malformed declaration ===\n");
    match present(["email", "user name"], PresenceOptions::new()) {
        Ok(rule) => println!("unexpected: {:?}", rule),
        Err(e) => println!("rejected: {}", e),
    }
}

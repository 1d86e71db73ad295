//! The `entrycheck validate` command.

use std::path::PathBuf;

use anyhow::Result;

use entrycheck_core::parser::{parse_rule_table, validate_rule_table};

pub fn execute(rules_path: PathBuf) -> Result<()> {
    let table = match parse_rule_table(&rules_path) {
        Ok(table) => table,
        Err(e) if e.is_syntax() => return Err(e.into()),
        Err(e) => anyhow::bail!("invalid rule table {}: {e}", rules_path.display()),
    };

    println!(
        "Rule table: {} ({} qualifications)",
        rules_path.display(),
        table.len()
    );

    let warnings = validate_rule_table(&table);
    for w in &warnings {
        let prefix = w
            .qualification
            .map(|q| format!("  [{q}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Rule table valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

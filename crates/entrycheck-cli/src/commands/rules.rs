//! The `entrycheck rules` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use entrycheck_core::model::{QualificationType, Subject};
use entrycheck_core::parser::{load_rule_table, resolve_rules_path};
use entrycheck_core::rules::EntryRule;

const SUBJECT_COLUMNS: [Subject; 3] = [
    Subject::English,
    Subject::BahasaMalaysia,
    Subject::Mathematics,
];

pub fn execute(qualification: Option<QualificationType>, rules_path: Option<PathBuf>) -> Result<()> {
    let source = resolve_rules_path(rules_path.as_deref());
    let table = load_rule_table(source.as_deref()).context("failed to load rule table")?;

    match &source {
        Some(path) => println!("Rules: {}", path.display()),
        None => println!("Rules: built-in"),
    }

    let rows: Vec<&EntryRule> = table
        .rules()
        .filter(|r| qualification.is_none_or(|q| q == r.qualification))
        .collect();

    if rows.is_empty() {
        println!("No rules defined for the selected qualification.");
        return Ok(());
    }

    let mut out = Table::new();
    let mut header = vec![
        "Qualification".to_string(),
        "Min credits".to_string(),
        "Credit grade".to_string(),
    ];
    header.extend(SUBJECT_COLUMNS.iter().map(Subject::to_string));
    out.set_header(header);

    for rule in &rows {
        let mut cells = vec![
            Cell::new(rule.qualification),
            Cell::new(rule.min_credits),
            Cell::new(rule.credit_grade),
        ];
        cells.extend(SUBJECT_COLUMNS.iter().map(|subject| {
            match rule.minimum(*subject) {
                Some(grade) => Cell::new(format!(">= {grade}")),
                None => Cell::new("n/a"),
            }
        }));
        out.add_row(cells);
    }

    println!("{out}");

    for rule in &rows {
        for note in &rule.notes {
            println!("[{}] {note}", rule.qualification);
        }
    }

    Ok(())
}

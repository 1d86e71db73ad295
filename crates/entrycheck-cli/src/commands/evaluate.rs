//! The `entrycheck evaluate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use entrycheck_core::engine::Evaluator;
use entrycheck_core::model::{EvaluationInput, QualificationType};
use entrycheck_core::parser::load_rule_table;
use entrycheck_core::report::EvaluationRecord;

/// Exit code when the requirements are not met.
const NOT_MET_EXIT_CODE: i32 = 2;

pub fn execute(
    qualification: QualificationType,
    credits: String,
    english: String,
    math: String,
    bm: String,
    rules_path: Option<PathBuf>,
    format: String,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format: {format} (expected text or json)"
    );

    let table = load_rule_table(rules_path.as_deref()).context("failed to load rule table")?;
    let evaluator = Evaluator::new(table);

    if qualification != QualificationType::Spm && !bm.is_empty() {
        tracing::info!("--bm is only used for SPM, ignoring it for {qualification}");
    }

    let input = EvaluationInput::from_raw(qualification, &credits, &english, &math, &bm);
    let record = EvaluationRecord::evaluate(&evaluator, input);

    if format == "json" {
        println!("{}", record.to_json()?);
    } else {
        println!("{}", record.result.message);
        if !record.notes.is_empty() {
            println!();
            for note in &record.notes {
                println!("{note}");
            }
        }
    }

    if !record.result.passed {
        std::process::exit(NOT_MET_EXIT_CODE);
    }

    Ok(())
}

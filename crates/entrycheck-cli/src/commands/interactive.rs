//! The `entrycheck interactive` command.
//!
//! A line-oriented stand-in for the checker screen: each line on stdin is a
//! command that edits the session or evaluates it.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use entrycheck_core::engine::Evaluator;
use entrycheck_core::model::QualificationType;
use entrycheck_core::parser::load_rule_table;
use entrycheck_core::session::{EvaluationSession, Field};

const HELP: &str = "\
Commands:
  select <spm|olevel|uec>   choose a qualification (clears all fields)
  set <field> [value]       set credits, english, bm or math
  evaluate                  check the current fields
  show                      print the current fields and result
  help                      show this help
  quit                      leave";

pub fn execute(rules_path: Option<PathBuf>) -> Result<()> {
    let table = load_rule_table(rules_path.as_deref()).context("failed to load rule table")?;
    let evaluator = Evaluator::new(table);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&evaluator, stdin.lock(), stdout.lock())
}

/// Drive a session from `input`, writing responses to `out`.
pub fn run<R: BufRead, W: Write>(evaluator: &Evaluator, input: R, mut out: W) -> Result<()> {
    let mut session = EvaluationSession::default();

    writeln!(out, "entrycheck: type `help` for commands")?;
    writeln!(out, "Qualification: {}", session.qualification())?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match command.to_lowercase().as_str() {
            "select" => match rest.parse::<QualificationType>() {
                Ok(qualification) => {
                    session.select_qualification(qualification);
                    writeln!(out, "Qualification: {qualification} (fields cleared)")?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match name.parse::<Field>() {
                    Ok(field) if !session.visible_fields().contains(&field) => {
                        writeln!(
                            out,
                            "{field} is not used for {}",
                            session.qualification()
                        )?;
                    }
                    Ok(field) => {
                        session.set_field(field, value.trim());
                        writeln!(out, "{field} = {:?}", session.field(field))?;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            "evaluate" | "eval" => {
                let message = session.evaluate(evaluator).message.clone();
                writeln!(out, "{message}")?;
                for note in session.notes(evaluator) {
                    writeln!(out, "{note}")?;
                }
            }
            "show" => show(&session, evaluator, &mut out)?,
            "help" | "?" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command: {other} (try `help`)")?,
        }
    }

    out.flush()?;
    Ok(())
}

fn show<W: Write>(session: &EvaluationSession, evaluator: &Evaluator, out: &mut W) -> Result<()> {
    writeln!(out, "Qualification: {}", session.qualification())?;
    for field in session.visible_fields() {
        writeln!(
            out,
            "  {} [{field}]: {}",
            session.label(field, evaluator),
            session.field(field)
        )?;
    }
    match session.result() {
        Some(result) => writeln!(out, "Result: {}", result.message)?,
        None => writeln!(out, "Result: (none)")?,
    }
    Ok(())
}

//! TOML rule table parser.
//!
//! Loads rule tables from TOML files, resolves which file to use, and
//! validates tables for rows that can never behave as intended.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::RuleTableError;
use crate::grade::Grade;
use crate::model::{QualificationType, Subject};
use crate::rules::{EntryRule, RuleTable};

/// Rule file looked up in the current directory.
pub const LOCAL_RULES_FILE: &str = "entrycheck.toml";

/// Environment variable naming a rule file to use instead of searching.
pub const RULES_ENV_VAR: &str = "ENTRYCHECK_RULES";

/// Intermediate TOML structure for parsing rule table files.
#[derive(Debug, Deserialize)]
struct TomlRuleFile {
    #[serde(default)]
    qualifications: Vec<TomlRule>,
}

#[derive(Debug, Deserialize)]
struct TomlRule {
    qualification: String,
    min_credits: u32,
    #[serde(default = "default_credit_grade")]
    credit_grade: String,
    #[serde(default)]
    grades: BTreeMap<String, String>,
    #[serde(default)]
    notes: Vec<String>,
}

fn default_credit_grade() -> String {
    "C".to_string()
}

/// Parse a single TOML file into a `RuleTable`.
pub fn parse_rule_table(path: &Path) -> Result<RuleTable, RuleTableError> {
    let content = std::fs::read_to_string(path).map_err(|source| RuleTableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rule_table_str(&content, path)
}

/// Parse a TOML string into a `RuleTable` (useful for testing).
pub fn parse_rule_table_str(content: &str, source_path: &Path) -> Result<RuleTable, RuleTableError> {
    let parsed: TomlRuleFile = toml::from_str(content).map_err(|source| RuleTableError::Parse {
        path: source_path.to_path_buf(),
        source,
    })?;

    let rules = parsed
        .qualifications
        .into_iter()
        .map(|r| {
            let qualification: QualificationType = r
                .qualification
                .parse()
                .map_err(|_| RuleTableError::UnknownQualification(r.qualification.clone()))?;

            let credit_grade = parse_grade(qualification, "credit_grade", &r.credit_grade)?;

            let grades = r
                .grades
                .into_iter()
                .map(|(subject, grade)| {
                    let parsed_subject: Subject =
                        subject
                            .parse()
                            .map_err(|_| RuleTableError::UnknownSubject {
                                qualification,
                                subject: subject.clone(),
                            })?;
                    let minimum = parse_grade(qualification, &subject, &grade)?;
                    Ok((parsed_subject, minimum))
                })
                .collect::<Result<BTreeMap<_, _>, RuleTableError>>()?;

            Ok(EntryRule {
                qualification,
                min_credits: r.min_credits,
                credit_grade,
                grades,
                notes: r.notes,
            })
        })
        .collect::<Result<Vec<_>, RuleTableError>>()?;

    RuleTable::from_rules(rules)
}

/// Rule files must spell grades as a single letter; unlike applicant input,
/// a malformed grade here is an error.
fn parse_grade(
    qualification: QualificationType,
    field: &str,
    value: &str,
) -> Result<Grade, RuleTableError> {
    let mut chars = value.chars();
    match (chars.next().and_then(Grade::new), chars.next()) {
        (Some(grade), None) => Ok(grade),
        _ => Err(RuleTableError::InvalidGrade {
            qualification,
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Decide which rule file to load, if any.
///
/// Search order:
/// 1. An explicit path (e.g. `--rules`)
/// 2. The `ENTRYCHECK_RULES` environment variable
/// 3. `entrycheck.toml` in the current directory
/// 4. `~/.config/entrycheck/rules.toml`
///
/// Returns `None` when nothing is found, meaning the built-in table applies.
pub fn resolve_rules_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    if let Ok(p) = std::env::var(RULES_ENV_VAR) {
        if !p.is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from(LOCAL_RULES_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs_path()
        .map(|dir| dir.join("rules.toml"))
        .filter(|global| global.exists())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("entrycheck"))
}

/// Load the rule table from an explicit path or the default locations,
/// falling back to the built-in table.
pub fn load_rule_table(explicit: Option<&Path>) -> Result<RuleTable, RuleTableError> {
    match resolve_rules_path(explicit) {
        Some(path) => {
            tracing::debug!("loading rule table from {}", path.display());
            parse_rule_table(&path)
        }
        None => {
            tracing::debug!("no rule file found, using built-in rules");
            Ok(RuleTable::builtin())
        }
    }
}

/// A warning from rule table validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The qualification concerned (if applicable).
    pub qualification: Option<QualificationType>,
    /// Warning message.
    pub message: String,
}

/// Validate a rule table for common issues.
pub fn validate_rule_table(table: &RuleTable) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Qualifications without a row can never pass
    let present: HashSet<QualificationType> = table.rules().map(|r| r.qualification).collect();
    for qualification in QualificationType::ALL {
        if !present.contains(&qualification) {
            warnings.push(ValidationWarning {
                qualification: Some(qualification),
                message: format!("no rule for {qualification}; its applicants never pass"),
            });
        }
    }

    // Subjects the qualification's input does not carry can never be met
    for rule in table.rules() {
        for subject in rule.grades.keys() {
            if !rule.qualification.subjects().contains(subject) {
                warnings.push(ValidationWarning {
                    qualification: Some(rule.qualification),
                    message: format!(
                        "{subject} is required but {} applicants do not enter it",
                        rule.qualification
                    ),
                });
            }
        }
    }

    for rule in table.rules() {
        if rule.min_credits == 0 {
            warnings.push(ValidationWarning {
                qualification: Some(rule.qualification),
                message: "min_credits is 0; the credit check always passes".into(),
            });
        }
    }

    warnings
}

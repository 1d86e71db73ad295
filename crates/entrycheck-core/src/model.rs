//! Core data model types for entrycheck.
//!
//! These are the types the evaluator, the rule table and the screen session
//! share: the qualification being assessed, the subjects graded, the
//! per-qualification input snapshot, and the evaluation outcome.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Secondary-school qualification types with their own entry requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualificationType {
    #[serde(rename = "SPM")]
    Spm,
    #[serde(rename = "OLevel")]
    OLevel,
    #[serde(rename = "UEC")]
    Uec,
}

impl QualificationType {
    /// Every qualification, in display order.
    pub const ALL: [QualificationType; 3] = [
        QualificationType::Spm,
        QualificationType::OLevel,
        QualificationType::Uec,
    ];

    /// Subjects whose grades an applicant with this qualification enters.
    pub fn subjects(self) -> &'static [Subject] {
        match self {
            QualificationType::Spm => &[
                Subject::English,
                Subject::BahasaMalaysia,
                Subject::Mathematics,
            ],
            QualificationType::OLevel | QualificationType::Uec => {
                &[Subject::English, Subject::Mathematics]
            }
        }
    }
}

impl fmt::Display for QualificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualificationType::Spm => write!(f, "SPM"),
            QualificationType::OLevel => write!(f, "OLevel"),
            QualificationType::Uec => write!(f, "UEC"),
        }
    }
}

impl FromStr for QualificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "spm" => Ok(QualificationType::Spm),
            "olevel" | "o-level" | "o_level" => Ok(QualificationType::OLevel),
            "uec" => Ok(QualificationType::Uec),
            other => Err(format!("unknown qualification: {other}")),
        }
    }
}

/// A graded subject that a rule can place a minimum on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    English,
    BahasaMalaysia,
    Mathematics,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::English => write!(f, "English"),
            Subject::BahasaMalaysia => write!(f, "Bahasa Malaysia"),
            Subject::Mathematics => write!(f, "Mathematics"),
        }
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "eng" => Ok(Subject::English),
            "bahasa_malaysia" | "bahasa-malaysia" | "bahasa malaysia" | "bm" => {
                Ok(Subject::BahasaMalaysia)
            }
            "mathematics" | "math" | "maths" => Ok(Subject::Mathematics),
            other => Err(format!("unknown subject: {other}")),
        }
    }
}

/// Snapshot of what an applicant entered, shaped by their qualification.
///
/// Each variant carries only the fields its qualification uses; Bahasa
/// Malaysia exists only for SPM. Grades stay as raw text and are validated
/// at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "qualification")]
pub enum EvaluationInput {
    #[serde(rename = "SPM")]
    Spm {
        relevant_credits: i32,
        english: String,
        bahasa_malaysia: String,
        mathematics: String,
    },
    #[serde(rename = "OLevel")]
    OLevel {
        relevant_credits: i32,
        english: String,
        mathematics: String,
    },
    #[serde(rename = "UEC")]
    Uec {
        relevant_credits: i32,
        english: String,
        mathematics: String,
    },
}

impl EvaluationInput {
    /// Build the variant for `qualification`. `bahasa_malaysia` is dropped
    /// unless the qualification is SPM.
    pub fn new(
        qualification: QualificationType,
        relevant_credits: i32,
        english: impl Into<String>,
        mathematics: impl Into<String>,
        bahasa_malaysia: impl Into<String>,
    ) -> Self {
        let english = english.into();
        let mathematics = mathematics.into();
        match qualification {
            QualificationType::Spm => EvaluationInput::Spm {
                relevant_credits,
                english,
                bahasa_malaysia: bahasa_malaysia.into(),
                mathematics,
            },
            QualificationType::OLevel => EvaluationInput::OLevel {
                relevant_credits,
                english,
                mathematics,
            },
            QualificationType::Uec => EvaluationInput::Uec {
                relevant_credits,
                english,
                mathematics,
            },
        }
    }

    /// Build an input from raw form text. Unparsable credit text counts as 0.
    pub fn from_raw(
        qualification: QualificationType,
        relevant_credits: &str,
        english: &str,
        mathematics: &str,
        bahasa_malaysia: &str,
    ) -> Self {
        Self::new(
            qualification,
            parse_credits(relevant_credits),
            english,
            mathematics,
            bahasa_malaysia,
        )
    }

    pub fn qualification(&self) -> QualificationType {
        match self {
            EvaluationInput::Spm { .. } => QualificationType::Spm,
            EvaluationInput::OLevel { .. } => QualificationType::OLevel,
            EvaluationInput::Uec { .. } => QualificationType::Uec,
        }
    }

    pub fn relevant_credits(&self) -> i32 {
        match self {
            EvaluationInput::Spm {
                relevant_credits, ..
            }
            | EvaluationInput::OLevel {
                relevant_credits, ..
            }
            | EvaluationInput::Uec {
                relevant_credits, ..
            } => *relevant_credits,
        }
    }

    /// Raw grade text for `subject`, or `None` if this qualification does
    /// not carry that subject.
    pub fn grade(&self, subject: Subject) -> Option<&str> {
        match (self, subject) {
            (EvaluationInput::Spm { english, .. }, Subject::English)
            | (EvaluationInput::OLevel { english, .. }, Subject::English)
            | (EvaluationInput::Uec { english, .. }, Subject::English) => Some(english.as_str()),
            (EvaluationInput::Spm { mathematics, .. }, Subject::Mathematics)
            | (EvaluationInput::OLevel { mathematics, .. }, Subject::Mathematics)
            | (EvaluationInput::Uec { mathematics, .. }, Subject::Mathematics) => {
                Some(mathematics.as_str())
            }
            (
                EvaluationInput::Spm {
                    bahasa_malaysia, ..
                },
                Subject::BahasaMalaysia,
            ) => Some(bahasa_malaysia.as_str()),
            (_, Subject::BahasaMalaysia) => None,
        }
    }
}

/// Parse a self-reported credit count.
///
/// Text is taken as-is (no trimming). Anything that is not a 32-bit signed
/// integer counts as zero credits; a negative count is kept so that it fails
/// every threshold, including a zero one.
pub fn parse_credits(text: &str) -> i32 {
    text.parse().unwrap_or(0)
}

/// Message shown when every requirement is met.
pub const PASS_MESSAGE: &str = "Congratulations! You meet the minimum entry requirements.";

/// Message shown when any requirement is not met.
pub const FAIL_MESSAGE: &str =
    "Sorry, you do not meet the minimum entry requirements based on the provided details.";

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Whether the minimum entry requirements are met.
    pub passed: bool,
    /// Human-readable verdict.
    pub message: String,
}

impl EvaluationResult {
    pub fn from_outcome(passed: bool) -> Self {
        let message = if passed { PASS_MESSAGE } else { FAIL_MESSAGE };
        Self {
            passed,
            message: message.to_string(),
        }
    }
}

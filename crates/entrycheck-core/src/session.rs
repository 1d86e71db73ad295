//! State of the single-screen checker.
//!
//! A session owns the selected qualification, the raw text of every input
//! field, and the last result. Selecting a qualification always clears the
//! fields and the result, so a result is never shown against inputs or a
//! qualification it was not computed from.

use std::fmt;
use std::str::FromStr;

use crate::engine::Evaluator;
use crate::model::{EvaluationInput, EvaluationResult, QualificationType, Subject};

/// An editable input field on the checker screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RelevantCredits,
    English,
    BahasaMalaysia,
    Mathematics,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::RelevantCredits,
        Field::English,
        Field::BahasaMalaysia,
        Field::Mathematics,
    ];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::RelevantCredits => write!(f, "credits"),
            Field::English => write!(f, "english"),
            Field::BahasaMalaysia => write!(f, "bm"),
            Field::Mathematics => write!(f, "math"),
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credits" | "relevant_credits" | "relevant-credits" => Ok(Field::RelevantCredits),
            "english" | "eng" => Ok(Field::English),
            "bm" | "bahasa_malaysia" | "bahasa-malaysia" => Ok(Field::BahasaMalaysia),
            "math" | "maths" | "mathematics" => Ok(Field::Mathematics),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Interactive state for one applicant at a time.
#[derive(Debug, Clone)]
pub struct EvaluationSession {
    qualification: QualificationType,
    relevant_credits: String,
    english: String,
    bahasa_malaysia: String,
    mathematics: String,
    result: Option<EvaluationResult>,
}

impl Default for EvaluationSession {
    fn default() -> Self {
        Self::new(QualificationType::Spm)
    }
}

impl EvaluationSession {
    pub fn new(qualification: QualificationType) -> Self {
        Self {
            qualification,
            relevant_credits: String::new(),
            english: String::new(),
            bahasa_malaysia: String::new(),
            mathematics: String::new(),
            result: None,
        }
    }

    pub fn qualification(&self) -> QualificationType {
        self.qualification
    }

    /// Switch qualification, clearing every field and the last result.
    ///
    /// Re-selecting the current qualification clears too.
    pub fn select_qualification(&mut self, qualification: QualificationType) {
        tracing::debug!("qualification {} -> {qualification}", self.qualification);
        *self = Self::new(qualification);
    }

    /// Replace a field's text. The last result is left as is.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::RelevantCredits => self.relevant_credits = value,
            Field::English => self.english = value,
            Field::BahasaMalaysia => self.bahasa_malaysia = value,
            Field::Mathematics => self.mathematics = value,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::RelevantCredits => &self.relevant_credits,
            Field::English => &self.english,
            Field::BahasaMalaysia => &self.bahasa_malaysia,
            Field::Mathematics => &self.mathematics,
        }
    }

    /// Fields shown for the current qualification.
    pub fn visible_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| *f != Field::BahasaMalaysia || self.qualification == QualificationType::Spm)
            .collect()
    }

    /// Snapshot the current fields as an evaluation input.
    pub fn input(&self) -> EvaluationInput {
        EvaluationInput::from_raw(
            self.qualification,
            &self.relevant_credits,
            &self.english,
            &self.mathematics,
            &self.bahasa_malaysia,
        )
    }

    /// Evaluate the current fields and remember the result.
    pub fn evaluate(&mut self, evaluator: &Evaluator) -> &EvaluationResult {
        let result = evaluator.evaluate(&self.input());
        self.result.insert(result)
    }

    /// The last result, if one has been computed since the last reset.
    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    /// Label for a field under the current qualification and rule table.
    pub fn label(&self, field: Field, evaluator: &Evaluator) -> String {
        let rule = evaluator.rule_for(self.qualification);
        match field {
            Field::RelevantCredits => {
                let grade = rule.map(|r| r.credit_grade.to_string());
                format!(
                    "Number of relevant subjects with at least Grade {}",
                    grade.as_deref().unwrap_or("C")
                )
            }
            Field::English => "English Language Grade (e.g., A, B, C)".to_string(),
            Field::BahasaMalaysia => "Bahasa Malaysia Grade (e.g., A, B, C)".to_string(),
            Field::Mathematics => {
                let letters = rule
                    .and_then(|r| r.minimum(Subject::Mathematics))
                    .map(|g| g.acceptable_letters())
                    .filter(|letters| !letters.is_empty())
                    .unwrap_or_else(|| vec!['A', 'B', 'C']);
                let list: Vec<String> = letters.iter().map(char::to_string).collect();
                format!("Mathematics Grade (e.g., {})", list.join(", "))
            }
        }
    }

    /// Advisory notes for the current qualification.
    pub fn notes<'a>(&self, evaluator: &'a Evaluator) -> &'a [String] {
        evaluator
            .rule_for(self.qualification)
            .map(|r| r.notes.as_slice())
            .unwrap_or_default()
    }
}

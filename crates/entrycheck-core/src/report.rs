//! Machine-readable evaluation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Evaluator;
use crate::model::{EvaluationInput, EvaluationResult};

/// One evaluation with the input it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// When the evaluation ran.
    pub created_at: DateTime<Utc>,
    /// The input snapshot.
    pub input: EvaluationInput,
    /// The outcome.
    pub result: EvaluationResult,
    /// Advisory notes for the qualification.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl EvaluationRecord {
    /// Evaluate `input` and record it together with the rule's notes.
    pub fn evaluate(evaluator: &Evaluator, input: EvaluationInput) -> Self {
        let result = evaluator.evaluate(&input);
        let notes = evaluator
            .rule_for(input.qualification())
            .map(|r| r.notes.clone())
            .unwrap_or_default();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            input,
            result,
            notes,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

//! Eligibility evaluator.
//!
//! Applies a [`RuleTable`] to an applicant's input snapshot. Evaluation is a
//! pure function of the table and the input: it never fails and never keeps
//! state between calls.

use std::sync::OnceLock;

use crate::grade::is_grade_sufficient;
use crate::model::{EvaluationInput, EvaluationResult, QualificationType};
use crate::rules::{EntryRule, RuleTable};

/// Evaluates inputs against a rule table.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    rules: RuleTable,
}

impl Evaluator {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The rule row for `qualification`, if the table has one.
    pub fn rule_for(&self, qualification: QualificationType) -> Option<&EntryRule> {
        self.rules.get(qualification)
    }

    /// Decide whether `input` meets the minimum entry requirements.
    ///
    /// Every condition of the qualification's row must hold: the credit
    /// count and each required subject grade. A required subject the input
    /// does not carry is unmet. A qualification with no row never passes.
    pub fn evaluate(&self, input: &EvaluationInput) -> EvaluationResult {
        let qualification = input.qualification();
        let Some(rule) = self.rules.get(qualification) else {
            tracing::warn!("no entry rule for {qualification}, treating as not met");
            return EvaluationResult::from_outcome(false);
        };

        let credits = input.relevant_credits();
        let mut passed = i64::from(credits) >= i64::from(rule.min_credits);
        if !passed {
            tracing::debug!(
                "{qualification}: {credits} relevant credits, need {}",
                rule.min_credits
            );
        }

        for (&subject, &minimum) in &rule.grades {
            let sufficient = input
                .grade(subject)
                .is_some_and(|grade| is_grade_sufficient(grade, minimum));
            if !sufficient {
                tracing::debug!(
                    "{qualification}: {subject} grade {:?} does not meet {minimum}",
                    input.grade(subject).unwrap_or_default()
                );
                passed = false;
            }
        }

        tracing::debug!("{qualification}: requirements met = {passed}");
        EvaluationResult::from_outcome(passed)
    }

    /// Evaluate raw form text. `bahasa_malaysia` is ignored unless the
    /// qualification is SPM; unparsable credits count as zero.
    pub fn evaluate_raw(
        &self,
        qualification: QualificationType,
        relevant_credits: &str,
        english: &str,
        mathematics: &str,
        bahasa_malaysia: &str,
    ) -> EvaluationResult {
        let input = EvaluationInput::from_raw(
            qualification,
            relevant_credits,
            english,
            mathematics,
            bahasa_malaysia,
        );
        self.evaluate(&input)
    }
}

fn builtin_evaluator() -> &'static Evaluator {
    static BUILTIN: OnceLock<Evaluator> = OnceLock::new();
    BUILTIN.get_or_init(Evaluator::default)
}

/// Evaluate against the built-in rule table.
pub fn evaluate(input: &EvaluationInput) -> EvaluationResult {
    builtin_evaluator().evaluate(input)
}

/// Evaluate raw form text against the built-in rule table.
pub fn evaluate_raw(
    qualification: QualificationType,
    relevant_credits: &str,
    english: &str,
    mathematics: &str,
    bahasa_malaysia: &str,
) -> EvaluationResult {
    builtin_evaluator().evaluate_raw(
        qualification,
        relevant_credits,
        english,
        mathematics,
        bahasa_malaysia,
    )
}

//! Per-qualification entry-requirement rules.
//!
//! Each qualification maps to one [`EntryRule`]: a minimum count of relevant
//! credits plus a minimum grade for each required subject. The evaluator is
//! driven entirely by this table, so a new rule set only needs a new row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RuleTableError;
use crate::grade::Grade;
use crate::model::{QualificationType, Subject};

/// Advisory shown for every qualification.
pub const GENERAL_NOTE: &str = "Note: This checker validates against minimum requirements. Specific 'relevant subjects' are determined by the university.";

/// Extra advisory shown for SPM applicants.
pub const SPM_NOTE: &str = "Note for SPM: Applicants with 3 or 4 Grade C may still be considered (check official TARUMT guidelines).";

/// Minimum entry requirements for one qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRule {
    /// The qualification this rule applies to.
    pub qualification: QualificationType,
    /// Minimum number of relevant credits.
    pub min_credits: u32,
    /// Grade a subject needs to count as a relevant credit.
    pub credit_grade: Grade,
    /// Minimum grade per required subject.
    pub grades: BTreeMap<Subject, Grade>,
    /// Advisory notes shown next to the result.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl EntryRule {
    pub fn new(qualification: QualificationType, min_credits: u32, credit_grade: Grade) -> Self {
        Self {
            qualification,
            min_credits,
            credit_grade,
            grades: BTreeMap::new(),
            notes: Vec::new(),
        }
    }

    /// Require at least `minimum` in `subject`.
    pub fn require(mut self, subject: Subject, minimum: Grade) -> Self {
        self.grades.insert(subject, minimum);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Minimum grade for `subject`, if the rule requires it.
    pub fn minimum(&self, subject: Subject) -> Option<Grade> {
        self.grades.get(&subject).copied()
    }
}

/// Rule rows keyed by qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<QualificationType, EntryRule>,
}

impl RuleTable {
    /// A table with no rows.
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// The standard minimum entry requirements.
    ///
    /// | Qualification | Credits | English | Bahasa Malaysia | Mathematics |
    /// |---|---|---|---|---|
    /// | SPM | 5 | C | C | B |
    /// | OLevel | 5 | C | - | C |
    /// | UEC | 3 | C | - | B |
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        table.insert(
            EntryRule::new(QualificationType::Spm, 5, Grade::C)
                .require(Subject::English, Grade::C)
                .require(Subject::BahasaMalaysia, Grade::C)
                .require(Subject::Mathematics, Grade::B)
                .with_note(GENERAL_NOTE)
                .with_note(SPM_NOTE),
        );
        table.insert(
            EntryRule::new(QualificationType::OLevel, 5, Grade::C)
                .require(Subject::English, Grade::C)
                .require(Subject::Mathematics, Grade::C)
                .with_note(GENERAL_NOTE),
        );
        // UEC asks for Grade B credits but only the count is checked here.
        table.insert(
            EntryRule::new(QualificationType::Uec, 3, Grade::B)
                .require(Subject::English, Grade::C)
                .require(Subject::Mathematics, Grade::B)
                .with_note(GENERAL_NOTE),
        );
        table
    }

    /// Build a table from rows, rejecting a qualification that appears twice.
    pub fn from_rules(rules: impl IntoIterator<Item = EntryRule>) -> Result<Self, RuleTableError> {
        let mut table = Self::empty();
        for rule in rules {
            let qualification = rule.qualification;
            if table.insert(rule).is_some() {
                return Err(RuleTableError::DuplicateQualification(qualification));
            }
        }
        Ok(table)
    }

    /// Insert or replace a row, returning the replaced one.
    pub fn insert(&mut self, rule: EntryRule) -> Option<EntryRule> {
        self.rules.insert(rule.qualification, rule)
    }

    pub fn get(&self, qualification: QualificationType) -> Option<&EntryRule> {
        self.rules.get(&qualification)
    }

    /// Rows in qualification order.
    pub fn rules(&self) -> impl Iterator<Item = &EntryRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_published_requirements() {
        let table = RuleTable::builtin();
        assert_eq!(table.len(), 3);

        let spm = table.get(QualificationType::Spm).unwrap();
        assert_eq!(spm.min_credits, 5);
        assert_eq!(spm.minimum(Subject::English), Some(Grade::C));
        assert_eq!(spm.minimum(Subject::BahasaMalaysia), Some(Grade::C));
        assert_eq!(spm.minimum(Subject::Mathematics), Some(Grade::B));

        let olevel = table.get(QualificationType::OLevel).unwrap();
        assert_eq!(olevel.min_credits, 5);
        assert_eq!(olevel.minimum(Subject::BahasaMalaysia), None);
        assert_eq!(olevel.minimum(Subject::Mathematics), Some(Grade::C));

        let uec = table.get(QualificationType::Uec).unwrap();
        assert_eq!(uec.min_credits, 3);
        assert_eq!(uec.credit_grade, Grade::B);
        assert_eq!(uec.minimum(Subject::BahasaMalaysia), None);
        assert_eq!(uec.minimum(Subject::Mathematics), Some(Grade::B));
    }

    #[test]
    fn spm_carries_extra_note() {
        let table = RuleTable::builtin();
        assert!(table
            .get(QualificationType::Spm)
            .unwrap()
            .notes
            .iter()
            .any(|n| n.contains("3 or 4 Grade C")));
        assert_eq!(table.get(QualificationType::Uec).unwrap().notes.len(), 1);
    }

    #[test]
    fn from_rules_rejects_duplicates() {
        let rules = vec![
            EntryRule::new(QualificationType::Uec, 3, Grade::B),
            EntryRule::new(QualificationType::Uec, 4, Grade::B),
        ];
        let err = RuleTable::from_rules(rules).unwrap_err();
        assert!(matches!(
            err,
            RuleTableError::DuplicateQualification(QualificationType::Uec)
        ));
    }

    #[test]
    fn rows_iterate_in_qualification_order() {
        let order: Vec<_> = RuleTable::builtin()
            .rules()
            .map(|r| r.qualification)
            .collect();
        assert_eq!(order, QualificationType::ALL.to_vec());
    }
}

//! Rule table error types.
//!
//! Evaluation itself never fails: malformed grades and credit counts are
//! just unmet requirements. Errors only arise when loading a rule table.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::QualificationType;

/// Errors that can occur when loading or building a rule table.
#[derive(Debug, Error)]
pub enum RuleTableError {
    /// The rule file could not be read.
    #[error("failed to read rule table file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rule file is not valid TOML or has the wrong shape.
    #[error("failed to parse TOML: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A row names a qualification that does not exist.
    #[error("unknown qualification: {0}")]
    UnknownQualification(String),

    /// A row requires a subject that does not exist.
    #[error("{qualification}: unknown subject: {subject}")]
    UnknownSubject {
        qualification: QualificationType,
        subject: String,
    },

    /// A grade in the file is not a single letter.
    #[error("{qualification}: invalid grade for {field}: {value:?}")]
    InvalidGrade {
        qualification: QualificationType,
        field: String,
        value: String,
    },

    /// The same qualification has more than one row.
    #[error("duplicate rule for qualification: {0}")]
    DuplicateQualification(QualificationType),
}

impl RuleTableError {
    /// Returns `true` if the file itself could not be read or parsed, as
    /// opposed to holding well-formed TOML with bad values.
    pub fn is_syntax(&self) -> bool {
        matches!(self, RuleTableError::Io { .. } | RuleTableError::Parse { .. })
    }
}

//! Letter grades and the grade sufficiency check.
//!
//! Grades are single alphabetic letters where an earlier letter is a better
//! result: `A` beats `B`, which beats `C`, and so on. Raw user input is
//! normalized (trimmed, uppercased) before it is compared; anything that is
//! not exactly one letter is simply an insufficient grade.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A validated, uppercase letter grade.
///
/// Ordering follows the letters, so `Grade::A < Grade::B` means "A is the
/// better grade".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grade(char);

impl Grade {
    pub const A: Grade = Grade('A');
    pub const B: Grade = Grade('B');
    pub const C: Grade = Grade('C');
    pub const D: Grade = Grade('D');

    /// Build a grade from a single letter, uppercasing it.
    ///
    /// Returns `None` for non-alphabetic characters and for letters whose
    /// uppercase form is more than one character (e.g. `ß`).
    pub fn new(letter: char) -> Option<Self> {
        let mut upper = letter.to_uppercase();
        let first = upper.next()?;
        if upper.next().is_some() || !first.is_alphabetic() {
            return None;
        }
        Some(Grade(first))
    }

    /// Normalize raw text into a grade: trim, uppercase, then require exactly
    /// one alphabetic character.
    pub fn normalize(input: &str) -> Option<Self> {
        let normalized = input.trim().to_uppercase();
        let mut chars = normalized.chars();
        let letter = chars.next()?;
        if chars.next().is_some() || !letter.is_alphabetic() {
            return None;
        }
        Some(Grade(letter))
    }

    /// The uppercase letter.
    pub fn letter(self) -> char {
        self.0
    }

    /// Whether this grade is at least as good as `required`.
    pub fn meets(self, required: Grade) -> bool {
        self <= required
    }

    /// All grades from `A` up to and including this one, e.g. `A, B` for `B`.
    pub fn acceptable_letters(self) -> Vec<char> {
        ('A'..=self.0).filter(|c| c.is_ascii_uppercase()).collect()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::normalize(s).ok_or_else(|| format!("invalid grade: {s:?}"))
    }
}

impl TryFrom<String> for Grade {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.0.to_string()
    }
}

/// Check whether a raw grade input satisfies a required grade.
///
/// Malformed input (empty, more than one character, or not a letter) is
/// never sufficient. This function does not fail.
pub fn is_grade_sufficient(input: &str, required: Grade) -> bool {
    match Grade::normalize(input) {
        Some(grade) => grade.meets(required),
        None => false,
    }
}

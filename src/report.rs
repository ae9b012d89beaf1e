//! Batch formatting of phone number inputs.
//!
//! Turns a list of raw inputs into one [`FormatOutcome`] each, so a caller
//! can report accepted and rejected entries together instead of stopping at
//! the first bad one.

use crate::domain::{JapanesePhoneNumber, PhoneNumberKind};
use serde::Serialize;
use std::fmt;

/// Result of formatting one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormatOutcome {
    Formatted {
        input: String,
        digits: String,
        hyphenated: String,
        kind: PhoneNumberKind,
    },
    Rejected {
        input: String,
        error: String,
    },
}

impl FormatOutcome {
    /// Format a single input.
    pub fn from_input(input: &str) -> Self {
        match JapanesePhoneNumber::new(input) {
            Ok(phone) => Self::Formatted {
                input: input.to_string(),
                hyphenated: phone.hyphenated(),
                kind: phone.kind(),
                digits: phone.into_inner(),
            },
            Err(e) => {
                tracing::debug!(input = %input, error = %e, "Rejected phone number");
                Self::Rejected {
                    input: input.to_string(),
                    error: e.to_string(),
                }
            }
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl fmt::Display for FormatOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formatted {
                input,
                hyphenated,
                kind,
                ..
            } => write!(f, "{}\t{}\t{}", input, hyphenated, kind),
            Self::Rejected { input, error } => write!(f, "{}\terror: {}", input, error),
        }
    }
}

/// Outcomes for a whole batch, in input order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FormatReport {
    outcomes: Vec<FormatOutcome>,
}

impl FormatReport {
    /// Format every input.
    pub fn from_inputs<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let outcomes: Vec<FormatOutcome> = inputs
            .into_iter()
            .map(|input| FormatOutcome::from_input(input.as_ref()))
            .collect();

        let report = Self { outcomes };
        tracing::info!(
            total = report.outcomes.len(),
            rejected = report.rejected_count(),
            "Formatted phone numbers"
        );
        report
    }

    pub fn outcomes(&self) -> &[FormatOutcome] {
        &self.outcomes
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_rejected()).count()
    }

    pub fn has_rejections(&self) -> bool {
        self.outcomes.iter().any(FormatOutcome::is_rejected)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

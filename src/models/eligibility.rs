//! Eligibility outcome for income-support instruments.
//!
//! Ineligibility is an ordinary result, never an error: each instrument
//! reports an [`Eligibility`] value that carries the reason it was refused.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an instrument cannot be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IneligibilityReason {
    /// The worker is younger than the minimum age.
    BelowMinimumAge {
        /// The minimum age in years.
        minimum_age: u32,
    },
    /// The worker has fewer contribution years than required.
    InsufficientContributions {
        /// The required contribution years.
        required_years: u32,
    },
    /// None of the protected categories applies.
    NoQualifyingCategory,
    /// The pension date is further away than the annuitization window.
    TooFarFromPension {
        /// The window length in years.
        max_years: u32,
    },
    /// There is no complementary-pension capital to pay out.
    NoComplementaryCapital,
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibilityReason::BelowMinimumAge { minimum_age } => {
                write!(f, "Minimum age of {} not reached", minimum_age)
            }
            IneligibilityReason::InsufficientContributions { required_years } => {
                write!(
                    f,
                    "At least {} years of contributions are required",
                    required_years
                )
            }
            IneligibilityReason::NoQualifyingCategory => {
                write!(f, "Worker is not in any of the protected categories")
            }
            IneligibilityReason::TooFarFromPension { max_years } => {
                write!(f, "Too far from the pension date (max {} years)", max_years)
            }
            IneligibilityReason::NoComplementaryCapital => {
                write!(f, "No complementary pension capital")
            }
        }
    }
}

/// Whether an instrument can be granted.
///
/// # Example
///
/// ```
/// use pension_bridge::models::{Eligibility, IneligibilityReason};
///
/// let outcome = Eligibility::Ineligible {
///     reason: IneligibilityReason::BelowMinimumAge { minimum_age: 63 },
/// };
/// assert!(!outcome.is_eligible());
/// assert_eq!(outcome.reason().unwrap().to_string(), "Minimum age of 63 not reached");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Eligibility {
    /// The instrument can be granted.
    Eligible,
    /// The instrument cannot be granted.
    Ineligible {
        /// The reason for refusal.
        reason: IneligibilityReason,
    },
}

impl Eligibility {
    /// Returns true if the instrument can be granted.
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    /// Returns the refusal reason, if any.
    pub fn reason(&self) -> Option<IneligibilityReason> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Ineligible { reason } => Some(*reason),
        }
    }
}

impl From<IneligibilityReason> for Eligibility {
    fn from(reason: IneligibilityReason) -> Self {
        Eligibility::Ineligible { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligible_serialization() {
        let json = serde_json::to_value(Eligibility::Eligible).unwrap();
        assert_eq!(json["status"], "eligible");
    }

    #[test]
    fn test_ineligible_serialization_carries_reason() {
        let outcome: Eligibility = IneligibilityReason::InsufficientContributions {
            required_years: 36,
        }
        .into();
        let json = serde_json::to_value(outcome).unwrap();

        assert_eq!(json["status"], "ineligible");
        assert_eq!(json["reason"]["code"], "insufficient_contributions");
        assert_eq!(json["reason"]["required_years"], 36);
    }

    #[test]
    fn test_deserialize_unit_reason() {
        let json = r#"{"status":"ineligible","reason":{"code":"no_complementary_capital"}}"#;
        let outcome: Eligibility = serde_json::from_str(json).unwrap();
        assert_eq!(
            outcome.reason(),
            Some(IneligibilityReason::NoComplementaryCapital)
        );
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(
            IneligibilityReason::InsufficientContributions { required_years: 30 }.to_string(),
            "At least 30 years of contributions are required"
        );
        assert_eq!(
            IneligibilityReason::TooFarFromPension { max_years: 5 }.to_string(),
            "Too far from the pension date (max 5 years)"
        );
    }

    #[test]
    fn test_eligible_has_no_reason() {
        assert!(Eligibility::Eligible.is_eligible());
        assert_eq!(Eligibility::Eligible.reason(), None);
    }
}

//! Audit records attached to every calculation.
//!
//! Each formula returns an [`AuditStep`] describing its inputs, outputs and
//! the arithmetic applied, so a composite assessment can be traced end to end.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legislation behind this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while preparing or running an assessment.
///
/// Warnings never stop a calculation; clamped inputs are the typical case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning for an input that was clamped into its allowed range.
    ///
    /// # Example
    ///
    /// ```
    /// use pension_bridge::models::AuditWarning;
    ///
    /// let warning = AuditWarning::input_clamped("profile.age", "45", "50");
    /// assert_eq!(warning.code, "INPUT_CLAMPED");
    /// assert!(warning.message.contains("profile.age"));
    /// ```
    pub fn input_clamped(field: &str, original: &str, clamped: &str) -> Self {
        Self {
            code: "INPUT_CLAMPED".to_string(),
            message: format!(
                "'{}' value {} is outside the allowed range and was clamped to {}",
                field, original, clamped
            ),
            severity: "low".to_string(),
        }
    }
}

/// The complete audit trace for an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the assessment.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

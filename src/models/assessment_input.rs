//! Validated input for a full exit assessment.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmploymentSituation, WorkerProfile};

/// How the severance incentive offered to the worker is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IncentiveChoice {
    /// Use the computed regional incentive.
    Automatic,
    /// Use an amount negotiated by hand.
    Manual {
        /// The gross amount offered.
        amount: Decimal,
    },
}

impl IncentiveChoice {
    /// Resolves the amount actually offered given the computed incentive.
    ///
    /// # Example
    ///
    /// ```
    /// use pension_bridge::models::IncentiveChoice;
    /// use rust_decimal::Decimal;
    ///
    /// let computed = Decimal::new(60000, 0);
    /// assert_eq!(IncentiveChoice::Automatic.resolve(computed), computed);
    ///
    /// let manual = IncentiveChoice::Manual { amount: Decimal::new(30000, 0) };
    /// assert_eq!(manual.resolve(computed), Decimal::new(30000, 0));
    /// ```
    pub fn resolve(&self, computed: Decimal) -> Decimal {
        match self {
            IncentiveChoice::Automatic => computed,
            IncentiveChoice::Manual { amount } => *amount,
        }
    }
}

/// Everything needed to run one assessment.
///
/// Values are expected to be within the ranges enforced at the request
/// boundary; the formulas themselves do not re-validate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// The worker being assessed.
    pub profile: WorkerProfile,
    /// Employment situation flags.
    pub situation: EmploymentSituation,
    /// Capital accumulated in a complementary pension fund.
    pub complementary_pension_capital: Decimal,
    /// How the offered incentive is chosen.
    pub incentive: IncentiveChoice,
    /// The date the assessment is evaluated on.
    pub evaluation_date: NaiveDate,
}

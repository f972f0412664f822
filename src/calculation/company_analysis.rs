//! Employer cost/benefit of an exit agreement.
//!
//! Compares the cost of keeping the worker until the pension date with the
//! incentive offered for leaving now.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Ratio of total employer cost to gross salary.
pub fn employer_cost_ratio() -> Decimal {
    Decimal::new(135, 2)
}

/// The employer's view of the agreement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAnalysis {
    /// Yearly cost of the worker to the employer.
    pub annual_employer_cost: Decimal,
    /// Cost of retaining the worker until the pension date.
    pub retention_cost: Decimal,
    /// Incentive offered.
    pub proposed_incentive: Decimal,
    /// Retention cost minus incentive.
    pub savings: Decimal,
    /// Savings as a percentage of the incentive; absent when the incentive is zero.
    pub return_on_investment: Option<Decimal>,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

/// Analyses the agreement from the employer side.
///
/// # Examples
///
/// ```
/// use pension_bridge::calculation::analyse_company_cost;
/// use rust_decimal::Decimal;
///
/// let analysis = analyse_company_cost(Decimal::new(40000, 0), 24, Decimal::new(54000, 0), 1);
/// assert_eq!(analysis.retention_cost, Decimal::new(108000, 0));
/// assert_eq!(analysis.return_on_investment, Some(Decimal::new(100, 0)));
/// ```
pub fn analyse_company_cost(
    gross_annual_salary: Decimal,
    months: u32,
    proposed_incentive: Decimal,
    step_number: u32,
) -> CompanyAnalysis {
    let annual_employer_cost = gross_annual_salary * employer_cost_ratio();
    let retention_cost = annual_employer_cost * Decimal::from(months) / Decimal::from(12);
    let savings = retention_cost - proposed_incentive;
    let return_on_investment = if proposed_incentive.is_zero() {
        None
    } else {
        Some(savings / proposed_incentive * Decimal::from(100))
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "company_analysis".to_string(),
        rule_name: "Employer Cost/Benefit".to_string(),
        legal_ref: "-".to_string(),
        input: serde_json::json!({
            "gross_annual_salary": gross_annual_salary.normalize().to_string(),
            "months": months,
            "proposed_incentive": proposed_incentive.round_dp(2).to_string()
        }),
        output: serde_json::json!({
            "annual_employer_cost": annual_employer_cost.round_dp(2).to_string(),
            "retention_cost": retention_cost.round_dp(2).to_string(),
            "savings": savings.round_dp(2).to_string(),
            "return_on_investment": return_on_investment.map(|r| r.round_dp(1).to_string())
        }),
        reasoning: format!(
            "€{} x 1.35 x {}/12 = €{} retention cost; savings €{}",
            gross_annual_salary.normalize(),
            months,
            retention_cost.round_dp(2),
            savings.round_dp(2)
        ),
    };

    CompanyAnalysis {
        annual_employer_cost,
        retention_cost,
        proposed_incentive,
        savings,
        return_on_investment,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_retention_cost_and_savings() {
        // 45000 x 1.35 = 60750; x 58 / 12 = 293625
        let analysis = analyse_company_cost(dec("45000"), 58, dec("60000"), 1);

        assert_eq!(analysis.annual_employer_cost, dec("60750"));
        assert_eq!(analysis.retention_cost, dec("293625"));
        assert_eq!(analysis.savings, dec("233625"));
        assert_eq!(
            analysis.return_on_investment.map(|r| r.round_dp(2)),
            Some(dec("389.38"))
        );
    }

    #[test]
    fn test_zero_incentive_has_no_roi() {
        let analysis = analyse_company_cost(dec("45000"), 12, Decimal::ZERO, 1);

        assert_eq!(analysis.savings, dec("60750"));
        assert!(analysis.return_on_investment.is_none());
        assert!(analysis.audit_step.output["return_on_investment"].is_null());
    }

    #[test]
    fn test_incentive_above_retention_cost() {
        let analysis = analyse_company_cost(dec("40000"), 6, dec("54000"), 1);

        // 54000 x 6 / 12 = 27000
        assert_eq!(analysis.savings, dec("-27000"));
        assert_eq!(analysis.return_on_investment, Some(dec("-50")));
    }
}

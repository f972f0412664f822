//! Bridge income coverage summary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Monthly bridge income compared with the net salary it replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Unemployment benefit per month.
    pub unemployment_benefit: Decimal,
    /// Social advance pension per month (zero if not granted).
    pub social_advance_pension: Decimal,
    /// Temporary annuity per month (zero if not granted).
    pub temporary_annuity: Decimal,
    /// Sum of the three instruments.
    pub total_monthly_coverage: Decimal,
    /// Net salary minus total coverage.
    pub monthly_gap: Decimal,
    /// Coverage as a percentage of net salary.
    pub coverage_percentage: Decimal,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

/// Sums the bridge instruments and compares them with the net salary.
///
/// Ineligible instruments are expected to be passed as zero.
pub fn summarize_coverage(
    monthly_net_salary: Decimal,
    unemployment_benefit: Decimal,
    social_advance_pension: Decimal,
    temporary_annuity: Decimal,
    step_number: u32,
) -> CoverageSummary {
    let total_monthly_coverage = unemployment_benefit + social_advance_pension + temporary_annuity;
    let monthly_gap = monthly_net_salary - total_monthly_coverage;
    let coverage_percentage = if monthly_net_salary.is_zero() {
        Decimal::ZERO
    } else {
        total_monthly_coverage / monthly_net_salary * Decimal::from(100)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "coverage_summary".to_string(),
        rule_name: "Bridge Income Coverage".to_string(),
        legal_ref: "-".to_string(),
        input: serde_json::json!({
            "monthly_net_salary": monthly_net_salary.round_dp(2).to_string(),
            "unemployment_benefit": unemployment_benefit.round_dp(2).to_string(),
            "social_advance_pension": social_advance_pension.round_dp(2).to_string(),
            "temporary_annuity": temporary_annuity.round_dp(2).to_string()
        }),
        output: serde_json::json!({
            "total_monthly_coverage": total_monthly_coverage.round_dp(2).to_string(),
            "monthly_gap": monthly_gap.round_dp(2).to_string(),
            "coverage_percentage": coverage_percentage.round_dp(1).to_string()
        }),
        reasoning: format!(
            "€{} coverage of €{} net salary ({}%)",
            total_monthly_coverage.round_dp(2),
            monthly_net_salary.round_dp(2),
            coverage_percentage.round_dp(1)
        ),
    };

    CoverageSummary {
        unemployment_benefit,
        social_advance_pension,
        temporary_annuity,
        total_monthly_coverage,
        monthly_gap,
        coverage_percentage,
        audit_step,
    }
}

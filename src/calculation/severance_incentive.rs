//! Regional severance incentive.
//!
//! The incentive covers the gap between the worker's net salary and the
//! bridge income available until the pension date, scaled by the regional
//! cost of living, plus a value for the free time gained. Free time is
//! valued higher where living costs are lower.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RegionalCostTable;
use crate::models::{AuditStep, Region};

use super::net_pension::net_monthly_salary;

/// Legal reference for the incentive formula (voluntary exit agreements).
pub const SEVERANCE_INCENTIVE_LEGAL_REF: &str = "L. 92/2012 art. 4 c. 1-7";

/// Monthly value of free time before the regional adjustment.
pub fn leisure_base_value() -> Decimal {
    Decimal::from(1000)
}

/// Factor at which free time is valued at zero.
pub fn leisure_pivot_factor() -> Decimal {
    Decimal::new(15, 1)
}

/// Monthly value of free time for a regional factor: 1000 × (1.5 − factor).
///
/// ```
/// use pension_bridge::calculation::monthly_leisure_value;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_leisure_value(Decimal::new(82, 2)), Decimal::new(680, 0));
/// ```
pub fn monthly_leisure_value(regional_factor: Decimal) -> Decimal {
    leisure_base_value() * (leisure_pivot_factor() - regional_factor)
}

/// The result of the severance incentive calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveranceIncentiveResult {
    /// Region used for the cost-of-living adjustment.
    pub region: Region,
    /// Months the incentive has to cover.
    pub months: u32,
    /// Estimated net monthly salary.
    pub monthly_net_salary: Decimal,
    /// Monthly bridge income (unemployment benefit + social advance pension).
    pub monthly_coverage: Decimal,
    /// Net salary minus coverage; negative when coverage exceeds salary.
    pub monthly_gap: Decimal,
    /// Regional cost-of-living factor.
    pub regional_factor: Decimal,
    /// Gap scaled by the regional factor.
    pub adjusted_gap: Decimal,
    /// Adjusted gap over the whole window.
    pub base_incentive: Decimal,
    /// Value of free time over the whole window.
    pub leisure_value: Decimal,
    /// Base incentive plus leisure value.
    pub total_incentive: Decimal,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

/// Calculates the regional severance incentive.
///
/// # Arguments
///
/// * `gross_annual_salary` - Gross annual salary
/// * `months` - Months to cover until the pension date
/// * `region` - The worker's region
/// * `unemployment_benefit` - Monthly unemployment benefit
/// * `social_advance_pension` - Monthly social advance pension (zero if not granted)
/// * `regional_costs` - Cost-of-living table; unlisted regions use 1.0
/// * `step_number` - The audit step number
pub fn calculate_severance_incentive(
    gross_annual_salary: Decimal,
    months: u32,
    region: Region,
    unemployment_benefit: Decimal,
    social_advance_pension: Decimal,
    regional_costs: &RegionalCostTable,
    step_number: u32,
) -> SeveranceIncentiveResult {
    let monthly_net_salary = net_monthly_salary(gross_annual_salary);
    let monthly_coverage = unemployment_benefit + social_advance_pension;
    let monthly_gap = monthly_net_salary - monthly_coverage;
    let regional_factor = regional_costs.factor(region);
    let adjusted_gap = monthly_gap * regional_factor;

    let window = Decimal::from(months);
    let base_incentive = adjusted_gap * window;
    let leisure_value = monthly_leisure_value(regional_factor) * window;
    let total_incentive = base_incentive + leisure_value;

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance_incentive".to_string(),
        rule_name: "Regional Severance Incentive".to_string(),
        legal_ref: SEVERANCE_INCENTIVE_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "gross_annual_salary": gross_annual_salary.normalize().to_string(),
            "months": months,
            "region": region,
            "unemployment_benefit": unemployment_benefit.round_dp(2).to_string(),
            "social_advance_pension": social_advance_pension.round_dp(2).to_string()
        }),
        output: serde_json::json!({
            "monthly_net_salary": monthly_net_salary.round_dp(2).to_string(),
            "monthly_gap": monthly_gap.round_dp(2).to_string(),
            "regional_factor": regional_factor.to_string(),
            "base_incentive": base_incentive.round_dp(2).to_string(),
            "leisure_value": leisure_value.round_dp(2).to_string(),
            "total_incentive": total_incentive.round_dp(2).to_string()
        }),
        reasoning: format!(
            "(€{} gap x {} {}) x {} months = €{}; leisure €{}/mo x {} = €{}; total €{}",
            monthly_gap.round_dp(2),
            regional_factor,
            region,
            months,
            base_incentive.round_dp(2),
            monthly_leisure_value(regional_factor).normalize(),
            months,
            leisure_value.round_dp(2),
            total_incentive.round_dp(2)
        ),
    };

    SeveranceIncentiveResult {
        region,
        months,
        monthly_net_salary,
        monthly_coverage,
        monthly_gap,
        regional_factor,
        adjusted_gap,
        base_incentive,
        leisure_value,
        total_incentive,
        audit_step,
    }
}

//! Unemployment benefit (NASpI) calculation.
//!
//! Two-tier formula on the average monthly salary: 75% up to the statutory
//! threshold, 25% of anything above it. The monthly reduction applied from
//! the fourth month onward is not modelled; the flat amount is returned.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Legal reference for the unemployment benefit.
pub const UNEMPLOYMENT_BENEFIT_LEGAL_REF: &str = "D.Lgs. 22/2015 art. 4-5";

/// Maximum benefit duration in months.
pub const MAX_BENEFIT_MONTHS: u32 = 24;

/// Monthly salary threshold separating the two tiers.
pub fn benefit_threshold() -> Decimal {
    Decimal::new(135219, 2)
}

/// Rate applied up to the threshold.
pub fn lower_tier_rate() -> Decimal {
    Decimal::new(75, 2)
}

/// Rate applied to the part of salary above the threshold.
pub fn upper_tier_rate() -> Decimal {
    Decimal::new(25, 2)
}

/// Monthly benefit for an average monthly salary.
///
/// ```
/// use pension_bridge::calculation::monthly_unemployment_benefit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_unemployment_benefit(Decimal::new(1000, 0)), Decimal::new(750, 0));
/// ```
pub fn monthly_unemployment_benefit(average_monthly_salary: Decimal) -> Decimal {
    let threshold = benefit_threshold();
    if average_monthly_salary <= threshold {
        average_monthly_salary * lower_tier_rate()
    } else {
        threshold * lower_tier_rate() + (average_monthly_salary - threshold) * upper_tier_rate()
    }
}

/// Benefit duration: half the trailing contribution months, at most 24.
pub fn benefit_duration_months(trailing_contribution_months: u32) -> Decimal {
    (Decimal::from(trailing_contribution_months) / Decimal::from(2))
        .min(Decimal::from(MAX_BENEFIT_MONTHS))
}

/// The result of the unemployment benefit calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnemploymentBenefitResult {
    /// Gross annual salary divided by 13.
    pub average_monthly_salary: Decimal,
    /// Monthly benefit amount.
    pub monthly_amount: Decimal,
    /// Duration in months (may be fractional).
    pub duration_months: Decimal,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

/// Calculates the monthly unemployment benefit and its duration.
pub fn calculate_unemployment_benefit(
    gross_annual_salary: Decimal,
    trailing_contribution_months: u32,
    step_number: u32,
) -> UnemploymentBenefitResult {
    let average_monthly_salary = gross_annual_salary / Decimal::from(13);
    let monthly_amount = monthly_unemployment_benefit(average_monthly_salary);
    let duration_months = benefit_duration_months(trailing_contribution_months);
    let above_threshold = average_monthly_salary > benefit_threshold();

    let reasoning = if above_threshold {
        format!(
            "€{} x 75% + (€{} - €{}) x 25% = €{}/month for {} months",
            benefit_threshold(),
            average_monthly_salary.round_dp(2),
            benefit_threshold(),
            monthly_amount.round_dp(2),
            duration_months.normalize()
        )
    } else {
        format!(
            "€{} x 75% = €{}/month for {} months",
            average_monthly_salary.round_dp(2),
            monthly_amount.round_dp(2),
            duration_months.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "unemployment_benefit".to_string(),
        rule_name: "Unemployment Benefit (NASpI)".to_string(),
        legal_ref: UNEMPLOYMENT_BENEFIT_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "gross_annual_salary": gross_annual_salary.normalize().to_string(),
            "trailing_contribution_months": trailing_contribution_months
        }),
        output: serde_json::json!({
            "average_monthly_salary": average_monthly_salary.round_dp(2).to_string(),
            "above_threshold": above_threshold,
            "monthly_amount": monthly_amount.round_dp(2).to_string(),
            "duration_months": duration_months.normalize().to_string()
        }),
        reasoning,
    };

    UnemploymentBenefitResult {
        average_monthly_salary,
        monthly_amount,
        duration_months,
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
    fn test_salary_below_threshold() {
        // 13000 / 13 = 1000, x 0.75
        let result = calculate_unemployment_benefit(dec("13000"), 48, 1);
        assert_eq!(result.average_monthly_salary, dec("1000"));
        assert_eq!(result.monthly_amount, dec("750"));
    }

    #[test]
    fn test_salary_above_threshold() {
        // 45000 / 13 = 3461.54; 1014.1425 + (3461.54 - 1352.19) x 0.25
        let result = calculate_unemployment_benefit(dec("45000"), 48, 1);
        assert_eq!(result.monthly_amount.round_dp(2), dec("1541.48"));
        assert_eq!(result.audit_step.output["above_threshold"], true);
    }

    #[test]
    fn test_branches_agree_at_threshold() {
        let threshold = benefit_threshold();
        assert_eq!(
            monthly_unemployment_benefit(threshold),
            threshold * lower_tier_rate()
        );
        assert_eq!(monthly_unemployment_benefit(threshold), dec("1014.1425"));

        let result = calculate_unemployment_benefit(dec("17578.47"), 24, 1);
        assert_eq!(result.average_monthly_salary, threshold);
        assert_eq!(result.monthly_amount, dec("1014.1425"));
    }

    #[test]
    fn test_benefit_non_decreasing_in_salary() {
        let mut previous = Decimal::ZERO;
        for salary in [500, 1000, 1352, 1353, 2000, 5000, 15000] {
            let amount = monthly_unemployment_benefit(Decimal::from(salary));
            assert!(amount >= previous);
            previous = amount;
        }
    }

    #[test]
    fn test_duration_is_half_of_trailing_months() {
        assert_eq!(benefit_duration_months(30), dec("15"));
        assert_eq!(benefit_duration_months(25), dec("12.5"));
        assert_eq!(benefit_duration_months(0), Decimal::ZERO);
    }

    #[test]
    fn test_duration_capped_at_24_months() {
        assert_eq!(benefit_duration_months(48), dec("24"));
        assert_eq!(benefit_duration_months(60), dec("24"));
    }

    #[test]
    fn test_audit_step() {
        let result = calculate_unemployment_benefit(dec("13000"), 30, 3);
        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "unemployment_benefit");
        assert_eq!(result.audit_step.output["duration_months"], "15");
        assert!(result.audit_step.reasoning.contains("x 75%"));
    }
}

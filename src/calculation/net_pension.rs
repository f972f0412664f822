//! Net pension estimation.
//!
//! A flat replacement-rate model: the last net monthly salary scaled by a
//! scheme-specific replacement rate and a career-length factor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ContributionScheme};

/// Legal reference for the pension amount calculation.
pub const NET_PENSION_LEGAL_REF: &str = "L. 335/1995";

/// Career length that earns the full replacement rate.
pub const FULL_CAREER_YEARS: u32 = 40;

/// Share of gross salary left after tax and social contributions.
pub fn net_salary_ratio() -> Decimal {
    Decimal::new(65, 2)
}

/// Number of monthly salary payments per year (13th month included).
pub fn salary_months_per_year() -> Decimal {
    Decimal::from(13)
}

/// Upper bound of the career-length factor.
pub fn max_years_factor() -> Decimal {
    Decimal::new(11, 1)
}

/// Estimated net monthly salary: gross annual × 0.65 / 13.
///
/// ```
/// use pension_bridge::calculation::net_monthly_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(net_monthly_salary(Decimal::new(45000, 0)), Decimal::new(2250, 0));
/// ```
pub fn net_monthly_salary(gross_annual_salary: Decimal) -> Decimal {
    gross_annual_salary * net_salary_ratio() / salary_months_per_year()
}

/// Career-length factor: years / 40, capped at 1.1.
pub fn years_factor(contribution_years: u32) -> Decimal {
    (Decimal::from(contribution_years) / Decimal::from(FULL_CAREER_YEARS)).min(max_years_factor())
}

/// Base replacement rate for a contribution scheme.
pub fn replacement_rate(scheme: ContributionScheme) -> Decimal {
    match scheme {
        ContributionScheme::PrivateEmployee => Decimal::new(75, 2),
        ContributionScheme::Artisan | ContributionScheme::Merchant => Decimal::new(65, 2),
        ContributionScheme::SelfEmployed => Decimal::new(60, 2),
        ContributionScheme::Agricultural => Decimal::new(55, 2),
        ContributionScheme::Other => Decimal::new(70, 2),
    }
}

/// Monthly net pension without the audit step.
pub fn net_pension_amount(
    gross_annual_salary: Decimal,
    contribution_years: u32,
    scheme: ContributionScheme,
) -> Decimal {
    net_monthly_salary(gross_annual_salary)
        * replacement_rate(scheme)
        * years_factor(contribution_years)
}

/// The result of the net pension estimate, including the audit step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetPensionResult {
    /// Estimated last net monthly salary.
    pub net_monthly_salary: Decimal,
    /// Career-length factor applied.
    pub years_factor: Decimal,
    /// Replacement rate applied.
    pub replacement_rate: Decimal,
    /// Estimated net monthly pension.
    pub monthly_pension: Decimal,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

/// Estimates the net monthly pension.
///
/// # Examples
///
/// ```
/// use pension_bridge::calculation::estimate_net_pension;
/// use pension_bridge::models::ContributionScheme;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = estimate_net_pension(
///     Decimal::new(45000, 0),
///     38,
///     ContributionScheme::PrivateEmployee,
///     1,
/// );
/// assert_eq!(result.monthly_pension, Decimal::from_str("1603.125").unwrap());
/// ```
pub fn estimate_net_pension(
    gross_annual_salary: Decimal,
    contribution_years: u32,
    scheme: ContributionScheme,
    step_number: u32,
) -> NetPensionResult {
    let net_salary = net_monthly_salary(gross_annual_salary);
    let factor = years_factor(contribution_years);
    let rate = replacement_rate(scheme);
    let monthly_pension = net_salary * rate * factor;

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pension".to_string(),
        rule_name: "Net Pension Estimate".to_string(),
        legal_ref: NET_PENSION_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "gross_annual_salary": gross_annual_salary.normalize().to_string(),
            "contribution_years": contribution_years,
            "contribution_scheme": scheme
        }),
        output: serde_json::json!({
            "net_monthly_salary": net_salary.round_dp(2).normalize().to_string(),
            "years_factor": factor.normalize().to_string(),
            "replacement_rate": rate.normalize().to_string(),
            "monthly_pension": monthly_pension.round_dp(2).normalize().to_string()
        }),
        reasoning: format!(
            "€{} x {} (scheme {}) x {} (years factor) = €{}",
            net_salary.round_dp(2).normalize(),
            rate.normalize(),
            scheme,
            factor.normalize(),
            monthly_pension.round_dp(2).normalize()
        ),
    };

    NetPensionResult {
        net_monthly_salary: net_salary,
        years_factor: factor,
        replacement_rate: rate,
        monthly_pension,
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
    fn test_net_monthly_salary() {
        assert_eq!(net_monthly_salary(dec("45000")), dec("2250"));
        assert_eq!(net_monthly_salary(dec("26000")), dec("1300"));
    }

    #[test]
    fn test_private_employee_38_years() {
        let result = estimate_net_pension(dec("45000"), 38, ContributionScheme::PrivateEmployee, 1);

        assert_eq!(result.net_monthly_salary, dec("2250"));
        assert_eq!(result.years_factor, dec("0.95"));
        assert_eq!(result.replacement_rate, dec("0.75"));
        assert_eq!(result.monthly_pension, dec("1603.125"));
    }

    #[test]
    fn test_replacement_rates_by_scheme() {
        assert_eq!(replacement_rate(ContributionScheme::PrivateEmployee), dec("0.75"));
        assert_eq!(replacement_rate(ContributionScheme::Artisan), dec("0.65"));
        assert_eq!(replacement_rate(ContributionScheme::Merchant), dec("0.65"));
        assert_eq!(replacement_rate(ContributionScheme::SelfEmployed), dec("0.60"));
        assert_eq!(replacement_rate(ContributionScheme::Agricultural), dec("0.55"));
        assert_eq!(replacement_rate(ContributionScheme::Other), dec("0.70"));
    }

    #[test]
    fn test_years_factor_is_capped() {
        assert_eq!(years_factor(20), dec("0.5"));
        assert_eq!(years_factor(40), dec("1"));
        assert_eq!(years_factor(44), dec("1.1"));
        assert_eq!(years_factor(50), dec("1.1"));
    }

    #[test]
    fn test_longer_career_increases_pension() {
        let shorter = net_pension_amount(dec("45000"), 38, ContributionScheme::PrivateEmployee);
        let longer = net_pension_amount(dec("45000"), 42, ContributionScheme::PrivateEmployee);
        assert!(shorter < longer);
    }

    #[test]
    fn test_pension_flat_beyond_cap() {
        let at_cap = net_pension_amount(dec("45000"), 44, ContributionScheme::PrivateEmployee);
        let beyond = net_pension_amount(dec("45000"), 50, ContributionScheme::PrivateEmployee);
        assert_eq!(at_cap, beyond);
    }

    #[test]
    fn test_agricultural_pension() {
        // 2250 x 0.55 x 1.0
        let amount = net_pension_amount(dec("45000"), 40, ContributionScheme::Agricultural);
        assert_eq!(amount, dec("1237.5"));
    }

    #[test]
    fn test_audit_step_contents() {
        let result = estimate_net_pension(dec("45000"), 38, ContributionScheme::Artisan, 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "net_pension");
        assert_eq!(
            result.audit_step.input["contribution_scheme"].as_str().unwrap(),
            "artisan"
        );
        assert_eq!(
            result.audit_step.output["replacement_rate"].as_str().unwrap(),
            "0.65"
        );
        // 2250 x 0.65 x 0.95 = 1389.375
        assert_eq!(
            result.audit_step.output["monthly_pension"].as_str().unwrap(),
            "1389.38"
        );
        assert!(result.audit_step.reasoning.contains("€2250"));
    }
}

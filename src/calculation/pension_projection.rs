//! Pension projection for additional working years and break-even analysis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ContributionScheme};

use super::net_pension::net_pension_amount;

/// Largest number of extra working years projected.
pub const MAX_EXTRA_YEARS: u32 = 5;

/// Life expectancy used for lifetime totals.
pub const LIFE_EXPECTANCY: u32 = 85;

/// Extra working years compared in the break-even analysis.
pub const BREAK_EVEN_EXTRA_YEARS: u32 = 2;

/// Yearly salary growth assumed while still working.
pub fn salary_growth_rate() -> Decimal {
    Decimal::new(1, 2)
}

/// One row of the projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Extra years worked.
    pub extra_years: u32,
    /// Projected gross annual salary.
    pub gross_annual_salary: Decimal,
    /// Projected contribution years.
    pub contribution_years: u32,
    /// Projected net monthly pension.
    pub monthly_pension: Decimal,
    /// Increase over leaving now.
    pub monthly_increase: Decimal,
}

/// Lifetime pension income now versus after working longer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEven {
    /// Years between the current age and life expectancy.
    pub years_in_retirement: u32,
    /// Lifetime pension when leaving now.
    pub lifetime_total_now: Decimal,
    /// Lifetime pension after two more working years.
    pub lifetime_total_later: Decimal,
    /// Later total minus current total.
    pub difference: Decimal,
}

/// The projection table and break-even figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionProjection {
    /// Rows for 0 to 5 extra years.
    pub rows: Vec<ProjectionRow>,
    /// Break-even comparison.
    pub break_even: BreakEven,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

/// Projects the net pension for 0 to 5 extra working years.
///
/// Salary grows 1% per year; each year adds one contribution year.
pub fn project_pension(
    age: u32,
    gross_annual_salary: Decimal,
    contribution_years: u32,
    scheme: ContributionScheme,
    step_number: u32,
) -> PensionProjection {
    let growth = Decimal::ONE + salary_growth_rate();

    let mut rows = Vec::with_capacity(MAX_EXTRA_YEARS as usize + 1);
    let mut salary = gross_annual_salary;
    let mut baseline = Decimal::ZERO;
    for extra_years in 0..=MAX_EXTRA_YEARS {
        let years = contribution_years + extra_years;
        let monthly_pension = net_pension_amount(salary, years, scheme);
        if extra_years == 0 {
            baseline = monthly_pension;
        }
        rows.push(ProjectionRow {
            extra_years,
            gross_annual_salary: salary,
            contribution_years: years,
            monthly_pension,
            monthly_increase: monthly_pension - baseline,
        });
        salary *= growth;
    }

    let years_in_retirement = LIFE_EXPECTANCY.saturating_sub(age);
    let months_per_year = Decimal::from(12);
    let lifetime_total_now = baseline * months_per_year * Decimal::from(years_in_retirement);
    let later_pension = rows
        .get(BREAK_EVEN_EXTRA_YEARS as usize)
        .map_or(baseline, |row| row.monthly_pension);
    let lifetime_total_later = later_pension
        * months_per_year
        * Decimal::from(years_in_retirement.saturating_sub(BREAK_EVEN_EXTRA_YEARS));

    let break_even = BreakEven {
        years_in_retirement,
        lifetime_total_now,
        lifetime_total_later,
        difference: lifetime_total_later - lifetime_total_now,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pension_projection".to_string(),
        rule_name: "Pension Projection".to_string(),
        legal_ref: "-".to_string(),
        input: serde_json::json!({
            "age": age,
            "gross_annual_salary": gross_annual_salary.normalize().to_string(),
            "contribution_years": contribution_years,
            "contribution_scheme": scheme
        }),
        output: serde_json::json!({
            "pension_now": baseline.round_dp(2).to_string(),
            "pension_after_max_years": rows
                .last()
                .map(|row| row.monthly_pension.round_dp(2).to_string()),
            "lifetime_total_now": lifetime_total_now.round_dp(2).to_string(),
            "lifetime_total_later": lifetime_total_later.round_dp(2).to_string()
        }),
        reasoning: format!(
            "{} years in retirement to age {}: €{} leaving now vs €{} after {} more years",
            years_in_retirement,
            LIFE_EXPECTANCY,
            lifetime_total_now.round_dp(2),
            lifetime_total_later.round_dp(2),
            BREAK_EVEN_EXTRA_YEARS
        ),
    };

    PensionProjection {
        rows,
        break_even,
        audit_step,
    }
}

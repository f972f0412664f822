//! Human-readable rendering of an assessment.
//!
//! Currency is shown as `€ 1,603.13`, dates as `dd/mm/yyyy` and percentages
//! with one decimal place. Halves round away from zero.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::calculation::{Assessment, RetirementRoute};
use crate::models::Eligibility;

/// Formats an amount as `€ 1,234.56`.
///
/// ```
/// use pension_bridge::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1603125, 3)), "€ 1,603.13");
/// assert_eq!(format_currency(Decimal::new(-500, 0)), "€ -500.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("€ {}{}.{}", sign, grouped, fraction)
}

/// Formats a date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a percentage with one decimal place.
///
/// ```
/// use pension_bridge::report::format_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percentage(Decimal::new(8125, 2)), "81.3%");
/// ```
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

fn eligibility_label(eligibility: &Eligibility) -> &'static str {
    if eligibility.is_eligible() {
        "eligible"
    } else {
        "not eligible"
    }
}

fn route_label(route: RetirementRoute) -> &'static str {
    match route {
        RetirementRoute::OldAge => "old-age pension",
        RetirementRoute::EarlyRetirement => "early retirement",
        RetirementRoute::HazardousQuota => "hazardous-occupation quota",
    }
}

/// Plain-text view of an assessment, printed by the CLI.
///
/// Implements [`fmt::Display`], so it can be written straight to any
/// formatter or collected with `to_string()`.
pub struct TextReport<'a>(pub &'a Assessment);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self.0)
    }
}

/// Renders the plain-text report printed by the CLI.
pub fn render_text_report(assessment: &Assessment) -> String {
    TextReport(assessment).to_string()
}

fn write_report(out: &mut fmt::Formatter<'_>, a: &Assessment) -> fmt::Result {
    let retirement = &a.retirement;
    writeln!(out, "PENSION BRIDGE ASSESSMENT")?;
    writeln!(out, "Evaluated on {}", format_date(a.evaluation_date))?;
    writeln!(out)?;

    writeln!(out, "Retirement")?;
    writeln!(
        out,
        "  Earliest exit:        {} ({})",
        format_date(retirement.earliest_date),
        route_label(retirement.route)
    )?;
    writeln!(
        out,
        "  Old-age pension:      {}",
        format_date(retirement.old_age_date)
    )?;
    writeln!(
        out,
        "  Early retirement:     {}",
        format_date(retirement.early_retirement_date)
    )?;
    writeln!(out, "  Months remaining:     {}", retirement.months_remaining)?;
    writeln!(
        out,
        "  Net pension:          {} / month",
        format_currency(a.pension.monthly_pension)
    )?;
    writeln!(
        out,
        "  Last net salary:      {} / month",
        format_currency(a.net_monthly_salary)
    )?;
    writeln!(out)?;

    writeln!(out, "Bridge income")?;
    writeln!(
        out,
        "  Unemployment benefit: {} / month for {} months",
        format_currency(a.unemployment_benefit.monthly_amount),
        a.unemployment_benefit.duration_months.normalize()
    )?;
    writeln!(
        out,
        "  Social advance:       {} ({}: {})",
        format_currency(a.social_advance_pension.monthly_amount),
        eligibility_label(&a.social_advance_pension.eligibility),
        a.social_advance_pension.message
    )?;
    writeln!(
        out,
        "  Temporary annuity:    {} ({}: {})",
        format_currency(a.temporary_annuity.monthly_amount),
        eligibility_label(&a.temporary_annuity.eligibility),
        a.temporary_annuity.message
    )?;
    writeln!(
        out,
        "  Total coverage:       {} ({} of net salary), gap {}",
        format_currency(a.coverage.total_monthly_coverage),
        format_percentage(a.coverage.coverage_percentage),
        format_currency(a.coverage.monthly_gap)
    )?;
    writeln!(out)?;

    let incentive = &a.severance_incentive;
    writeln!(
        out,
        "Severance incentive ({}, factor {})",
        incentive.region, incentive.regional_factor
    )?;
    let rows = [
        ("Gap coverage:", incentive.base_incentive),
        ("Leisure value:", incentive.leisure_value),
        ("Suggested total:", incentive.total_incentive),
        ("Proposed:", a.proposed_incentive),
    ];
    for (label, amount) in rows {
        writeln!(out, "  {:<21} {}", label, format_currency(amount))?;
    }
    for regional in &a.regional_comparison {
        writeln!(
            out,
            "    {:<12} {}",
            regional.region.name(),
            format_currency(regional.total_incentive)
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Employer")?;
    writeln!(
        out,
        "  Retention cost:       {}",
        format_currency(a.company.retention_cost)
    )?;
    writeln!(
        out,
        "  Savings:              {}",
        format_currency(a.company.savings)
    )?;
    if let Some(roi) = a.company.return_on_investment {
        writeln!(out, "  ROI:                  {}", format_percentage(roi))?;
    }
    writeln!(out)?;

    writeln!(out, "Working longer")?;
    for row in &a.projection.rows {
        writeln!(
            out,
            "  +{} years: {} / month (+{})",
            row.extra_years,
            format_currency(row.monthly_pension),
            format_currency(row.monthly_increase)
        )?;
    }
    let break_even = &a.projection.break_even;
    writeln!(
        out,
        "  Lifetime total: {} now, {} after 2 more years",
        format_currency(break_even.lifetime_total_now),
        format_currency(break_even.lifetime_total_later)
    )?;

    if !a.notes.is_empty() {
        writeln!(out)?;
        writeln!(out, "Notes")?;
        for note in &a.notes {
            writeln!(out, "  - {}", note)?;
        }
    }

    if !a.audit_trace.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Warnings")?;
        for warning in &a.audit_trace.warnings {
            writeln!(out, "  [{}] {}", warning.code, warning.message)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::assess;
    use crate::config::RegionalCostTable;
    use crate::models::{
        AssessmentInput, AuditWarning, ContributionScheme, EmploymentSituation, Gender,
        IncentiveChoice, Region, WorkerProfile,
    };
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec("1603.125")), "€ 1,603.13");
        assert_eq!(format_currency(dec("0.005")), "€ 0.01");
    }

    #[test]
    fn test_currency_thousands_grouping() {
        assert_eq!(format_currency(dec("0")), "€ 0.00");
        assert_eq!(format_currency(dec("999.9")), "€ 999.90");
        assert_eq!(format_currency(dec("1000")), "€ 1,000.00");
        assert_eq!(format_currency(dec("123456.7")), "€ 123,456.70");
        assert_eq!(format_currency(dec("1234567.891")), "€ 1,234,567.89");
    }

    #[test]
    fn test_negative_currency() {
        assert_eq!(format_currency(dec("-130500")), "€ -130,500.00");
        assert_eq!(format_currency(dec("-0.001")), "€ 0.00");
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2031, 8, 9).unwrap();
        assert_eq!(format_date(date), "09/08/2031");
    }

    #[test]
    fn test_percentage_format() {
        assert_eq!(format_percentage(dec("80")), "80.0%");
        assert_eq!(format_percentage(dec("68.51234")), "68.5%");
        assert_eq!(format_percentage(dec("12.25")), "12.3%");
    }

    #[test]
    fn test_text_report_contents() {
        let input = AssessmentInput {
            profile: WorkerProfile {
                age: 62,
                gender: Gender::Male,
                region: Region::Lombardia,
                contribution_scheme: ContributionScheme::Artisan,
                contribution_years: 38,
                early_career: false,
                hazardous_occupation: false,
                gross_annual_salary: dec("45000"),
            },
            situation: EmploymentSituation::default(),
            complementary_pension_capital: Decimal::ZERO,
            incentive: IncentiveChoice::Automatic,
            evaluation_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        };
        let warning = AuditWarning::input_clamped("profile.age", "45", "50");
        let assessment = assess(&input, &RegionalCostTable::default(), vec![warning]);
        let report = render_text_report(&assessment);

        assert!(report.contains("Evaluated on 19/10/2026"));
        assert!(report.contains("19/08/2031 (early retirement)"));
        assert!(report.contains("€ 2,250.00 / month"));
        assert!(report.contains("Calabria"));
        assert!(report.contains("Contribution scheme artisan"));
        assert!(report.contains("[INPUT_CLAMPED]"));
    }

    #[test]
    fn test_text_report_display_matches_render() {
        let input = AssessmentInput {
            profile: WorkerProfile {
                age: 64,
                gender: Gender::Female,
                region: Region::Calabria,
                contribution_scheme: ContributionScheme::PrivateEmployee,
                contribution_years: 32,
                early_career: false,
                hazardous_occupation: false,
                gross_annual_salary: dec("45000"),
            },
            situation: EmploymentSituation {
                unemployed: true,
                trailing_contribution_months: 24,
                ..Default::default()
            },
            complementary_pension_capital: dec("120000"),
            incentive: IncentiveChoice::Manual {
                amount: dec("50000"),
            },
            evaluation_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        };
        let assessment = assess(&input, &RegionalCostTable::default(), vec![]);

        let rendered = render_text_report(&assessment);
        assert_eq!(format!("{}", TextReport(&assessment)), rendered);
        assert!(rendered.starts_with("PENSION BRIDGE ASSESSMENT\n"));
        assert!(rendered.contains("Social advance:       € 1,350.00 (eligible"));
        assert!(rendered.contains("Proposed:             € 50,000.00"));
        assert!(!rendered.contains("Warnings"));
    }
}

//! Full exit assessment.
//!
//! Runs every calculation for one worker in a fixed order, threads the
//! results into each other and collects their audit steps into a single
//! trace. Nothing here can fail: invalid input is rejected or clamped
//! before it reaches [`assess`].

use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::RegionalCostTable;
use crate::models::{
    AssessmentInput, AuditStep, AuditTrace, AuditWarning, ContributionScheme, Region,
};

use super::company_analysis::{CompanyAnalysis, analyse_company_cost};
use super::coverage::{CoverageSummary, summarize_coverage};
use super::net_pension::{NetPensionResult, estimate_net_pension};
use super::pension_projection::{PensionProjection, project_pension};
use super::retirement_date::{RetirementDateResult, estimate_retirement_date};
use super::severance_incentive::{SeveranceIncentiveResult, calculate_severance_incentive};
use super::social_advance_pension::{SocialAdvancePensionResult, calculate_social_advance_pension};
use super::temporary_annuity::{TemporaryAnnuityResult, calculate_temporary_annuity};
use super::unemployment_benefit::{UnemploymentBenefitResult, calculate_unemployment_benefit};

/// Regions the incentive is recomputed for in the regional comparison.
pub const COMPARISON_REGIONS: [Region; 5] = [
    Region::Lombardia,
    Region::Lazio,
    Region::Campania,
    Region::Calabria,
    Region::Toscana,
];

/// The incentive the worker would receive in another region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalIncentive {
    /// The region.
    pub region: Region,
    /// Its cost-of-living factor.
    pub regional_factor: Decimal,
    /// Total incentive in that region.
    pub total_incentive: Decimal,
}

/// A labelled value in a pie, bar or line series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// The label.
    pub label: String,
    /// The value.
    pub value: Decimal,
}

impl ChartPoint {
    fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Whether a waterfall bar is a delta or a running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterfallMeasure {
    /// Added to the running total.
    Relative,
    /// The running total itself.
    Total,
}

/// One bar of the personal decision waterfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallBar {
    /// The label.
    pub label: String,
    /// The amount; negative for money given up.
    pub amount: Decimal,
    /// How the bar is drawn.
    pub measure: WaterfallMeasure,
}

/// Data series for the dashboard charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Pie: gap coverage versus leisure value.
    pub incentive_composition: Vec<ChartPoint>,
    /// Bar: total incentive per comparison region.
    pub incentive_by_region: Vec<ChartPoint>,
    /// Line: net pension per extra working year.
    pub pension_by_extra_years: Vec<ChartPoint>,
    /// Waterfall: the worker's financial position over the exit window.
    pub personal_decision: Vec<WaterfallBar>,
}

/// The complete result of an exit assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique identifier for this assessment.
    pub assessment_id: Uuid,
    /// When the assessment was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced it.
    pub engine_version: String,
    /// The date the assessment was evaluated on.
    pub evaluation_date: NaiveDate,
    /// Retirement dates.
    pub retirement: RetirementDateResult,
    /// Estimated last net monthly salary.
    pub net_monthly_salary: Decimal,
    /// Estimated net pension.
    pub pension: NetPensionResult,
    /// Unemployment benefit.
    pub unemployment_benefit: UnemploymentBenefitResult,
    /// Social advance pension.
    pub social_advance_pension: SocialAdvancePensionResult,
    /// Temporary annuity from complementary capital.
    pub temporary_annuity: TemporaryAnnuityResult,
    /// Bridge income coverage.
    pub coverage: CoverageSummary,
    /// Computed severance incentive for the worker's region.
    pub severance_incentive: SeveranceIncentiveResult,
    /// Incentive actually offered (computed or manual).
    pub proposed_incentive: Decimal,
    /// Employer cost/benefit.
    pub company: CompanyAnalysis,
    /// Pension projection and break-even.
    pub projection: PensionProjection,
    /// Incentive in the comparison regions.
    pub regional_comparison: Vec<RegionalIncentive>,
    /// Chart series.
    pub charts: ChartSeries,
    /// Notices about special worker categories.
    pub notes: Vec<String>,
    /// Complete audit trace.
    pub audit_trace: AuditTrace,
}

/// Runs a full assessment.
///
/// `warnings` carries anything raised while the input was prepared (for
/// example clamped values) and is copied into the audit trace.
///
/// # Examples
///
/// ```
/// use pension_bridge::calculation::assess;
/// use pension_bridge::config::RegionalCostTable;
/// use pension_bridge::models::{
///     AssessmentInput, ContributionScheme, EmploymentSituation, Gender, IncentiveChoice,
///     Region, WorkerProfile,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = AssessmentInput {
///     profile: WorkerProfile {
///         age: 62,
///         gender: Gender::Male,
///         region: Region::Lombardia,
///         contribution_scheme: ContributionScheme::PrivateEmployee,
///         contribution_years: 38,
///         early_career: false,
///         hazardous_occupation: false,
///         gross_annual_salary: Decimal::new(45000, 0),
///     },
///     situation: EmploymentSituation::default(),
///     complementary_pension_capital: Decimal::ZERO,
///     incentive: IncentiveChoice::Automatic,
///     evaluation_date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
/// };
///
/// let assessment = assess(&input, &RegionalCostTable::default(), vec![]);
/// assert!(assessment.retirement.earliest_date < assessment.retirement.old_age_date);
/// assert_eq!(assessment.audit_trace.steps.len(), 9);
/// ```
pub fn assess(
    input: &AssessmentInput,
    regional_costs: &RegionalCostTable,
    warnings: Vec<AuditWarning>,
) -> Assessment {
    let start_time = Instant::now();
    let profile = &input.profile;
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let retirement = estimate_retirement_date(profile, input.evaluation_date, step_number);
    steps.push(retirement.audit_step.clone());
    step_number += 1;
    debug!(
        earliest_date = %retirement.earliest_date,
        months_remaining = retirement.months_remaining,
        "Retirement date estimated"
    );

    let pension = estimate_net_pension(
        profile.gross_annual_salary,
        profile.contribution_years,
        profile.contribution_scheme,
        step_number,
    );
    steps.push(pension.audit_step.clone());
    step_number += 1;
    let net_monthly_salary = pension.net_monthly_salary;
    debug!(monthly_pension = %pension.monthly_pension, "Net pension estimated");

    let unemployment_benefit = calculate_unemployment_benefit(
        profile.gross_annual_salary,
        input.situation.trailing_contribution_months,
        step_number,
    );
    steps.push(unemployment_benefit.audit_step.clone());
    step_number += 1;

    let social_advance_pension =
        calculate_social_advance_pension(profile, &input.situation, step_number);
    steps.push(social_advance_pension.audit_step.clone());
    step_number += 1;

    let years_to_pension = Decimal::from(retirement.months_remaining) / Decimal::from(12);
    let temporary_annuity = calculate_temporary_annuity(
        input.complementary_pension_capital,
        profile.age,
        years_to_pension,
        step_number,
    );
    steps.push(temporary_annuity.audit_step.clone());
    step_number += 1;
    debug!(
        unemployment_benefit = %unemployment_benefit.monthly_amount,
        social_advance_pension = social_advance_pension.is_eligible(),
        temporary_annuity = temporary_annuity.is_eligible(),
        "Bridge instruments evaluated"
    );

    let coverage = summarize_coverage(
        net_monthly_salary,
        unemployment_benefit.monthly_amount,
        social_advance_pension.monthly_amount,
        temporary_annuity.monthly_amount,
        step_number,
    );
    steps.push(coverage.audit_step.clone());
    step_number += 1;

    let months = retirement.months_remaining.max(1);
    let severance_incentive = calculate_severance_incentive(
        profile.gross_annual_salary,
        months,
        profile.region,
        unemployment_benefit.monthly_amount,
        social_advance_pension.monthly_amount,
        regional_costs,
        step_number,
    );
    steps.push(severance_incentive.audit_step.clone());
    step_number += 1;

    let proposed_incentive = input.incentive.resolve(severance_incentive.total_incentive);
    debug!(
        total_incentive = %severance_incentive.total_incentive,
        proposed_incentive = %proposed_incentive,
        "Severance incentive calculated"
    );

    let company = analyse_company_cost(
        profile.gross_annual_salary,
        months,
        proposed_incentive,
        step_number,
    );
    steps.push(company.audit_step.clone());
    step_number += 1;

    let projection = project_pension(
        profile.age,
        profile.gross_annual_salary,
        profile.contribution_years,
        profile.contribution_scheme,
        step_number,
    );
    steps.push(projection.audit_step.clone());

    let regional_comparison: Vec<RegionalIncentive> = COMPARISON_REGIONS
        .iter()
        .map(|&region| {
            let result = calculate_severance_incentive(
                profile.gross_annual_salary,
                months,
                region,
                unemployment_benefit.monthly_amount,
                social_advance_pension.monthly_amount,
                regional_costs,
                0,
            );
            RegionalIncentive {
                region,
                regional_factor: result.regional_factor,
                total_incentive: result.total_incentive,
            }
        })
        .collect();

    let charts = build_charts(
        &severance_incentive,
        &regional_comparison,
        &projection,
        &coverage,
        net_monthly_salary,
        proposed_incentive,
        months,
    );

    let notes = category_notes(input);
    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(steps = steps.len(), duration_us, "Assessment completed");

    Assessment {
        assessment_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        evaluation_date: input.evaluation_date,
        retirement,
        net_monthly_salary,
        pension,
        unemployment_benefit,
        social_advance_pension,
        temporary_annuity,
        coverage,
        severance_incentive,
        proposed_incentive,
        company,
        projection,
        regional_comparison,
        charts,
        notes,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

fn build_charts(
    incentive: &SeveranceIncentiveResult,
    regional_comparison: &[RegionalIncentive],
    projection: &PensionProjection,
    coverage: &CoverageSummary,
    net_monthly_salary: Decimal,
    proposed_incentive: Decimal,
    months: u32,
) -> ChartSeries {
    let window = Decimal::from(months);
    let salary_forgone = -(net_monthly_salary * window);
    let bridge_income = coverage.total_monthly_coverage * window;
    let net_position = salary_forgone + bridge_income + proposed_incentive;

    ChartSeries {
        incentive_composition: vec![
            ChartPoint::new("Gap coverage", incentive.base_incentive),
            ChartPoint::new("Leisure value", incentive.leisure_value),
        ],
        incentive_by_region: regional_comparison
            .iter()
            .map(|r| ChartPoint::new(r.region.name(), r.total_incentive))
            .collect(),
        pension_by_extra_years: projection
            .rows
            .iter()
            .map(|row| ChartPoint::new(format!("+{}", row.extra_years), row.monthly_pension))
            .collect(),
        personal_decision: vec![
            WaterfallBar {
                label: "Salary forgone".to_string(),
                amount: salary_forgone,
                measure: WaterfallMeasure::Relative,
            },
            WaterfallBar {
                label: "Bridge income".to_string(),
                amount: bridge_income,
                measure: WaterfallMeasure::Relative,
            },
            WaterfallBar {
                label: "Exit incentive".to_string(),
                amount: proposed_incentive,
                measure: WaterfallMeasure::Relative,
            },
            WaterfallBar {
                label: "Net position".to_string(),
                amount: net_position,
                measure: WaterfallMeasure::Total,
            },
        ],
    }
}

fn category_notes(input: &AssessmentInput) -> Vec<String> {
    let profile = &input.profile;
    let mut notes = Vec::new();
    if profile.early_career {
        notes.push("Early-career worker: reduced requirement of 41 contribution years".to_string());
    }
    if profile.hazardous_occupation {
        notes.push("Hazardous occupation: early exit available with quota 97.6".to_string());
    }
    if profile.contribution_scheme != ContributionScheme::PrivateEmployee {
        notes.push(format!(
            "Contribution scheme {}: scheme-specific replacement rate applied",
            profile.contribution_scheme
        ));
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::RetirementRoute;
    use crate::config::RegionFactor;
    use crate::models::{EmploymentSituation, Gender, IncentiveChoice, WorkerProfile};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn table() -> RegionalCostTable {
        RegionalCostTable::from_rows(
            [
                (Region::Lombardia, "1.12"),
                (Region::Lazio, "1.15"),
                (Region::Campania, "0.88"),
                (Region::Calabria, "0.82"),
                (Region::Toscana, "1.06"),
            ]
            .into_iter()
            .map(|(region, factor)| RegionFactor {
                region,
                factor: dec(factor),
            }),
        )
    }

    fn sample_input() -> AssessmentInput {
        AssessmentInput {
            profile: WorkerProfile {
                age: 62,
                gender: Gender::Male,
                region: Region::Lombardia,
                contribution_scheme: ContributionScheme::PrivateEmployee,
                contribution_years: 38,
                early_career: false,
                hazardous_occupation: false,
                gross_annual_salary: dec("45000"),
            },
            situation: EmploymentSituation {
                trailing_contribution_months: 48,
                ..Default::default()
            },
            complementary_pension_capital: Decimal::ZERO,
            incentive: IncentiveChoice::Automatic,
            evaluation_date: today(),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let assessment = assess(&sample_input(), &table(), vec![]);

        assert_eq!(assessment.evaluation_date, today());
        assert!(assessment.retirement.earliest_date < assessment.retirement.old_age_date);
        assert_eq!(assessment.retirement.route, RetirementRoute::EarlyRetirement);
        assert_eq!(assessment.retirement.months_remaining, 58);
        assert_eq!(assessment.net_monthly_salary, dec("2250"));
        assert_eq!(assessment.pension.monthly_pension, dec("1603.125"));
        assert!(!assessment.social_advance_pension.is_eligible());
        assert!(!assessment.temporary_annuity.is_eligible());
        assert_eq!(assessment.severance_incentive.months, 58);
        assert_eq!(assessment.severance_incentive.regional_factor, dec("1.12"));
        assert_eq!(
            assessment.proposed_incentive,
            assessment.severance_incentive.total_incentive
        );
    }

    #[test]
    fn test_audit_steps_numbered_in_order() {
        let assessment = assess(&sample_input(), &table(), vec![]);
        let steps = &assessment.audit_trace.steps;

        assert_eq!(steps.len(), 9);
        for (index, step) in steps.iter().enumerate() {
            assert_eq!(step.step_number, index as u32 + 1);
        }
        assert_eq!(steps[0].rule_id, "retirement_date");
        assert_eq!(steps[6].rule_id, "severance_incentive");
        assert_eq!(steps[8].rule_id, "pension_projection");
    }

    #[test]
    fn test_warnings_are_carried_into_trace() {
        let warning = AuditWarning::input_clamped("profile.age", "45", "50");
        let assessment = assess(&sample_input(), &table(), vec![warning.clone()]);

        assert_eq!(assessment.audit_trace.warnings, vec![warning]);
    }

    #[test]
    fn test_manual_incentive_drives_company_analysis() {
        let mut input = sample_input();
        input.incentive = IncentiveChoice::Manual {
            amount: dec("30000"),
        };

        let assessment = assess(&input, &table(), vec![]);

        assert_eq!(assessment.proposed_incentive, dec("30000"));
        assert_eq!(assessment.company.proposed_incentive, dec("30000"));
        assert_ne!(assessment.severance_incentive.total_incentive, dec("30000"));
    }

    #[test]
    fn test_at_pension_date_uses_one_month() {
        let mut input = sample_input();
        input.profile.contribution_years = 45;

        let assessment = assess(&input, &table(), vec![]);

        assert_eq!(assessment.retirement.months_remaining, 0);
        assert_eq!(assessment.severance_incentive.months, 1);
        assert_eq!(assessment.company.retention_cost, dec("5062.5"));
    }

    #[test]
    fn test_annuity_within_window() {
        let mut input = sample_input();
        input.complementary_pension_capital = dec("58000");

        let assessment = assess(&input, &table(), vec![]);

        // 58 months remaining: 4.83 years, 58000 / 58 = 1000 gross
        assert!(assessment.temporary_annuity.is_eligible());
        assert_eq!(assessment.temporary_annuity.monthly_gross.round_dp(6), dec("1000"));
        assert_eq!(
            assessment.coverage.temporary_annuity,
            assessment.temporary_annuity.monthly_amount
        );
    }

    #[test]
    fn test_regional_comparison_covers_five_regions() {
        let assessment = assess(&sample_input(), &table(), vec![]);
        let comparison = &assessment.regional_comparison;

        assert_eq!(comparison.len(), 5);
        assert_eq!(comparison[0].region, Region::Lombardia);
        assert_eq!(
            comparison[0].total_incentive,
            assessment.severance_incentive.total_incentive
        );
        assert_eq!(assessment.charts.incentive_by_region[3].label, "Calabria");
    }

    #[test]
    fn test_chart_series() {
        let assessment = assess(&sample_input(), &table(), vec![]);
        let charts = &assessment.charts;

        assert_eq!(charts.incentive_composition.len(), 2);
        assert_eq!(
            charts.incentive_composition[1].value,
            assessment.severance_incentive.leisure_value
        );
        assert_eq!(charts.pension_by_extra_years.len(), 6);
        assert_eq!(charts.pension_by_extra_years[0].label, "+0");

        let waterfall = &charts.personal_decision;
        assert_eq!(waterfall.len(), 4);
        // 2250 x 58
        assert_eq!(waterfall[0].amount, dec("-130500"));
        assert_eq!(waterfall[3].measure, WaterfallMeasure::Total);
        assert_eq!(
            waterfall[3].amount,
            waterfall[0].amount + waterfall[1].amount + waterfall[2].amount
        );
    }

    #[test]
    fn test_category_notes() {
        assert!(assess(&sample_input(), &table(), vec![]).notes.is_empty());

        let mut input = sample_input();
        input.profile.early_career = true;
        input.profile.hazardous_occupation = true;
        input.profile.contribution_scheme = ContributionScheme::Merchant;

        let notes = assess(&input, &table(), vec![]).notes;
        assert_eq!(notes.len(), 3);
        assert!(notes[2].contains("merchant"));
    }

    #[test]
    fn test_assessment_serialization_omits_step_duplicates() {
        let assessment = assess(&sample_input(), &table(), vec![]);
        let json = serde_json::to_value(&assessment).unwrap();

        assert!(json["retirement"].get("audit_step").is_none());
        assert_eq!(json["audit_trace"]["steps"].as_array().unwrap().len(), 9);
        assert_eq!(json["retirement"]["route"], "early_retirement");
    }
}

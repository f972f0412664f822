//! Retirement-date estimation.
//!
//! Combines the old-age threshold (age 67), the contribution-based early
//! retirement threshold (42y 10m for men, 41y 10m for women, 41y for
//! early-career workers) and the hazardous-occupation quota (age 61y 7m and
//! age + contributions of at least 97.6).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, Gender, WorkerProfile};

use super::date_arithmetic::{add_months, months_between};

/// Statutory old-age retirement age.
pub const OLD_AGE_RETIREMENT_AGE: u32 = 67;

/// Extra months on top of the whole-year early retirement threshold.
pub const EARLY_RETIREMENT_EXTRA_MONTHS: u32 = 10;

/// Contribution years required for early-career workers.
pub const EARLY_CAREER_THRESHOLD_YEARS: u32 = 41;

/// Legal reference for old-age and early retirement.
pub const RETIREMENT_LEGAL_REF: &str = "D.L. 201/2011 art. 24";

/// Legal reference for early-career workers.
pub const EARLY_CAREER_LEGAL_REF: &str = "L. 232/2016 art. 1 c. 199";

/// Legal reference for hazardous occupations.
pub const HAZARDOUS_LEGAL_REF: &str = "D.Lgs. 67/2011";

/// Minimum age for the hazardous-occupation quota: 61 years 7 months.
pub fn hazardous_minimum_age() -> Decimal {
    Decimal::new(6158, 2)
}

/// Age + contribution years required for the hazardous-occupation quota.
pub fn hazardous_quota() -> Decimal {
    Decimal::new(976, 1)
}

/// How the earliest retirement date was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetirementRoute {
    /// Statutory old-age threshold.
    OldAge,
    /// Contribution-years threshold.
    EarlyRetirement,
    /// Hazardous-occupation combined quota.
    HazardousQuota,
}

/// The contribution requirement for early retirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyRetirementThreshold {
    /// Whole years of contributions.
    pub years: u32,
    /// Additional months.
    pub extra_months: u32,
}

impl EarlyRetirementThreshold {
    /// The threshold expressed in months.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.extra_months
    }
}

/// Returns the early retirement contribution threshold.
///
/// The early-career flag overrides the gender-based threshold.
///
/// # Example
///
/// ```
/// use pension_bridge::calculation::early_retirement_threshold;
/// use pension_bridge::models::Gender;
///
/// assert_eq!(early_retirement_threshold(Gender::Male, false).total_months(), 42 * 12 + 10);
/// assert_eq!(early_retirement_threshold(Gender::Female, false).total_months(), 41 * 12 + 10);
/// assert_eq!(early_retirement_threshold(Gender::Male, true).total_months(), 41 * 12);
/// ```
pub fn early_retirement_threshold(gender: Gender, early_career: bool) -> EarlyRetirementThreshold {
    if early_career {
        return EarlyRetirementThreshold {
            years: EARLY_CAREER_THRESHOLD_YEARS,
            extra_months: 0,
        };
    }

    let years = match gender {
        Gender::Male => 42,
        Gender::Female => 41,
    };
    EarlyRetirementThreshold {
        years,
        extra_months: EARLY_RETIREMENT_EXTRA_MONTHS,
    }
}

/// Returns true if a hazardous-occupation worker can leave today.
///
/// The age floor is checked before the quota.
pub fn hazardous_quota_met(age: u32, contribution_years: u32) -> bool {
    let age = Decimal::from(age);
    age >= hazardous_minimum_age() && age + Decimal::from(contribution_years) >= hazardous_quota()
}

/// When the hazardous-occupation quota will be reached, if it applies at all.
///
/// Returns the number of months until the quota is met, or `None` if the
/// worker would still be under the age floor at that point.
pub fn months_until_hazardous_quota(age: u32, contribution_years: u32) -> Option<u32> {
    if hazardous_quota_met(age, contribution_years) {
        return Some(0);
    }

    let age = Decimal::from(age);
    let years_needed =
        (hazardous_quota() - (age + Decimal::from(contribution_years))).max(Decimal::ZERO);

    if age + years_needed < hazardous_minimum_age() {
        return None;
    }

    (years_needed * Decimal::from(12)).trunc().to_u32()
}

/// The result of estimating the retirement date, including the audit step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementDateResult {
    /// The earliest date the worker can retire.
    pub earliest_date: NaiveDate,
    /// The date the worker reaches the old-age threshold.
    pub old_age_date: NaiveDate,
    /// The earliest date through an early-retirement route.
    pub early_retirement_date: NaiveDate,
    /// The route that yields `earliest_date`.
    pub route: RetirementRoute,
    /// Calendar months from the evaluation date to `earliest_date`.
    pub months_remaining: u32,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

/// Estimates the earliest retirement date for a worker.
///
/// The contribution scheme has no effect here; it only changes the
/// pension amount.
///
/// # Arguments
///
/// * `profile` - The worker being assessed
/// * `today` - The evaluation date
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use pension_bridge::calculation::{RetirementRoute, estimate_retirement_date};
/// use pension_bridge::models::{ContributionScheme, Gender, Region, WorkerProfile};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let profile = WorkerProfile {
///     age: 62,
///     gender: Gender::Male,
///     region: Region::Lombardia,
///     contribution_scheme: ContributionScheme::PrivateEmployee,
///     contribution_years: 38,
///     early_career: false,
///     hazardous_occupation: false,
///     gross_annual_salary: Decimal::new(45000, 0),
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// let result = estimate_retirement_date(&profile, today, 1);
/// assert_eq!(result.earliest_date, NaiveDate::from_ymd_opt(2031, 8, 19).unwrap());
/// assert_eq!(result.route, RetirementRoute::EarlyRetirement);
/// assert_eq!(result.months_remaining, 58);
/// ```
pub fn estimate_retirement_date(
    profile: &WorkerProfile,
    today: NaiveDate,
    step_number: u32,
) -> RetirementDateResult {
    let years_to_old_age = OLD_AGE_RETIREMENT_AGE.saturating_sub(profile.age);
    let old_age_date = add_months(today, (years_to_old_age * 12) as i32);

    let threshold = early_retirement_threshold(profile.gender, profile.early_career);
    let months_to_threshold = threshold
        .total_months()
        .saturating_sub(profile.contribution_years * 12);
    let contribution_date = add_months(today, months_to_threshold as i32);

    let hazardous_months = if profile.hazardous_occupation {
        months_until_hazardous_quota(profile.age, profile.contribution_years)
    } else {
        None
    };
    let hazardous_date = hazardous_months.map(|months| add_months(today, months as i32));

    // Once the quota applies it replaces the contribution route outright.
    let (early_retirement_date, early_route) = match hazardous_date {
        Some(date) => (date, RetirementRoute::HazardousQuota),
        None => (contribution_date, RetirementRoute::EarlyRetirement),
    };

    let (earliest_date, route) = if early_retirement_date < old_age_date {
        (early_retirement_date, early_route)
    } else {
        (old_age_date, RetirementRoute::OldAge)
    };

    let months_remaining = months_between(today, earliest_date).max(0) as u32;

    let legal_ref = match route {
        RetirementRoute::HazardousQuota => HAZARDOUS_LEGAL_REF,
        RetirementRoute::EarlyRetirement if profile.early_career => EARLY_CAREER_LEGAL_REF,
        _ => RETIREMENT_LEGAL_REF,
    };

    let route_label = match route {
        RetirementRoute::OldAge => format!("old-age threshold ({})", OLD_AGE_RETIREMENT_AGE),
        RetirementRoute::EarlyRetirement => format!(
            "early retirement ({}y {}m of contributions)",
            threshold.years, threshold.extra_months
        ),
        RetirementRoute::HazardousQuota => format!(
            "hazardous-occupation quota {} (age floor {})",
            hazardous_quota(),
            hazardous_minimum_age()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "retirement_date".to_string(),
        rule_name: "Retirement Date".to_string(),
        legal_ref: legal_ref.to_string(),
        input: serde_json::json!({
            "age": profile.age,
            "gender": profile.gender,
            "contribution_years": profile.contribution_years,
            "early_career": profile.early_career,
            "hazardous_occupation": profile.hazardous_occupation,
            "evaluation_date": today.to_string()
        }),
        output: serde_json::json!({
            "old_age_date": old_age_date.to_string(),
            "contribution_threshold_months": threshold.total_months(),
            "contribution_date": contribution_date.to_string(),
            "hazardous_date": hazardous_date.map(|d| d.to_string()),
            "early_retirement_date": early_retirement_date.to_string(),
            "earliest_date": earliest_date.to_string(),
            "route": route,
            "months_remaining": months_remaining
        }),
        reasoning: format!(
            "Old-age date {}, early-retirement date {}; earliest is {} via {} ({} months away)",
            old_age_date, early_retirement_date, earliest_date, route_label, months_remaining
        ),
    };

    RetirementDateResult {
        earliest_date,
        old_age_date,
        early_retirement_date,
        route,
        months_remaining,
        audit_step,
    }
}

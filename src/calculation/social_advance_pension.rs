//! Social advance pension (APE sociale).
//!
//! Checks are applied in order: minimum age, contribution years (higher for
//! hazardous occupations), then membership of at least one protected
//! category. The first failing check determines the reason.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AuditStep, ContributionScheme, Eligibility, EmploymentSituation, IneligibilityReason,
    WorkerProfile,
};

use super::net_pension::net_pension_amount;

/// Legal reference for the social advance pension.
pub const SOCIAL_ADVANCE_PENSION_LEGAL_REF: &str = "L. 232/2016 art. 1 c. 179";

/// Minimum age for the social advance pension.
pub const MINIMUM_AGE: u32 = 63;

/// Contribution years required for the general categories.
pub const REQUIRED_CONTRIBUTION_YEARS: u32 = 30;

/// Contribution years required for hazardous occupations.
pub const HAZARDOUS_REQUIRED_CONTRIBUTION_YEARS: u32 = 36;

/// Monthly cap on the social advance pension.
pub fn social_advance_pension_cap() -> Decimal {
    Decimal::from(1500)
}

/// Contribution years required for a worker.
pub fn required_contribution_years(hazardous_occupation: bool) -> u32 {
    if hazardous_occupation {
        HAZARDOUS_REQUIRED_CONTRIBUTION_YEARS
    } else {
        REQUIRED_CONTRIBUTION_YEARS
    }
}

/// Evaluates eligibility without computing an amount.
///
/// # Examples
///
/// ```
/// use pension_bridge::calculation::social_advance_pension_eligibility;
/// use pension_bridge::models::{Eligibility, EmploymentSituation, IneligibilityReason};
///
/// let situation = EmploymentSituation {
///     unemployed: true,
///     caregiver: true,
///     disabled: true,
///     trailing_contribution_months: 48,
/// };
/// let outcome = social_advance_pension_eligibility(62, 35, true, &situation);
/// assert_eq!(
///     outcome,
///     Eligibility::Ineligible { reason: IneligibilityReason::BelowMinimumAge { minimum_age: 63 } }
/// );
/// ```
pub fn social_advance_pension_eligibility(
    age: u32,
    contribution_years: u32,
    hazardous_occupation: bool,
    situation: &EmploymentSituation,
) -> Eligibility {
    if age < MINIMUM_AGE {
        return IneligibilityReason::BelowMinimumAge {
            minimum_age: MINIMUM_AGE,
        }
        .into();
    }

    let required_years = required_contribution_years(hazardous_occupation);
    if contribution_years < required_years {
        return IneligibilityReason::InsufficientContributions { required_years }.into();
    }

    let in_category = situation.unemployed
        || situation.caregiver
        || situation.disabled
        || hazardous_occupation;
    if !in_category {
        return IneligibilityReason::NoQualifyingCategory.into();
    }

    Eligibility::Eligible
}

/// The result of the social advance pension calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialAdvancePensionResult {
    /// Whether the instrument can be granted, and why not.
    pub eligibility: Eligibility,
    /// Human-readable outcome.
    pub message: String,
    /// Monthly amount; zero when ineligible.
    pub monthly_amount: Decimal,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

impl SocialAdvancePensionResult {
    /// Returns true if the instrument can be granted.
    pub fn is_eligible(&self) -> bool {
        self.eligibility.is_eligible()
    }
}

/// Calculates the social advance pension for a worker.
///
/// The amount is the theoretical net pension (private-employee rates),
/// capped at €1,500 per month.
pub fn calculate_social_advance_pension(
    profile: &WorkerProfile,
    situation: &EmploymentSituation,
    step_number: u32,
) -> SocialAdvancePensionResult {
    let eligibility = social_advance_pension_eligibility(
        profile.age,
        profile.contribution_years,
        profile.hazardous_occupation,
        situation,
    );

    let (monthly_amount, message, reasoning) = match eligibility.reason() {
        Some(reason) => (
            Decimal::ZERO,
            reason.to_string(),
            format!("Not eligible: {}", reason),
        ),
        None => {
            let theoretical = net_pension_amount(
                profile.gross_annual_salary,
                profile.contribution_years,
                ContributionScheme::PrivateEmployee,
            );
            let amount = theoretical.min(social_advance_pension_cap());
            (
                amount,
                "Social advance pension can be granted".to_string(),
                format!(
                    "min(€{} theoretical pension, €{} cap) = €{}",
                    theoretical.round_dp(2),
                    social_advance_pension_cap(),
                    amount.round_dp(2)
                ),
            )
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_advance_pension".to_string(),
        rule_name: "Social Advance Pension (APE sociale)".to_string(),
        legal_ref: SOCIAL_ADVANCE_PENSION_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "age": profile.age,
            "contribution_years": profile.contribution_years,
            "hazardous_occupation": profile.hazardous_occupation,
            "unemployed": situation.unemployed,
            "caregiver": situation.caregiver,
            "disabled": situation.disabled
        }),
        output: serde_json::json!({
            "eligibility": eligibility,
            "monthly_amount": monthly_amount.round_dp(2).to_string()
        }),
        reasoning,
    };

    SocialAdvancePensionResult {
        eligibility,
        message,
        monthly_amount,
        audit_step,
    }
}

//! Temporary annuity from complementary pension capital (RITA).
//!
//! Capital accumulated in a complementary fund can be paid out monthly over
//! the years left before the pension date, provided that window is at most
//! five years.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, Eligibility, IneligibilityReason};

/// Legal reference for the temporary annuity.
pub const TEMPORARY_ANNUITY_LEGAL_REF: &str = "D.Lgs. 252/2005 art. 11 c. 4";

/// Longest window before the pension date in which capital can be annuitized.
pub const MAX_YEARS_TO_PENSION: u32 = 5;

/// Fund membership assumed when computing the tax rate.
pub const ASSUMED_FUND_MEMBERSHIP_YEARS: u32 = 20;

/// Membership after which the tax rate starts decreasing.
const TAX_REDUCTION_START_YEARS: u32 = 15;

fn base_tax_rate() -> Decimal {
    Decimal::new(15, 2)
}

fn minimum_tax_rate() -> Decimal {
    Decimal::new(9, 2)
}

fn yearly_tax_reduction() -> Decimal {
    Decimal::new(3, 3)
}

/// Substitute tax rate on the annuity for a given fund membership.
///
/// 15%, reduced by 0.3 points per year of membership beyond 15, never below 9%.
///
/// ```
/// use pension_bridge::calculation::rita_tax_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(rita_tax_rate(10), Decimal::new(15, 2));
/// assert_eq!(rita_tax_rate(20), Decimal::new(135, 3));
/// assert_eq!(rita_tax_rate(40), Decimal::new(9, 2));
/// ```
pub fn rita_tax_rate(membership_years: u32) -> Decimal {
    let reduction_years = membership_years.saturating_sub(TAX_REDUCTION_START_YEARS);
    (base_tax_rate() - yearly_tax_reduction() * Decimal::from(reduction_years))
        .max(minimum_tax_rate())
}

/// The result of the temporary annuity calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporaryAnnuityResult {
    /// Whether the annuity can be paid, and why not.
    pub eligibility: Eligibility,
    /// Human-readable outcome.
    pub message: String,
    /// Gross monthly annuity; zero when ineligible.
    pub monthly_gross: Decimal,
    /// Tax rate applied.
    pub tax_rate: Decimal,
    /// Net monthly annuity; zero when ineligible.
    pub monthly_amount: Decimal,
    /// The audit step recording this calculation; collected into the trace.
    #[serde(skip)]
    pub audit_step: AuditStep,
}

impl TemporaryAnnuityResult {
    /// Returns true if the annuity can be paid.
    pub fn is_eligible(&self) -> bool {
        self.eligibility.is_eligible()
    }
}

/// Calculates the monthly temporary annuity.
///
/// `years_to_pension` may be fractional; it is floored at one year before
/// dividing the capital.
///
/// # Examples
///
/// ```
/// use pension_bridge::calculation::calculate_temporary_annuity;
/// use rust_decimal::Decimal;
///
/// let result = calculate_temporary_annuity(Decimal::new(50000, 0), 60, Decimal::from(6), 1);
/// assert!(!result.is_eligible());
/// assert_eq!(result.monthly_amount, Decimal::ZERO);
/// ```
pub fn calculate_temporary_annuity(
    capital: Decimal,
    age: u32,
    years_to_pension: Decimal,
    step_number: u32,
) -> TemporaryAnnuityResult {
    let tax_rate = rita_tax_rate(ASSUMED_FUND_MEMBERSHIP_YEARS);

    let eligibility: Eligibility = if years_to_pension > Decimal::from(MAX_YEARS_TO_PENSION) {
        IneligibilityReason::TooFarFromPension {
            max_years: MAX_YEARS_TO_PENSION,
        }
        .into()
    } else if capital <= Decimal::ZERO {
        IneligibilityReason::NoComplementaryCapital.into()
    } else {
        Eligibility::Eligible
    };

    let payout_years = years_to_pension.max(Decimal::ONE);
    let (monthly_gross, monthly_amount) = if eligibility.is_eligible() {
        let gross = capital / (payout_years * Decimal::from(12));
        (gross, gross * (Decimal::ONE - tax_rate))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let (message, reasoning) = match eligibility.reason() {
        Some(reason) => (reason.to_string(), format!("Not eligible: {}", reason)),
        None => (
            "Temporary annuity can be paid".to_string(),
            format!(
                "€{} / ({} years x 12) = €{} gross, taxed at {}% = €{} net",
                capital.normalize(),
                payout_years.round_dp(2).normalize(),
                monthly_gross.round_dp(2),
                (tax_rate * Decimal::from(100)).normalize(),
                monthly_amount.round_dp(2)
            ),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "temporary_annuity".to_string(),
        rule_name: "Temporary Annuity (RITA)".to_string(),
        legal_ref: TEMPORARY_ANNUITY_LEGAL_REF.to_string(),
        input: serde_json::json!({
            "capital": capital.normalize().to_string(),
            "age": age,
            "years_to_pension": years_to_pension.round_dp(2).normalize().to_string()
        }),
        output: serde_json::json!({
            "eligibility": eligibility,
            "tax_rate": tax_rate.normalize().to_string(),
            "monthly_gross": monthly_gross.round_dp(2).to_string(),
            "monthly_amount": monthly_amount.round_dp(2).to_string()
        }),
        reasoning,
    };

    TemporaryAnnuityResult {
        eligibility,
        message,
        monthly_gross,
        tax_rate,
        monthly_amount,
        audit_step,
    }
}

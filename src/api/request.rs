//! Request types for the pension bridge API.
//!
//! This module defines the JSON request structure for the `/assess`
//! endpoint and its conversion into a validated [`AssessmentInput`].
//! Numeric fields outside their allowed range are clamped and reported as
//! warnings rather than rejected.

use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AssessmentInput, AuditWarning, ContributionScheme, EmploymentSituation, Gender,
    IncentiveChoice, Region, WorkerProfile,
};

/// Allowed age range.
pub const AGE_RANGE: (u32, u32) = (50, 70);

/// Allowed contribution years range.
pub const CONTRIBUTION_YEARS_RANGE: (u32, u32) = (20, 50);

/// Allowed trailing contribution months range.
pub const TRAILING_MONTHS_RANGE: (u32, u32) = (0, 48);

fn salary_range() -> (Decimal, Decimal) {
    (Decimal::from(20_000), Decimal::from(200_000))
}

fn capital_range() -> (Decimal, Decimal) {
    (Decimal::ZERO, Decimal::from(500_000))
}

fn incentive_range() -> (Decimal, Decimal) {
    (Decimal::ZERO, Decimal::from(500_000))
}

/// Request body for the `/assess` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// The worker being assessed.
    pub profile: ProfileRequest,
    /// Employment situation flags.
    #[serde(default)]
    pub situation: EmploymentSituation,
    /// Complementary pension fund capital.
    #[serde(default)]
    pub complementary_pension_capital: Decimal,
    /// How the offered incentive is chosen.
    #[serde(default)]
    pub incentive: IncentiveRequest,
    /// Evaluation date; defaults to today.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
}

/// Worker profile in an assessment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    /// Age in years (clamped to 50-70).
    pub age: u32,
    /// Gender category.
    pub gender: Gender,
    /// Region of residence.
    pub region: Region,
    /// Main contribution scheme; unknown values map to `other`.
    #[serde(default)]
    pub contribution_scheme: ContributionScheme,
    /// Contribution years (clamped to 20-50).
    pub contribution_years: u32,
    /// Early-career worker flag.
    #[serde(default)]
    pub early_career: bool,
    /// Hazardous occupation flag.
    #[serde(default)]
    pub hazardous_occupation: bool,
    /// Gross annual salary (clamped to 20,000-200,000).
    pub gross_annual_salary: Decimal,
}

/// Incentive selection in an assessment request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncentiveRequest {
    /// Use the computed incentive.
    #[serde(default = "default_auto_calculate")]
    pub auto_calculate: bool,
    /// Amount negotiated by hand; required when `auto_calculate` is false.
    #[serde(default)]
    pub proposed_amount: Option<Decimal>,
}

fn default_auto_calculate() -> bool {
    true
}

impl Default for IncentiveRequest {
    fn default() -> Self {
        Self {
            auto_calculate: true,
            proposed_amount: None,
        }
    }
}

fn clamp_with_warning<T>(
    field: &str,
    value: T,
    (min, max): (T, T),
    warnings: &mut Vec<AuditWarning>,
) -> T
where
    T: PartialOrd + Copy + Display,
{
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    if clamped != value {
        warnings.push(AuditWarning::input_clamped(
            field,
            &value.to_string(),
            &clamped.to_string(),
        ));
    }
    clamped
}

impl AssessmentRequest {
    /// Validates the request and converts it into an [`AssessmentInput`].
    ///
    /// Out-of-range values are clamped, each clamp producing an
    /// `INPUT_CLAMPED` warning. `today` is used when the request carries no
    /// evaluation date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] if manual incentive mode is
    /// selected without an amount.
    pub fn into_input(
        self,
        today: NaiveDate,
    ) -> EngineResult<(AssessmentInput, Vec<AuditWarning>)> {
        let mut warnings = Vec::new();
        let profile = self.profile;

        let incentive = if self.incentive.auto_calculate {
            IncentiveChoice::Automatic
        } else {
            let amount = self
                .incentive
                .proposed_amount
                .ok_or_else(|| EngineError::InvalidInput {
                    field: "incentive.proposed_amount".to_string(),
                    message: "required when auto_calculate is false".to_string(),
                })?;
            IncentiveChoice::Manual {
                amount: clamp_with_warning(
                    "incentive.proposed_amount",
                    amount,
                    incentive_range(),
                    &mut warnings,
                ),
            }
        };

        let worker = WorkerProfile {
            age: clamp_with_warning("profile.age", profile.age, AGE_RANGE, &mut warnings),
            gender: profile.gender,
            region: profile.region,
            contribution_scheme: profile.contribution_scheme,
            contribution_years: clamp_with_warning(
                "profile.contribution_years",
                profile.contribution_years,
                CONTRIBUTION_YEARS_RANGE,
                &mut warnings,
            ),
            early_career: profile.early_career,
            hazardous_occupation: profile.hazardous_occupation,
            gross_annual_salary: clamp_with_warning(
                "profile.gross_annual_salary",
                profile.gross_annual_salary,
                salary_range(),
                &mut warnings,
            ),
        };

        let situation = EmploymentSituation {
            trailing_contribution_months: clamp_with_warning(
                "situation.trailing_contribution_months",
                self.situation.trailing_contribution_months,
                TRAILING_MONTHS_RANGE,
                &mut warnings,
            ),
            ..self.situation
        };

        let complementary_pension_capital = clamp_with_warning(
            "complementary_pension_capital",
            self.complementary_pension_capital,
            capital_range(),
            &mut warnings,
        );

        let input = AssessmentInput {
            profile: worker,
            situation,
            complementary_pension_capital,
            incentive,
            evaluation_date: self.evaluation_date.unwrap_or(today),
        };

        Ok((input, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn minimal_json() -> &'static str {
        r#"{
            "profile": {
                "age": 62,
                "gender": "male",
                "region": "Lombardia",
                "contribution_years": 38,
                "gross_annual_salary": "45000"
            }
        }"#
    }

    #[test]
    fn test_deserialize_minimal_request_uses_defaults() {
        let request: AssessmentRequest = serde_json::from_str(minimal_json()).unwrap();

        assert_eq!(request.profile.contribution_scheme, ContributionScheme::PrivateEmployee);
        assert!(!request.profile.early_career);
        assert_eq!(request.situation, EmploymentSituation::default());
        assert_eq!(request.complementary_pension_capital, Decimal::ZERO);
        assert!(request.incentive.auto_calculate);
        assert!(request.evaluation_date.is_none());
    }

    #[test]
    fn test_deserialize_full_request() {
        let json = r#"{
            "profile": {
                "age": 64,
                "gender": "female",
                "region": "Valle d'Aosta",
                "contribution_scheme": "self_employed",
                "contribution_years": 35,
                "early_career": true,
                "hazardous_occupation": true,
                "gross_annual_salary": "38000.50"
            },
            "situation": {
                "unemployed": true,
                "trailing_contribution_months": 30
            },
            "complementary_pension_capital": "50000",
            "incentive": { "auto_calculate": false, "proposed_amount": "30000" },
            "evaluation_date": "2027-01-31"
        }"#;

        let request: AssessmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.profile.region, Region::ValleDAosta);
        assert_eq!(request.profile.contribution_scheme, ContributionScheme::SelfEmployed);
        assert!(request.situation.unemployed);
        assert!(!request.situation.caregiver);
        assert_eq!(request.incentive.proposed_amount, Some(dec("30000")));
        assert_eq!(
            request.evaluation_date,
            NaiveDate::from_ymd_opt(2027, 1, 31)
        );
    }

    #[test]
    fn test_unknown_scheme_maps_to_other() {
        let json = minimal_json().replace(
            "\"age\": 62,",
            "\"age\": 62, \"contribution_scheme\": \"clergy\",",
        );
        let request: AssessmentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.profile.contribution_scheme, ContributionScheme::Other);
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        let json = minimal_json().replace("Lombardia", "Atlantide");
        assert!(serde_json::from_str::<AssessmentRequest>(&json).is_err());
    }

    #[test]
    fn test_valid_request_has_no_warnings() {
        let request: AssessmentRequest = serde_json::from_str(minimal_json()).unwrap();
        let (input, warnings) = request.into_input(today()).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(input.profile.age, 62);
        assert_eq!(input.evaluation_date, today());
        assert_eq!(input.incentive, IncentiveChoice::Automatic);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut request: AssessmentRequest = serde_json::from_str(minimal_json()).unwrap();
        request.profile.age = 45;
        request.profile.contribution_years = 55;
        request.profile.gross_annual_salary = dec("250000");
        request.situation.trailing_contribution_months = 60;
        request.complementary_pension_capital = dec("-10");

        let (input, warnings) = request.into_input(today()).unwrap();

        assert_eq!(input.profile.age, 50);
        assert_eq!(input.profile.contribution_years, 50);
        assert_eq!(input.profile.gross_annual_salary, dec("200000"));
        assert_eq!(input.situation.trailing_contribution_months, 48);
        assert_eq!(input.complementary_pension_capital, Decimal::ZERO);

        assert_eq!(warnings.len(), 5);
        assert!(warnings.iter().all(|w| w.code == "INPUT_CLAMPED"));
        assert!(warnings[0].message.contains("'profile.age' value 45"));
    }

    #[test]
    fn test_manual_incentive_without_amount_is_rejected() {
        let mut request: AssessmentRequest = serde_json::from_str(minimal_json()).unwrap();
        request.incentive = IncentiveRequest {
            auto_calculate: false,
            proposed_amount: None,
        };

        match request.into_input(today()) {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "incentive.proposed_amount");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_manual_incentive_is_clamped() {
        let mut request: AssessmentRequest = serde_json::from_str(minimal_json()).unwrap();
        request.incentive = IncentiveRequest {
            auto_calculate: false,
            proposed_amount: Some(dec("750000")),
        };

        let (input, warnings) = request.into_input(today()).unwrap();

        assert_eq!(
            input.incentive,
            IncentiveChoice::Manual {
                amount: dec("500000")
            }
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_automatic_mode_ignores_proposed_amount() {
        let mut request: AssessmentRequest = serde_json::from_str(minimal_json()).unwrap();
        request.incentive.proposed_amount = Some(dec("10000"));

        let (input, _) = request.into_input(today()).unwrap();
        assert_eq!(input.incentive, IncentiveChoice::Automatic);
    }
}

//! Worker profile model and related types.
//!
//! This module defines the [`WorkerProfile`] struct and the enums used to
//! describe a worker's gender category and contribution scheme, plus the
//! employment-situation flags that drive income-support eligibility.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Region;

/// Gender category used by the early-retirement contribution threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Early retirement requires 42 years and 10 months of contributions.
    Male,
    /// Early retirement requires 41 years and 10 months of contributions.
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "uomo" => Ok(Gender::Male),
            "female" | "f" | "donna" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}': expected male or female", other)),
        }
    }
}

/// The pension fund a worker mainly contributes to.
///
/// The scheme only affects the replacement rate used for the pension
/// amount; it has no bearing on retirement dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionScheme {
    /// Private-sector employee (FPLD).
    #[default]
    PrivateEmployee,
    /// Artisan (gestione artigiani).
    Artisan,
    /// Merchant (gestione commercianti).
    Merchant,
    /// Self-employed professional.
    SelfEmployed,
    /// Direct agricultural worker (coltivatori diretti).
    Agricultural,
    /// Any scheme not listed above.
    #[serde(other)]
    Other,
}

impl ContributionScheme {
    /// Returns the snake_case identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionScheme::PrivateEmployee => "private_employee",
            ContributionScheme::Artisan => "artisan",
            ContributionScheme::Merchant => "merchant",
            ContributionScheme::SelfEmployed => "self_employed",
            ContributionScheme::Agricultural => "agricultural",
            ContributionScheme::Other => "other",
        }
    }
}

impl fmt::Display for ContributionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().replace('-', "_").as_str() {
            "private_employee" => ContributionScheme::PrivateEmployee,
            "artisan" => ContributionScheme::Artisan,
            "merchant" => ContributionScheme::Merchant,
            "self_employed" => ContributionScheme::SelfEmployed,
            "agricultural" => ContributionScheme::Agricultural,
            _ => ContributionScheme::Other,
        })
    }
}

/// A worker considering an exit agreement.
///
/// # Examples
///
/// ```
/// use pension_bridge::models::{ContributionScheme, Gender, Region, WorkerProfile};
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
/// assert!(!profile.has_special_category());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// Age in whole years.
    pub age: u32,
    /// Gender category.
    pub gender: Gender,
    /// Region of residence.
    pub region: Region,
    /// Main contribution scheme.
    #[serde(default)]
    pub contribution_scheme: ContributionScheme,
    /// Years of accumulated contributions.
    pub contribution_years: u32,
    /// At least 12 months of contributions before turning 19.
    #[serde(default)]
    pub early_career: bool,
    /// Night shifts, assembly lines, drivers and similar strenuous work.
    #[serde(default)]
    pub hazardous_occupation: bool,
    /// Gross annual salary (RAL).
    pub gross_annual_salary: Decimal,
}

impl WorkerProfile {
    /// Returns true if the worker belongs to a category with reduced requirements.
    pub fn has_special_category(&self) -> bool {
        self.early_career || self.hazardous_occupation
    }
}

/// Employment situation flags relevant to income-support instruments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentSituation {
    /// Unemployed or at risk of unemployment.
    #[serde(default)]
    pub unemployed: bool,
    /// Caring for a disabled family member.
    #[serde(default)]
    pub caregiver: bool,
    /// Civil invalidity of at least 74%.
    #[serde(default)]
    pub disabled: bool,
    /// Months of contributions in the last four years.
    #[serde(default)]
    pub trailing_contribution_months: u32,
}

//! Core data models for the pension bridge engine.
//!
//! This module contains the value records shared by the calculations,
//! the configuration layer and the HTTP API.

mod assessment_input;
mod audit;
mod eligibility;
mod region;
mod worker;

pub use assessment_input::{AssessmentInput, IncentiveChoice};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use eligibility::{Eligibility, IneligibilityReason};
pub use region::Region;
pub use worker::{ContributionScheme, EmploymentSituation, Gender, WorkerProfile};

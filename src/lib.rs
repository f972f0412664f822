//! Pension bridge engine for Italian early-exit agreements.
//!
//! This crate estimates when a worker can retire, what their pension will
//! be, which income-support instruments can bridge the gap until then, and
//! the severance incentive an employer could offer, adjusted for the
//! regional cost of living.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod telemetry;

//! Calculation logic for the pension bridge engine.
//!
//! One module per formula: calendar month arithmetic, retirement dates, net
//! pension, unemployment benefit, social advance pension, temporary annuity
//! and the regional severance incentive, plus the coverage summary, the
//! employer analysis and the pension projection. [`assess`] runs them all
//! for a single worker.

mod assessment;
mod company_analysis;
mod coverage;
mod date_arithmetic;
mod net_pension;
mod pension_projection;
mod retirement_date;
mod severance_incentive;
mod social_advance_pension;
mod temporary_annuity;
mod unemployment_benefit;

pub use assessment::{
    Assessment, COMPARISON_REGIONS, ChartPoint, ChartSeries, RegionalIncentive, WaterfallBar,
    WaterfallMeasure, assess,
};
pub use company_analysis::{CompanyAnalysis, analyse_company_cost, employer_cost_ratio};
pub use coverage::{CoverageSummary, summarize_coverage};
pub use date_arithmetic::{add_months, days_in_month, is_leap_year, months_between};
pub use net_pension::{
    NetPensionResult, estimate_net_pension, net_monthly_salary, net_pension_amount,
    replacement_rate, years_factor,
};
pub use pension_projection::{
    BreakEven, LIFE_EXPECTANCY, PensionProjection, ProjectionRow, project_pension,
};
pub use retirement_date::{
    EarlyRetirementThreshold, OLD_AGE_RETIREMENT_AGE, RetirementDateResult, RetirementRoute,
    early_retirement_threshold, estimate_retirement_date, hazardous_minimum_age, hazardous_quota,
    hazardous_quota_met, months_until_hazardous_quota,
};
pub use severance_incentive::{
    SeveranceIncentiveResult, calculate_severance_incentive, monthly_leisure_value,
};
pub use social_advance_pension::{
    SocialAdvancePensionResult, calculate_social_advance_pension, required_contribution_years,
    social_advance_pension_cap, social_advance_pension_eligibility,
};
pub use temporary_annuity::{
    ASSUMED_FUND_MEMBERSHIP_YEARS, MAX_YEARS_TO_PENSION, TemporaryAnnuityResult,
    calculate_temporary_annuity, rita_tax_rate,
};
pub use unemployment_benefit::{
    UnemploymentBenefitResult, benefit_duration_months, benefit_threshold,
    calculate_unemployment_benefit, monthly_unemployment_benefit,
};

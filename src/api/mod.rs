//! HTTP API module for the pension bridge engine.
//!
//! `POST /assess` runs a full exit assessment; `GET /regions` lists the
//! regional cost-of-living table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{RegionsResponse, create_router};
pub use request::{AssessmentRequest, IncentiveRequest, ProfileRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

//! HTTP request handlers for the pension bridge API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::assess;
use crate::config::{RegimeMetadata, RegionFactor};

use super::request::AssessmentRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Response body for `GET /regions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsResponse {
    /// The rule set in use.
    pub regime: RegimeMetadata,
    /// Cost-of-living factors ordered by region name.
    pub regions: Vec<RegionFactor>,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/assess", post(assess_handler))
        .route("/regions", get(regions_handler))
        .with_state(state)
}

/// Handler for POST /assess endpoint.
///
/// Accepts an assessment request and returns the full assessment.
async fn assess_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assessment request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let (input, warnings) = match request.into_input(Local::now().date_naive()) {
        Ok(converted) => converted,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Assessment request rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let assessment = assess(&input, state.config().regional_costs(), warnings);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        assessment_id = %assessment.assessment_id,
        region = %input.profile.region,
        special_category = input.profile.has_special_category(),
        earliest_date = %assessment.retirement.earliest_date,
        monthly_pension = %assessment.pension.monthly_pension.round_dp(2),
        total_incentive = %assessment.severance_incentive.total_incentive.round_dp(2),
        warnings = assessment.audit_trace.warnings.len(),
        duration_us = duration.as_micros(),
        "Assessment completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(assessment),
    )
        .into_response()
}

/// Handler for GET /regions endpoint.
async fn regions_handler(State(state): State<AppState>) -> Json<RegionsResponse> {
    let config = state.config();
    Json(RegionsResponse {
        regime: config.regime().clone(),
        regions: config.regional_costs().rows(),
    })
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::dates::{parse_calendar_date, utc_calendar_date};
use super::domain::{MatchMode, ProcessedTechnician, Requirement};
use super::repository::RosterSource;
use super::scoring::ScoredTechnician;
use super::service::RosterService;

#[derive(Debug, Default, Deserialize)]
pub struct RosterQuery {
    #[serde(default)]
    pub today: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EligibilityRequest {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub today: NaiveDate,
    pub technicians: Vec<ProcessedTechnician>,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub today: NaiveDate,
    pub mode: MatchMode,
    pub requirement: Requirement,
    pub technicians: Vec<ScoredTechnician>,
}

/// Router builder exposing the roster, suggestion and eligibility endpoints.
pub fn roster_router<S>(service: Arc<RosterService<S>>) -> Router
where
    S: RosterSource + 'static,
{
    Router::new()
        .route("/api/v1/roster/technicians", get(roster_handler::<S>))
        .route("/api/v1/roster/suggestions", post(suggestion_handler::<S>))
        .route("/api/v1/roster/eligible", post(eligibility_handler::<S>))
        .with_state(service)
}

fn resolve_today(raw: Option<&str>) -> Result<NaiveDate, Response> {
    match raw.filter(|value| !value.trim().is_empty()) {
        None => Ok(utc_calendar_date(Utc::now())),
        Some(value) => parse_calendar_date(value).ok_or_else(|| {
            let payload = json!({
                "error": format!("today must be a valid YYYY-MM-DD date, got '{value}'"),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }),
    }
}

fn internal_error(error: impl std::fmt::Display) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

pub(crate) async fn roster_handler<S>(
    State(service): State<Arc<RosterService<S>>>,
    Query(query): Query<RosterQuery>,
) -> Response
where
    S: RosterSource + 'static,
{
    let today = match resolve_today(query.today.as_deref()) {
        Ok(today) => today,
        Err(response) => return response,
    };

    match service.processed(today) {
        Ok(technicians) => {
            (StatusCode::OK, axum::Json(RosterResponse { today, technicians })).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn suggestion_handler<S>(
    State(service): State<Arc<RosterService<S>>>,
    axum::Json(request): axum::Json<SuggestionRequest>,
) -> Response
where
    S: RosterSource + 'static,
{
    let today = match resolve_today(request.today.as_deref()) {
        Ok(today) => today,
        Err(response) => return response,
    };
    let requirement = Requirement::new(request.profile, request.specialty);

    match service.suggest(&requirement, today, request.limit) {
        Ok(technicians) => (
            StatusCode::OK,
            axum::Json(RankingResponse {
                today,
                mode: MatchMode::Bonus,
                requirement,
                technicians,
            }),
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn eligibility_handler<S>(
    State(service): State<Arc<RosterService<S>>>,
    axum::Json(request): axum::Json<EligibilityRequest>,
) -> Response
where
    S: RosterSource + 'static,
{
    let today = match resolve_today(request.today.as_deref()) {
        Ok(today) => today,
        Err(response) => return response,
    };
    let requirement = Requirement::new(request.profile, request.specialty);

    match service.eligible(&requirement, today) {
        Ok(technicians) => (
            StatusCode::OK,
            axum::Json(RankingResponse {
                today,
                mode: MatchMode::Filter,
                requirement,
                technicians,
            }),
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Local, NaiveDateTime};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{Coordinate, RouteId, RouteRecord, StopRecord, parse_clock};
use crate::planner::{PlanError, PlanRequest, plan_route};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", get(list_routes))
        .route("/api/routes/:id", get(get_route))
        .route("/api/routes/:id/stops", get(route_stops))
        .route("/api/zones/:zone/routes", get(zone_routes))
        .route("/api/plan", post(plan_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All routes in display order.
async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteRecord>> {
    Json(state.network.all_routes())
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<RouteId>,
) -> Result<Json<RouteRecord>, AppError> {
    state
        .network
        .route(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: "route not found".to_string(),
        })
}

async fn route_stops(
    State(state): State<AppState>,
    Path(id): Path<RouteId>,
) -> Json<Vec<StopRecord>> {
    Json(state.network.stops_by_route(id))
}

async fn zone_routes(
    State(state): State<AppState>,
    Path(zone): Path<String>,
) -> Json<Vec<RouteRecord>> {
    Json(state.network.routes_by_zone(&zone))
}

/// Plan a trip between two coordinates.
async fn plan_trip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanTripResponse>, AppError> {
    // Parse JSON manually so a bad body gets the usual error shape
    let req: PlanTripRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Rejected plan request body");
        AppError::BadRequest {
            message: format!("invalid JSON: {e}"),
        }
    })?;

    let start_time = resolve_start_time(req.start_time.as_deref(), Local::now().naive_local())?;
    let request = PlanRequest::new(
        Coordinate::new(req.origin_lat, req.origin_lng),
        Coordinate::new(req.destination_lat, req.destination_lng),
        start_time,
    );

    // Graph building and search are CPU-bound
    let network = state.network.clone();
    let config = state.config.clone();
    let itineraries = tokio::task::spawn_blocking(move || {
        plan_route(&request, network.stops(), network.routes(), &config)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("planning task failed: {e}"),
    })??;

    Ok(Json(PlanTripResponse {
        itineraries: itineraries
            .iter()
            .map(ItineraryResult::from_itinerary)
            .collect(),
    }))
}

/// Combine an optional "HH:MM" with today's date, or use `now`.
fn resolve_start_time(raw: Option<&str>, now: NaiveDateTime) -> Result<NaiveDateTime, AppError> {
    match raw {
        Some(raw) => {
            let time = parse_clock(raw).map_err(|e| AppError::BadRequest {
                message: e.to_string(),
            })?;
            Ok(now.date().and_time(time))
        }
        None => Ok(now),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        // Riders see one message; the log keeps the detail
        warn!(reason = %e, "Trip planning failed");
        AppError::NotFound {
            message: "no route found".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => {
                error!(%message, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use vetra_service::{
	CatalogueRequest, CatalogueResponse, DetailRequest, DetailResponse, Error, RefineRequest,
	RefineResponse, SearchRequest, SearchResponse,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/hotels/search", post(search_hotels))
		.route("/v1/activities/search", post(search_activities))
		.route("/v1/search/refine", post(refine))
		.route("/v1/catalogue", get(catalogue))
		.route("/v1/detail", post(detail))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_hotels(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search_hotels(payload).await?;

	Ok(Json(response))
}

async fn search_activities(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search_activities(payload).await?;

	Ok(Json(response))
}

async fn refine(
	State(state): State<AppState>,
	Json(payload): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, ApiError> {
	let response = state.service.refine(payload).await?;

	Ok(Json(response))
}

async fn catalogue(
	State(state): State<AppState>,
	Query(payload): Query<CatalogueRequest>,
) -> Result<Json<CatalogueResponse>, ApiError> {
	let response = state.service.catalogue(payload).await?;

	Ok(Json(response))
}

async fn detail(
	State(state): State<AppState>,
	Json(payload): Json<DetailRequest>,
) -> Result<Json<DetailResponse>, ApiError> {
	let response = state.service.detail(payload).await?;

	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: &'static str,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}

/// Each service error kind keeps its own code on the wire; clients react to
/// the code, not the message.
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		let message = err.to_string();
		let (status, error_code) = match err {
			Error::InvalidRequest { .. } => (StatusCode::BAD_REQUEST, "invalid_request"),
			Error::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_failed"),
			Error::EmptyResult => (StatusCode::NOT_FOUND, "empty_result"),
			Error::CacheMiss => (StatusCode::NOT_FOUND, "cache_miss"),
			Error::NoMatch => (StatusCode::UNPROCESSABLE_ENTITY, "no_match"),
			Error::InvalidPage { .. } => (StatusCode::BAD_REQUEST, "invalid_page"),
			Error::Store { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
		};

		Self { status, error_code, message }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

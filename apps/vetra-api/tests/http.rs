use std::sync::Arc;

use axum::{
	body::{self, Body},
	http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;
use uuid::Uuid;

use vetra_api::{routes, state::AppState};
use vetra_testkit::{StubProvider, curated_record, provider_item, test_service};

fn app_state(provider: Arc<StubProvider>) -> AppState {
	AppState {
		service: Arc::new(test_service(provider, vec![
			curated_record("H0", &[("overall", 95)]),
			curated_record("H1", &[("overall", 40)]),
			curated_record("H2", &[]),
		])),
	}
}

fn json_post(uri: &str, body: Value) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body.to_string()))
		.expect("valid request")
}

fn search_body() -> Value {
	json!({
		"destinations": ["BCN"],
		"check_in": "2026-09-10",
		"check_out": "2026-09-14",
		"adults": 2
	})
}

async fn read_json(response: axum::response::Response) -> Value {
	let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body reads");

	serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn health_responds_ok() {
	let state = app_state(StubProvider::items(Vec::new()));
	let response = routes::router(state)
		.oneshot(Request::builder().uri("/health").body(Body::empty()).expect("valid request"))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_then_refine_round_trips_over_http() {
	let provider = StubProvider::items(vec![
		provider_item("H0", "Hotel Zero"),
		provider_item("H1", "Hotel One"),
		provider_item("H2", "Hotel Two"),
	]);
	let state = app_state(provider.clone());
	let app = routes::router(state);

	let response = app
		.clone()
		.oneshot(json_post("/v1/hotels/search", search_body()))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::OK);

	let search = read_json(response).await;

	assert_eq!(search["total_count"], 3);

	let search_id = search["search_id"].as_str().expect("search_id present");
	let response = app
		.clone()
		.oneshot(json_post(
			"/v1/search/refine",
			json!({
				"search_id": search_id,
				"filter": { "min_compliance_rating": 90 }
			}),
		))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::OK);

	let refined = read_json(response).await;

	assert_eq!(refined["total_count"], 1);
	assert_eq!(refined["items"][0]["code"], "H0");
	assert_eq!(refined["search_id"], search_id);
	assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn refine_with_unknown_session_maps_to_cache_miss() {
	let state = app_state(StubProvider::items(Vec::new()));
	let response = routes::router(state)
		.oneshot(json_post(
			"/v1/search/refine",
			json!({ "search_id": Uuid::new_v4() }),
		))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = read_json(response).await;

	assert_eq!(body["error_code"], "cache_miss");
}

#[tokio::test]
async fn provider_failure_maps_to_bad_gateway() {
	let state = app_state(StubProvider::failure("connect timed out"));
	let response = routes::router(state)
		.oneshot(json_post("/v1/hotels/search", search_body()))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

	let body = read_json(response).await;

	assert_eq!(body["error_code"], "upstream_failed");
}

#[tokio::test]
async fn empty_join_maps_to_empty_result() {
	let state = app_state(StubProvider::items(vec![provider_item("X9", "Unvetted")]));
	let response = routes::router(state)
		.oneshot(json_post("/v1/hotels/search", search_body()))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::NOT_FOUND);

	let body = read_json(response).await;

	assert_eq!(body["error_code"], "empty_result");
}

#[tokio::test]
async fn over_filtering_maps_to_no_match() {
	let provider = StubProvider::items(vec![provider_item("H1", "Hotel One")]);
	let state = app_state(provider);
	let app = routes::router(state);
	let search = read_json(
		app.clone()
			.oneshot(json_post("/v1/hotels/search", search_body()))
			.await
			.expect("router responds"),
	)
	.await;
	let response = app
		.oneshot(json_post(
			"/v1/search/refine",
			json!({
				"search_id": search["search_id"],
				"filter": { "min_compliance_rating": 99 }
			}),
		))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

	let body = read_json(response).await;

	assert_eq!(body["error_code"], "no_match");
}

#[tokio::test]
async fn invalid_page_keeps_its_own_error_code() {
	let provider = StubProvider::items(vec![provider_item("H0", "Hotel Zero")]);
	let state = app_state(provider);
	let mut body = search_body();

	body["page"] = json!(5);

	let response = routes::router(state)
		.oneshot(json_post("/v1/hotels/search", body))
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let body = read_json(response).await;

	assert_eq!(body["error_code"], "invalid_page");
}

#[tokio::test]
async fn catalogue_is_browsable_with_query_pagination() {
	let state = app_state(StubProvider::items(Vec::new()));
	let response = routes::router(state)
		.oneshot(
			Request::builder()
				.uri("/v1/catalogue?page=1&page_size=2")
				.body(Body::empty())
				.expect("valid request"),
		)
		.await
		.expect("router responds");

	assert_eq!(response.status(), StatusCode::OK);

	let body = read_json(response).await;

	assert_eq!(body["total_count"], 3);
	assert_eq!(body["max_page"], 2);
	assert_eq!(body["items"][0]["code"], "H0");
	assert_eq!(body["items"][0]["compliance_rating"]["total"], 95);
}

#[tokio::test]
async fn catalogue_omits_absent_ratings() {
	let state = app_state(StubProvider::items(Vec::new()));
	let response = routes::router(state)
		.oneshot(
			Request::builder()
				.uri("/v1/catalogue")
				.body(Body::empty())
				.expect("valid request"),
		)
		.await
		.expect("router responds");
	let body = read_json(response).await;

	// H2 is curated but unscored; the field is omitted, not zeroed.
	assert_eq!(body["items"][2]["code"], "H2");
	assert!(body["items"][2].get("compliance_rating").is_none());
}

use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::{AvailabilityQuery, ProviderItem, availability};
use vetra_config::ProviderConfig;

/// Fetches one item by code from the vertical's detail endpoint. The body
/// carries the code plus the same pax/date shape as the availability search.
pub async fn fetch(
	cfg: &ProviderConfig,
	path: &str,
	code: &str,
	query: &AvailabilityQuery,
) -> Result<ProviderItem> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}/details", cfg.api_base, path);
	let body = build_detail_body(cfg, code, query);
	let now = OffsetDateTime::now_utc().unix_timestamp();
	let res = client
		.post(url)
		.headers(crate::signed_headers(&cfg.api_key, &cfg.secret, now)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_detail_response(json)
}

pub(crate) fn build_detail_body(
	cfg: &ProviderConfig,
	code: &str,
	query: &AvailabilityQuery,
) -> Value {
	json!({
		"code": code,
		"from": query.check_in,
		"to": query.check_out,
		"language": cfg.language,
		"paxes": availability::pax_entries(query.adults, query.children),
	})
}

fn parse_detail_response(json: Value) -> Result<ProviderItem> {
	let item =
		json.get("item").ok_or_else(|| eyre::eyre!("Detail response is missing item."))?;

	availability::parse_item(item)
}

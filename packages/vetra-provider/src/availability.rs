use std::time::Duration;

use color_eyre::{Result, eyre};
use reqwest::Client;
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::{ADULT_PAX_AGE, AvailabilityQuery, CHILD_PAX_AGE, ProviderItem};
use vetra_config::ProviderConfig;

/// Searches the provider's availability endpoint at `path` (hotels and
/// activities share the request shape, only the path differs).
pub async fn search(
	cfg: &ProviderConfig,
	path: &str,
	query: &AvailabilityQuery,
) -> Result<Vec<ProviderItem>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, path);
	let body = build_search_body(cfg, query);
	let now = OffsetDateTime::now_utc().unix_timestamp();
	let res = client
		.post(url)
		.headers(crate::signed_headers(&cfg.api_key, &cfg.secret, now)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_search_response(json)
}

pub(crate) fn build_search_body(cfg: &ProviderConfig, query: &AvailabilityQuery) -> Value {
	let filters: Vec<Value> =
		query.destinations.iter().map(|code| json!({ "destination": code })).collect();

	json!({
		"filters": filters,
		"from": query.check_in,
		"to": query.check_out,
		"language": cfg.language,
		"paxes": pax_entries(query.adults, query.children),
		"pagination": { "itemsPerPage": query.items_per_page, "page": query.page },
		"order": "DEFAULT",
	})
}

pub(crate) fn pax_entries(adults: u32, children: u32) -> Vec<Value> {
	let mut paxes = Vec::with_capacity((adults + children) as usize);

	for _ in 0..adults {
		paxes.push(json!({ "type": "AD", "age": ADULT_PAX_AGE }));
	}
	for _ in 0..children {
		paxes.push(json!({ "type": "CH", "age": CHILD_PAX_AGE }));
	}

	paxes
}

fn parse_search_response(json: Value) -> Result<Vec<ProviderItem>> {
	let items = json
		.get("items")
		.and_then(Value::as_array)
		.ok_or_else(|| eyre::eyre!("Availability response is missing items array."))?;

	items.iter().map(parse_item).collect()
}

pub(crate) fn parse_item(raw: &Value) -> Result<ProviderItem> {
	let code = raw
		.get("code")
		.and_then(Value::as_str)
		.ok_or_else(|| eyre::eyre!("Availability item is missing code."))?;
	let name = raw
		.get("name")
		.and_then(Value::as_str)
		.ok_or_else(|| eyre::eyre!("Availability item is missing name."))?;
	// Some feeds quote the rate, some send a number.
	let min_rate = raw
		.get("minRate")
		.and_then(Value::as_f64)
		.or_else(|| raw.get("minRate").and_then(Value::as_str).and_then(|s| s.parse().ok()));
	let amenities = raw
		.get("amenities")
		.and_then(Value::as_array)
		.map(|values| {
			values.iter().filter_map(Value::as_str).map(str::to_string).collect()
		})
		.unwrap_or_default();

	Ok(ProviderItem {
		code: code.to_string(),
		name: name.to_string(),
		category: raw.get("categoryName").and_then(Value::as_str).map(str::to_string),
		zone: raw.get("zoneName").and_then(Value::as_str).map(str::to_string),
		min_rate,
		currency: raw.get("currency").and_then(Value::as_str).map(str::to_string),
		amenities,
		meal_included: raw.get("mealIncluded").and_then(Value::as_bool).unwrap_or(false),
		free_cancellation: raw
			.get("freeCancellation")
			.and_then(Value::as_bool)
			.unwrap_or(false),
		traveller_rating: raw
			.get("travellerRating")
			.and_then(Value::as_f64)
			.map(|score| score as f32),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_cfg() -> ProviderConfig {
		ProviderConfig {
			api_base: "https://api.example.test".to_string(),
			api_key: "key".to_string(),
			secret: "secret".to_string(),
			hotels_path: "/hotel-api/1.0/hotels".to_string(),
			activities_path: "/activities-api/3.0/search".to_string(),
			language: "ENG".to_string(),
			timeout_ms: 5_000,
		}
	}

	fn test_query() -> AvailabilityQuery {
		AvailabilityQuery {
			destinations: vec!["BCN".to_string(), "PMI".to_string()],
			check_in: "2026-09-10".to_string(),
			check_out: "2026-09-14".to_string(),
			adults: 2,
			children: 1,
			page: 1,
			items_per_page: 1_000,
		}
	}

	#[test]
	fn body_has_one_filter_per_destination() {
		let body = build_search_body(&test_cfg(), &test_query());
		let filters = body["filters"].as_array().expect("filters array");

		assert_eq!(filters.len(), 2);
		assert_eq!(filters[0]["destination"], "BCN");
		assert_eq!(filters[1]["destination"], "PMI");
	}

	#[test]
	fn paxes_are_age_bucketed_per_traveller() {
		let paxes = pax_entries(2, 1);

		assert_eq!(paxes.len(), 3);
		assert_eq!(paxes[0], json!({ "type": "AD", "age": 30 }));
		assert_eq!(paxes[1], json!({ "type": "AD", "age": 30 }));
		assert_eq!(paxes[2], json!({ "type": "CH", "age": 5 }));
	}

	#[test]
	fn body_carries_pagination_and_order() {
		let body = build_search_body(&test_cfg(), &test_query());

		assert_eq!(body["pagination"]["itemsPerPage"], 1_000);
		assert_eq!(body["pagination"]["page"], 1);
		assert_eq!(body["order"], "DEFAULT");
		assert_eq!(body["from"], "2026-09-10");
		assert_eq!(body["to"], "2026-09-14");
		assert_eq!(body["language"], "ENG");
	}

	#[test]
	fn parses_items_with_quoted_and_numeric_rates() {
		let json = json!({
			"items": [
				{
					"code": "H1",
					"name": "Hotel One",
					"categoryName": "4 stars",
					"zoneName": "Old Town",
					"minRate": "120.50",
					"currency": "EUR",
					"amenities": ["wifi", "pool"],
					"mealIncluded": true,
					"freeCancellation": false,
					"travellerRating": 4.2
				},
				{ "code": "H2", "name": "Hotel Two", "minRate": 88.0 }
			]
		});
		let items = parse_search_response(json).expect("parses");

		assert_eq!(items.len(), 2);
		assert_eq!(items[0].min_rate, Some(120.5));
		assert!(items[0].meal_included);
		assert_eq!(items[0].amenities, vec!["wifi".to_string(), "pool".to_string()]);
		assert_eq!(items[1].min_rate, Some(88.0));
		assert!(!items[1].meal_included);
		assert_eq!(items[1].traveller_rating, None);
	}

	#[test]
	fn missing_items_array_is_an_error() {
		assert!(parse_search_response(json!({ "total": 0 })).is_err());
	}

	#[test]
	fn item_without_code_is_an_error() {
		assert!(parse_search_response(json!({ "items": [{ "name": "x" }] })).is_err());
	}
}

pub mod availability;
pub mod detail;

use color_eyre::Result;
use reqwest::header::{ACCEPT_ENCODING, HeaderMap, HeaderValue};
use sha2::{Digest, Sha256};

/// The provider buckets pax by nominal age instead of counting them. These
/// constants are part of its wire contract.
pub const ADULT_PAX_AGE: u8 = 30;
pub const CHILD_PAX_AGE: u8 = 5;

/// One inventory item as the provider reports it, trimmed to the fields the
/// join and the refine predicates need.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderItem {
	pub code: String,
	pub name: String,
	pub category: Option<String>,
	pub zone: Option<String>,
	pub min_rate: Option<f64>,
	pub currency: Option<String>,
	pub amenities: Vec<String>,
	pub meal_included: bool,
	pub free_cancellation: bool,
	pub traveller_rating: Option<f32>,
}

/// Stay and occupancy parameters shared by the availability and detail
/// endpoints.
#[derive(Clone, Debug)]
pub struct AvailabilityQuery {
	pub destinations: Vec<String>,
	pub check_in: String,
	pub check_out: String,
	pub adults: u32,
	pub children: u32,
	pub page: u32,
	pub items_per_page: u32,
}

/// The provider authenticates each call with `sha256(api_key + secret +
/// unix_seconds)`. The signature is clock-skew sensitive, so it is recomputed
/// per call and never cached.
pub fn signature(api_key: &str, secret: &str, unix_seconds: i64) -> String {
	let mut hasher = Sha256::new();

	hasher.update(api_key.as_bytes());
	hasher.update(secret.as_bytes());
	hasher.update(unix_seconds.to_string().as_bytes());

	hex::encode(hasher.finalize())
}

pub fn signed_headers(api_key: &str, secret: &str, unix_seconds: i64) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	headers.insert("Api-key", api_key.parse()?);
	headers.insert("X-Signature", signature(api_key, secret, unix_seconds).parse()?);
	headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

	Ok(headers)
}

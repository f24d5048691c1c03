use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{
	Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};
use uuid::Uuid;

use crate::{Error, Result, VetraService};
use vetra_domain::{
	page::{self, PageRequest},
	rating::ComplianceRating,
	types::ResultItem,
};
use vetra_provider::{AvailabilityQuery, ProviderItem};
use vetra_store::CuratedStore;

/// How much inventory one search pulls from the provider to build the
/// snapshot. The snapshot is then paged locally.
const PROVIDER_FETCH_SIZE: u32 = 1_000;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vertical {
	Hotels,
	Activities,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchRequest {
	pub destinations: Vec<String>,
	pub check_in: String,
	pub check_out: String,
	pub adults: u32,
	#[serde(default)]
	pub children: u32,
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchResponse {
	pub search_id: Uuid,
	#[serde(with = "time::serde::rfc3339")]
	pub expires_at: OffsetDateTime,
	pub total_count: usize,
	pub page: u32,
	pub max_page: u32,
	pub items: Vec<ResultItem>,
}

impl VetraService {
	pub async fn search_hotels(&self, req: SearchRequest) -> Result<SearchResponse> {
		self.sessionized_search(Vertical::Hotels, req).await
	}

	pub async fn search_activities(&self, req: SearchRequest) -> Result<SearchResponse> {
		self.sessionized_search(Vertical::Activities, req).await
	}

	/// The expensive phase: one provider round trip, the curated join, and a
	/// fresh session holding the entire unsliced result list. Both verticals
	/// share this path; only the provider endpoint differs.
	async fn sessionized_search(
		&self,
		vertical: Vertical,
		req: SearchRequest,
	) -> Result<SearchResponse> {
		validate_destinations(&req.destinations)?;
		validate_stay(&req.check_in, &req.check_out, req.adults)?;

		let path = self.vertical_path(vertical);
		let query = AvailabilityQuery {
			destinations: req.destinations.clone(),
			check_in: req.check_in.trim().to_string(),
			check_out: req.check_out.trim().to_string(),
			adults: req.adults,
			children: req.children,
			page: 1,
			items_per_page: PROVIDER_FETCH_SIZE,
		};
		let provider_items = self
			.provider
			.availability(&self.cfg.provider, path, &query)
			.await
			.map_err(|err| {
				tracing::warn!(?vertical, error = %err, "Provider availability call failed.");

				Error::Upstream { message: err.to_string() }
			})?;
		let joined = join_curated(&provider_items, &self.catalogue);

		if joined.is_empty() {
			return Err(Error::EmptyResult);
		}

		let bounds = page::bounds(
			&PageRequest { page: req.page, page_size: req.page_size },
			self.cfg.search.page_size,
			joined.len(),
		)?;
		let now = OffsetDateTime::now_utc();
		let session = self.sessions.put(Uuid::new_v4(), joined, now);
		let items = page::slice(&session.items, bounds).to_vec();

		tracing::info!(
			search_id = %session.search_id,
			?vertical,
			total_count = session.items.len(),
			"Search session created."
		);

		Ok(SearchResponse {
			search_id: session.search_id,
			expires_at: session.expires_at,
			total_count: session.items.len(),
			page: bounds.page,
			max_page: bounds.max_page,
			items,
		})
	}

	pub(crate) fn vertical_path(&self, vertical: Vertical) -> &str {
		match vertical {
			Vertical::Hotels => &self.cfg.provider.hotels_path,
			Vertical::Activities => &self.cfg.provider.activities_path,
		}
	}
}

/// Intersects provider results with the curated catalogue: only items the
/// catalogue knows enter the snapshot, and the curated rating (when scored)
/// rides along. Curated records with no live inventory are silently dropped.
pub(crate) fn join_curated(items: &[ProviderItem], catalogue: &CuratedStore) -> Vec<ResultItem> {
	let mut lookup: HashMap<&str, &ProviderItem> = HashMap::with_capacity(items.len());

	// Last write wins; the provider is not expected to duplicate codes.
	for item in items {
		lookup.insert(item.code.as_str(), item);
	}

	let mut joined = Vec::new();

	for record in catalogue.records() {
		let Some(item) = lookup.get(record.code.as_str()) else {
			continue;
		};

		joined.push(to_result_item(item, record.rating.clone()));
	}

	joined
}

pub(crate) fn to_result_item(
	item: &ProviderItem,
	rating: Option<ComplianceRating>,
) -> ResultItem {
	ResultItem {
		code: item.code.clone(),
		name: item.name.clone(),
		category: item.category.clone(),
		zone: item.zone.clone(),
		min_rate: item.min_rate,
		currency: item.currency.clone(),
		amenities: item.amenities.clone(),
		meal_included: item.meal_included,
		free_cancellation: item.free_cancellation,
		traveller_rating: item.traveller_rating,
		compliance_rating: rating,
	}
}

fn validate_destinations(destinations: &[String]) -> Result<()> {
	if destinations.is_empty() || destinations.iter().any(|code| code.trim().is_empty()) {
		return Err(Error::InvalidRequest {
			message: "destinations must be a non-empty list of destination codes.".to_string(),
		});
	}

	Ok(())
}

pub(crate) fn validate_stay(check_in: &str, check_out: &str, adults: u32) -> Result<()> {
	if adults == 0 {
		return Err(Error::InvalidRequest {
			message: "at least one adult is required.".to_string(),
		});
	}

	let check_in = parse_date(check_in, "check_in")?;
	let check_out = parse_date(check_out, "check_out")?;

	if check_out <= check_in {
		return Err(Error::InvalidRequest {
			message: "check_out must be after check_in.".to_string(),
		});
	}

	Ok(())
}

fn parse_date(raw: &str, field: &str) -> Result<Date> {
	Date::parse(raw.trim(), DATE_FORMAT).map_err(|_| Error::InvalidRequest {
		message: format!("{field} must be a YYYY-MM-DD date."),
	})
}

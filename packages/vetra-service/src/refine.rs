use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, Result, VetraService};
use vetra_domain::{
	filter::FilterCriteria,
	page::{self, PageRequest},
	types::ResultItem,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RefineRequest {
	pub search_id: Uuid,
	#[serde(default)]
	pub filter: FilterCriteria,
	#[serde(default)]
	pub page: Option<u32>,
	#[serde(default)]
	pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RefineResponse {
	pub search_id: Uuid,
	#[serde(with = "time::serde::rfc3339")]
	pub expires_at: OffsetDateTime,
	pub total_count: usize,
	pub page: u32,
	pub max_page: u32,
	pub items: Vec<ResultItem>,
}

impl VetraService {
	/// The cheap phase: filters and pages the cached snapshot without ever
	/// touching the provider. Always works over the full stored list, so
	/// refine calls are independent of each other and idempotent.
	pub async fn refine(&self, req: RefineRequest) -> Result<RefineResponse> {
		let now = OffsetDateTime::now_utc();
		let Some(session) = self.sessions.get(req.search_id, now) else {
			// Expected when a session expired or never existed; the caller
			// re-runs the search.
			return Err(Error::CacheMiss);
		};
		let filtered = req.filter.apply(&session.items);

		if filtered.is_empty() {
			return Err(Error::NoMatch);
		}

		// Totals and max page always come from the post-filter list.
		let bounds = page::bounds(
			&PageRequest { page: req.page, page_size: req.page_size },
			self.cfg.search.page_size,
			filtered.len(),
		)?;
		let items = page::slice(&filtered, bounds).to_vec();

		tracing::debug!(
			search_id = %session.search_id,
			total_count = filtered.len(),
			page = bounds.page,
			"Refined search session."
		);

		Ok(RefineResponse {
			search_id: session.search_id,
			expires_at: session.expires_at,
			total_count: filtered.len(),
			page: bounds.page,
			max_page: bounds.max_page,
			items,
		})
	}
}

use serde::{Deserialize, Serialize};

use crate::{Error, Result, Vertical, VetraService, search};
use vetra_domain::types::ResultItem;
use vetra_provider::AvailabilityQuery;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DetailRequest {
	pub vertical: Vertical,
	pub code: String,
	pub check_in: String,
	pub check_out: String,
	pub adults: u32,
	#[serde(default)]
	pub children: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DetailResponse {
	pub item: ResultItem,
}

impl VetraService {
	/// Fetches one item from the provider's detail endpoint and joins the
	/// curated rating for its code, exactly as the search join would.
	pub async fn detail(&self, req: DetailRequest) -> Result<DetailResponse> {
		if req.code.trim().is_empty() {
			return Err(Error::InvalidRequest { message: "code must be non-empty.".to_string() });
		}

		search::validate_stay(&req.check_in, &req.check_out, req.adults)?;

		let path = self.vertical_path(req.vertical);
		let query = AvailabilityQuery {
			destinations: Vec::new(),
			check_in: req.check_in.trim().to_string(),
			check_out: req.check_out.trim().to_string(),
			adults: req.adults,
			children: req.children,
			page: 1,
			items_per_page: 1,
		};
		let item = self
			.provider
			.detail(&self.cfg.provider, path, req.code.trim(), &query)
			.await
			.map_err(|err| {
				tracing::warn!(code = %req.code, error = %err, "Provider detail call failed.");

				Error::Upstream { message: err.to_string() }
			})?;
		let rating = self.catalogue.get(&item.code).and_then(|record| record.rating.clone());

		Ok(DetailResponse { item: search::to_result_item(&item, rating) })
	}
}

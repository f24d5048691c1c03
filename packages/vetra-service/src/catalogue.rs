use serde::{Deserialize, Serialize};

use crate::{Error, Result, VetraService};
use vetra_domain::{
	page::{self, PageRequest},
	rating::ComplianceRating,
};

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogueRequest {
	pub page: Option<u32>,
	pub page_size: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogueItem {
	pub code: String,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub compliance_rating: Option<ComplianceRating>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CatalogueResponse {
	pub total_count: usize,
	pub page: u32,
	pub max_page: u32,
	pub items: Vec<CatalogueItem>,
}

impl VetraService {
	/// Browses the curated catalogue itself: no provider call, no session,
	/// same pagination helper as the search and refine paths.
	pub async fn catalogue(&self, req: CatalogueRequest) -> Result<CatalogueResponse> {
		if self.catalogue.is_empty() {
			return Err(Error::EmptyResult);
		}

		let bounds = page::bounds(
			&PageRequest { page: req.page, page_size: req.page_size },
			self.cfg.catalogue.page_size,
			self.catalogue.len(),
		)?;
		let items = page::slice(self.catalogue.records(), bounds)
			.iter()
			.map(|record| CatalogueItem {
				code: record.code.clone(),
				name: record.name.clone(),
				compliance_rating: record.rating.clone(),
			})
			.collect();

		Ok(CatalogueResponse {
			total_count: self.catalogue.len(),
			page: bounds.page,
			max_page: bounds.max_page,
			items,
		})
	}
}

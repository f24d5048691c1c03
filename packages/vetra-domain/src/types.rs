use serde::{Deserialize, Serialize};

use crate::rating::ComplianceRating;

/// One normalized inventory item inside a search snapshot. `code` is unique
/// within a snapshot; `compliance_rating` stays `None` until the curated join
/// sets it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ResultItem {
	pub code: String,
	pub name: String,
	pub category: Option<String>,
	pub zone: Option<String>,
	pub min_rate: Option<f64>,
	pub currency: Option<String>,
	#[serde(default)]
	pub amenities: Vec<String>,
	#[serde(default)]
	pub meal_included: bool,
	#[serde(default)]
	pub free_cancellation: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub traveller_rating: Option<f32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub compliance_rating: Option<ComplianceRating>,
}

use serde::{Deserialize, Serialize};

use crate::types::ResultItem;

/// Optional, conjunctive refine predicates. An absent predicate is vacuously
/// true.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterCriteria {
	pub min_compliance_rating: Option<u32>,
	pub amenities: Option<Vec<String>>,
	pub meal_included: Option<bool>,
	pub free_cancellation: Option<bool>,
	pub min_traveller_rating: Option<f32>,
}
impl FilterCriteria {
	pub fn is_empty(&self) -> bool {
		self.min_compliance_rating.is_none()
			&& self.amenities.is_none()
			&& self.meal_included.is_none()
			&& self.free_cancellation.is_none()
			&& self.min_traveller_rating.is_none()
	}

	pub fn matches(&self, item: &ResultItem) -> bool {
		if let Some(min) = self.min_compliance_rating {
			// An unrated item never satisfies a minimum-rating predicate,
			// even when the minimum is zero.
			match item.compliance_rating.as_ref() {
				Some(rating) if rating.total >= min => {},
				_ => return false,
			}
		}
		if let Some(required) = self.amenities.as_ref()
			&& !required.iter().all(|amenity| {
				item.amenities.iter().any(|have| have.eq_ignore_ascii_case(amenity))
			}) {
			return false;
		}
		if let Some(meal_included) = self.meal_included
			&& item.meal_included != meal_included
		{
			return false;
		}
		if let Some(free_cancellation) = self.free_cancellation
			&& item.free_cancellation != free_cancellation
		{
			return false;
		}
		if let Some(min) = self.min_traveller_rating {
			match item.traveller_rating {
				Some(score) if score >= min => {},
				_ => return false,
			}
		}

		true
	}

	pub fn apply(&self, items: &[ResultItem]) -> Vec<ResultItem> {
		items.iter().filter(|item| self.matches(item)).cloned().collect()
	}
}

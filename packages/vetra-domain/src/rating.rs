use serde::{Deserialize, Serialize};

pub const MAX_TOTAL_SCORE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingError {
	TotalOverflow { total: u32 },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RatingEntry {
	pub name: String,
	pub score: u32,
}

/// A curated compliance rating: the per-criterion breakdown plus its sum.
/// The total is derived, never stored independently, so it cannot drift.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ComplianceRating {
	pub breakdown: Vec<RatingEntry>,
	pub total: u32,
}
impl ComplianceRating {
	pub fn from_breakdown(breakdown: Vec<RatingEntry>) -> Result<Self, RatingError> {
		let total = breakdown.iter().map(|entry| entry.score).sum();

		if total > MAX_TOTAL_SCORE {
			return Err(RatingError::TotalOverflow { total });
		}

		Ok(Self { breakdown, total })
	}
}

/// One entry of the locally curated catalogue. `rating` is absent for items
/// that are vetted but not yet scored; absence is distinct from a zero score.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CuratedRecord {
	pub code: String,
	pub name: String,
	pub rating: Option<ComplianceRating>,
}

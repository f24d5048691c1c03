use std::{collections::HashMap, fs, path::Path};

use serde::Deserialize;

use crate::{Error, Result};
use vetra_domain::rating::{ComplianceRating, CuratedRecord, RatingEntry, RatingError};

#[derive(Debug, Deserialize)]
struct RawRecord {
	code: String,
	name: String,
	#[serde(default)]
	ratings: Vec<RatingEntry>,
}

/// Read access to the locally curated compliance dataset. Loaded once at
/// startup; the dataset file is this store's write path, so score invariants
/// are enforced here.
#[derive(Debug)]
pub struct CuratedStore {
	records: Vec<CuratedRecord>,
	by_code: HashMap<String, usize>,
}
impl CuratedStore {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadDataset { path: path.to_path_buf(), source: err })?;

		Self::from_json(&raw)
	}

	pub fn from_json(raw: &str) -> Result<Self> {
		let raw_records: Vec<RawRecord> = serde_json::from_str(raw)?;
		let mut records = Vec::with_capacity(raw_records.len());

		for raw_record in raw_records {
			let code = raw_record.code.trim().to_string();

			if code.is_empty() {
				return Err(Error::InvalidRecord {
					code: raw_record.code,
					message: "code must be non-empty.".to_string(),
				});
			}

			// An unscored record keeps no rating at all; an empty breakdown
			// would read as a zero score downstream.
			let rating = if raw_record.ratings.is_empty() {
				None
			} else {
				Some(ComplianceRating::from_breakdown(raw_record.ratings).map_err(
					|RatingError::TotalOverflow { total }| Error::InvalidRecord {
						code: code.clone(),
						message: format!("rating total {total} exceeds 100."),
					},
				)?)
			};

			records.push(CuratedRecord { code, name: raw_record.name, rating });
		}

		Self::from_records(records)
	}

	pub fn from_records(records: Vec<CuratedRecord>) -> Result<Self> {
		let mut by_code = HashMap::with_capacity(records.len());

		for (idx, record) in records.iter().enumerate() {
			if by_code.insert(record.code.clone(), idx).is_some() {
				return Err(Error::DuplicateCode { code: record.code.clone() });
			}
		}

		Ok(Self { records, by_code })
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn get(&self, code: &str) -> Option<&CuratedRecord> {
		self.by_code.get(code).map(|idx| &self.records[*idx])
	}

	pub fn records(&self) -> &[CuratedRecord] {
		&self.records
	}
}

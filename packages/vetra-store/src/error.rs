pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read curated dataset at {path:?}.")]
	ReadDataset { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	ParseDataset(#[from] serde_json::Error),
	#[error("Curated record {code} is invalid: {message}")]
	InvalidRecord { code: String, message: String },
	#[error("Curated record {code} appears more than once.")]
	DuplicateCode { code: String },
}

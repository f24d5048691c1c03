use vetra_domain::page::PageError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The caller-facing outcome taxonomy. Every variant except `Store` is a
/// recoverable, expected condition; callers match on the variant, never on
/// the message text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Search failed: {message}")]
	Upstream { message: String },
	#[error("No results matched the curated catalogue.")]
	EmptyResult,
	#[error("Data not found in cache.")]
	CacheMiss,
	#[error("Please change the filter parameters.")]
	NoMatch,
	#[error("Invalid page number: page {page} exceeds max page {max_page}.")]
	InvalidPage { page: u32, max_page: u32 },
	#[error("Store error: {message}")]
	Store { message: String },
}
impl From<PageError> for Error {
	fn from(err: PageError) -> Self {
		match err {
			PageError::ZeroPage => {
				Self::InvalidRequest { message: "page must be a positive integer.".to_string() }
			},
			PageError::ZeroPageSize => Self::InvalidRequest {
				message: "page_size must be a positive integer.".to_string(),
			},
			PageError::OutOfRange { page, max_page } => Self::InvalidPage { page, max_page },
		}
	}
}

impl From<vetra_store::Error> for Error {
	fn from(err: vetra_store::Error) -> Self {
		Self::Store { message: err.to_string() }
	}
}

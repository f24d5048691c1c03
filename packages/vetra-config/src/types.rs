use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub provider: ProviderConfig,
	pub catalogue: Catalogue,
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
	pub api_base: String,
	pub api_key: String,
	pub secret: String,
	pub hotels_path: String,
	pub activities_path: String,
	#[serde(default = "default_language")]
	pub language: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Catalogue {
	pub dataset_path: PathBuf,
	/// Catalogue browsing is a narrow listing, so its default page is small.
	#[serde(default = "default_catalogue_page_size")]
	pub page_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_search_page_size")]
	pub page_size: u32,
	#[serde(default = "default_session_ttl_secs")]
	pub session_ttl_secs: i64,
}

fn default_language() -> String {
	"ENG".to_string()
}

fn default_catalogue_page_size() -> u32 {
	10
}

fn default_search_page_size() -> u32 {
	100
}

fn default_session_ttl_secs() -> i64 {
	21_600
}

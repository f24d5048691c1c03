mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalogue, Config, ProviderConfig, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.provider.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "provider.api_base must be non-empty.".to_string(),
		});
	}

	for (label, value) in [
		("provider.api_key", &cfg.provider.api_key),
		("provider.secret", &cfg.provider.secret),
		("provider.language", &cfg.provider.language),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	for (label, path) in [
		("provider.hotels_path", &cfg.provider.hotels_path),
		("provider.activities_path", &cfg.provider.activities_path),
	] {
		if !path.starts_with('/') {
			return Err(Error::Validation {
				message: format!("{label} must start with a slash."),
			});
		}
	}

	if cfg.provider.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "provider.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.catalogue.dataset_path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "catalogue.dataset_path must be non-empty.".to_string(),
		});
	}
	if cfg.catalogue.page_size == 0 {
		return Err(Error::Validation {
			message: "catalogue.page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.page_size == 0 {
		return Err(Error::Validation {
			message: "search.page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.session_ttl_secs <= 0 {
		return Err(Error::Validation {
			message: "search.session_ttl_secs must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	// The provider paths are appended verbatim, so a trailing slash on the
	// base would double up.
	while cfg.provider.api_base.ends_with('/') {
		cfg.provider.api_base.pop();
	}
}

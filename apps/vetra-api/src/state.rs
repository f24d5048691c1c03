use std::sync::Arc;

use time::Duration;

use vetra_service::VetraService;
use vetra_store::{CuratedStore, SessionCache};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<VetraService>,
}
impl AppState {
	pub fn new(config: vetra_config::Config) -> color_eyre::Result<Self> {
		let catalogue = CuratedStore::load(&config.catalogue.dataset_path)?;

		tracing::info!(records = catalogue.len(), "Curated catalogue loaded.");

		let sessions = Arc::new(SessionCache::new(Duration::seconds(config.search.session_ttl_secs)));
		let service = VetraService::new(config, catalogue, sessions);

		Ok(Self { service: Arc::new(service) })
	}
}

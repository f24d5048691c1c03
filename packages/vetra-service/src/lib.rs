pub mod catalogue;
pub mod detail;
pub mod refine;
pub mod search;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use catalogue::{CatalogueItem, CatalogueRequest, CatalogueResponse};
pub use detail::{DetailRequest, DetailResponse};
pub use error::{Error, Result};
pub use refine::{RefineRequest, RefineResponse};
pub use search::{SearchRequest, SearchResponse, Vertical};

use vetra_config::{Config, ProviderConfig};
use vetra_provider::{AvailabilityQuery, ProviderItem, availability, detail as provider_detail};
use vetra_store::{CuratedStore, SessionCache};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The outbound inventory API, injectable so tests and alternative transports
/// can stand in for the real signed client.
pub trait InventoryProvider
where
	Self: Send + Sync,
{
	fn availability<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		path: &'a str,
		query: &'a AvailabilityQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ProviderItem>>>;

	fn detail<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		path: &'a str,
		code: &'a str,
		query: &'a AvailabilityQuery,
	) -> BoxFuture<'a, color_eyre::Result<ProviderItem>>;
}

struct DefaultProvider;

impl InventoryProvider for DefaultProvider {
	fn availability<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		path: &'a str,
		query: &'a AvailabilityQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ProviderItem>>> {
		Box::pin(availability::search(cfg, path, query))
	}

	fn detail<'a>(
		&'a self,
		cfg: &'a ProviderConfig,
		path: &'a str,
		code: &'a str,
		query: &'a AvailabilityQuery,
	) -> BoxFuture<'a, color_eyre::Result<ProviderItem>> {
		Box::pin(provider_detail::fetch(cfg, path, code, query))
	}
}

pub struct VetraService {
	pub cfg: Config,
	pub catalogue: CuratedStore,
	pub sessions: Arc<SessionCache>,
	pub provider: Arc<dyn InventoryProvider>,
}
impl VetraService {
	pub fn new(cfg: Config, catalogue: CuratedStore, sessions: Arc<SessionCache>) -> Self {
		Self { cfg, catalogue, sessions, provider: Arc::new(DefaultProvider) }
	}

	pub fn with_provider(
		cfg: Config,
		catalogue: CuratedStore,
		sessions: Arc<SessionCache>,
		provider: Arc<dyn InventoryProvider>,
	) -> Self {
		Self { cfg, catalogue, sessions, provider }
	}
}

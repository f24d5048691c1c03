use std::sync::{
	Arc,
	atomic::{AtomicUsize, Ordering},
};

use color_eyre::eyre;
use time::Duration;

use vetra_config::{Catalogue, Config, ProviderConfig, Search, Service};
use vetra_domain::rating::{ComplianceRating, CuratedRecord, RatingEntry};
use vetra_provider::{AvailabilityQuery, ProviderItem};
use vetra_service::{BoxFuture, InventoryProvider, VetraService};
use vetra_store::{CuratedStore, SessionCache};

/// A scriptable inventory provider: serves one canned availability response
/// and counts calls, so tests can assert that refine never re-contacts it.
pub struct StubProvider {
	response: StubResponse,
	calls: AtomicUsize,
}

pub enum StubResponse {
	Items(Vec<ProviderItem>),
	Failure(String),
}

impl StubProvider {
	pub fn items(items: Vec<ProviderItem>) -> Arc<Self> {
		Arc::new(Self { response: StubResponse::Items(items), calls: AtomicUsize::new(0) })
	}

	pub fn failure(message: &str) -> Arc<Self> {
		Arc::new(Self {
			response: StubResponse::Failure(message.to_string()),
			calls: AtomicUsize::new(0),
		})
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl InventoryProvider for StubProvider {
	fn availability<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		_path: &'a str,
		_query: &'a AvailabilityQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<ProviderItem>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async move {
			match &self.response {
				StubResponse::Items(items) => Ok(items.clone()),
				StubResponse::Failure(message) => Err(eyre::eyre!("{message}")),
			}
		})
	}

	fn detail<'a>(
		&'a self,
		_cfg: &'a ProviderConfig,
		_path: &'a str,
		code: &'a str,
		_query: &'a AvailabilityQuery,
	) -> BoxFuture<'a, color_eyre::Result<ProviderItem>> {
		self.calls.fetch_add(1, Ordering::SeqCst);

		Box::pin(async move {
			match &self.response {
				StubResponse::Items(items) => items
					.iter()
					.find(|item| item.code == code)
					.cloned()
					.ok_or_else(|| eyre::eyre!("No stubbed item for code {code}.")),
				StubResponse::Failure(message) => Err(eyre::eyre!("{message}")),
			}
		})
	}
}

pub fn provider_item(code: &str, name: &str) -> ProviderItem {
	ProviderItem {
		code: code.to_string(),
		name: name.to_string(),
		category: Some("4 stars".to_string()),
		zone: Some("Old Town".to_string()),
		min_rate: Some(120.5),
		currency: Some("EUR".to_string()),
		amenities: vec!["wifi".to_string()],
		meal_included: false,
		free_cancellation: false,
		traveller_rating: Some(4.0),
	}
}

pub fn curated_record(code: &str, scores: &[(&str, u32)]) -> CuratedRecord {
	let rating = if scores.is_empty() {
		None
	} else {
		Some(
			ComplianceRating::from_breakdown(
				scores
					.iter()
					.map(|(name, score)| RatingEntry { name: name.to_string(), score: *score })
					.collect(),
			)
			.expect("test breakdown within bounds"),
		)
	};

	CuratedRecord { code: code.to_string(), name: format!("Curated {code}"), rating }
}

pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		provider: ProviderConfig {
			api_base: "https://api.example.test".to_string(),
			api_key: "key".to_string(),
			secret: "secret".to_string(),
			hotels_path: "/hotel-api/1.0/hotels".to_string(),
			activities_path: "/activities-api/3.0/search".to_string(),
			language: "ENG".to_string(),
			timeout_ms: 5_000,
		},
		catalogue: Catalogue { dataset_path: "unused.json".into(), page_size: 10 },
		search: Search { page_size: 100, session_ttl_secs: 21_600 },
	}
}

pub fn test_service(provider: Arc<StubProvider>, records: Vec<CuratedRecord>) -> VetraService {
	test_service_with_ttl(provider, records, Duration::hours(6))
}

pub fn test_service_with_ttl(
	provider: Arc<StubProvider>,
	records: Vec<CuratedRecord>,
	ttl: Duration,
) -> VetraService {
	let catalogue = CuratedStore::from_records(records).expect("valid test records");
	let sessions = Arc::new(SessionCache::new(ttl));

	VetraService::with_provider(test_config(), catalogue, sessions, provider)
}

use vetra_config::{Catalogue, Config, ProviderConfig, Search, Service};

fn parse(raw: &str) -> Config {
	toml::from_str(raw).expect("config parses")
}

fn full_config() -> Config {
	parse(
		r#"
[service]
http_bind = "127.0.0.1:8080"
log_level = "info"

[provider]
api_base        = "https://api.example.test"
api_key         = "key"
secret          = "secret"
hotels_path     = "/hotel-api/1.0/hotels"
activities_path = "/activities-api/3.0/search"
timeout_ms      = 10000

[catalogue]
dataset_path = "data/curated.json"

[search]
"#,
	)
}

#[test]
fn defaults_fill_in_page_sizes_and_ttl() {
	let cfg = full_config();

	assert_eq!(cfg.search.page_size, 100);
	assert_eq!(cfg.catalogue.page_size, 10);
	assert_eq!(cfg.search.session_ttl_secs, 21_600);
	assert_eq!(cfg.provider.language, "ENG");
	assert!(vetra_config::validate(&cfg).is_ok());
}

#[test]
fn rejects_zero_page_size() {
	let cfg = Config {
		search: Search { page_size: 0, session_ttl_secs: 21_600 },
		..full_config()
	};

	assert!(vetra_config::validate(&cfg).is_err());
}

#[test]
fn rejects_non_positive_ttl() {
	let cfg = Config {
		search: Search { page_size: 100, session_ttl_secs: 0 },
		..full_config()
	};

	assert!(vetra_config::validate(&cfg).is_err());
}

#[test]
fn rejects_blank_credentials() {
	let cfg = Config {
		provider: ProviderConfig { api_key: "  ".to_string(), ..full_config().provider },
		..full_config()
	};

	assert!(vetra_config::validate(&cfg).is_err());
}

#[test]
fn rejects_provider_paths_without_leading_slash() {
	let cfg = Config {
		provider: ProviderConfig {
			hotels_path: "hotel-api/1.0/hotels".to_string(),
			..full_config().provider
		},
		..full_config()
	};

	assert!(vetra_config::validate(&cfg).is_err());
}

#[test]
fn validates_service_bind() {
	let cfg = Config {
		service: Service { http_bind: "".to_string(), log_level: "info".to_string() },
		..full_config()
	};

	assert!(vetra_config::validate(&cfg).is_err());
}

#[test]
fn validates_dataset_path() {
	let cfg = Config {
		catalogue: Catalogue { dataset_path: "".into(), page_size: 10 },
		..full_config()
	};

	assert!(vetra_config::validate(&cfg).is_err());
}

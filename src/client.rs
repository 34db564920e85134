use crate::boards::BoardService;
use crate::collections::CollectionService;
use crate::entries::EntryService;
use crate::feeds::FeedService;
use crate::library::LibraryService;
use crate::markers::MarkerService;
use crate::mixes::MixService;
use crate::opml::OpmlService;
use crate::preferences::PreferenceService;
use crate::profile::ProfileService;
use crate::recommendations::RecommendationService;
use crate::search::SearchService;
use crate::streams::StreamService;
use crate::transport::Transport;

/// Base URL for the Feedly API
pub const API_BASE_URL: &str = "https://cloud.feedly.com";
/// Version path segment for the Feedly API
pub const API_BASE_VERSION: &str = "v3";

/// Configuration for the Feedly API client
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL
    pub base_url: String,
    /// API version path segment
    pub version: String,
    /// Enable debug logging of requests
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: API_BASE_URL.to_string(),
            version: API_BASE_VERSION.to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the API version path segment
    pub fn with_version(mut self, version: String) -> Self {
        self.version = version;
        self
    }

    /// Enable debug logging
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// A Feedly API client. It holds the shared transport and one service per
/// API resource group.
///
/// Authentication is the supplied HTTP client's concern: configure it with a
/// default `Authorization` header, or wrap it in an OAuth2-refreshing client,
/// before handing it over.
pub struct Client {
    /// Personal boards, aka tags
    pub boards: BoardService,
    /// Collections of feed subscriptions, aka categories
    pub collections: CollectionService,
    /// Entries
    pub entries: EntryService,
    /// Feed metadata
    pub feeds: FeedService,
    /// The user's public library
    pub library: LibraryService,
    /// Read/saved markers
    pub markers: MarkerService,
    /// Most engaging content mixes
    pub mixes: MixService,
    /// OPML import/export
    pub opml: OpmlService,
    /// Application preferences
    pub preferences: PreferenceService,
    /// User profile
    pub profile: ProfileService,
    /// Feed recommendations
    pub recommendations: RecommendationService,
    /// Feed and content search
    pub search: SearchService,
    /// Streams of entries
    pub streams: StreamService,
}

impl Client {
    /// Create a new client against the production Feedly API using the
    /// supplied HTTP client.
    pub fn new(http_client: reqwest::blocking::Client) -> Self {
        Client::with_config(http_client, Config::default())
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(http_client: reqwest::blocking::Client, config: Config) -> Self {
        let transport = Transport::new(http_client, config);

        Client {
            boards: BoardService::new(transport.clone()),
            collections: CollectionService::new(transport.clone()),
            entries: EntryService::new(transport.clone()),
            feeds: FeedService::new(transport.clone()),
            library: LibraryService::new(transport.clone()),
            markers: MarkerService::new(transport.clone()),
            mixes: MixService::new(transport.clone()),
            opml: OpmlService::new(transport.clone()),
            preferences: PreferenceService::new(transport.clone()),
            profile: ProfileService::new(transport.clone()),
            recommendations: RecommendationService::new(transport.clone()),
            search: SearchService::new(transport.clone()),
            streams: StreamService::new(transport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://cloud.feedly.com");
        assert_eq!(config.version, "v3");
        assert!(!config.debug);
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::default()
            .with_base_url("http://localhost:8080".to_string())
            .with_version("v4".to_string())
            .with_debug(true);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.version, "v4");
        assert!(config.debug);
    }

    #[test]
    fn test_client_creation() {
        let _client = Client::new(reqwest::blocking::Client::new());
    }
}

//! HTTP client for the airport's flight search endpoint.
//!
//! The endpoint is the website's internal search API, not an officially
//! published one, so it may break or change without notice. One fetch issues
//! a single GET with the direction, scheduled-time window, and hit count
//! substituted into the fixed query template.

use super::error::FlightBoardError;
use super::query::{QueryWindow, SearchQuery};
use super::types::{Flight, SearchResponse};
use chrono::Local;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Path of the search endpoint on the airport website.
const SEARCH_PATH: &str = "/api/data/search";

/// Configuration for the flight search client.
#[derive(Debug, Clone)]
pub struct FlightSearchConfig {
    /// Base URL of the airport website
    pub base_url: String,
    /// Search index holding the flight records
    pub index_name: String,
    /// User agent string
    pub user_agent: String,
    /// Connect timeout for the HTTP client
    pub connect_timeout: Duration,
    /// Overall request timeout
    pub timeout: Duration,
}

impl Default for FlightSearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.melbourneairport.com.au".to_string(),
            index_name: "melair_flights".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Client for fetching scheduled flights from the airport's search endpoint.
pub struct FlightSearchClient {
    client: Client,
    config: FlightSearchConfig,
}

impl FlightSearchClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, FlightBoardError> {
        Self::with_config(FlightSearchConfig::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: FlightSearchConfig) -> Result<Self, FlightBoardError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FlightBoardError::Network {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Fetches the flights matching `query` and maps them to records.
    ///
    /// The scheduled-time window is anchored at the current local time. Any
    /// transport, status, decode, or shape failure aborts the fetch; there is
    /// no retry.
    pub async fn fetch_flights(&self, query: &SearchQuery) -> Result<Vec<Flight>, FlightBoardError> {
        let window = query.window_at(Local::now());
        let url = self.search_url(query, window);

        debug!(url = %url, "requesting flight search");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FlightBoardError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let flights = parse_search_body(&body)?;

        info!(
            direction = %query.direction,
            flights = flights.len(),
            "search returned flights"
        );

        Ok(flights)
    }

    /// Renders the search URL for `query` over `window`.
    ///
    /// The query string is the endpoint's fixed percent-encoded template:
    /// index name, a `status` facet selector, a filter combining direction
    /// with a `scheduledTimeStamp: <start> TO <end>` range, and the hit count.
    fn search_url(&self, query: &SearchQuery, window: QueryWindow) -> String {
        format!(
            "{base}{path}?queries%5B0%5D%5BindexName%5D={index}\
             &queries%5B0%5D%5Bparams%5D%5Bfacets%5D%5B3%5D=status\
             &queries%5B0%5D%5Bparams%5D%5Bfilters%5D=flightDirection%3A{direction}%20AND%20scheduledTimeStamp%3A%20{start}%20TO%20{end}\
             &queries%5B0%5D%5Bparams%5D%5BhitsPerPage%5D={quantity}",
            base = self.config.base_url,
            path = SEARCH_PATH,
            index = self.config.index_name,
            direction = query.direction.name(),
            start = window.start_ms,
            end = window.end_ms,
            quantity = query.quantity,
        )
    }
}

/// Decodes a search response body and maps `results[0].hits` to flights.
///
/// # Arguments
/// * `body` - The raw JSON body returned by the search endpoint
///
/// # Returns
/// * `Ok(Vec<Flight>)` - One record per hit, in response order
/// * `Err(FlightBoardError)` - If the body is not JSON or lacks a result set
pub fn parse_search_body(body: &str) -> Result<Vec<Flight>, FlightBoardError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    let hits = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| FlightBoardError::Schema {
            message: "response contained no result sets".to_string(),
        })?
        .hits;

    hits.into_iter().map(Flight::from_hit).collect()
}

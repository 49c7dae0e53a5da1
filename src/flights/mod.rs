//! Flight search: query construction, fetching, and record mapping.

mod client;
mod error;
mod query;
mod types;

pub use client::{parse_search_body, FlightSearchClient, FlightSearchConfig};
pub use error::FlightBoardError;
pub use query::{QueryWindow, SearchQuery};
pub use types::{Flight, FlightDirection, RouteType};

/// Fetches the flights matching `query` using a default-configured client.
///
/// Convenience wrapper for the single-shot case; one outbound request per
/// call.
pub async fn fetch_flights(query: &SearchQuery) -> Result<Vec<Flight>, FlightBoardError> {
    FlightSearchClient::new()?.fetch_flights(query).await
}

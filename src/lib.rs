//! Console flight board for Melbourne Airport's scheduled arrivals and
//! departures.
//!
//! Queries the website's internal flight-search endpoint for flights within a
//! scheduled-time window, maps the JSON hits to typed records, and prints them
//! as a table. The endpoint is not officially published, so it may break or
//! change without notice.

mod args;
pub mod board;
pub mod flights;

pub use args::{Cli, OutputFormat};

use anyhow::Result;
use flights::{FlightSearchClient, SearchQuery};

/// Runs one fetch-and-print cycle for the given CLI arguments.
pub async fn run(cli: Cli) -> Result<()> {
    let query = SearchQuery {
        direction: cli.direction,
        minutes_in_past: cli.minutes_in_past,
        minutes_in_future: cli.minutes_in_future,
        quantity: cli.quantity,
    };

    let client = FlightSearchClient::new()?;
    let flights = client.fetch_flights(&query).await?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&flights)?),
        OutputFormat::Plain => {
            println!("{}S", query.direction.name());
            println!("{}", board::render_table(query.direction, &flights));
        }
    }

    Ok(())
}

//! Console presentation of fetched flights.

use crate::flights::{Flight, FlightDirection};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

/// Column headers for the board. The third column names the other end of the
/// route: where a departure is going, or where an arrival is coming from.
pub fn header_for(direction: FlightDirection) -> Vec<&'static str> {
    let route_column = match direction {
        FlightDirection::Departure => "Destination",
        FlightDirection::Arrival => "Origin",
    };
    vec![
        "Airline",
        "Flight",
        route_column,
        "Scheduled",
        "Estimated",
        "Terminal",
        "Gate",
        "Status",
    ]
}

/// Builds the display table for a list of flights.
///
/// One row per flight; an unset airline name or estimated time renders as an
/// empty cell. The caller prints the returned table.
pub fn render_table(direction: FlightDirection, flights: &[Flight]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header_for(direction));

    for flight in flights {
        table.add_row(vec![
            flight.airline_name.clone().unwrap_or_default(),
            flight.flight_number.clone(),
            flight.airport_name.clone(),
            flight.scheduled_display_time(),
            flight.estimated_display_time(),
            flight.terminal.clone(),
            flight.gate.clone(),
            flight.status.clone(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_swaps_route_column() {
        assert_eq!(header_for(FlightDirection::Arrival)[2], "Origin");
        assert_eq!(header_for(FlightDirection::Departure)[2], "Destination");
    }

    #[test]
    fn test_arrival_header_order() {
        assert_eq!(
            header_for(FlightDirection::Arrival),
            vec![
                "Airline",
                "Flight",
                "Origin",
                "Scheduled",
                "Estimated",
                "Terminal",
                "Gate",
                "Status"
            ]
        );
    }
}

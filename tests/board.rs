//! End-to-end mapping and rendering of a canned search response.

use melboard::board::render_table;
use melboard::flights::{parse_search_body, FlightDirection};

const ARRIVALS_BODY: &str = r#"{
    "results": [{
        "hits": [
            {
                "flightNumber": "QF437",
                "airlineCode": "QF",
                "airlineName": "Qantas",
                "airlineLogo": { "src": "https://cdn.example.com/logos/qf.svg" },
                "airportNames": ["Sydney"],
                "airportCodes": ["SYD"],
                "scheduledTimeStamp": 1700000000000,
                "estimatedTimeStamp": 1700000600000,
                "lastUpdatedTimeStamp": 1699999000000,
                "terminal": "T1",
                "gate": "23",
                "status": "On Time",
                "routeType": "DOMESTIC",
                "flightDirection": "ARRIVAL"
            },
            {
                "flightNumber": "3K123",
                "airlineCode": "3K",
                "airportNames": ["Singapore"],
                "airportCodes": ["SIN"],
                "scheduledTimeStamp": 1700003600000,
                "lastUpdatedTimeStamp": 1699999000000,
                "terminal": "T2",
                "gate": "9",
                "status": "Delayed",
                "routeType": "INTERNATIONAL",
                "flightDirection": "ARRIVAL"
            }
        ]
    }]
}"#;

#[test]
fn canned_arrivals_render_as_two_row_table() {
    let flights = parse_search_body(ARRIVALS_BODY).expect("canned body should parse");
    assert_eq!(flights.len(), 2);

    let table = render_table(FlightDirection::Arrival, &flights);

    let header: Vec<String> = table
        .header()
        .expect("table should have a header")
        .cell_iter()
        .map(|cell| cell.content())
        .collect();
    assert_eq!(
        header,
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

    let rows: Vec<Vec<String>> = table
        .row_iter()
        .map(|row| row.cell_iter().map(|cell| cell.content()).collect())
        .collect();
    assert_eq!(rows.len(), 2);

    // First hit carries an airline name and an estimated time.
    assert_eq!(rows[0][0], "Qantas");
    assert_eq!(rows[0][2], "Sydney");
    assert!(!rows[0][4].is_empty());

    // Second hit has neither; both cells render empty.
    assert_eq!(rows[1][0], "");
    assert_eq!(rows[1][1], "3K123");
    assert_eq!(rows[1][4], "");
    assert_eq!(rows[1][7], "Delayed");
}

#[test]
fn mapped_records_expose_optional_fields() {
    let flights = parse_search_body(ARRIVALS_BODY).unwrap();

    assert_eq!(flights[0].airline_name.as_deref(), Some("Qantas"));
    assert_eq!(
        flights[0].airline_logo_src.as_deref(),
        Some("https://cdn.example.com/logos/qf.svg")
    );
    assert_eq!(flights[1].airline_name, None);
    assert_eq!(flights[1].estimated_time, None);
    assert_eq!(
        flights[0].flight_direction,
        Some(FlightDirection::Arrival)
    );
}

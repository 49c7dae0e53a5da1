//! Flight record types and the wire schema of the search endpoint.

use super::error::FlightBoardError;
use chrono::{Local, LocalResult, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Direction of travel relative to the airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum FlightDirection {
    Departure,
    Arrival,
}

impl FlightDirection {
    /// Resolves a direction from its uppercase wire name.
    ///
    /// The lookup is case-sensitive; an unrecognized name yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DEPARTURE" => Some(FlightDirection::Departure),
            "ARRIVAL" => Some(FlightDirection::Arrival),
            _ => None,
        }
    }

    /// The uppercase name used in the endpoint's filter expression.
    pub fn name(&self) -> &'static str {
        match self {
            FlightDirection::Departure => "DEPARTURE",
            FlightDirection::Arrival => "ARRIVAL",
        }
    }
}

impl fmt::Display for FlightDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Domestic vs international classification of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Domestic,
    International,
}

impl RouteType {
    /// Resolves a route type from its uppercase wire name.
    ///
    /// The lookup is case-sensitive; an unrecognized name yields `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DOMESTIC" => Some(RouteType::Domestic),
            "INTERNATIONAL" => Some(RouteType::International),
            _ => None,
        }
    }
}

/// Top-level search response: one result set per submitted query.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub results: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResultSet {
    pub hits: Vec<FlightHit>,
}

/// One flight hit as returned by the flight index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FlightHit {
    pub flight_number: String,
    pub airline_code: String,
    /// Only present for some carriers.
    pub airline_name: Option<String>,
    pub airline_logo: Option<AirlineLogo>,
    pub airport_names: Vec<String>,
    pub airport_codes: Vec<String>,
    pub scheduled_time_stamp: i64,
    pub estimated_time_stamp: Option<i64>,
    pub last_updated_time_stamp: i64,
    pub terminal: String,
    pub gate: String,
    pub status: String,
    pub route_type: String,
    pub flight_direction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AirlineLogo {
    pub src: String,
}

/// A single scheduled flight, mapped from one search hit.
///
/// Constructed once at fetch time and immutable afterward. Timestamps are
/// epoch milliseconds as reported by the endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Flight {
    pub flight_number: String,
    pub airline_code: String,
    pub airline_name: Option<String>,
    pub airline_logo_src: Option<String>,
    pub airport_name: String,
    pub airport_code: String,
    pub scheduled_time: i64,
    pub estimated_time: Option<i64>,
    pub last_updated_time: i64,
    pub terminal: String,
    pub gate: String,
    pub status: String,
    pub route_type: Option<RouteType>,
    pub flight_direction: Option<FlightDirection>,
}

impl Flight {
    /// Maps one search hit to a `Flight`.
    ///
    /// `airportNames`/`airportCodes` always contribute their first element;
    /// an empty array is a schema error. Unrecognized direction and route-type
    /// names are dropped to `None` rather than failing the run.
    pub(crate) fn from_hit(hit: FlightHit) -> Result<Self, FlightBoardError> {
        let FlightHit {
            flight_number,
            airline_code,
            airline_name,
            airline_logo,
            airport_names,
            airport_codes,
            scheduled_time_stamp,
            estimated_time_stamp,
            last_updated_time_stamp,
            terminal,
            gate,
            status,
            route_type,
            flight_direction,
        } = hit;

        let airport_name =
            airport_names
                .into_iter()
                .next()
                .ok_or_else(|| FlightBoardError::Schema {
                    message: format!("hit {flight_number} has an empty airportNames array"),
                })?;
        let airport_code =
            airport_codes
                .into_iter()
                .next()
                .ok_or_else(|| FlightBoardError::Schema {
                    message: format!("hit {flight_number} has an empty airportCodes array"),
                })?;

        let resolved_route = RouteType::from_name(&route_type);
        if resolved_route.is_none() {
            debug!(value = %route_type, flight = %flight_number, "unrecognized routeType");
        }
        let resolved_direction = FlightDirection::from_name(&flight_direction);
        if resolved_direction.is_none() {
            debug!(value = %flight_direction, flight = %flight_number, "unrecognized flightDirection");
        }

        Ok(Flight {
            flight_number,
            airline_code,
            airline_name,
            airline_logo_src: airline_logo.map(|logo| logo.src),
            airport_name,
            airport_code,
            scheduled_time: scheduled_time_stamp,
            estimated_time: estimated_time_stamp,
            last_updated_time: last_updated_time_stamp,
            terminal,
            gate,
            status,
            route_type: resolved_route,
            flight_direction: resolved_direction,
        })
    }

    /// The scheduled time in local "HH:MM" display format.
    pub fn scheduled_display_time(&self) -> String {
        format_local_time(Some(self.scheduled_time))
    }

    /// The estimated time in local "HH:MM" display format, or an empty
    /// string when the endpoint reported none.
    pub fn estimated_display_time(&self) -> String {
        format_local_time(self.estimated_time)
    }
}

/// Formats an epoch-millisecond timestamp as a local-timezone "HH:MM" string.
///
/// An absent timestamp renders as an empty string.
pub(crate) fn format_local_time(millis: Option<i64>) -> String {
    let Some(millis) = millis else {
        return String::new();
    };
    match Local.timestamp_millis_opt(millis) {
        LocalResult::Single(dt) => dt.format("%H:%M").to_string(),
        _ => String::new(),
    }
}

//! Search parameters and scheduled-time window construction.

use super::types::FlightDirection;
use chrono::{DateTime, Duration, Local};

/// Default minutes to look back from now.
const DEFAULT_MINUTES_IN_PAST: i64 = 30;
/// Default minutes the window extends past its start.
const DEFAULT_MINUTES_IN_FUTURE: i64 = 180;
/// Default number of hits to request.
const DEFAULT_QUANTITY: u32 = 10;

/// Parameters for one flight search.
#[derive(Debug, Clone, Copy)]
pub struct SearchQuery {
    pub direction: FlightDirection,
    /// How far in the past, in minutes, the window starts.
    pub minutes_in_past: i64,
    /// How far the window extends from its start, in minutes.
    pub minutes_in_future: i64,
    /// Number of hits to request from the index.
    pub quantity: u32,
}

impl SearchQuery {
    /// Creates a query for `direction` with the default 30/180 minute window
    /// and hit count of 10.
    pub fn new(direction: FlightDirection) -> Self {
        Self {
            direction,
            minutes_in_past: DEFAULT_MINUTES_IN_PAST,
            minutes_in_future: DEFAULT_MINUTES_IN_FUTURE,
            quantity: DEFAULT_QUANTITY,
        }
    }

    /// Computes the scheduled-time window for this query anchored at `now`.
    ///
    /// The window spans `[now - minutes_in_past, now - minutes_in_past +
    /// minutes_in_future]`. Bounds are epoch milliseconds truncated to whole
    /// seconds, as the endpoint's filter expression expects.
    pub fn window_at(&self, now: DateTime<Local>) -> QueryWindow {
        let start = now - Duration::minutes(self.minutes_in_past);
        let end = start + Duration::minutes(self.minutes_in_future);
        QueryWindow {
            start_ms: start.timestamp() * 1000,
            end_ms: end.timestamp() * 1000,
        }
    }
}

/// An inclusive scheduled-time range in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_bounds_at_fixed_now() {
        let now = Local.timestamp_opt(1_700_000_000, 0).unwrap();
        let query = SearchQuery::new(FlightDirection::Arrival);
        let window = query.window_at(now);

        // Lower bound: now - 30 min. Upper bound: now + 150 min.
        assert_eq!(window.start_ms, (1_700_000_000 - 30 * 60) * 1000);
        assert_eq!(window.end_ms, (1_700_000_000 + 150 * 60) * 1000);
    }

    #[test]
    fn test_window_truncates_to_whole_seconds() {
        let now = Local
            .timestamp_opt(1_700_000_000, 0)
            .unwrap()
            .checked_add_signed(Duration::milliseconds(750))
            .unwrap();
        let query = SearchQuery::new(FlightDirection::Departure);
        let window = query.window_at(now);

        assert_eq!(window.start_ms % 1000, 0);
        assert_eq!(window.end_ms % 1000, 0);
    }

    #[test]
    fn test_defaults_match_the_board() {
        let query = SearchQuery::new(FlightDirection::Arrival);
        assert_eq!(query.minutes_in_past, 30);
        assert_eq!(query.minutes_in_future, 180);
        assert_eq!(query.quantity, 10);
    }
}

use crate::flights::FlightDirection;
use clap::{Parser, ValueEnum};
use std::fmt;

#[derive(Parser)]
#[command(name = "melboard")]
#[command(about = "Print scheduled arrivals or departures from the airport flight board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Direction of flights to show
    #[arg(long, default_value = "arrival")]
    pub direction: FlightDirection,

    /// How far in the past, in minutes, the scheduled-time window starts
    #[arg(long, default_value = "30")]
    pub minutes_in_past: i64,

    /// How far the window extends from its start, in minutes
    #[arg(long, default_value = "180")]
    pub minutes_in_future: i64,

    /// Number of flights to request
    #[arg(long, default_value = "10")]
    pub quantity: u32,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_single_shot_run() {
        let cli = Cli::parse_from(["melboard"]);
        assert_eq!(cli.direction, FlightDirection::Arrival);
        assert_eq!(cli.minutes_in_past, 30);
        assert_eq!(cli.minutes_in_future, 180);
        assert_eq!(cli.quantity, 10);
        assert_eq!(cli.format, OutputFormat::Plain);
    }

    #[test]
    fn test_direction_flag_parses_departure() {
        let cli = Cli::parse_from(["melboard", "--direction", "departure"]);
        assert_eq!(cli.direction, FlightDirection::Departure);
    }
}

use thiserror::Error;

use crate::line::LineId;
use crate::station::StationId;

/// Convenient result alias for the subway library.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a candidate section does not attach to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyViolation {
    /// Neither station is already on the line.
    Disconnected,
    /// Both stations are already on the line.
    BothPresent,
    /// The section starts and ends at the same station.
    SelfLoop,
}

impl std::fmt::Display for TopologyViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            TopologyViolation::Disconnected => "neither station is on the line",
            TopologyViolation::BothPresent => "both stations are already on the line",
            TopologyViolation::SelfLoop => "up and down stations are the same",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when a candidate section shares zero or two stations with the line.
    #[error("invalid section {up} -> {down}: {reason}")]
    InvalidTopology {
        up: String,
        down: String,
        reason: TopologyViolation,
    },

    /// Raised when a section splitting an existing one is not strictly shorter.
    #[error("section distance {requested} must be shorter than the existing section ({available})")]
    DistanceTooLong { requested: u32, available: u32 },

    /// Raised when removing a station would leave a line without sections.
    #[error("cannot remove a station from a line with {sections} section(s)")]
    ChainTooShort { sections: usize },

    /// Raised when a station is absent from the line or graph being queried.
    #[error("station {station} is not present")]
    UnknownStation { station: String },

    /// Raised when a path query starts and ends at the same station.
    #[error("source and target are the same station: {station}")]
    SameEndpoints { station: String },

    /// Raised when no path connects two stations.
    #[error("no path found between {from} and {to}")]
    NoPath { from: String, to: String },

    /// Raised when a distance is not strictly positive or does not fit.
    #[error("invalid distance {value}; distances must be between 1 and {}", u32::MAX)]
    InvalidDistance { value: i64 },

    /// Raised when a station name could not be resolved.
    #[error("unknown station: {name}{}", format_suggestions(.suggestions))]
    UnknownStationName {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when no registered station carries the given identifier.
    #[error("unknown station id {id}")]
    UnknownStationId { id: StationId },

    /// Raised when a line could not be resolved.
    #[error("unknown line: {line}")]
    UnknownLine { line: String },

    /// Raised when registering a station whose identifier is already taken.
    #[error("station id {id} is already registered")]
    DuplicateStation { id: StationId },

    /// Raised when creating a line whose name is already taken.
    #[error("line {name} already exists")]
    DuplicateLine { name: String },
}

impl Error {
    pub(crate) fn unknown_line(line: LineId) -> Self {
        Error::UnknownLine {
            line: line.to_string(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

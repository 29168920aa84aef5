use std::fmt;

use serde::Serialize;

use crate::distance::Distance;
use crate::error::{Error, Result, TopologyViolation};
use crate::line::LineId;
use crate::station::Station;

/// Directed, distance-weighted connection between two stations of one line.
///
/// Two sections are equal when line, both stations and distance all match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    line: LineId,
    up_station: Station,
    down_station: Station,
    distance: Distance,
}

impl Section {
    /// Build a section, rejecting one that starts and ends at the same station.
    pub fn new(
        line: LineId,
        up_station: Station,
        down_station: Station,
        distance: Distance,
    ) -> Result<Self> {
        if up_station == down_station {
            return Err(Error::InvalidTopology {
                up: up_station.name,
                down: down_station.name,
                reason: TopologyViolation::SelfLoop,
            });
        }

        Ok(Self {
            line,
            up_station,
            down_station,
            distance,
        })
    }

    pub fn line(&self) -> LineId {
        self.line
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Whether `station` is either end of this section.
    pub fn touches(&self, station: &Station) -> bool {
        self.up_station == *station || self.down_station == *station
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.up_station, self.down_station, self.distance
        )
    }
}

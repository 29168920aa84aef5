//! In-memory registry of stations and lines.
//!
//! The network resolves identifiers and names to the values the section chain
//! and path finder operate on, and hands out section snapshots for path
//! queries.

use std::collections::BTreeMap;

use tracing::info;

use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::line::{Line, LineId};
use crate::section::Section;
use crate::sections::Placement;
use crate::station::{Station, StationId};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: BTreeMap<StationId, Station>,
    lines: BTreeMap<LineId, Line>,
    next_station_id: StationId,
    next_line_id: LineId,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station under the next free identifier.
    pub fn add_station(&mut self, name: impl Into<String>) -> Station {
        let id = self.next_station_id.max(self.max_station_id()) + 1;
        let station = Station::new(id, name);
        self.next_station_id = id;
        self.stations.insert(id, station.clone());
        station
    }

    /// Register a station that already carries an identifier.
    pub fn insert_station(&mut self, station: Station) -> Result<()> {
        if self.stations.contains_key(&station.id) {
            return Err(Error::DuplicateStation { id: station.id });
        }
        self.stations.insert(station.id, station);
        Ok(())
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stations.values().find(|station| station.name == name)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Resolve a station from an exact name, falling back to a numeric
    /// identifier when no station carries that name.
    pub fn resolve_station(&self, key: &str) -> Result<&Station> {
        self.station_by_name(key)
            .or_else(|| key.parse::<StationId>().ok().and_then(|id| self.station(id)))
            .ok_or_else(|| Error::UnknownStationName {
                name: key.to_string(),
                suggestions: self.fuzzy_station_matches(key, 3),
            })
    }

    /// Station names closest to `name`, best match first.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .stations
            .values()
            .map(|station| {
                (
                    strsim::jaro_winkler(name, &station.name),
                    station.name.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Create a line with its first section and return its identifier.
    pub fn create_line(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<LineId> {
        let name = name.into();
        if self.line_by_name(&name).is_some() {
            return Err(Error::DuplicateLine { name });
        }

        let up = self.known_station(up_station)?;
        let down = self.known_station(down_station)?;
        let id = self.next_line_id + 1;
        let line = Line::with_section(id, name, color, up, down, distance)?;

        info!(line = %line.name, id, "created line");
        self.next_line_id = id;
        self.lines.insert(id, line);
        Ok(id)
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    pub fn line_by_name(&self, name: &str) -> Option<&Line> {
        self.lines.values().find(|line| line.name == name)
    }

    /// Resolve a line from an exact name, falling back to a numeric identifier.
    pub fn resolve_line(&self, key: &str) -> Result<LineId> {
        self.line_by_name(key)
            .or_else(|| key.parse::<LineId>().ok().and_then(|id| self.line(id)))
            .map(|line| line.id)
            .ok_or_else(|| Error::UnknownLine {
                line: key.to_string(),
            })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    pub fn delete_line(&mut self, id: LineId) -> Result<Line> {
        self.lines.remove(&id).ok_or_else(|| Error::unknown_line(id))
    }

    pub fn add_section(
        &mut self,
        line: LineId,
        up_station: StationId,
        down_station: StationId,
        distance: Distance,
    ) -> Result<Placement> {
        let up = self.known_station(up_station)?;
        let down = self.known_station(down_station)?;
        let line = self
            .lines
            .get_mut(&line)
            .ok_or_else(|| Error::unknown_line(line))?;

        let placement = line.add_section(up, down, distance)?;
        info!(line = %line.name, placement = ?placement, "added section");
        Ok(placement)
    }

    pub fn remove_station(&mut self, line: LineId, station: StationId) -> Result<()> {
        let station = self.known_station(station)?;
        let line = self
            .lines
            .get_mut(&line)
            .ok_or_else(|| Error::unknown_line(line))?;

        line.remove_station(&station)?;
        info!(line = %line.name, station = %station, "removed station");
        Ok(())
    }

    /// Copy of every line's sections, for building a path finder.
    pub fn sections(&self) -> Vec<Section> {
        self.lines
            .values()
            .flat_map(|line| line.sections().iter().cloned())
            .collect()
    }

    fn known_station(&self, id: StationId) -> Result<Station> {
        self.station(id)
            .cloned()
            .ok_or(Error::UnknownStationId { id })
    }

    fn max_station_id(&self) -> StationId {
        self.stations.keys().next_back().copied().unwrap_or(0)
    }
}

//! JSON network description consumed and written back by the CLI.
//!
//! ```json
//! {
//!   "stations": ["교대역", "강남역"],
//!   "lines": [
//!     { "name": "2호선", "color": "green",
//!       "sections": [ { "up": "교대역", "down": "강남역", "distance": 10 } ] }
//!   ]
//! }
//! ```
//!
//! Stations receive identifiers in file order. Sections of each line are
//! replayed in order through the library, so an invalid chain is rejected at
//! load time.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use subway_lib::{Distance, Network, StationId};

/// Environment variable consulted when `--network` is not given.
pub const NETWORK_ENV: &str = "SUBWAY_NETWORK";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkFile {
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default)]
    pub lines: Vec<LineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineEntry {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub up: String,
    pub down: String,
    pub distance: Distance,
}

/// Pick the network file from the flag, then from `SUBWAY_NETWORK`.
pub fn resolve_network_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(env_path) = std::env::var_os(NETWORK_ENV) {
        return Ok(PathBuf::from(env_path));
    }
    bail!("no network file given; pass --network or set {NETWORK_ENV}")
}

pub fn load_network_file(path: &Path) -> Result<NetworkFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read network file {}", path.display()))?;
    let file: NetworkFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse network file {}", path.display()))?;
    debug!(
        path = %path.display(),
        stations = file.stations.len(),
        lines = file.lines.len(),
        "loaded network file"
    );
    Ok(file)
}

pub fn save_network_file(path: &Path, file: &NetworkFile) -> Result<()> {
    let mut raw = serde_json::to_string_pretty(file).context("failed to encode network file")?;
    raw.push('\n');
    fs::write(path, raw)
        .with_context(|| format!("failed to write network file {}", path.display()))?;
    info!(path = %path.display(), "saved network file");
    Ok(())
}

/// Load and build the network in one step.
pub fn load_network(path: &Path) -> Result<Network> {
    load_network_file(path)?
        .to_network()
        .with_context(|| format!("invalid network in {}", path.display()))
}

impl NetworkFile {
    /// Replay the description into a validated in-memory network.
    pub fn to_network(&self) -> Result<Network> {
        let mut network = Network::new();
        let mut seen = HashSet::new();
        for name in &self.stations {
            if !seen.insert(name.as_str()) {
                bail!("station {name} is listed more than once");
            }
            network.add_station(name.as_str());
        }

        for line in &self.lines {
            let mut sections = line.sections.iter();
            let first = sections
                .next()
                .ok_or_else(|| anyhow!("line {} has no sections", line.name))?;
            let up = station_id(&mut network, &first.up);
            let down = station_id(&mut network, &first.down);
            let line_id = network
                .create_line(line.name.as_str(), line.color.as_str(), up, down, first.distance)
                .with_context(|| format!("failed to create line {}", line.name))?;

            for section in sections {
                let up = station_id(&mut network, &section.up);
                let down = station_id(&mut network, &section.down);
                network
                    .add_section(line_id, up, down, section.distance)
                    .with_context(|| {
                        format!(
                            "failed to add section {} -> {} to line {}",
                            section.up, section.down, line.name
                        )
                    })?;
            }
        }

        Ok(network)
    }

    /// Describe a network; sections are written in travel order.
    pub fn from_network(network: &Network) -> Self {
        let stations = network.stations().map(|s| s.name.clone()).collect();
        let lines = network
            .lines()
            .map(|line| LineEntry {
                name: line.name.clone(),
                color: line.color.clone(),
                sections: line
                    .sections()
                    .iter()
                    .map(|section| SectionEntry {
                        up: section.up_station().name.clone(),
                        down: section.down_station().name.clone(),
                        distance: section.distance(),
                    })
                    .collect(),
            })
            .collect();

        Self { stations, lines }
    }
}

/// Look a station up by name, registering it on first use.
pub fn station_id(network: &mut Network, name: &str) -> StationId {
    match network.station_by_name(name) {
        Some(station) => station.id,
        None => {
            debug!(station = name, "registering station");
            network.add_station(name).id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NetworkFile {
        serde_json::from_str(
            r#"{
                "stations": ["논현역", "양재역"],
                "lines": [
                    { "name": "신분당선", "color": "red",
                      "sections": [
                        { "up": "논현역", "down": "양재역", "distance": 10 },
                        { "up": "강남역", "down": "양재역", "distance": 4 }
                      ] }
                ]
            }"#,
        )
        .expect("sample parses")
    }

    #[test]
    fn sections_replay_through_the_chain() {
        let network = sample().to_network().expect("valid network");
        let line = network.line_by_name("신분당선").expect("line exists");

        let names: Vec<_> = line.stations().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["논현역", "강남역", "양재역"]);
        assert_eq!(network.station_by_name("강남역").map(|s| s.id), Some(3));
    }

    #[test]
    fn written_file_loads_back_to_the_same_lines() {
        let network = sample().to_network().expect("valid network");
        let written = NetworkFile::from_network(&network);

        assert_eq!(written.lines[0].sections.len(), 2);
        assert_eq!(written.lines[0].sections[0].up, "논현역");
        assert_eq!(written.lines[0].sections[0].distance.value(), 6);

        let reloaded = written.to_network().expect("valid network");
        assert_eq!(NetworkFile::from_network(&reloaded), written);
    }

    #[test]
    fn invalid_distance_fails_to_parse() {
        let result: std::result::Result<NetworkFile, _> = serde_json::from_str(
            r#"{ "lines": [ { "name": "x", "sections": [
                { "up": "a", "down": "b", "distance": 0 } ] } ] }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn empty_line_is_rejected() {
        let file = NetworkFile {
            stations: Vec::new(),
            lines: vec![LineEntry {
                name: "빈노선".to_string(),
                color: "grey".to_string(),
                sections: Vec::new(),
            }],
        };

        let error = file.to_network().expect_err("no sections");
        assert!(error.to_string().contains("has no sections"));
    }
}

use serde::Serialize;

use crate::error::Result;
use crate::network::Network;
use crate::path::PathFinder;
use crate::station::Station;

/// High-level path request; endpoints are station ids or names.
#[derive(Debug, Clone)]
pub struct PathRequest {
    pub source: String,
    pub target: String,
}

impl PathRequest {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Planned path returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathPlan {
    pub source: Station,
    pub target: Station,
    pub stations: Vec<Station>,
    pub distance: u64,
}

impl PathPlan {
    /// Number of sections travelled.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Resolve both endpoints and compute the shortest path across every line.
///
/// The path finder is rebuilt from a fresh section snapshot on each call.
pub fn plan_path(network: &Network, request: &PathRequest) -> Result<PathPlan> {
    let source = network.resolve_station(&request.source)?.clone();
    let target = network.resolve_station(&request.target)?.clone();

    let sections = network.sections();
    let finder = PathFinder::new(&sections);
    let path = finder.find_path(&source, &target)?;

    Ok(PathPlan {
        source,
        target,
        stations: path.stations,
        distance: path.distance,
    })
}

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::distance::Distance;
use crate::line::LineId;
use crate::section::Section;
use crate::station::{Station, StationId};

/// Edge within the path-finding graph.
///
/// Every section contributes one edge in each direction, so parallel sections
/// from different lines stay distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: StationId,
    pub line: LineId,
    pub distance: Distance,
}

/// Undirected weighted multigraph built from a section snapshot.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    stations: Arc<HashMap<StationId, Station>>,
    adjacency: Arc<HashMap<StationId, Vec<Edge>>>,
}

impl Graph {
    /// Return the neighbours for a given station identifier, in snapshot order.
    pub fn neighbours(&self, station: StationId) -> &[Edge] {
        self.adjacency
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, station: &Station) -> bool {
        self.stations.contains_key(&station.id)
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected connections (one per section).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

/// Build the path-finding graph from sections collected across lines.
pub fn build_graph<'a>(sections: impl IntoIterator<Item = &'a Section>) -> Graph {
    let mut stations: HashMap<StationId, Station> = HashMap::new();
    let mut adjacency: HashMap<StationId, Vec<Edge>> = HashMap::new();

    for section in sections {
        let up = section.up_station();
        let down = section.down_station();
        stations.entry(up.id).or_insert_with(|| up.clone());
        stations.entry(down.id).or_insert_with(|| down.clone());

        adjacency.entry(up.id).or_default().push(Edge {
            target: down.id,
            line: section.line(),
            distance: section.distance(),
        });
        adjacency.entry(down.id).or_default().push(Edge {
            target: up.id,
            line: section.line(),
            distance: section.distance(),
        });
    }

    let graph = Graph {
        stations: Arc::new(stations),
        adjacency: Arc::new(adjacency),
    };
    debug!(
        stations = graph.station_count(),
        edges = graph.edge_count(),
        "built path graph"
    );
    graph
}

//! Shortest paths over the union of every line's sections.
//!
//! A [`PathFinder`] is built from a section snapshot and answers queries with
//! one Dijkstra run each; nothing is cached between queries. Among paths of
//! equal total distance the search keeps the first one it settles: the queue
//! pops lower costs first and breaks cost ties by the smaller station id, and
//! a predecessor is only replaced by a strictly shorter route.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph};
use crate::section::Section;
use crate::station::{Station, StationId};

/// Minimal path between two stations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub stations: Vec<Station>,
    pub distance: u64,
}

/// Stateless shortest-path queries over a fixed section snapshot.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    graph: Graph,
}

impl PathFinder {
    pub fn new<'a>(sections: impl IntoIterator<Item = &'a Section>) -> Self {
        Self {
            graph: build_graph(sections),
        }
    }

    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// Stations along the minimal path, both endpoints included.
    pub fn shortest_path(&self, source: &Station, target: &Station) -> Result<Vec<Station>> {
        self.find_path(source, target).map(|path| path.stations)
    }

    /// Total distance of the minimal path.
    pub fn path_distance(&self, source: &Station, target: &Station) -> Result<u64> {
        self.find_path(source, target).map(|path| path.distance)
    }

    /// Stations and total distance of the minimal path from a single search.
    pub fn find_path(&self, source: &Station, target: &Station) -> Result<Path> {
        if source == target {
            return Err(Error::SameEndpoints {
                station: source.name.clone(),
            });
        }
        for station in [source, target] {
            if !self.graph.contains(station) {
                return Err(Error::UnknownStation {
                    station: station.name.clone(),
                });
            }
        }

        let Some((route, distance)) = self.dijkstra(source.id, target.id) else {
            return Err(Error::NoPath {
                from: source.name.clone(),
                to: target.name.clone(),
            });
        };

        let stations: Vec<Station> = route
            .into_iter()
            .filter_map(|id| self.graph.station(id).cloned())
            .collect();
        debug!(
            source = %source,
            target = %target,
            hops = stations.len().saturating_sub(1),
            distance,
            "found shortest path"
        );

        Ok(Path { stations, distance })
    }

    fn dijkstra(&self, start: StationId, goal: StationId) -> Option<(Vec<StationId>, u64)> {
        let mut distances: HashMap<StationId, u64> = HashMap::new();
        let mut parents: HashMap<StationId, Option<StationId>> = HashMap::new();
        let mut queue = BinaryHeap::new();

        distances.insert(start, 0);
        parents.insert(start, None);
        queue.push(QueueEntry {
            node: start,
            cost: 0,
        });

        while let Some(entry) = queue.pop() {
            match distances.get(&entry.node) {
                Some(distance) if *distance < entry.cost => continue,
                Some(_) => {}
                None => continue,
            }

            if entry.node == goal {
                return Some((reconstruct_path(&parents, start, goal), entry.cost));
            }

            for edge in self.graph.neighbours(entry.node) {
                let next_cost = entry.cost + u64::from(edge.distance.value());
                if next_cost < distances.get(&edge.target).copied().unwrap_or(u64::MAX) {
                    distances.insert(edge.target, next_cost);
                    parents.insert(edge.target, Some(entry.node));
                    queue.push(QueueEntry {
                        node: edge.target,
                        cost: next_cost,
                    });
                }
            }
        }

        None
    }
}

fn reconstruct_path(
    parents: &HashMap<StationId, Option<StationId>>,
    start: StationId,
    goal: StationId,
) -> Vec<StationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(&node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: StationId,
    cost: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Subway network library entry points.
//!
//! This crate keeps each line's sections as a single ordered chain, builds a
//! weighted graph from the sections of every line, and answers shortest-path
//! queries over it. Higher-level consumers (the CLI) should only depend on the
//! items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod distance;
pub mod error;
pub mod graph;
pub mod line;
pub mod network;
pub mod path;
pub mod routing;
pub mod section;
pub mod sections;
pub mod station;

pub use distance::Distance;
pub use error::{Error, Result, TopologyViolation};
pub use graph::{build_graph, Edge, Graph};
pub use line::{Line, LineId};
pub use network::Network;
pub use path::{Path, PathFinder};
pub use routing::{plan_path, PathPlan, PathRequest};
pub use section::Section;
pub use sections::{Placement, Sections};
pub use station::{Station, StationId};

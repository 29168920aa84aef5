//! Path command handler for computing the shortest path between stations.

use std::path::Path;

use anyhow::{Context, Result};

use subway_lib::{plan_path, PathRequest};

use crate::network_file::load_network;
use crate::output::{render_path, OutputFormat};

/// Handle the path subcommand.
pub fn handle_path_command(
    network_path: &Path,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let network = load_network(network_path)?;
    let request = PathRequest::new(from, to);
    let plan = plan_path(&network, &request)
        .with_context(|| format!("failed to find a path from {from} to {to}"))?;

    print!("{}", render_path(&plan, format)?);
    Ok(())
}

//! Section command handlers; both rewrite the network file on success.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use subway_lib::{Distance, Network, StationId};

use crate::network_file::{load_network, save_network_file, station_id, NetworkFile};

/// Handle the add-section subcommand.
///
/// Stations not yet in the network are registered under the given name.
pub fn handle_add_section(
    network_path: &Path,
    line: &str,
    up: &str,
    down: &str,
    distance: i64,
) -> Result<()> {
    let mut network = load_network(network_path)?;
    let line_id = network.resolve_line(line)?;
    let distance = Distance::new(distance)?;
    let up_id = known_or_new(&mut network, up);
    let down_id = known_or_new(&mut network, down);

    let placement = network
        .add_section(line_id, up_id, down_id, distance)
        .with_context(|| format!("failed to add section {up} -> {down} to line {line}"))?;
    info!(line, up, down, placement = ?placement, "section added");

    save_network_file(network_path, &NetworkFile::from_network(&network))?;
    println!("Added section {up} -> {down} ({distance}) to {line}");
    Ok(())
}

/// Handle the remove-station subcommand.
pub fn handle_remove_station(network_path: &Path, line: &str, station: &str) -> Result<()> {
    let mut network = load_network(network_path)?;
    let line_id = network.resolve_line(line)?;
    let target = network.resolve_station(station)?.id;

    network
        .remove_station(line_id, target)
        .with_context(|| format!("failed to remove {station} from line {line}"))?;

    save_network_file(network_path, &NetworkFile::from_network(&network))?;
    println!("Removed {station} from {line}");
    Ok(())
}

fn known_or_new(network: &mut Network, key: &str) -> StationId {
    match network.resolve_station(key) {
        Ok(station) => station.id,
        Err(_) => station_id(network, key),
    }
}

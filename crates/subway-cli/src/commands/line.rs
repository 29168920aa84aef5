//! Line command handler for listing a line's stations and sections.

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::network_file::load_network;
use crate::output::{render_line, OutputFormat};

/// Handle the line subcommand.
pub fn handle_line_command(network_path: &Path, name: &str, format: OutputFormat) -> Result<()> {
    let network = load_network(network_path)?;
    let id = network.resolve_line(name)?;
    let line = network
        .line(id)
        .ok_or_else(|| anyhow!("line {name} disappeared while loading"))?;

    print!("{}", render_line(line, format)?);
    Ok(())
}

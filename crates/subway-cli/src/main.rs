use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use subway_cli::commands::{line, path, sections};
use subway_cli::network_file::resolve_network_path;
use subway_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Subway network section and path utilities")]
struct Cli {
    /// Network description file (defaults to $SUBWAY_NETWORK).
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest path between two stations across all lines.
    Path {
        /// Starting station name or id.
        #[arg(long = "from")]
        from: String,
        /// Destination station name or id.
        #[arg(long = "to")]
        to: String,
    },
    /// Show a line's stations and sections in travel order.
    Line {
        /// Line name or id.
        #[arg(long)]
        name: String,
    },
    /// Add a section to a line and save the network file.
    AddSection {
        /// Line name or id.
        #[arg(long)]
        line: String,
        /// Up station name or id.
        #[arg(long)]
        up: String,
        /// Down station name or id.
        #[arg(long)]
        down: String,
        /// Section distance.
        #[arg(long, allow_negative_numbers = true)]
        distance: i64,
    },
    /// Remove a station from a line and save the network file.
    RemoveStation {
        /// Line name or id.
        #[arg(long)]
        line: String,
        /// Station name or id.
        #[arg(long)]
        station: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = resolve_network_path(cli.network.as_deref())?;

    match cli.command {
        Command::Path { from, to } => path::handle_path_command(&network, &from, &to, cli.format),
        Command::Line { name } => line::handle_line_command(&network, &name, cli.format),
        Command::AddSection {
            line,
            up,
            down,
            distance,
        } => sections::handle_add_section(&network, &line, &up, &down, distance),
        Command::RemoveStation { line, station } => {
            sections::handle_remove_station(&network, &line, &station)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

// Module exports for CLI subcommands
//
// Each module handles one subcommand; main.rs only parses arguments and
// dispatches here.

pub mod line;
pub mod path;
pub mod sections;

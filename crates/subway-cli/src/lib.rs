//! Subway CLI library.
//!
//! Command handlers, the JSON network file format and output rendering for
//! the `subway-cli` binary.

pub mod commands;
pub mod network_file;
pub mod output;

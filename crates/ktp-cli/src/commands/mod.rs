//! Subcommands of the `ktp` binary.

pub mod batch;
pub mod config;
pub mod process;

//! # dbot-cli
//!
//! CLI foundation: argument parsing and config loading for the `dbot` binary.

pub mod cli;

pub use cli::{AppConfig, Cli, Commands};

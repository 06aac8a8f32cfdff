//! Lectern CLI - Command-line interface for the Lectern platform core
//!
//! This crate provides the CLI application that ties together the catalog
//! index and the analytics dispatcher.

pub mod config;

pub use config::{Command, Config, TrackCommand};

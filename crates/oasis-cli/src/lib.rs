//! oasis-cli
//!
//! Host for the assessment core: configuration, storage wiring and the
//! `oasis` command line.

pub mod commands;
pub mod config;

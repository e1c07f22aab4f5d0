//! # drivehub-cli
//!
//! Command-line front end for the drive screen: print the reconstructed
//! tree, resolve preview locators, upload local files, and inspect the
//! configuration.

pub mod commands;
pub mod context;
pub mod output;

pub use commands::Cli;

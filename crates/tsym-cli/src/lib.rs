//! Command-line front end for the tsym declaration index.
//!
//! Loads parsed-file snapshots, runs the two-pass indexer and renders the
//! result as JSON or text.

pub mod args;
pub mod driver;
pub mod inputs;
pub mod reporter;
pub mod tracing_config;

//! Common types and utilities for the tsym workspace indexer.
//!
//! This crate provides the leaf types every other tsym crate builds on:
//! - Position/Range/Location types for line/column source locations
//! - `LineMap` and the `PositionResolver` trait for offset conversion
//! - Path and `file://` URI normalization helpers

// Position/Range types for line/column source locations
pub mod position;
pub use position::{LineMap, Location, Position, PositionResolver, Range};

// Path and URI helpers
pub mod uri;
pub use uri::{is_dependency_path, normalize_path};

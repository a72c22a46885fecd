//! Common utilities for the selpath crates.
//!
//! This crate provides shared infrastructure used by the tree and selector crates:
//! - **Warning System** - deduplicated, coloured terminal diagnostics

pub mod warning;

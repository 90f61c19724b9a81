//! Common test utilities for romex CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus a runner for the
//!   built binary
//! - Fixtures: ROM images with chosen checksums and byte orders, and a fake
//!   extractor that records its arguments

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

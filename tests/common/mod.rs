//! Common test utilities for jwatch CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project, home and compiler-log directories
//! - Fixtures: a fake compiler script that records its invocations

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

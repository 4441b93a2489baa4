//! File system access

mod sources;

pub use sources::list_sources;

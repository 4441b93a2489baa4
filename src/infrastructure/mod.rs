//! Infrastructure Layer
//!
//! Concrete implementations of the application ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Source discovery on the local disk
//! - `compiler` - Subprocess compiler (`javac` by default)
//! - `watcher` - `notify`-backed change source

pub mod compiler;
pub mod fs;
pub mod watcher;

// Re-export for convenience
pub use compiler::ProcessCompiler;
pub use fs::list_sources;
pub use watcher::DirectoryWatcher;

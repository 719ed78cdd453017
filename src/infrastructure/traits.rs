//! I/O boundary traits for testability
//!
//! These traits abstract the filesystem check and the edit engine, allowing
//! the dispatcher to be tested with mock implementations.

use std::path::{Path, PathBuf};

use crate::domain::EditOperation;
use crate::infrastructure::error::EngineError;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Check if path is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Image edit engine.
///
/// Receives an already validated operation and an existing input file.
/// Owns decoding, pixel work and encoding; returns the path it wrote.
pub trait EditEngine: Send + Sync {
    fn apply(&self, operation: &EditOperation, path: &Path) -> Result<PathBuf, EngineError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

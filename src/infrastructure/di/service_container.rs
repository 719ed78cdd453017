//! Service container for dependency injection
//!
//! Wires up the dispatcher with its dependencies.

use std::sync::Arc;

use crate::application::Dispatcher;
use crate::config::Settings;
use crate::infrastructure::engine::ImageEngine;
use crate::infrastructure::traits::{EditEngine, FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Edit engine
    pub engine: Arc<dyn EditEngine>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: &Settings) -> Self {
        let engine = Arc::new(ImageEngine::from_settings(settings));
        Self::with_deps(Arc::new(RealFileSystem), engine)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(fs: Arc<dyn FileSystem>, engine: Arc<dyn EditEngine>) -> Self {
        Self { fs, engine }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.fs.clone(), self.engine.clone())
    }
}

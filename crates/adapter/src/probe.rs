//! Existence queries against the running simulation.

use fxhash::FxHashSet;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Answers whether a named object (dictionary, field, ...) exists in the simulation.
pub trait SimulationProbe: Debug + Send + Sync {
    fn exists(&self, name: &str) -> bool;
}

/// Shared handle to the simulation a module and its handlers are bound to.
pub type SimulationHandle = Arc<dyn SimulationProbe>;

/// In-memory set of object names registered with the simulation.
#[derive(Debug, Default, Clone)]
pub struct ObjectRegistry {
    objects: FxHashSet<String>,
}

impl ObjectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object name and returns the registry.
    #[must_use]
    pub fn with_object(mut self, name: impl Into<String>) -> Self {
        self.register(name);
        self
    }

    /// Adds an object name. Returns `false` if it was already present.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        self.objects.insert(name.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Wraps the registry into a [`SimulationHandle`].
    #[must_use]
    pub fn into_handle(self) -> SimulationHandle {
        Arc::new(self)
    }
}

impl<S: Into<String>> FromIterator<S> for ObjectRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { objects: iter.into_iter().map(Into::into).collect() }
    }
}

impl SimulationProbe for ObjectRegistry {
    fn exists(&self, name: &str) -> bool {
        self.objects.contains(name)
    }
}

/// Sub-directories of a case that hold dictionaries, in lookup order.
const DICTIONARY_DIRS: [&str; 2] = ["constant", "system"];

/// Probes a case directory on disk: a dictionary exists if it is a regular file in
/// `constant/` or `system/`.
#[derive(Debug, Clone)]
pub struct CaseDirectory {
    root: PathBuf,
}

impl CaseDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Wraps the case into a [`SimulationHandle`].
    #[must_use]
    pub fn into_handle(self) -> SimulationHandle {
        Arc::new(self)
    }
}

impl SimulationProbe for CaseDirectory {
    fn exists(&self, name: &str) -> bool {
        // Names are plain object names; anything path-like cannot be a dictionary.
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return false;
        }
        DICTIONARY_DIRS.iter().any(|dir| self.root.join(dir).join(name).is_file())
    }
}

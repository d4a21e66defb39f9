//! Generated file units and the sinks that persist them.

use crate::error::CodegenError;
use std::fs;
use std::path::{Path, PathBuf};

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputUnit {
    /// Directory relative to the output root.
    pub directory: PathBuf,
    /// File name including extension.
    pub file_name: String,
    /// Complete file text.
    pub content: String,
}

impl OutputUnit {
    /// Returns the path of the file relative to the output root.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Destination for generated files.
pub trait OutputSink {
    /// Persists a single unit.
    ///
    /// # Errors
    /// Returns `CodegenError::Write` if the unit could not be stored.
    fn write_unit(&mut self, unit: &OutputUnit) -> Result<(), CodegenError>;
}

/// Sink collecting units in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    units: Vec<OutputUnit>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the units written so far.
    #[must_use]
    pub fn units(&self) -> &[OutputUnit] {
        &self.units
    }

    /// Looks up a unit by relative path.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&OutputUnit> {
        self.units.iter().find(|u| u.path() == path)
    }
}

impl OutputSink for MemorySink {
    fn write_unit(&mut self, unit: &OutputUnit) -> Result<(), CodegenError> {
        // A later unit with the same path replaces the earlier one.
        self.units.retain(|u| u.path() != unit.path());
        self.units.push(unit.clone());
        Ok(())
    }
}

/// Sink writing units below a root directory, overwriting existing files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputSink for DirectorySink {
    fn write_unit(&mut self, unit: &OutputUnit) -> Result<(), CodegenError> {
        let directory = self.root.join(&unit.directory);
        fs::create_dir_all(&directory).map_err(|source| CodegenError::Write {
            path: directory.clone(),
            source,
        })?;

        let path = directory.join(&unit.file_name);
        fs::write(&path, &unit.content).map_err(|source| CodegenError::Write { path, source })
    }
}

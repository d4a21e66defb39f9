//! Generator configuration.

use serde::Deserialize;

/// Import path of the Go FlatBuffers runtime.
pub const DEFAULT_RUNTIME_IMPORT: &str = "github.com/google/flatbuffers/go";

/// Settings for a generation run.
///
/// Every field has a default, so a partial JSON/TOML document is enough to
/// override a single setting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Key of this backend in namespace base-path override maps.
    pub target: String,
    /// Extension of generated files, including the dot.
    pub file_extension: String,
    /// Import path of the runtime package.
    pub runtime_import: String,
    /// Output path prefix inserted after a base-path override.
    pub output_prefix: String,
    /// Package name for definitions in the root namespace.
    pub default_package: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: "Go".to_string(),
            file_extension: ".go".to_string(),
            runtime_import: DEFAULT_RUNTIME_IMPORT.to_string(),
            output_prefix: String::new(),
            default_package: "main".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates the default Go configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output path prefix.
    #[must_use]
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Sets the runtime import path.
    #[must_use]
    pub fn with_runtime_import(mut self, path: impl Into<String>) -> Self {
        self.runtime_import = path.into();
        self
    }

    /// Sets the package used for the root namespace.
    #[must_use]
    pub fn with_default_package(mut self, package: impl Into<String>) -> Self {
        self.default_package = package.into();
        self
    }
}

//! Generation driver.
//!
//! Generates every enum, then every struct and table, each into its own
//! file. All units are produced in memory before anything is written, so a
//! generation error never leaves partial output behind.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::go::enums::generate_enum;
use crate::go::file::assemble_file;
use crate::go::namespace::{EmitContext, check_consistent_overrides};
use crate::go::structs::generate_struct;
use crate::output::{OutputSink, OutputUnit};
use flatgo_schema::Schema;

/// Go code generator for a schema.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self::with_config(schema, GeneratorConfig::default())
    }

    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub fn with_config(schema: &'a Schema, config: GeneratorConfig) -> Self {
        Self { schema, config }
    }

    /// Generates one unit per enum, struct and table.
    ///
    /// Definitions marked as generated elsewhere produce no unit.
    ///
    /// # Errors
    /// Returns `CodegenError::ConflictingBaseOverride` before any code is
    /// generated, or the first error raised by a definition.
    pub fn generate(&self) -> Result<Vec<OutputUnit>, CodegenError> {
        tracing::info!(
            "Generating Go code for {} enums and {} structs",
            self.schema.enums.len(),
            self.schema.structs.len()
        );
        check_consistent_overrides(&self.schema.enums, &self.config.target)?;

        let mut units = Vec::new();

        for enum_def in &self.schema.enums {
            let ctx = EmitContext::new(self.schema, &self.config, &enum_def.namespace);
            let body = generate_enum(enum_def);
            match assemble_file(&ctx, &enum_def.name, &body, false) {
                Some(unit) => {
                    tracing::debug!("Generated enum {}", enum_def.name);
                    units.push(unit);
                }
                None => tracing::debug!("Skipped enum {}", enum_def.name),
            }
        }

        for struct_def in &self.schema.structs {
            let mut ctx = EmitContext::new(self.schema, &self.config, &struct_def.namespace);
            let body = generate_struct(&mut ctx, struct_def)?;
            match assemble_file(&ctx, &struct_def.name, &body, true) {
                Some(unit) => {
                    tracing::debug!(
                        "Generated {} {} ({} imports)",
                        if struct_def.fixed { "struct" } else { "table" },
                        struct_def.name,
                        ctx.imports().len()
                    );
                    units.push(unit);
                }
                None => tracing::debug!("Skipped {}", struct_def.name),
            }
        }

        tracing::info!("Generated {} Go files", units.len());
        Ok(units)
    }

    /// Generates all units and writes them to `sink`.
    ///
    /// Writing stops at the first failure; files already written stay.
    ///
    /// # Returns
    /// Number of files written.
    ///
    /// # Errors
    /// Returns generation errors before writing, or the first write error.
    pub fn write_to(&self, sink: &mut dyn OutputSink) -> Result<usize, CodegenError> {
        let units = self.generate()?;
        for unit in &units {
            if let Err(e) = sink.write_unit(unit) {
                tracing::error!("Failed to write {}: {}", unit.path().display(), e);
                return Err(e);
            }
            tracing::debug!("Wrote {}", unit.path().display());
        }
        Ok(units.len())
    }
}

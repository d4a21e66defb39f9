//! Namespace resolution and import tracking.
//!
//! Each definition is emitted with a fresh [`EmitContext`] holding the
//! namespace being generated and the set of namespaces its file has to
//! import. Nothing here outlives a single definition.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use flatgo_schema::{EnumDef, Namespace, Schema};

/// Per-definition emission state.
#[derive(Debug)]
pub struct EmitContext<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
    current: &'a Namespace,
    imports: Vec<Namespace>,
}

impl<'a> EmitContext<'a> {
    /// Creates a context for a definition living in `current`.
    #[must_use]
    pub fn new(schema: &'a Schema, config: &'a GeneratorConfig, current: &'a Namespace) -> Self {
        Self {
            schema,
            config,
            current,
            imports: Vec::new(),
        }
    }

    /// Returns the schema being generated.
    #[must_use]
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &'a GeneratorConfig {
        self.config
    }

    /// Returns the namespace of the definition being emitted.
    #[must_use]
    pub fn current(&self) -> &'a Namespace {
        self.current
    }

    /// Returns the namespaces referenced so far, in first-use order.
    #[must_use]
    pub fn imports(&self) -> &[Namespace] {
        &self.imports
    }

    /// Records `ns` as an import of the current file. Re-adding is a no-op.
    pub fn record_import(&mut self, ns: &Namespace) {
        if !self.imports.iter().any(|n| n.same_path(ns)) {
            self.imports.push(ns.clone());
        }
    }

    /// Returns the name to use for definition `name` declared in `ns`.
    ///
    /// Definitions from other namespaces are qualified with the package
    /// alias (the namespace's last component) and their namespace is
    /// recorded as an import.
    pub fn qualified_name(&mut self, ns: &Namespace, name: &str) -> String {
        match ns.last_component() {
            None => name.to_string(),
            Some(_) if ns.same_path(self.current) => name.to_string(),
            Some(last) => {
                let qualified = format!("{}.{}", last, name);
                self.record_import(ns);
                qualified
            }
        }
    }

    /// Returns the import path of `ns` as seen from the current namespace.
    ///
    /// A base-path override on either namespace makes the path absolute
    /// (the imported namespace's override wins); otherwise the path is
    /// relative to the current namespace's directory.
    #[must_use]
    pub fn package_path(&self, ns: &Namespace) -> String {
        let target = &self.config.target;
        let base = ns
            .base_for(target)
            .or_else(|| self.current.base_for(target));

        match base {
            Some(base) => format!(
                "{}/{}{}",
                base,
                self.config.output_prefix,
                ns.components.join("/")
            ),
            None => relative_import_path(self.current, ns),
        }
    }
}

/// Fails if enums declare more than one distinct non-empty base-path
/// override for `target`. Returns the agreed override, if any.
///
/// # Errors
/// Returns `CodegenError::ConflictingBaseOverride` on the first mismatch.
pub fn check_consistent_overrides(
    enums: &[EnumDef],
    target: &str,
) -> Result<Option<String>, CodegenError> {
    let mut agreed: Option<&str> = None;

    for base in enums.iter().filter_map(|e| e.namespace.base_for(target)) {
        match agreed {
            None => agreed = Some(base),
            Some(first) if first != base => {
                return Err(CodegenError::ConflictingBaseOverride {
                    target: target.to_string(),
                    first: first.to_string(),
                    second: base.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(agreed.map(str::to_string))
}

/// Returns the relative import path from directory `from` to `to`.
///
/// The shared prefix stops at the first mismatching component. One `..`
/// step is emitted per unmatched `from` component, followed by the
/// unmatched `to` components. A path without parent steps is written as
/// `./child`. Returns an empty string when either namespace is empty or
/// both are the same.
#[must_use]
pub fn relative_import_path(from: &Namespace, to: &Namespace) -> String {
    if from.is_empty() || to.is_empty() {
        return String::new();
    }

    let matched = from
        .components
        .iter()
        .zip(&to.components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut steps = vec![".."; from.components.len() - matched];
    let remaining = &to.components[matched..];

    if remaining.is_empty() {
        return steps.join("/");
    }

    if steps.is_empty() {
        steps.push(".");
    }
    steps.extend(remaining.iter().map(String::as_str));
    steps.join("/")
}

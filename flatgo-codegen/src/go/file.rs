//! Source file assembly.
//!
//! Wraps a generated definition body in the Go file prologue: the
//! do-not-edit banner, the package clause and the import block.

use crate::go::namespace::EmitContext;
use crate::output::OutputUnit;
use std::path::PathBuf;

/// First line of every generated file.
pub const GENERATED_BANNER: &str =
    "// automatically generated by the FlatBuffers compiler, do not modify\n\n";

/// Returns the package clause for the current namespace.
#[must_use]
pub fn package_clause(ctx: &EmitContext<'_>) -> String {
    let name = ctx
        .current()
        .last_component()
        .unwrap_or(ctx.config().default_package.as_str());
    format!("package {}\n\n", name)
}

/// Returns the import block, or an empty string when nothing is imported.
///
/// The runtime package is imported only by struct and table files.
#[must_use]
pub fn import_block(ctx: &EmitContext<'_>, needs_runtime: bool) -> String {
    let runtime = needs_runtime && !ctx.config().runtime_import.is_empty();
    if !runtime && ctx.imports().is_empty() {
        return String::new();
    }

    let mut output = String::from("import (\n");
    if runtime {
        output.push_str(&format!(
            "\tflatbuffers \"{}\"\n",
            ctx.config().runtime_import
        ));
    }
    for ns in ctx.imports() {
        let Some(alias) = ns.last_component() else {
            continue;
        };
        output.push_str(&format!("\t{} \"{}\"\n", alias, ctx.package_path(ns)));
    }
    output.push_str(")\n\n");
    output
}

/// Assembles a complete file for definition `name`.
///
/// Returns `None` for an empty body, which is how skipped definitions
/// surface. The file lives in one directory per namespace component.
#[must_use]
pub fn assemble_file(
    ctx: &EmitContext<'_>,
    name: &str,
    body: &str,
    needs_runtime: bool,
) -> Option<OutputUnit> {
    if body.is_empty() {
        return None;
    }

    let mut content = String::from(GENERATED_BANNER);
    content.push_str(&package_clause(ctx));
    content.push_str(&import_block(ctx, needs_runtime));
    content.push_str(body);

    let directory: PathBuf = ctx.current().components.iter().collect();
    Some(OutputUnit {
        directory,
        file_name: format!("{}{}", name, ctx.config().file_extension),
        content,
    })
}

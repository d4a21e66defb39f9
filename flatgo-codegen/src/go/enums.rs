//! Enum and union code generation.

use crate::go::accessors::generate_comment;
use flatgo_schema::EnumDef;

/// Returns `(constant name, value)` for each member, in declaration order.
///
/// Names are the enum name followed by the member name, since Go constants
/// share one package-level namespace.
#[must_use]
pub fn enum_constants(enum_def: &EnumDef) -> Vec<(String, i64)> {
    enum_def
        .values
        .iter()
        .map(|ev| (format!("{}{}", enum_def.name, ev.name), ev.value))
        .collect()
}

/// Generates the constant block and the `EnumNames<Name>` lookup table.
///
/// Returns an empty string for externally generated enums.
#[must_use]
pub fn generate_enum(enum_def: &EnumDef) -> String {
    let mut output = String::new();
    if enum_def.generated {
        return output;
    }

    let constants = enum_constants(enum_def);

    output.push_str(&generate_comment(&enum_def.doc, ""));
    output.push_str("const (\n");
    for (ev, (constant, value)) in enum_def.values.iter().zip(&constants) {
        output.push_str(&generate_comment(&ev.doc, "\t"));
        output.push_str(&format!("\t{} = {}\n", constant, value));
    }
    output.push_str(")\n\n");

    output.push_str(&format!(
        "var EnumNames{} = map[int]string{{\n",
        enum_def.name
    ));
    for (ev, (constant, _)) in enum_def.values.iter().zip(&constants) {
        output.push_str(&format!("\t{}:\"{}\",\n", constant, ev.name));
    }
    output.push_str("}\n\n");

    output
}

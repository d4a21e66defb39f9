//! Struct and table code generation.
//!
//! Emits the wrapper type, its initialization helpers, then delegates field
//! accessors, mutators and constructors to the sibling modules.

use crate::error::CodegenError;
use crate::go::accessors::{generate_accessor, generate_comment, generate_mutator};
use crate::go::builders::{generate_struct_builder, generate_table_builders};
use crate::go::make_receiver;
use crate::go::namespace::EmitContext;
use flatgo_schema::StructDef;

/// Generates every declaration for a struct or table.
///
/// Returns an empty string for externally generated definitions.
///
/// # Errors
/// Propagates accessor and builder failures.
pub fn generate_struct(
    ctx: &mut EmitContext<'_>,
    struct_def: &StructDef,
) -> Result<String, CodegenError> {
    let mut output = String::new();
    if struct_def.generated {
        return Ok(output);
    }

    output.push_str(&generate_comment(&struct_def.doc, ""));
    output.push_str(&begin_class(struct_def));
    if !struct_def.fixed {
        output.push_str(&new_root_type_from_buffer(struct_def));
    }
    output.push_str(&initialize_existing(struct_def));
    output.push_str(&table_accessor(struct_def));

    for field in struct_def.fields.iter().filter(|f| !f.deprecated) {
        output.push_str(&generate_accessor(ctx, struct_def, field)?);
        output.push_str(&generate_mutator(ctx, struct_def, field)?);
    }

    if struct_def.fixed {
        output.push_str(&generate_struct_builder(ctx.schema(), struct_def)?);
    } else {
        output.push_str(&generate_table_builders(ctx.schema(), struct_def)?);
    }

    Ok(output)
}

fn begin_class(struct_def: &StructDef) -> String {
    let mut output = String::new();
    output.push_str(&format!("type {} struct {{\n", struct_def.name));
    // `_` cannot start a schema field name, so `_tab` never collides.
    output.push_str(if struct_def.fixed {
        "\t_tab flatbuffers.Struct\n"
    } else {
        "\t_tab flatbuffers.Table\n"
    });
    output.push_str("}\n\n");
    output
}

fn new_root_type_from_buffer(struct_def: &StructDef) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "func GetRootAs{}(buf []byte, offset flatbuffers.UOffsetT) *{} {{\n",
        struct_def.name, struct_def.name
    ));
    output.push_str("\tn := flatbuffers.GetUOffsetT(buf[offset:])\n");
    output.push_str(&format!("\tx := &{}{{}}\n", struct_def.name));
    output.push_str("\tx.Init(buf, n+offset)\n");
    output.push_str("\treturn x\n");
    output.push_str("}\n\n");
    output
}

fn initialize_existing(struct_def: &StructDef) -> String {
    let mut output = make_receiver(struct_def);
    output.push_str(" Init(buf []byte, i flatbuffers.UOffsetT) {\n");
    output.push_str("\trcv._tab.Bytes = buf\n");
    output.push_str("\trcv._tab.Pos = i\n");
    output.push_str("}\n\n");
    output
}

fn table_accessor(struct_def: &StructDef) -> String {
    let mut output = make_receiver(struct_def);
    output.push_str(" Table() flatbuffers.Table {\n");
    if struct_def.fixed {
        output.push_str("\treturn rcv._tab.Table\n");
    } else {
        output.push_str("\treturn rcv._tab\n");
    }
    output.push_str("}\n\n");
    output
}

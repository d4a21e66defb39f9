//! Constructor code generation.
//!
//! Fixed structs get a single `Create<Name>` function writing the struct
//! bytes directly. Tables get the slot protocol: `<Name>Start`, one
//! `<Name>Add<Field>` per live field, `<Name>Start<Field>Vector` for vectors,
//! and `<Name>End`.
//!
//! Struct bodies are computed as a list of [`BuildOp`]s first so the byte
//! layout can be inspected independently of its Go rendering.

use crate::error::CodegenError;
use crate::go::accessors::field_path;
use crate::go::types::{
    builder_method_name, default_literal, inline_alignment, inline_size, scalar_spelling,
};
use flatgo_schema::{FieldDef, ScalarKind, Schema, StructDef, Type, make_camel};

/// One step of a fixed-struct constructor body.
///
/// The builder grows backward, so ops run last field first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOp {
    /// Align for a struct of `size` bytes at `align`.
    Prep {
        /// Minimum alignment.
        align: usize,
        /// Struct size in bytes.
        size: usize,
    },
    /// Insert zero bytes.
    Pad(usize),
    /// Prepend a scalar argument.
    Prepend {
        /// Scalar kind written.
        kind: ScalarKind,
        /// Go argument name.
        arg: String,
    },
}

/// Constructor argument produced by flattening nested structs.
#[derive(Debug, Clone)]
pub struct StructArg<'a> {
    /// Concatenated `field_` prefixes of enclosing struct fields.
    pub prefix: String,
    /// Leaf scalar field.
    pub field: &'a FieldDef,
    /// Scalar kind of the leaf.
    pub kind: ScalarKind,
}

impl StructArg<'_> {
    /// Returns the Go parameter name.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}{}", self.prefix, make_camel(&self.field.name, false))
    }
}

/// Live field of a table with its vtable slot.
#[derive(Debug, Clone, Copy)]
pub struct TableSlot<'a> {
    /// Ordinal position among all fields, deprecated ones included.
    pub slot: usize,
    /// The field.
    pub field: &'a FieldDef,
}

/// Flattens a fixed struct's fields into constructor arguments.
///
/// Nested structs are expanded in place (pre-order), so argument order
/// matches physical field order.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for non-scalar, non-struct fields.
pub fn flatten_struct_args<'a>(
    schema: &'a Schema,
    struct_def: &'a StructDef,
) -> Result<Vec<StructArg<'a>>, CodegenError> {
    let mut args = Vec::new();
    collect_struct_args(schema, struct_def, String::new(), &mut args)?;
    Ok(args)
}

fn collect_struct_args<'a>(
    schema: &'a Schema,
    struct_def: &'a StructDef,
    prefix: String,
    args: &mut Vec<StructArg<'a>>,
) -> Result<(), CodegenError> {
    for field in &struct_def.fields {
        match &field.ty {
            Type::Scalar(kind) => args.push(StructArg {
                prefix: prefix.clone(),
                field,
                kind: *kind,
            }),
            Type::Struct(id) => {
                let nested = schema.struct_def(*id)?;
                collect_struct_args(schema, nested, format!("{}{}_", prefix, field.name), args)?;
            }
            Type::String | Type::Vector(_) | Type::Union(_) => {
                return Err(CodegenError::unsupported(
                    field.ty.tag(),
                    field_path(struct_def, field),
                ));
            }
        }
    }
    Ok(())
}

/// Computes the constructor body of a fixed struct.
///
/// Fields are written in reverse declaration order, each preceded by its
/// trailing padding; nested structs recurse with their own `Prep`.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for non-scalar, non-struct fields.
pub fn struct_build_plan(
    schema: &Schema,
    struct_def: &StructDef,
) -> Result<Vec<BuildOp>, CodegenError> {
    let mut ops = Vec::new();
    collect_build_ops(schema, struct_def, "", &mut ops)?;
    Ok(ops)
}

fn collect_build_ops(
    schema: &Schema,
    struct_def: &StructDef,
    prefix: &str,
    ops: &mut Vec<BuildOp>,
) -> Result<(), CodegenError> {
    ops.push(BuildOp::Prep {
        align: struct_def.minalign,
        size: struct_def.bytesize,
    });

    for field in struct_def.fields.iter().rev() {
        if field.padding > 0 {
            ops.push(BuildOp::Pad(field.padding));
        }
        match &field.ty {
            Type::Scalar(kind) => ops.push(BuildOp::Prepend {
                kind: *kind,
                arg: format!("{}{}", prefix, make_camel(&field.name, false)),
            }),
            Type::Struct(id) => {
                let nested = schema.struct_def(*id)?;
                let nested_prefix = format!("{}{}_", prefix, field.name);
                collect_build_ops(schema, nested, &nested_prefix, ops)?;
            }
            Type::String | Type::Vector(_) | Type::Union(_) => {
                return Err(CodegenError::unsupported(
                    field.ty.tag(),
                    field_path(struct_def, field),
                ));
            }
        }
    }
    Ok(())
}

/// Returns the live fields of a table with their slot indices.
///
/// Slots are ordinal positions in the full field list, so deprecating or
/// appending fields never moves an existing slot.
#[must_use]
pub fn table_slots(struct_def: &StructDef) -> Vec<TableSlot<'_>> {
    struct_def
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.deprecated)
        .map(|(slot, field)| TableSlot { slot, field })
        .collect()
}

/// Generates `Create<Name>` for a fixed struct.
///
/// # Errors
/// Propagates flattening failures.
pub fn generate_struct_builder(
    schema: &Schema,
    struct_def: &StructDef,
) -> Result<String, CodegenError> {
    let mut output = String::new();

    output.push_str(&format!(
        "func Create{}(builder *flatbuffers.Builder",
        struct_def.name
    ));
    for arg in flatten_struct_args(schema, struct_def)? {
        output.push_str(&format!(
            ", {} {}",
            arg.name(),
            scalar_spelling(arg.kind)
        ));
    }
    output.push_str(") flatbuffers.UOffsetT {\n");

    for op in struct_build_plan(schema, struct_def)? {
        match op {
            BuildOp::Prep { align, size } => {
                output.push_str(&format!("\tbuilder.Prep({}, {})\n", align, size));
            }
            BuildOp::Pad(n) => {
                output.push_str(&format!("\tbuilder.Pad({})\n", n));
            }
            BuildOp::Prepend { kind, arg } => {
                output.push_str(&format!(
                    "\tbuilder.Prepend{}({})\n",
                    builder_method_name(&Type::Scalar(kind)),
                    arg
                ));
            }
        }
    }

    output.push_str("\treturn builder.Offset()\n");
    output.push_str("}\n");
    Ok(output)
}

/// Generates the table construction functions.
///
/// # Errors
/// Returns `CodegenError::Schema` for dangling vector element references.
pub fn generate_table_builders(
    schema: &Schema,
    struct_def: &StructDef,
) -> Result<String, CodegenError> {
    let mut output = String::new();

    output.push_str(&format!(
        "func {}Start(builder *flatbuffers.Builder) {{\n",
        struct_def.name
    ));
    output.push_str(&format!(
        "\tbuilder.StartObject({})\n}}\n",
        struct_def.fields.len()
    ));

    for TableSlot { slot, field } in table_slots(struct_def) {
        output.push_str(&build_field_of_table(struct_def, field, slot));
        if let Some(element) = field.ty.element() {
            output.push_str(&build_vector_of_table(schema, struct_def, field, element)?);
        }
    }

    output.push_str(&format!(
        "func {}End(builder *flatbuffers.Builder) flatbuffers.UOffsetT {{\n",
        struct_def.name
    ));
    output.push_str("\treturn builder.EndObject()\n}\n");
    Ok(output)
}

fn build_field_of_table(struct_def: &StructDef, field: &FieldDef, slot: usize) -> String {
    let mut output = String::new();
    let arg = make_camel(&field.name, false);
    let method = builder_method_name(&field.ty);

    let (param_type, value, default) = match &field.ty {
        Type::Scalar(kind) => (
            scalar_spelling(*kind).to_string(),
            arg.clone(),
            default_literal(*kind, &field.default_value),
        ),
        Type::String | Type::Vector(_) | Type::Struct(_) | Type::Union(_) => (
            "flatbuffers.UOffsetT".to_string(),
            format!("flatbuffers.UOffsetT({})", arg),
            field.default_value.clone(),
        ),
    };

    output.push_str(&format!(
        "func {}Add{}(builder *flatbuffers.Builder, {} {}) {{\n",
        struct_def.name,
        make_camel(&field.name, true),
        arg,
        param_type
    ));
    output.push_str(&format!(
        "\tbuilder.Prepend{}Slot({}, {}, {})\n",
        method, slot, value, default
    ));
    output.push_str("}\n");
    output
}

fn build_vector_of_table(
    schema: &Schema,
    struct_def: &StructDef,
    field: &FieldDef,
    element: &Type,
) -> Result<String, CodegenError> {
    let mut output = String::new();
    output.push_str(&format!(
        "func {}Start{}Vector(builder *flatbuffers.Builder, numElems int) flatbuffers.UOffsetT {{\n",
        struct_def.name,
        make_camel(&field.name, true)
    ));
    output.push_str(&format!(
        "\treturn builder.StartVector({}, numElems, {})\n",
        inline_size(schema, element)?,
        inline_alignment(schema, element)?
    ));
    output.push_str("}\n");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::monster_schema;
    use flatgo_schema::Namespace;

    fn find<'a>(schema: &'a Schema, name: &str) -> &'a StructDef {
        schema
            .structs
            .iter()
            .find(|s| s.name == name)
            .expect("Missing definition")
    }

    #[test]
    fn test_flatten_struct_args_preorder() {
        let schema = monster_schema();
        let args = flatten_struct_args(&schema, find(&schema, "Vec3")).expect("Failed to flatten");
        let names: Vec<String> = args.iter().map(StructArg::name).collect();
        assert_eq!(
            names,
            vec!["x", "y", "z", "test1", "test2", "test3_a", "test3_b"]
        );
    }

    #[test]
    fn test_struct_plan_reverse_order_with_padding() {
        let schema = monster_schema();
        let plan = struct_build_plan(&schema, find(&schema, "Vec3")).expect("Failed to plan");
        let prepend = |kind, arg: &str| BuildOp::Prepend {
            kind,
            arg: arg.to_string(),
        };

        assert_eq!(
            plan,
            vec![
                BuildOp::Prep { align: 8, size: 32 },
                BuildOp::Pad(2),
                BuildOp::Prep { align: 2, size: 4 },
                BuildOp::Pad(1),
                prepend(ScalarKind::Int8, "test3_b"),
                prepend(ScalarKind::Int16, "test3_a"),
                BuildOp::Pad(1),
                prepend(ScalarKind::Int8, "test2"),
                prepend(ScalarKind::Float64, "test1"),
                BuildOp::Pad(4),
                prepend(ScalarKind::Float32, "z"),
                prepend(ScalarKind::Float32, "y"),
                prepend(ScalarKind::Float32, "x"),
            ]
        );
    }

    #[test]
    fn test_struct_plan_writes_bytesize() {
        let schema = monster_schema();
        let plan = struct_build_plan(&schema, find(&schema, "Vec3")).expect("Failed to plan");
        let written: usize = plan
            .iter()
            .map(|op| match op {
                BuildOp::Prep { .. } => 0,
                BuildOp::Pad(n) => *n,
                BuildOp::Prepend { kind, .. } => kind.size(),
            })
            .sum();
        assert_eq!(written, 32);
    }

    #[test]
    fn test_generate_struct_builder() {
        let schema = monster_schema();
        let output =
            generate_struct_builder(&schema, find(&schema, "Vec3")).expect("Failed to generate");
        assert!(output.starts_with(
            "func CreateVec3(builder *flatbuffers.Builder, x float32, y float32, z float32, \
             test1 float64, test2 int8, test3_a int16, test3_b int8) flatbuffers.UOffsetT {\n"
        ));
        assert!(output.contains("\tbuilder.Prep(8, 32)\n\tbuilder.Pad(2)\n\tbuilder.Prep(2, 4)\n"));
        assert!(output.contains("\tbuilder.PrependInt16(test3_a)\n"));
        assert!(output.contains("\tbuilder.PrependFloat64(test1)\n"));
        assert!(output.ends_with("\treturn builder.Offset()\n}\n"));
    }

    #[test]
    fn test_table_slots_skip_deprecated_but_keep_indices() {
        let schema = monster_schema();
        let slots = table_slots(find(&schema, "Monster"));
        let by_name = |name: &str| {
            slots
                .iter()
                .find(|s| s.field.name == name)
                .map(|s| s.slot)
        };
        assert_eq!(by_name("name"), Some(3));
        assert_eq!(by_name("friendly"), None);
        assert_eq!(by_name("inventory"), Some(5));
    }

    #[test]
    fn test_deprecating_later_field_keeps_earlier_slots() {
        let schema = monster_schema();
        let before = find(&schema, "Monster").clone();
        let mut after = before.clone();
        if let Some(field) = after.fields.iter_mut().find(|f| f.name == "testbool") {
            field.deprecated = true;
        }

        let earlier = |def: &StructDef| {
            table_slots(def)
                .into_iter()
                .filter(|s| s.field.name != "testbool")
                .map(|s| (s.field.name.clone(), s.slot))
                .collect::<Vec<_>>()
        };
        assert_eq!(earlier(&before), earlier(&after));
    }

    #[test]
    fn test_generate_table_builders() {
        let schema = monster_schema();
        let output =
            generate_table_builders(&schema, find(&schema, "Monster")).expect("Failed to generate");

        assert!(output.contains("func MonsterStart(builder *flatbuffers.Builder) {\n\tbuilder.StartObject(15)\n}\n"));
        assert!(output.contains(
            "func MonsterAddHp(builder *flatbuffers.Builder, hp int16) {\n\tbuilder.PrependInt16Slot(2, hp, 100)\n}\n"
        ));
        assert!(output.contains(
            "\tbuilder.PrependUOffsetTSlot(3, flatbuffers.UOffsetT(name), 0)\n"
        ));
        assert!(output.contains("\tbuilder.PrependStructSlot(0, flatbuffers.UOffsetT(pos), 0)\n"));
        assert!(output.contains("\tbuilder.PrependBoolSlot(13, testbool, false)\n"));
        assert!(output.contains("func MonsterAddTestType(builder *flatbuffers.Builder, testType byte)"));
        assert!(!output.contains("Friendly"));
        assert!(output.contains("func MonsterEnd(builder *flatbuffers.Builder) flatbuffers.UOffsetT {\n\treturn builder.EndObject()\n}\n"));
    }

    #[test]
    fn test_vector_start_uses_element_layout() {
        let schema = monster_schema();
        let output =
            generate_table_builders(&schema, find(&schema, "Monster")).expect("Failed to generate");
        assert!(output.contains(
            "func MonsterStartInventoryVector(builder *flatbuffers.Builder, numElems int) flatbuffers.UOffsetT {\n\treturn builder.StartVector(1, numElems, 1)\n}\n"
        ));
        assert!(output.contains("MonsterStartTest4Vector(builder *flatbuffers.Builder, numElems int) flatbuffers.UOffsetT {\n\treturn builder.StartVector(4, numElems, 2)\n"));
        assert!(output.contains("MonsterStartTestarrayoftablesVector(builder *flatbuffers.Builder, numElems int) flatbuffers.UOffsetT {\n\treturn builder.StartVector(4, numElems, 4)\n"));
    }

    #[test]
    fn test_struct_with_string_is_rejected() {
        let mut schema = Schema::new();
        let bad = StructDef::fixed("Bad", Namespace::default(), 4, 4)
            .with_field(FieldDef::new("s", Type::String, 0));
        schema.add_struct(bad.clone());
        assert!(matches!(
            generate_struct_builder(&schema, &bad),
            Err(CodegenError::UnsupportedType { .. })
        ));
    }
}

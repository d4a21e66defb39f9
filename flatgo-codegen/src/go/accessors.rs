//! Field accessor and mutator code generation.
//!
//! Every non-deprecated field is first classified into an [`AccessorKind`]
//! from its type and the layout of the containing definition, then rendered.
//! Table accessors test the field's vtable entry first and fall back to the
//! declared default; struct accessors read at a fixed offset.

use crate::error::CodegenError;
use crate::go::namespace::EmitContext;
use crate::go::make_receiver;
use crate::go::types::{
    default_literal, getter_name, inline_size, scalar_spelling, type_name, zero_literal,
};
use flatgo_schema::{FieldDef, ScalarKind, Schema, StructDef, StructId, Type, make_camel};

/// Accessor shape of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorKind {
    /// Scalar inside a fixed struct.
    StructScalar(ScalarKind),
    /// Scalar inside a table.
    TableScalar(ScalarKind),
    /// Fixed struct nested inside a fixed struct.
    StructStruct(StructId),
    /// Struct or table referenced from a table.
    TableStruct {
        /// Child definition.
        child: StructId,
        /// Whether the child is stored inline.
        inline: bool,
    },
    /// String inside a table.
    String,
    /// Union value inside a table.
    Union,
    /// Vector of structs or tables.
    VectorOfStruct {
        /// Element definition.
        element: StructId,
        /// Whether elements are stored inline.
        inline: bool,
    },
    /// Vector of scalars or strings.
    VectorOfNonStruct(Type),
}

/// Classifies `field` of `owner`.
///
/// # Errors
/// Returns `CodegenError::UnsupportedType` for shapes the wire format has
/// no accessor for (non-scalar, non-struct fields of fixed structs, vectors
/// of vectors or unions, unions over a plain enum) and
/// `CodegenError::Schema` for dangling references.
pub fn classify(
    schema: &Schema,
    owner: &StructDef,
    field: &FieldDef,
) -> Result<AccessorKind, CodegenError> {
    let unsupported = || CodegenError::unsupported(field.ty.tag(), field_path(owner, field));

    match (&field.ty, owner.fixed) {
        (Type::Scalar(kind), true) => Ok(AccessorKind::StructScalar(*kind)),
        (Type::Scalar(kind), false) => Ok(AccessorKind::TableScalar(*kind)),
        (Type::Struct(id), true) => {
            if schema.struct_def(*id)?.fixed {
                Ok(AccessorKind::StructStruct(*id))
            } else {
                Err(unsupported())
            }
        }
        (Type::Struct(id), false) => Ok(AccessorKind::TableStruct {
            child: *id,
            inline: schema.struct_def(*id)?.fixed,
        }),
        (Type::String, false) => Ok(AccessorKind::String),
        (Type::Union(id), false) => {
            if schema.enum_def(*id)?.is_union {
                Ok(AccessorKind::Union)
            } else {
                Err(unsupported())
            }
        }
        (Type::Vector(element), false) => match element.as_ref() {
            Type::Struct(id) => Ok(AccessorKind::VectorOfStruct {
                element: *id,
                inline: schema.struct_def(*id)?.fixed,
            }),
            Type::Scalar(_) | Type::String => {
                Ok(AccessorKind::VectorOfNonStruct(element.as_ref().clone()))
            }
            Type::Vector(_) | Type::Union(_) => Err(unsupported()),
        },
        (Type::String | Type::Union(_) | Type::Vector(_), true) => Err(unsupported()),
    }
}

/// Returns `Owner.field`, for diagnostics.
pub(crate) fn field_path(owner: &StructDef, field: &FieldDef) -> String {
    format!("{}.{}", owner.name, field.name)
}

/// Generates the getter(s) for a field.
///
/// Vector fields additionally get a length accessor, and byte vectors a raw
/// `[]byte` view.
///
/// # Errors
/// Propagates classification and type lookup failures.
pub fn generate_accessor(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
) -> Result<String, CodegenError> {
    let mut output = generate_comment(&field.doc, "");

    let accessor = match classify(ctx.schema(), owner, field)? {
        AccessorKind::StructScalar(_) => scalar_field_of_struct(ctx, owner, field)?,
        AccessorKind::TableScalar(kind) => scalar_field_of_table(ctx, owner, field, kind)?,
        AccessorKind::StructStruct(_) => struct_field_of_struct(ctx, owner, field)?,
        AccessorKind::TableStruct { inline, .. } => {
            struct_field_of_table(ctx, owner, field, inline)?
        }
        AccessorKind::String => string_field(ctx, owner, field)?,
        AccessorKind::Union => union_field(ctx, owner, field)?,
        AccessorKind::VectorOfStruct { element, inline } => {
            member_of_vector_of_struct(ctx, owner, field, element, inline)?
        }
        AccessorKind::VectorOfNonStruct(element) => {
            member_of_vector_of_non_struct(ctx, owner, field, &element)?
        }
    };
    output.push_str(&accessor);

    if let Some(element) = field.ty.element() {
        output.push_str(&vector_len(owner, field));
        if element.scalar() == Some(ScalarKind::UInt8) {
            output.push_str(&ubyte_slice(owner, field));
        }
    }

    Ok(output)
}

/// Generates the mutator for a scalar field; other fields get none.
///
/// # Errors
/// Propagates classification failures.
pub fn generate_mutator(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
) -> Result<String, CodegenError> {
    let mut output = String::new();

    match classify(ctx.schema(), owner, field)? {
        AccessorKind::StructScalar(kind) => {
            output.push_str(&generate_comment(&field.doc, ""));
            output.push_str(&mutate_scalar_field_of_struct(owner, field, kind));
        }
        AccessorKind::TableScalar(kind) => {
            output.push_str(&generate_comment(&field.doc, ""));
            output.push_str(&mutate_scalar_field_of_table(owner, field, kind));
        }
        AccessorKind::StructStruct(_)
        | AccessorKind::TableStruct { .. }
        | AccessorKind::String
        | AccessorKind::Union
        | AccessorKind::VectorOfStruct { .. }
        | AccessorKind::VectorOfNonStruct(_) => {}
    }

    Ok(output)
}

/// Renders documentation lines as `//` comments.
#[must_use]
pub fn generate_comment(doc: &[String], indent: &str) -> String {
    let mut output = String::new();
    for line in doc {
        let line = line.trim_end();
        if line.is_empty() {
            output.push_str(&format!("{}//\n", indent));
        } else {
            output.push_str(&format!("{}// {}\n", indent, line.trim_start()));
        }
    }
    output
}

/// Prefix shared by vtable-guarded accessors.
fn offset_prefix(field: &FieldDef) -> String {
    format!(
        "{{\n\to := flatbuffers.UOffsetT(rcv._tab.Offset({}))\n\tif o != 0 {{\n",
        field.offset
    )
}

fn scalar_field_of_struct(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
) -> Result<String, CodegenError> {
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}() {} {{\n",
        make_camel(&field.name, true),
        type_name(ctx, &field.ty)?
    ));
    output.push_str(&format!(
        "\treturn {}(rcv._tab.Pos + flatbuffers.UOffsetT({}))\n",
        getter_name(&field.ty),
        field.offset
    ));
    output.push_str("}\n\n");
    Ok(output)
}

fn scalar_field_of_table(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
    kind: ScalarKind,
) -> Result<String, CodegenError> {
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}() {} ",
        make_camel(&field.name, true),
        type_name(ctx, &field.ty)?
    ));
    output.push_str(&offset_prefix(field));
    output.push_str(&format!(
        "\t\treturn {}(o + rcv._tab.Pos)\n\t}}\n",
        getter_name(&field.ty)
    ));
    output.push_str(&format!(
        "\treturn {}\n",
        default_literal(kind, &field.default_value)
    ));
    output.push_str("}\n\n");
    Ok(output)
}

fn struct_field_of_struct(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
) -> Result<String, CodegenError> {
    let child = type_name(ctx, &field.ty)?;
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}(obj *{}) *{} {{\n",
        make_camel(&field.name, true),
        child,
        child
    ));
    output.push_str("\tif obj == nil {\n");
    output.push_str(&format!("\t\tobj = new({})\n", child));
    output.push_str("\t}\n");
    output.push_str(&format!(
        "\tobj.Init(rcv._tab.Bytes, rcv._tab.Pos+{})\n",
        field.offset
    ));
    output.push_str("\treturn obj\n");
    output.push_str("}\n\n");
    Ok(output)
}

fn struct_field_of_table(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
    inline: bool,
) -> Result<String, CodegenError> {
    let child = type_name(ctx, &field.ty)?;
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}(obj *{}) *{} ",
        make_camel(&field.name, true),
        child,
        child
    ));
    output.push_str(&offset_prefix(field));
    if inline {
        output.push_str("\t\tx := o + rcv._tab.Pos\n");
    } else {
        output.push_str("\t\tx := rcv._tab.Indirect(o + rcv._tab.Pos)\n");
    }
    output.push_str("\t\tif obj == nil {\n");
    output.push_str(&format!("\t\t\tobj = new({})\n", child));
    output.push_str("\t\t}\n");
    output.push_str("\t\tobj.Init(rcv._tab.Bytes, x)\n");
    output.push_str("\t\treturn obj\n\t}\n\treturn nil\n");
    output.push_str("}\n\n");
    Ok(output)
}

fn string_field(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
) -> Result<String, CodegenError> {
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}() {} ",
        make_camel(&field.name, true),
        type_name(ctx, &field.ty)?
    ));
    output.push_str(&offset_prefix(field));
    output.push_str(&format!(
        "\t\treturn {}(o + rcv._tab.Pos)\n\t}}\n\treturn nil\n",
        getter_name(&field.ty)
    ));
    output.push_str("}\n\n");
    Ok(output)
}

fn union_field(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
) -> Result<String, CodegenError> {
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}(obj {}) bool ",
        make_camel(&field.name, true),
        type_name(ctx, &field.ty)?
    ));
    output.push_str(&offset_prefix(field));
    output.push_str(&format!(
        "\t\t{}(obj, o)\n\t\treturn true\n\t}}\n",
        getter_name(&field.ty)
    ));
    output.push_str("\treturn false\n");
    output.push_str("}\n\n");
    Ok(output)
}

fn member_of_vector_of_struct(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
    element: StructId,
    inline: bool,
) -> Result<String, CodegenError> {
    let element_size = inline_size(ctx.schema(), &Type::Struct(element))?;
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}(obj *{}, j int) bool ",
        make_camel(&field.name, true),
        type_name(ctx, &field.ty)?
    ));
    output.push_str(&offset_prefix(field));
    output.push_str("\t\tx := rcv._tab.Vector(o)\n");
    output.push_str(&format!(
        "\t\tx += flatbuffers.UOffsetT(j) * {}\n",
        element_size
    ));
    if !inline {
        output.push_str("\t\tx = rcv._tab.Indirect(x)\n");
    }
    output.push_str("\t\tobj.Init(rcv._tab.Bytes, x)\n");
    output.push_str("\t\treturn true\n\t}\n");
    output.push_str("\treturn false\n");
    output.push_str("}\n\n");
    Ok(output)
}

fn member_of_vector_of_non_struct(
    ctx: &mut EmitContext<'_>,
    owner: &StructDef,
    field: &FieldDef,
    element: &Type,
) -> Result<String, CodegenError> {
    let element_size = inline_size(ctx.schema(), element)?;
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " {}(j int) {} ",
        make_camel(&field.name, true),
        type_name(ctx, &field.ty)?
    ));
    output.push_str(&offset_prefix(field));
    output.push_str("\t\ta := rcv._tab.Vector(o)\n");
    output.push_str(&format!(
        "\t\treturn {}(a + flatbuffers.UOffsetT(j*{}))\n",
        getter_name(&field.ty),
        element_size
    ));
    output.push_str("\t}\n");
    let absent = match element.scalar() {
        Some(kind) => zero_literal(kind),
        None => "nil",
    };
    output.push_str(&format!("\treturn {}\n", absent));
    output.push_str("}\n\n");
    Ok(output)
}

fn vector_len(owner: &StructDef, field: &FieldDef) -> String {
    let mut output = make_receiver(owner);
    output.push_str(&format!(" {}Length() int ", make_camel(&field.name, true)));
    output.push_str(&offset_prefix(field));
    output.push_str("\t\treturn rcv._tab.VectorLen(o)\n\t}\n");
    output.push_str("\treturn 0\n}\n\n");
    output
}

fn ubyte_slice(owner: &StructDef, field: &FieldDef) -> String {
    let mut output = make_receiver(owner);
    output.push_str(&format!(" {}Bytes() []byte ", make_camel(&field.name, true)));
    output.push_str(&offset_prefix(field));
    output.push_str("\t\treturn rcv._tab.ByteVector(o + rcv._tab.Pos)\n\t}\n");
    output.push_str("\treturn nil\n}\n\n");
    output
}

fn mutate_scalar_field_of_struct(owner: &StructDef, field: &FieldDef, kind: ScalarKind) -> String {
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " Mutate{}(n {}) bool {{\n",
        make_camel(&field.name, true),
        scalar_spelling(kind)
    ));
    output.push_str(&format!(
        "\treturn rcv._tab.Mutate{}(rcv._tab.Pos+flatbuffers.UOffsetT({}), n)\n",
        make_camel(scalar_spelling(kind), true),
        field.offset
    ));
    output.push_str("}\n\n");
    output
}

fn mutate_scalar_field_of_table(owner: &StructDef, field: &FieldDef, kind: ScalarKind) -> String {
    let mut output = make_receiver(owner);
    output.push_str(&format!(
        " Mutate{}(n {}) bool {{\n",
        make_camel(&field.name, true),
        scalar_spelling(kind)
    ));
    output.push_str(&format!(
        "\treturn rcv._tab.Mutate{}Slot({}, n)\n",
        make_camel(scalar_spelling(kind), true),
        field.offset
    ));
    output.push_str("}\n\n");
    output
}

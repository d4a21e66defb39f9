//! Schema definitions.
//!
//! This module contains the read-only AST handed over by the schema front
//! end: namespaces, enums, structs/tables and their fields. All layout data
//! (offsets, sizes, alignment, padding) is precomputed upstream and never
//! modified here.

use crate::error::SchemaError;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Index of a struct or table in [`Schema::structs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructId(pub usize);

/// Index of an enum or union in [`Schema::enums`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumId(pub usize);

/// Returns the vtable byte offset of the table field at `slot`.
///
/// The vtable starts with two `u16` entries (vtable size, object size), so
/// slot `n` lives at `4 + 2 * n`.
#[must_use]
pub const fn field_index_to_offset(slot: usize) -> usize {
    4 + 2 * slot
}

/// Complete schema: every enum and struct/table in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Enum and union definitions.
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    /// Struct and table definitions.
    #[serde(default)]
    pub structs: Vec<StructDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a schema from its JSON form.
    ///
    /// # Errors
    /// Returns `SchemaError::Json` if the document does not match the AST.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and decodes a schema JSON file.
    ///
    /// # Errors
    /// Returns `SchemaError` if reading or decoding fails.
    pub fn from_json_file(path: &Path) -> Result<Self, SchemaError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Adds an enum definition, returning its id.
    pub fn add_enum(&mut self, enum_def: EnumDef) -> EnumId {
        self.enums.push(enum_def);
        EnumId(self.enums.len() - 1)
    }

    /// Adds a struct or table definition, returning its id.
    pub fn add_struct(&mut self, struct_def: StructDef) -> StructId {
        self.structs.push(struct_def);
        StructId(self.structs.len() - 1)
    }

    /// Looks up a struct or table.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownStruct` for a dangling reference.
    pub fn struct_def(&self, id: StructId) -> Result<&StructDef, SchemaError> {
        self.structs
            .get(id.0)
            .ok_or(SchemaError::UnknownStruct { id: id.0 })
    }

    /// Looks up an enum or union.
    ///
    /// # Errors
    /// Returns `SchemaError::UnknownEnum` for a dangling reference.
    pub fn enum_def(&self, id: EnumId) -> Result<&EnumDef, SchemaError> {
        self.enums
            .get(id.0)
            .ok_or(SchemaError::UnknownEnum { id: id.0 })
    }
}

/// Namespace of a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Dotted path components, outermost first.
    #[serde(default)]
    pub components: Vec<String>,
    /// Base output path overrides keyed by target identifier.
    #[serde(default)]
    pub base: BTreeMap<String, String>,
}

impl Namespace {
    /// Creates a namespace from its components.
    #[must_use]
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
            base: BTreeMap::new(),
        }
    }

    /// Parses a dotted namespace such as `MyGame.Example`.
    #[must_use]
    pub fn dotted(path: &str) -> Self {
        Self::new(path.split('.').filter(|c| !c.is_empty()))
    }

    /// Sets the base path override for a target.
    #[must_use]
    pub fn with_base(mut self, target: impl Into<String>, path: impl Into<String>) -> Self {
        self.base.insert(target.into(), path.into());
        self
    }

    /// Returns true for the root namespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the innermost component.
    #[must_use]
    pub fn last_component(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Returns the non-empty base path override for `target`.
    #[must_use]
    pub fn base_for(&self, target: &str) -> Option<&str> {
        self.base
            .get(target)
            .map(String::as_str)
            .filter(|path| !path.is_empty())
    }

    /// Returns true if both namespaces have the same components.
    ///
    /// Overrides are not part of a namespace's identity.
    #[must_use]
    pub fn same_path(&self, other: &Namespace) -> bool {
        self.components == other.components
    }
}

/// Enum or union definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDef {
    /// Enum name.
    pub name: String,
    /// Owning namespace.
    #[serde(default)]
    pub namespace: Namespace,
    /// Documentation lines.
    #[serde(default)]
    pub doc: Vec<String>,
    /// Supplied by another schema file; no code is emitted.
    #[serde(default)]
    pub generated: bool,
    /// Whether this enum lists the variants of a union.
    #[serde(default)]
    pub is_union: bool,
    /// Members in declaration order.
    #[serde(default)]
    pub values: Vec<EnumVal>,
}

impl EnumDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: Namespace) -> Self {
        Self {
            name: name.into(),
            namespace,
            doc: Vec::new(),
            generated: false,
            is_union: false,
            values: Vec::new(),
        }
    }

    /// Creates the discriminant enum of a union. `NONE = 0` comes first.
    #[must_use]
    pub fn union(name: impl Into<String>, namespace: Namespace) -> Self {
        Self {
            is_union: true,
            ..Self::new(name, namespace).with_value("NONE", 0)
        }
    }

    /// Adds a member with an explicit value.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.push(EnumVal {
            name: name.into(),
            value,
            doc: Vec::new(),
        });
        self
    }
}

/// Enum member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumVal {
    /// Member name.
    pub name: String,
    /// Explicit value.
    pub value: i64,
    /// Documentation lines.
    #[serde(default)]
    pub doc: Vec<String>,
}

/// Struct (fixed) or table (vtable) definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructDef {
    /// Type name.
    pub name: String,
    /// Owning namespace.
    #[serde(default)]
    pub namespace: Namespace,
    /// Documentation lines.
    #[serde(default)]
    pub doc: Vec<String>,
    /// Supplied by another schema file; no code is emitted.
    #[serde(default)]
    pub generated: bool,
    /// True for inline structs, false for tables.
    #[serde(default)]
    pub fixed: bool,
    /// Inline size in bytes (structs only).
    #[serde(default)]
    pub bytesize: usize,
    /// Minimum alignment in bytes.
    #[serde(default = "default_minalign")]
    pub minalign: usize,
    /// Fields in declaration order, deprecated fields included.
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

fn default_minalign() -> usize {
    1
}

impl StructDef {
    /// Creates a table definition.
    #[must_use]
    pub fn table(name: impl Into<String>, namespace: Namespace) -> Self {
        Self {
            name: name.into(),
            namespace,
            doc: Vec::new(),
            generated: false,
            fixed: false,
            bytesize: 0,
            minalign: 1,
            fields: Vec::new(),
        }
    }

    /// Creates a fixed struct definition with precomputed layout.
    #[must_use]
    pub fn fixed(
        name: impl Into<String>,
        namespace: Namespace,
        bytesize: usize,
        minalign: usize,
    ) -> Self {
        Self {
            fixed: true,
            bytesize,
            minalign,
            ..Self::table(name, namespace)
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a table field whose vtable offset follows from its position.
    #[must_use]
    pub fn with_slot(self, name: impl Into<String>, ty: Type) -> Self {
        let offset = field_index_to_offset(self.fields.len());
        self.with_field(FieldDef::new(name, ty, offset))
    }
}

/// Field of a struct or table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Byte offset (structs) or vtable offset (tables).
    pub offset: usize,
    /// Default value as written in the schema.
    #[serde(default = "default_constant")]
    pub default_value: String,
    /// Deprecated fields keep their slot but get no accessors.
    #[serde(default)]
    pub deprecated: bool,
    /// Padding bytes following the field (structs only).
    #[serde(default)]
    pub padding: usize,
    /// Documentation lines.
    #[serde(default)]
    pub doc: Vec<String>,
}

fn default_constant() -> String {
    "0".to_string()
}

impl FieldDef {
    /// Creates a field with a zero default.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: Type, offset: usize) -> Self {
        Self {
            name: name.into(),
            ty,
            offset,
            default_value: default_constant(),
            deprecated: false,
            padding: 0,
            doc: Vec::new(),
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Sets the trailing padding.
    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Marks the field deprecated.
    #[must_use]
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Attaches a documentation line.
    #[must_use]
    pub fn with_doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }
}

//! Go code generation modules.

pub mod accessors;
pub mod builders;
pub mod enums;
pub mod file;
pub mod namespace;
pub mod structs;
pub mod types;

pub use accessors::{AccessorKind, classify};
pub use builders::{BuildOp, StructArg, TableSlot, struct_build_plan, table_slots};
pub use enums::generate_enum;
pub use file::assemble_file;
pub use namespace::{EmitContext, check_consistent_overrides, relative_import_path};
pub use structs::generate_struct;

use flatgo_schema::StructDef;

/// Returns the method receiver prefix `func (rcv *Name)`.
pub(crate) fn make_receiver(struct_def: &StructDef) -> String {
    format!("func (rcv *{})", struct_def.name)
}

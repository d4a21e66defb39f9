//! Shared schema fixtures for unit tests.

use flatgo_schema::{
    EnumDef, FieldDef, Namespace, ScalarKind, Schema, StructDef, StructId, Type,
    field_index_to_offset,
};

/// Builds the classic monster schema:
///
/// ```text
/// namespace MyGame.Example;
/// enum Color : byte { Red = 1, Green = 2, Blue = 8 }
/// union Any { Monster }
/// struct Test { a: short; b: byte; }
/// struct Vec3 { x, y, z: float; test1: double; test2: Color; test3: Test; }
/// table Monster { pos, mana = 150, hp = 100, name, friendly (deprecated),
///                 inventory: [ubyte], color = Blue, test: Any, test4: [Test],
///                 testarrayofstring: [string], testarrayoftables: [Monster],
///                 enemy: Monster, testbool: bool, weapon: MyGame.Other.Weapon }
/// ```
pub(crate) fn monster_schema() -> Schema {
    let ns = Namespace::dotted("MyGame.Example");
    let mut schema = Schema::new();

    let mut color = EnumDef::new("Color", ns.clone())
        .with_value("Red", 1)
        .with_value("Green", 2)
        .with_value("Blue", 8);
    color.doc.push(" Composite components of Monster color.".to_string());
    schema.add_enum(color);

    let any = schema.add_enum(EnumDef::union("Any", ns.clone()).with_value("Monster", 1));

    let test = schema.add_struct(
        StructDef::fixed("Test", ns.clone(), 4, 2)
            .with_field(FieldDef::new("a", Type::Scalar(ScalarKind::Int16), 0))
            .with_field(FieldDef::new("b", Type::Scalar(ScalarKind::Int8), 2).with_padding(1)),
    );

    let vec3 = schema.add_struct(
        StructDef::fixed("Vec3", ns.clone(), 32, 8)
            .with_field(FieldDef::new("x", Type::Scalar(ScalarKind::Float32), 0))
            .with_field(FieldDef::new("y", Type::Scalar(ScalarKind::Float32), 4))
            .with_field(FieldDef::new("z", Type::Scalar(ScalarKind::Float32), 8).with_padding(4))
            .with_field(FieldDef::new("test1", Type::Scalar(ScalarKind::Float64), 16))
            .with_field(FieldDef::new("test2", Type::Scalar(ScalarKind::Int8), 24).with_padding(1))
            .with_field(FieldDef::new("test3", Type::Struct(test), 26).with_padding(2)),
    );

    let weapon = schema.add_struct(
        StructDef::table("Weapon", Namespace::dotted("MyGame.Other"))
            .with_slot("damage", Type::Scalar(ScalarKind::Int32)),
    );

    let monster_id = StructId(schema.structs.len());
    let slot = |n: usize, name: &str, ty: Type| FieldDef::new(name, ty, field_index_to_offset(n));
    let mut monster = StructDef::table("Monster", ns)
        .with_field(slot(0, "pos", Type::Struct(vec3)))
        .with_field(slot(1, "mana", Type::Scalar(ScalarKind::Int16)).with_default("150"))
        .with_field(slot(2, "hp", Type::Scalar(ScalarKind::Int16)).with_default("100"))
        .with_field(slot(3, "name", Type::String).with_doc(" Display name."))
        .with_field(slot(4, "friendly", Type::Scalar(ScalarKind::Bool)).deprecated())
        .with_field(slot(5, "inventory", Type::vector_of(Type::Scalar(ScalarKind::UInt8))))
        .with_field(slot(6, "color", Type::Scalar(ScalarKind::Int8)).with_default("8"))
        .with_field(slot(7, "test_type", Type::Scalar(ScalarKind::UType)))
        .with_field(slot(8, "test", Type::Union(any)))
        .with_field(slot(9, "test4", Type::vector_of(Type::Struct(test))))
        .with_field(slot(10, "testarrayofstring", Type::vector_of(Type::String)))
        .with_field(slot(11, "testarrayoftables", Type::vector_of(Type::Struct(monster_id))))
        .with_field(slot(12, "enemy", Type::Struct(monster_id)))
        .with_field(slot(13, "testbool", Type::Scalar(ScalarKind::Bool)))
        .with_field(slot(14, "weapon", Type::Struct(weapon)));
    monster.doc.push(" an example documentation comment: monster object".to_string());
    schema.add_struct(monster);

    schema
}

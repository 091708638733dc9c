//! End-to-end finalize behavior on small hand-written schemas.

use rdl_schema::{
    AliasTypeBuilder, ArrayTypeBuilder, MapTypeBuilder, ResourceBuilder, SchemaBuilder,
    SchemaError, StructField, StructTypeBuilder, Type,
};

fn point() -> Type {
    StructTypeBuilder::new("Struct", "Point")
        .field(StructField::new("x", "Int32"))
        .field(StructField::new("y", "Int32"))
        .build()
}

fn line() -> Type {
    StructTypeBuilder::new("Struct", "Line")
        .field(StructField::new("from", "Point"))
        .field(StructField::new("to", "Point"))
        .build()
}

fn lookup() -> Type {
    MapTypeBuilder::new("Map", "Lookup").keys("String").items("Point").build()
}

fn type_names(builder: SchemaBuilder) -> Vec<String> {
    let schema = builder.finalize().expect("schema should finalize");
    schema.types().iter().map(|t| t.name().to_string()).collect()
}

fn position(names: &[String], name: &str) -> usize {
    names.iter().position(|n| n == name).unwrap_or_else(|| panic!("{name} missing from {names:?}"))
}

#[test]
fn test_point_precedes_line() {
    let names = type_names(SchemaBuilder::new("geometry").add_type(line()).add_type(point()));
    assert_eq!(names, ["Point", "Line"]);
}

#[test]
fn test_array_of_base_type_emitted_once() {
    let names = type_names(
        SchemaBuilder::new("lists")
            .add_type(ArrayTypeBuilder::new("Array", "IntList").items("Int32").build()),
    );
    assert_eq!(names, ["IntList"]);
}

#[test]
fn test_map_items_precede_map_in_either_order() {
    let before = type_names(SchemaBuilder::new("m").add_type(point()).add_type(lookup()));
    let after = type_names(SchemaBuilder::new("m").add_type(lookup()).add_type(point()));
    for names in [before, after] {
        assert!(position(&names, "Point") < position(&names, "Lookup"), "{names:?}");
        assert_eq!(names.len(), 2);
    }
}

#[test]
fn test_dangling_field_fails_finalize() {
    let result = SchemaBuilder::new("broken")
        .add_type(
            StructTypeBuilder::new("Struct", "Self")
                .field(StructField::new("other", "Missing"))
                .build(),
        )
        .finalize();
    let err = result.expect_err("dangling reference must fail");
    assert_eq!(
        err,
        SchemaError::DanglingReference { referrer: "Self".into(), reference: "Missing".into() }
    );
    let message = err.to_string();
    assert!(message.contains("Self") && message.contains("Missing"), "{message}");
}

#[test]
fn test_dangling_supertype_fails_finalize() {
    let err = SchemaBuilder::new("broken")
        .add_type(StructTypeBuilder::new("BaseRecord", "Record").build())
        .finalize()
        .unwrap_err();
    assert_eq!(err, SchemaError::dangling("Record", "BaseRecord"));
}

#[test]
fn test_first_offender_in_declaration_order() {
    let err = SchemaBuilder::new("broken")
        .add_type(ArrayTypeBuilder::new("Array", "First").items("Nope1").build())
        .add_type(ArrayTypeBuilder::new("Array", "Second").items("Nope2").build())
        .finalize()
        .unwrap_err();
    assert_eq!(err, SchemaError::dangling("First", "Nope1"));
}

#[test]
fn test_duplicate_type_rejected() {
    let err = SchemaBuilder::new("dup")
        .add_type(point())
        .add_type(line())
        .add_type(point())
        .finalize()
        .unwrap_err();
    assert_eq!(err, SchemaError::DuplicateType { name: "Point".into() });
}

#[test]
fn test_mutual_reference_is_a_cycle() {
    let err = SchemaBuilder::new("loop")
        .add_type(StructTypeBuilder::new("Struct", "A").field(StructField::new("b", "B")).build())
        .add_type(StructTypeBuilder::new("Struct", "B").field(StructField::new("a", "A")).build())
        .finalize()
        .unwrap_err();
    assert_eq!(err, SchemaError::Cycle { path: vec!["A".into(), "B".into(), "A".into()] });
}

#[test]
fn test_supertype_only_cycle() {
    let err = SchemaBuilder::new("loop")
        .add_type(AliasTypeBuilder::new("B", "A").build())
        .add_type(AliasTypeBuilder::new("A", "B").build())
        .finalize()
        .unwrap_err();
    assert_eq!(err, SchemaError::Cycle { path: vec!["A".into(), "B".into(), "A".into()] });
}

#[test]
fn test_last_exception_registration_survives_finalize() {
    let schema = SchemaBuilder::new("svc")
        .add_type(point())
        .add_resource(
            ResourceBuilder::new("Point", "GET", "/points/{id}")
                .exception("NOT_FOUND", "Point", Some("first"))
                .exception("NOT_FOUND", "Line", Some("second"))
                .build(),
        )
        .finalize()
        .unwrap();
    let resource = &schema.resources()[0];
    assert_eq!(resource.exceptions.len(), 1);
    assert_eq!(resource.exceptions["NOT_FOUND"].type_name, "Line");
    assert_eq!(resource.exceptions["NOT_FOUND"].comment.as_deref(), Some("second"));
}

#[test]
fn test_inline_collection_fields_resolve_their_elements() {
    let names = type_names(
        SchemaBuilder::new("inline")
            .add_type(
                StructTypeBuilder::new("Struct", "Drawing")
                    .array_field("lines", "Line")
                    .map_field("anchors", "String", "Point")
                    .build(),
            )
            .add_type(line())
            .add_type(point()),
    );
    assert_eq!(names, ["Point", "Line", "Drawing"]);
}

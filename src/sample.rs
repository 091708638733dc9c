//! A small address-book schema used by the CLI.
//!
//! Types are deliberately declared before the types they depend on.
use rdl_schema::{
    AliasTypeBuilder, ArrayTypeBuilder, EnumTypeBuilder, MapTypeBuilder, NumberTypeBuilder,
    Resource, ResourceAuth, ResourceBuilder, ResourceInput, ResourceOutput, SchemaBuilder,
    StringTypeBuilder, StructField, StructTypeBuilder, Type, UnionTypeBuilder,
};

pub fn sample_types() -> Vec<Type> {
    vec![
        StructTypeBuilder::new("Struct", "ContactList")
            .comment("one page of contacts")
            .array_field("contacts", "Contact")
            .field(StructField::new("next", "PageToken").optional())
            .build(),
        StructTypeBuilder::new("Struct", "Contact")
            .field(StructField::new("id", "ContactId"))
            .field(StructField::new("name", "Name"))
            .field(StructField::array("emails", "Email").optional())
            .field(StructField::new("location", "Point").optional())
            .field(StructField::map("labels", "String", "Label").optional())
            .field(StructField::new("kind", "ContactKind").default_value("PERSON"))
            .field(StructField::new("rating", "Rating").optional())
            .field(StructField::new("created", "Timestamp"))
            .build(),
        MapTypeBuilder::new("Map", "Lookup").keys("String").items("Point").build(),
        StructTypeBuilder::new("Struct", "Line")
            .field(StructField::new("from", "Point"))
            .field(StructField::new("to", "Point"))
            .build(),
        UnionTypeBuilder::new("Union", "Shape").variant("Point").variant("Line").build(),
        StructTypeBuilder::new("Struct", "Point")
            .field(StructField::new("x", "Int32"))
            .field(StructField::new("y", "Int32"))
            .build(),
        ArrayTypeBuilder::new("Array", "IntList").items("Int32").build(),
        StringTypeBuilder::new("String", "ContactId")
            .pattern("[a-z0-9]{8}")
            .comment("opaque contact identifier")
            .build(),
        StringTypeBuilder::new("String", "Name").build(),
        StringTypeBuilder::new("String", "Email").pattern("[^@]+@[^@]+").max_size(254).build(),
        StringTypeBuilder::new("String", "Label").max_size(32).build(),
        NumberTypeBuilder::new("Int8", "Rating").min(0i8).max(5i8).build(),
        EnumTypeBuilder::new("Enum", "ContactKind")
            .element("PERSON")
            .element_with_comment("COMPANY", "an organisation")
            .build(),
        AliasTypeBuilder::new("String", "PageToken").build(),
        StructTypeBuilder::new("Struct", "ResourceError")
            .field(StructField::new("code", "Int32"))
            .field(StructField::new("message", "String"))
            .build(),
    ]
}

pub fn sample_resources() -> Vec<Resource> {
    vec![
        ResourceBuilder::new("Contact", "GET", "/contacts/{id}")
            .name("getContact")
            .input(ResourceInput::new("id", "ContactId").path_param())
            .input(ResourceInput::new("ifNoneMatch", "String").header("If-None-Match").optional())
            .output(ResourceOutput::new("etag", "String").header("ETag"))
            .exception("NOT_FOUND", "ResourceError", Some("no such contact"))
            .build(),
        ResourceBuilder::new("ContactList", "GET", "/contacts")
            .name("listContacts")
            .input(
                ResourceInput::new("limit", "Int32")
                    .query_param("limit")
                    .optional()
                    .default_value(25),
            )
            .input(ResourceInput::new("skip", "PageToken").query_param("skip").optional())
            .auth(ResourceAuth::authenticate())
            .build(),
        ResourceBuilder::new("Contact", "PUT", "/contacts/{id}")
            .name("putContact")
            .comment("create or replace a contact")
            .input(ResourceInput::new("id", "ContactId").path_param())
            .input(ResourceInput::new("contact", "Contact"))
            .auth(ResourceAuth::authorize("update", "contacts").domain("people"))
            .expected("NO_CONTENT")
            .exception("BAD_REQUEST", "ResourceError", None)
            .exception("FORBIDDEN", "ResourceError", Some("caller may not edit contacts"))
            .build(),
    ]
}

/// Registers the sample declarations, optionally in reverse order.
pub fn schema_builder(reverse: bool) -> SchemaBuilder {
    let mut types = sample_types();
    if reverse {
        types.reverse();
    }
    let mut builder = SchemaBuilder::new("contacts")
        .namespace("com.example.contacts")
        .version(1)
        .base("/api/v1")
        .comment("address book service");
    for t in types {
        builder.push_type(t);
    }
    for r in sample_resources() {
        builder.push_resource(r);
    }
    builder
}

//! Dependency ordering for declared types.
//!
//! Depth-first over the name-keyed declarations: before a type is emitted,
//! everything it refers to (supertype, then array items, map items and keys,
//! struct fields, union variants) is emitted first. Base types are resolved
//! from the start and never emitted. Each type carries a mark while it is
//! being visited; meeting that mark again means the references loop back,
//! which is reported as a cycle.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::trace;

use crate::base::{self, BaseType};
use crate::error::{Result, SchemaError};
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Resolved,
}

/// Single-use resolver over one set of declarations.
pub(crate) struct Resolver<'a> {
    types: &'a [Type],
    index: IndexMap<&'a str, usize>,   // name -> position in `types`
    marks: HashMap<&'a str, Mark>,
    stack: Vec<&'a str>,               // names currently being visited
    ordered: Vec<usize>,
}

/// Returns positions into `types` such that every declared type referenced
/// by a type comes before it. Each position appears exactly once.
pub fn resolve_order(types: &[Type]) -> Result<Vec<usize>> {
    let mut resolver = Resolver::new(types)?;
    for position in 0..types.len() {
        resolver.resolve_at(position)?;
    }
    Ok(resolver.finish())
}

impl<'a> Resolver<'a> {
    /// Indexes the declarations, rejecting duplicate names and names taken
    /// from the base types. The first offender in declaration order wins.
    pub(crate) fn new(types: &'a [Type]) -> Result<Self> {
        let mut index = IndexMap::with_capacity(types.len());
        for (i, t) in types.iter().enumerate() {
            let name = t.name();
            if base::is_base_type(name) {
                return Err(SchemaError::reserved(name));
            }
            if index.insert(name, i).is_some() {
                return Err(SchemaError::duplicate(name));
            }
        }

        let mut marks = HashMap::with_capacity(types.len() + BaseType::ALL.len());
        for b in BaseType::ALL {
            marks.insert(b.name(), Mark::Resolved);
        }

        Ok(Self {
            types,
            index,
            marks,
            stack: Vec::new(),
            ordered: Vec::with_capacity(types.len()),
        })
    }

    /// Emits the type declared at `position` after all of its dependencies.
    /// A failed call leaves no `Visiting` marks behind, so the resolver can
    /// be asked again and reports the same error.
    pub(crate) fn resolve_at(&mut self, position: usize) -> Result<()> {
        let types = self.types;
        let result = self.visit(types[position].name(), position);
        if result.is_err() {
            for name in self.stack.drain(..) {
                self.marks.remove(name);
            }
        }
        result
    }

    fn visit(&mut self, name: &'a str, position: usize) -> Result<()> {
        match self.marks.get(name) {
            Some(Mark::Resolved) => return Ok(()),
            Some(Mark::Visiting) => return Err(self.cycle_at(name)),
            None => {}
        }
        let types = self.types;
        let declared = &types[position];

        self.marks.insert(name, Mark::Visiting);
        self.stack.push(name);
        for reference in declared.references() {
            self.resolve_ref(name, reference)?;
        }
        self.stack.pop();

        self.marks.insert(name, Mark::Resolved);
        self.ordered.push(position);
        trace!(type_name = name, position = self.ordered.len() - 1, "resolved type");
        Ok(())
    }

    /// Resolves a bare reference made by `referrer`. Base types return
    /// immediately.
    fn resolve_ref(&mut self, referrer: &'a str, reference: &'a str) -> Result<()> {
        if base::is_base_type(reference) {
            return Ok(());
        }
        match self.index.get(reference) {
            Some(&position) => self.visit(reference, position),
            None => Err(SchemaError::dangling(referrer, reference)),
        }
    }

    fn cycle_at(&self, name: &str) -> SchemaError {
        let start = self.stack.iter().position(|s| *s == name).unwrap_or(0);
        let mut path: Vec<String> =
            self.stack[start..].iter().map(|s| s.to_string()).collect();
        path.push(name.to_string());
        SchemaError::Cycle { path }
    }

    pub(crate) fn finish(self) -> Vec<usize> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{
        AliasTypeBuilder, ArrayTypeBuilder, MapTypeBuilder, StructTypeBuilder,
    };
    use crate::types::StructField;

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

    fn names(types: &[Type], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| types[i].name().to_string()).collect()
    }

    #[test]
    fn dependencies_come_first() {
        let types = vec![line(), point()];
        let order = resolve_order(&types).unwrap();
        assert_eq!(names(&types, &order), ["Point", "Line"]);
    }

    #[test]
    fn map_items_resolve_before_keys() {
        let types = vec![
            MapTypeBuilder::new("Map", "Lookup").keys("Key").items("Point").build(),
            AliasTypeBuilder::new("String", "Key").build(),
            point(),
        ];
        let order = resolve_order(&types).unwrap();
        assert_eq!(names(&types, &order), ["Point", "Key", "Lookup"]);
    }

    #[test]
    fn supertype_chain_resolves_in_order() {
        let types = vec![
            AliasTypeBuilder::new("Middle", "Leaf").build(),
            AliasTypeBuilder::new("Root", "Middle").build(),
            AliasTypeBuilder::new("Int64", "Root").build(),
        ];
        let order = resolve_order(&types).unwrap();
        assert_eq!(names(&types, &order), ["Root", "Middle", "Leaf"]);
    }

    #[test]
    fn derived_struct_resolves_supertype_then_fields() {
        let types = vec![
            StructTypeBuilder::new("Shape", "Segment")
                .field(StructField::new("line", "Line"))
                .build(),
            line(),
            StructTypeBuilder::new("Struct", "Shape").build(),
            point(),
        ];
        let order = resolve_order(&types).unwrap();
        assert_eq!(names(&types, &order), ["Shape", "Point", "Line", "Segment"]);
    }

    #[test]
    fn shared_dependency_is_emitted_once() {
        let types = vec![
            ArrayTypeBuilder::new("Array", "Points").items("Point").build(),
            line(),
            point(),
        ];
        let order = resolve_order(&types).unwrap();
        assert_eq!(names(&types, &order), ["Point", "Points", "Line"]);
    }

    #[test]
    fn dangling_reference_names_both_sides() {
        let types = vec![
            StructTypeBuilder::new("Struct", "Self")
                .field(StructField::new("other", "Missing"))
                .build(),
        ];
        let err = resolve_order(&types).unwrap_err();
        assert_eq!(err, SchemaError::dangling("Self", "Missing"));
    }

    #[test]
    fn dangling_inline_item_is_reported() {
        let types = vec![
            StructTypeBuilder::new("Struct", "Bag")
                .map_field("m", "String", "Nope")
                .build(),
        ];
        assert_eq!(resolve_order(&types).unwrap_err(), SchemaError::dangling("Bag", "Nope"));
    }

    #[test]
    fn cycle_reports_the_loop() {
        let types = vec![
            StructTypeBuilder::new("Struct", "A").field(StructField::new("b", "B")).build(),
            StructTypeBuilder::new("Struct", "B").field(StructField::new("c", "C")).build(),
            StructTypeBuilder::new("Struct", "C").field(StructField::new("b", "B")).build(),
        ];
        let err = resolve_order(&types).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Cycle { path: vec!["B".into(), "C".into(), "B".into()] }
        );
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let types = vec![
            StructTypeBuilder::new("Struct", "Node")
                .field(StructField::new("next", "Node").optional())
                .build(),
        ];
        let err = resolve_order(&types).unwrap_err();
        assert_eq!(err, SchemaError::Cycle { path: vec!["Node".into(), "Node".into()] });
    }

    #[test]
    fn duplicate_and_reserved_names_are_rejected() {
        let types = vec![point(), point()];
        assert_eq!(resolve_order(&types).unwrap_err(), SchemaError::duplicate("Point"));

        let types = vec![AliasTypeBuilder::new("Int32", "String").build()];
        assert_eq!(resolve_order(&types).unwrap_err(), SchemaError::reserved("String"));
    }

    #[test]
    fn failed_resolve_can_be_repeated() {
        let types = vec![
            StructTypeBuilder::new("Struct", "A")
                .field(StructField::new("b", "Missing"))
                .build(),
        ];
        let mut resolver = Resolver::new(&types).unwrap();
        let first = resolver.resolve_at(0).unwrap_err();
        let second = resolver.resolve_at(0).unwrap_err();
        assert_eq!(first, SchemaError::dangling("A", "Missing"));
        assert_eq!(second, first);
        assert!(resolver.stack.is_empty());
    }

    #[test]
    fn failure_deep_in_a_chain_leaves_no_visiting_marks() {
        let types = vec![
            AliasTypeBuilder::new("B", "A").build(),
            AliasTypeBuilder::new("C", "B").build(),
            AliasTypeBuilder::new("Gone", "C").build(),
        ];
        let mut resolver = Resolver::new(&types).unwrap();
        for _ in 0..2 {
            assert_eq!(resolver.resolve_at(0).unwrap_err(), SchemaError::dangling("C", "Gone"));
            assert_eq!(resolver.resolve_at(1).unwrap_err(), SchemaError::dangling("C", "Gone"));
        }
        assert!(!resolver.marks.values().any(|m| *m == Mark::Visiting));
        assert!(resolver.finish().is_empty());
    }

    #[test]
    fn supertype_only_cycle_is_reported() {
        let types = vec![
            AliasTypeBuilder::new("B", "A").build(),
            AliasTypeBuilder::new("A", "B").build(),
        ];
        let err = resolve_order(&types).unwrap_err();
        assert_eq!(
            err,
            SchemaError::Cycle { path: vec!["A".into(), "B".into(), "A".into()] }
        );
    }
}

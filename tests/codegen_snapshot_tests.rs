//! Golden snapshot tests for emitted companion types
//!
//! These tests run the collect → build → emit pipeline over a small type
//! hierarchy and compare the emitted Rust source against stored snapshots.
//! This ensures codegen changes are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use fielder::artifact::ArtifactBuilder;
use fielder::collect::collect;
use fielder::emit::emit_source;
use fielder_model::{TypeDescriptor, TypeKind, TypeUniverse};

/// Build the pets hierarchy used across the snapshot tests.
fn pets_universe() -> TypeUniverse {
    let mut universe = TypeUniverse::new();
    let types = [
        ("pets.Animal", vec!["name", "age"], None),
        ("pets.Dog", vec!["breed"], Some("pets.Animal")),
        ("pets.Cat", vec!["name", "claws"], Some("pets.Animal")),
    ];
    for (qualified, fields, ancestor) in types {
        universe
            .insert(TypeDescriptor::new(
                qualified,
                "pets",
                TypeKind::Class,
                fields.into_iter().map(String::from).collect(),
                ancestor.map(String::from),
            ))
            .unwrap();
    }
    universe
}

/// Emit the companion source for one type in the pets universe.
fn emit_for(qualified: &str, debuggable: bool) -> String {
    let universe = pets_universe();
    let descriptor = universe.get(qualified).expect("type in universe");
    let names = collect(&universe, descriptor).expect("collection succeeds");
    let artifact = ArtifactBuilder::build(descriptor, names, debuggable);
    emit_source(&artifact).expect("emission succeeds")
}

#[test]
fn test_root_type_codegen() {
    let code = emit_for("pets.Animal", true);
    insta::assert_snapshot!("animal_fielder", code);
}

#[test]
fn test_derived_type_codegen() {
    let code = emit_for("pets.Dog", true);
    insta::assert_snapshot!("dog_fielder", code);
}

#[test]
fn test_shadowed_field_codegen() {
    let code = emit_for("pets.Cat", true);
    insta::assert_snapshot!("cat_fielder", code);
}

#[test]
fn test_non_debuggable_codegen() {
    let code = emit_for("pets.Dog", false);
    insta::assert_snapshot!("dog_fielder_no_debug", code);
}

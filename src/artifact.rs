//! Generated-artifact model and builder.
//!
//! An artifact is the abstract description of one generated companion type,
//! produced by [`ArtifactBuilder::build`] and consumed exactly once by the
//! emission backend. Building is a pure transform: no I/O, no state shared
//! between artifacts.

use fielder_model::{FieldNameSet, TypeDescriptor};

/// Fixed suffix appended to the flat source-type name to form the generated
/// companion type's name.
pub const GENERATED_SUFFIX: &str = "_Fielder";

/// Abstract description of one generated companion type.
///
/// Immutable after construction. `source_type` carries the input identity so
/// collision and write diagnostics can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    source_type: String,
    target_package: String,
    generated_type_name: String,
    field_names: FieldNameSet,
    debuggable: bool,
}

impl GeneratedArtifact {
    /// Qualified name of the input type this artifact was generated for.
    pub fn source_type(&self) -> &str {
        &self.source_type
    }

    /// Package the generated type belongs to; empty for default-package inputs.
    pub fn target_package(&self) -> &str {
        &self.target_package
    }

    pub fn generated_type_name(&self) -> &str {
        &self.generated_type_name
    }

    /// Collected field names, frozen in most-derived-first declaration order.
    pub fn field_names(&self) -> &FieldNameSet {
        &self.field_names
    }

    pub fn debuggable(&self) -> bool {
        self.debuggable
    }

    /// The output slot this artifact occupies. Two distinct inputs mapping to
    /// the same slot are a fatal input error detected by the round driver.
    pub fn slot(&self) -> (&str, &str) {
        (&self.target_package, &self.generated_type_name)
    }
}

/// Builder turning a `(descriptor, field names, debuggable)` triple into a
/// [`GeneratedArtifact`].
pub struct ArtifactBuilder;

impl ArtifactBuilder {
    /// Build the artifact description for one input type.
    ///
    /// The generated type name is the flat class name plus [`GENERATED_SUFFIX`]
    /// (non-configurable). The target package is the source type's package;
    /// default-package inputs flatten their whole qualified name into the
    /// generated name instead, so the output stays a valid identifier.
    pub fn build(source_type: &TypeDescriptor, field_names: FieldNameSet, debuggable: bool) -> GeneratedArtifact {
        GeneratedArtifact {
            source_type: source_type.qualified_name().to_string(),
            target_package: source_type.package_name().to_string(),
            generated_type_name: format!("{}{}", source_type.flat_name(), GENERATED_SUFFIX),
            field_names,
            debuggable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fielder_model::TypeKind;

    fn descriptor(qualified: &str, package: &str) -> TypeDescriptor {
        TypeDescriptor::new(qualified, package, TypeKind::Class, vec![], None)
    }

    fn names(items: &[&str]) -> FieldNameSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generated_name_appends_suffix() {
        let artifact = ArtifactBuilder::build(&descriptor("com.example.Animal", "com.example"), names(&[]), true);
        assert_eq!(artifact.generated_type_name(), "Animal_Fielder");
        assert_eq!(artifact.target_package(), "com.example");
        assert_eq!(artifact.source_type(), "com.example.Animal");
    }

    #[test]
    fn test_nested_type_is_flattened() {
        let artifact = ArtifactBuilder::build(&descriptor("com.example.Outer.Inner", "com.example"), names(&[]), true);
        assert_eq!(artifact.generated_type_name(), "Outer_Inner_Fielder");
    }

    #[test]
    fn test_default_package_flattens_qualified_name() {
        let artifact = ArtifactBuilder::build(&descriptor("legacy.Foo", ""), names(&[]), true);
        assert_eq!(artifact.generated_type_name(), "legacy_Foo_Fielder");
        assert_eq!(artifact.target_package(), "");
    }

    #[test]
    fn test_field_names_and_flag_pass_through() {
        let artifact = ArtifactBuilder::build(&descriptor("a.Dog", "a"), names(&["breed", "name"]), false);
        assert_eq!(artifact.field_names().as_slice(), ["breed", "name"]);
        assert!(!artifact.debuggable());
    }

    #[test]
    fn test_slot_combines_package_and_name() {
        let a = ArtifactBuilder::build(&descriptor("a.Foo", "a"), names(&[]), true);
        let b = ArtifactBuilder::build(&descriptor("b.Foo", "b"), names(&[]), true);
        assert_ne!(a.slot(), b.slot());
    }
}

//! Immutable type descriptors and the universe they live in.
//!
//! A [`TypeDescriptor`] is the generator's view of one class in the host's type
//! system: its names, its directly-declared fields, and the qualified name of its
//! direct ancestor. Descriptors never embed their ancestor; the link is resolved
//! through the owning [`TypeUniverse`], which keeps the universe acyclic-checkable
//! and the descriptors plain data.

use std::collections::HashMap;

/// Kind of a described type.
///
/// Only concrete classes take part in field collection; interface-only
/// descriptors may appear in the universe (as ancestors of nothing, or by
/// host mistake) and are rejected at collection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

/// One class in the host's type universe.
///
/// Read-only: the descriptor is owned by the discovery collaborator and the
/// generator never mutates it. Field names are kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    qualified: String,
    package: String,
    kind: TypeKind,
    fields: Vec<String>,
    ancestor: Option<String>,
}

impl TypeDescriptor {
    pub fn new(
        qualified: impl Into<String>,
        package: impl Into<String>,
        kind: TypeKind,
        fields: Vec<String>,
        ancestor: Option<String>,
    ) -> Self {
        Self {
            qualified: qualified.into(),
            package: package.into(),
            kind,
            fields,
            ancestor,
        }
    }

    /// Fully qualified name, e.g. `com.example.pets.Dog`.
    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    /// Package name, possibly empty for default-package types.
    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// Name relative to the package, e.g. `Dog` or `Outer.Inner`.
    ///
    /// For default-package types this is the full qualified name.
    pub fn simple_name(&self) -> &str {
        if self.package.is_empty() {
            return &self.qualified;
        }
        match self
            .qualified
            .strip_prefix(&self.package)
            .and_then(|rest| rest.strip_prefix('.'))
        {
            Some(rest) if !rest.is_empty() => rest,
            // Package does not prefix the qualified name; treat as flat.
            _ => &self.qualified,
        }
    }

    /// Simple name with nested-type separators flattened to `_`.
    ///
    /// `Outer.Inner` becomes `Outer_Inner`; default-package types flatten their
    /// whole qualified name the same way.
    pub fn flat_name(&self) -> String {
        self.simple_name().replace('.', "_")
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    /// Field names declared directly on this type, excluding inherited ones.
    pub fn declared_fields(&self) -> &[String] {
        &self.fields
    }

    /// Qualified name of the direct ancestor, `None` at the root of the chain.
    pub fn ancestor(&self) -> Option<&str> {
        self.ancestor.as_deref()
    }
}

/// A type was inserted twice under the same qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateType {
    pub qualified: String,
}

impl std::fmt::Display for DuplicateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "duplicate type '{}' in universe", self.qualified)
    }
}

impl std::error::Error for DuplicateType {}

/// Insertion-ordered collection of descriptors, indexed by qualified name.
///
/// The universe is built once per processing round by the discovery
/// collaborator and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TypeUniverse {
    types: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

impl TypeUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, preserving insertion order.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Result<(), DuplicateType> {
        if self.index.contains_key(descriptor.qualified_name()) {
            return Err(DuplicateType {
                qualified: descriptor.qualified_name().to_string(),
            });
        }
        self.index.insert(descriptor.qualified_name().to_string(), self.types.len());
        self.types.push(descriptor);
        Ok(())
    }

    /// Look up a descriptor by qualified name.
    pub fn get(&self, qualified: &str) -> Option<&TypeDescriptor> {
        self.index.get(qualified).map(|&i| &self.types[i])
    }

    /// Resolve the direct ancestor of a descriptor, if it names one.
    ///
    /// Returns `None` both at the root of a chain and when the named ancestor
    /// is missing from the universe; callers that must distinguish the two
    /// check [`TypeDescriptor::ancestor`] first.
    pub fn ancestor_of(&self, descriptor: &TypeDescriptor) -> Option<&TypeDescriptor> {
        descriptor.ancestor().and_then(|name| self.get(name))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(qualified: &str, package: &str, fields: &[&str], ancestor: Option<&str>) -> TypeDescriptor {
        TypeDescriptor::new(
            qualified,
            package,
            TypeKind::Class,
            fields.iter().map(|s| s.to_string()).collect(),
            ancestor.map(|s| s.to_string()),
        )
    }

    #[test]
    fn test_simple_name_strips_package() {
        let t = class("com.example.Dog", "com.example", &[], None);
        assert_eq!(t.simple_name(), "Dog");
        assert_eq!(t.flat_name(), "Dog");
    }

    #[test]
    fn test_simple_name_default_package() {
        let t = class("Dog", "", &[], None);
        assert_eq!(t.simple_name(), "Dog");
    }

    #[test]
    fn test_flat_name_nested_type() {
        let t = class("com.example.Outer.Inner", "com.example", &[], None);
        assert_eq!(t.simple_name(), "Outer.Inner");
        assert_eq!(t.flat_name(), "Outer_Inner");
    }

    #[test]
    fn test_flat_name_default_package_qualified() {
        let t = class("legacy.Foo", "", &[], None);
        assert_eq!(t.flat_name(), "legacy_Foo");
    }

    #[test]
    fn test_universe_insert_and_lookup() {
        let mut universe = TypeUniverse::new();
        universe.insert(class("a.Animal", "a", &["name"], None)).unwrap();
        universe
            .insert(class("a.Dog", "a", &["breed"], Some("a.Animal")))
            .unwrap();

        assert_eq!(universe.len(), 2);
        let dog = universe.get("a.Dog").unwrap();
        let parent = universe.ancestor_of(dog).unwrap();
        assert_eq!(parent.qualified_name(), "a.Animal");
    }

    #[test]
    fn test_universe_rejects_duplicates() {
        let mut universe = TypeUniverse::new();
        universe.insert(class("a.Animal", "a", &[], None)).unwrap();
        let err = universe.insert(class("a.Animal", "a", &[], None)).unwrap_err();
        assert_eq!(err.qualified, "a.Animal");
    }

    #[test]
    fn test_universe_preserves_insertion_order() {
        let mut universe = TypeUniverse::new();
        for name in ["z.Zebra", "a.Ant", "m.Mole"] {
            universe.insert(class(name, &name[..1], &[], None)).unwrap();
        }
        let order: Vec<_> = universe.iter().map(|t| t.qualified_name()).collect();
        assert_eq!(order, vec!["z.Zebra", "a.Ant", "m.Mole"]);
    }
}

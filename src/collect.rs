//! Field-name collection over a type's ancestor chain.
//!
//! [`collect`] walks from a descriptor up through its ancestors and
//! accumulates every directly-declared field name into a [`FieldNameSet`],
//! most-derived type first. The walk is a pure function over the immutable
//! universe: no caches, no side effects.
//!
//! ## Notes
//!
//! - Ordering is insertion order of visitation. A name re-declared by an
//!   ancestor (shadowing) keeps the position of its most-derived declaration
//!   and is not duplicated, so two runs on unchanged input are byte-identical.

use std::collections::HashSet;

use thiserror::Error;

use fielder_model::{FieldNameSet, TypeDescriptor, TypeUniverse};

/// Error during field collection for a single input type.
///
/// All variants are per-type: the round skips the offending type, reports it,
/// and continues with the remaining inputs.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("type '{type_name}' has a cyclic ancestor chain (reached '{repeated}' twice)")]
    CyclicHierarchy { type_name: String, repeated: String },

    #[error("type '{type_name}' declares a field with an empty name (position {index})")]
    MalformedField { type_name: String, index: usize },

    #[error("type '{type_name}' names unknown ancestor '{ancestor}'")]
    UnknownAncestor { type_name: String, ancestor: String },

    #[error("type '{type_name}' is not a concrete class")]
    NotAClass { type_name: String },
}

/// Collect the de-duplicated field names reachable from `descriptor` through
/// its ancestor chain.
///
/// ## Errors
///
/// Returns `CollectError::NotAClass` for interface-only descriptors,
/// `CollectError::MalformedField` when a declared field has an empty name,
/// `CollectError::UnknownAncestor` when an ancestor reference does not
/// resolve in the universe, and `CollectError::CyclicHierarchy` when the
/// chain revisits a type instead of terminating.
#[tracing::instrument(skip_all, fields(ty = descriptor.qualified_name()))]
pub fn collect(universe: &TypeUniverse, descriptor: &TypeDescriptor) -> Result<FieldNameSet, CollectError> {
    if !descriptor.is_class() {
        return Err(CollectError::NotAClass {
            type_name: descriptor.qualified_name().to_string(),
        });
    }

    let mut names = FieldNameSet::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = descriptor;

    loop {
        if !visited.insert(current.qualified_name()) {
            return Err(CollectError::CyclicHierarchy {
                type_name: descriptor.qualified_name().to_string(),
                repeated: current.qualified_name().to_string(),
            });
        }

        for (index, field) in current.declared_fields().iter().enumerate() {
            if field.is_empty() {
                return Err(CollectError::MalformedField {
                    type_name: current.qualified_name().to_string(),
                    index,
                });
            }
            if names.insert(field) {
                tracing::trace!(field = %field, declared_on = current.qualified_name(), "adding field");
            }
        }

        let Some(ancestor_name) = current.ancestor() else {
            break;
        };
        current = universe.get(ancestor_name).ok_or_else(|| CollectError::UnknownAncestor {
            type_name: current.qualified_name().to_string(),
            ancestor: ancestor_name.to_string(),
        })?;
    }

    Ok(names)
}

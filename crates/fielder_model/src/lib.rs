//! Provide the shared type-universe vocabulary for the fielder code generator.
//!
//! This crate is intentionally small and dependency-light. It holds the read-only
//! descriptor model supplied by the host build integration and the ordered
//! field-name set accumulated by the collector.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global state, and no generator-specific types.
//! - Descriptors are immutable once loaded; the generator never mutates the universe.

pub mod descriptor;
pub mod names;

pub use descriptor::{DuplicateType, TypeDescriptor, TypeKind, TypeUniverse};
pub use names::FieldNameSet;

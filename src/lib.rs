#![forbid(unsafe_code)]
//! Fielder — field-name companion generator
//!
//! Fielder is a build-time code generator: given a universe of type
//! descriptors supplied by the host build integration, it walks each marked
//! ("fieldable") type's ancestor chain, collects the unique field names
//! declared anywhere in the chain, and emits one generated Rust companion
//! type per input exposing those names as a static list.
//!
//! The pipeline:
//!
//! ```text
//! TypeDiscovery → collect (ancestor walk) → ArtifactBuilder → emit (quote!) → prettyplease → file
//! ```
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?` / `ok_or` / `map_err`; every
//! per-type failure is converted into a diagnostic at the round boundary.
//! `.unwrap()` and `.expect()` are acceptable in tests.

pub mod artifact;
pub mod cli;
pub mod collect;
pub mod diagnostics;
pub mod discovery;
pub mod emit;
pub mod output;
pub mod round;
pub mod version;

pub use artifact::{ArtifactBuilder, GeneratedArtifact};
pub use collect::{CollectError, collect};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use discovery::{Discovered, DiscoveryError, TypeDiscovery, manifest::ManifestDiscovery};
pub use round::{CollectionResult, NameCollisionError, RoundOptions, emit_all, run_round};

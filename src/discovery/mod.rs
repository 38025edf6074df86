//! Type-discovery boundary.
//!
//! The generator never enumerates marked types itself; the host build
//! integration supplies them. This module defines the trait that boundary
//! implements and the error type it reports through.
//!
//! ## Modules
//!
//! - `manifest` - JSON manifest backend (the shipped host integration)

pub mod manifest;

use std::path::PathBuf;

use thiserror::Error;

use fielder_model::TypeUniverse;

/// Errors while loading the type universe.
///
/// Discovery failures abort the round before it starts: without an input
/// universe there is nothing to process.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to read manifest {path}: {cause}")]
    Read {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("failed to parse manifest {path}: {cause}")]
    Parse {
        path: PathBuf,
        #[source]
        cause: serde_json::Error,
    },

    #[error("duplicate type '{name}' in manifest {path}")]
    DuplicateType { path: PathBuf, name: String },
}

/// One round's worth of discovered input.
#[derive(Debug, Clone)]
pub struct Discovered {
    /// Every type the host knows about, ancestors included.
    pub universe: TypeUniverse,
    /// Qualified names of the fieldable types, in discovery order.
    pub fieldable: Vec<String>,
}

/// Host-supplied enumeration of the types to process.
///
/// Implementations own the "which types are marked" question; the core only
/// consumes the resulting universe. This keeps discovery swappable (manifest
/// file today, a build-tool plugin tomorrow) without touching the pipeline.
pub trait TypeDiscovery {
    /// Produce the universe and the ordered fieldable list for one round.
    fn discover(&self) -> Result<Discovered, DiscoveryError>;
}

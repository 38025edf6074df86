//! JSON manifest discovery backend.
//!
//! The manifest is the host build tool's hand-off format: one JSON document
//! listing every type in the universe, with the fieldable ones marked. Entry
//! order is discovery order, which fixes the order of the round's output.
//!
//! Format:
//!
//! ```json
//! {
//!   "types": [
//!     { "name": "com.example.Animal", "fields": ["name", "age"], "fieldable": true },
//!     { "name": "com.example.Dog", "fields": ["breed"], "extends": "com.example.Animal", "fieldable": true }
//!   ]
//! }
//! ```
//!
//! `package` defaults to the dotted prefix of `name`; give it explicitly for
//! nested types. `kind` defaults to `"class"`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use fielder_model::{TypeDescriptor, TypeKind, TypeUniverse};

use super::{Discovered, DiscoveryError, TypeDiscovery};

#[derive(Debug, Deserialize)]
struct Manifest {
    types: Vec<ManifestType>,
}

#[derive(Debug, Deserialize)]
struct ManifestType {
    /// Fully qualified name.
    name: String,
    /// Package; defaults to everything before the last `.` of `name`.
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    kind: ManifestKind,
    /// Field names declared directly on this type, in declaration order.
    #[serde(default)]
    fields: Vec<String>,
    /// Qualified name of the direct ancestor, if any.
    #[serde(default)]
    extends: Option<String>,
    /// Whether this type is marked for companion generation.
    #[serde(default)]
    fieldable: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ManifestKind {
    #[default]
    Class,
    Interface,
}

impl From<ManifestKind> for TypeKind {
    fn from(kind: ManifestKind) -> Self {
        match kind {
            ManifestKind::Class => TypeKind::Class,
            ManifestKind::Interface => TypeKind::Interface,
        }
    }
}

impl ManifestType {
    fn package(&self) -> String {
        match &self.package {
            Some(package) => package.clone(),
            None => self
                .name
                .rsplit_once('.')
                .map(|(prefix, _)| prefix.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Discovery backend reading a JSON manifest from disk.
pub struct ManifestDiscovery {
    path: PathBuf,
}

impl ManifestDiscovery {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Parse manifest text into a round's input, without touching the filesystem.
    pub fn parse(path: &Path, text: &str) -> Result<Discovered, DiscoveryError> {
        let manifest: Manifest = serde_json::from_str(text).map_err(|cause| DiscoveryError::Parse {
            path: path.to_path_buf(),
            cause,
        })?;

        let mut universe = TypeUniverse::new();
        let mut fieldable = Vec::new();

        for entry in &manifest.types {
            let descriptor = TypeDescriptor::new(
                entry.name.clone(),
                entry.package(),
                entry.kind.into(),
                entry.fields.clone(),
                entry.extends.clone(),
            );
            universe.insert(descriptor).map_err(|dup| DiscoveryError::DuplicateType {
                path: path.to_path_buf(),
                name: dup.qualified,
            })?;
            if entry.fieldable {
                fieldable.push(entry.name.clone());
            }
        }

        tracing::debug!(
            types = universe.len(),
            fieldable = fieldable.len(),
            "loaded type universe"
        );
        Ok(Discovered { universe, fieldable })
    }
}

impl TypeDiscovery for ManifestDiscovery {
    #[tracing::instrument(skip_all, fields(path = %self.path.display()))]
    fn discover(&self) -> Result<Discovered, DiscoveryError> {
        let text = fs::read_to_string(&self.path).map_err(|cause| DiscoveryError::Read {
            path: self.path.clone(),
            cause,
        })?;
        Self::parse(&self.path, &text)
    }
}

//! One processing round: collect, build, scan for collisions, emit.
//!
//! The round driver is the per-type error boundary. Every collection or
//! emission failure is converted into a diagnostic against the offending
//! input type; one type's failure never aborts the others. Rounds are
//! stateless: each starts from empty accumulated state and nothing is cached
//! for the next invocation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use fielder_model::TypeUniverse;

use crate::artifact::{ArtifactBuilder, GeneratedArtifact};
use crate::collect;
use crate::diagnostics::Diagnostics;
use crate::emit;
use crate::output;

/// Option key controlling debug scaffolding on generated types.
pub const OPTION_DEBUGGABLE: &str = "fielder.debuggable";

/// Configuration for one round, parsed from host-supplied option strings.
#[derive(Debug, Clone)]
pub struct RoundOptions {
    /// Whether generated types carry debug scaffolding. Default `true`.
    pub debuggable: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self { debuggable: true }
    }
}

impl RoundOptions {
    /// Parse options from `key=value` pairs.
    ///
    /// Only the exact, case-sensitive value `"false"` for [`OPTION_DEBUGGABLE`]
    /// disables debug scaffolding; any other value (or its absence) keeps it
    /// enabled.
    pub fn from_options(options: &HashMap<String, String>) -> Self {
        Self {
            debuggable: options.get(OPTION_DEBUGGABLE).map(|v| v != "false").unwrap_or(true),
        }
    }
}

/// Two or more distinct input types mapped to the same generated-type slot.
///
/// Fatal for the whole colliding set: every member is rejected from emission
/// and the error is reported once per member, naming all of them.
#[derive(Debug, Error)]
#[error("generated type name '{generated}' collides across types {}; not emitted", .sources.join(", "))]
pub struct NameCollisionError {
    pub generated: String,
    /// Qualified names of every input in the colliding set, discovery order.
    pub sources: Vec<String>,
}

/// Artifacts of one round, ordered by discovery order of the inputs.
#[derive(Debug, Clone, Default)]
pub struct CollectionResult {
    artifacts: Vec<GeneratedArtifact>,
}

impl CollectionResult {
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter()
    }

    pub fn get(&self, source_type: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.source_type() == source_type)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Run collection and artifact building for every fieldable type.
///
/// `fieldable` lists qualified names in discovery order; that order is
/// preserved in the result regardless of how the per-type work is scheduled.
/// Failures become error diagnostics; the result only contains artifacts that
/// survived both collection and the collision scan.
#[tracing::instrument(skip_all, fields(inputs = fieldable.len()))]
pub fn run_round(
    universe: &TypeUniverse,
    fieldable: &[String],
    options: &RoundOptions,
    diagnostics: &mut Diagnostics,
) -> CollectionResult {
    diagnostics.note(None, format!("processing {} fieldable type(s)", fieldable.len()));

    let mut artifacts = Vec::new();
    for name in fieldable {
        let Some(descriptor) = universe.get(name) else {
            diagnostics.error(Some(name.as_str()), "fieldable type missing from universe");
            continue;
        };

        match collect::collect(universe, descriptor) {
            Ok(names) => {
                diagnostics.note(Some(name.as_str()), format!("collected {} field name(s)", names.len()));
                artifacts.push(ArtifactBuilder::build(descriptor, names, options.debuggable));
            }
            Err(err) => {
                diagnostics.error(Some(name.as_str()), err.to_string());
            }
        }
    }

    reject_collisions(artifacts, diagnostics)
}

/// Scan built artifacts for generated-name collisions and reject every member
/// of a colliding set.
///
/// Runs after all artifacts are built so the outcome is deterministic under
/// any per-type scheduling.
fn reject_collisions(artifacts: Vec<GeneratedArtifact>, diagnostics: &mut Diagnostics) -> CollectionResult {
    let mut occupants: HashMap<(String, String), Vec<String>> = HashMap::new();
    for artifact in &artifacts {
        let (package, name) = artifact.slot();
        occupants
            .entry((package.to_string(), name.to_string()))
            .or_default()
            .push(artifact.source_type().to_string());
    }

    let survivors = artifacts
        .into_iter()
        .filter(|artifact| {
            let (package, name) = artifact.slot();
            let sources = &occupants[&(package.to_string(), name.to_string())];
            if sources.len() > 1 {
                let err = NameCollisionError {
                    generated: artifact.generated_type_name().to_string(),
                    sources: sources.clone(),
                };
                diagnostics.error(Some(artifact.source_type()), err.to_string());
                false
            } else {
                true
            }
        })
        .collect();

    CollectionResult { artifacts: survivors }
}

/// Emit every artifact in the result beneath `out_root`.
///
/// Write failures are reported per-artifact; the remaining artifacts still
/// attempt emission. Returns the paths written.
#[tracing::instrument(skip_all, fields(artifacts = result.len()))]
pub fn emit_all(result: &CollectionResult, out_root: &Path, diagnostics: &mut Diagnostics) -> Vec<PathBuf> {
    let mut written = Vec::new();
    for artifact in result.iter() {
        let code = match emit::emit_source(artifact) {
            Ok(code) => code,
            Err(err) => {
                diagnostics.error(Some(artifact.source_type()), err.to_string());
                continue;
            }
        };
        match output::write_artifact(out_root, artifact, &code) {
            Ok(path) => written.push(path),
            Err(err) => diagnostics.error(Some(artifact.source_type()), err.to_string()),
        }
    }
    written
}

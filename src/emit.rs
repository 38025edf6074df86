//! Emit a generated artifact to formatted Rust source.
//!
//! The companion type is built as a token stream, parsed with `syn`, and
//! formatted with `prettyplease`; the machine-generated header is prepended
//! afterwards (comments cannot travel through tokens).
//!
//! ## Notes
//!
//! - Emission is codegen-only: it does not read/write files. Persisting the
//!   source is the writer's job ([`crate::output`]).
//! - The generated shape is a unit struct carrying one constant slice plus a
//!   read accessor; no mutation API is exposed. `debuggable` adds a `Display`
//!   impl rendering `Name[field, field, ...]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use thiserror::Error;

use crate::artifact::GeneratedArtifact;
use crate::version::FIELDER_VERSION;

/// Error during artifact emission.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("syn parse error: {0}")]
    SynParse(String),
}

/// Emit one artifact to a complete, formatted Rust source file.
#[tracing::instrument(skip_all, fields(ty = artifact.generated_type_name()))]
pub fn emit_source(artifact: &GeneratedArtifact) -> Result<String, EmitError> {
    let tokens = artifact_tokens(artifact);
    let syntax_tree = syn::parse2(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
    let formatted = prettyplease::unparse(&syntax_tree);

    let header = format!("// Generated by fielder v{}. Do not modify!\n\n", FIELDER_VERSION);
    Ok(format!("{}{}", header, formatted))
}

/// Emit an artifact to a token stream (without formatting).
fn artifact_tokens(artifact: &GeneratedArtifact) -> TokenStream {
    let type_ident = format_ident!("{}", artifact.generated_type_name());
    let fields = artifact.field_names().iter();

    let mut tokens = quote! {
        #![allow(non_camel_case_types)]
        pub struct #type_ident;
        impl #type_ident {
            pub const FIELDS: &'static [&'static str] = &[#(#fields),*];
            pub fn fields() -> &'static [&'static str] {
                Self::FIELDS
            }
        }
    };

    if artifact.debuggable() {
        let open = format!("{}[", artifact.generated_type_name());
        tokens.extend(quote! {
            impl std::fmt::Display for #type_ident {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(#open)?;
                    f.write_str(&Self::FIELDS.join(", "))?;
                    f.write_str("]")
                }
            }
        });
    }

    tokens
}

#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the crafter workspace.
//!
//! Every crate in the workspace declares exactly one error enum, and all of them
//! share the same shape: named fields, an optional `context` annotation and an
//! optional upstream `source`. [`crafter_error`] generates the glue around that shape.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! crafter-derive = { path = "../infra/derive" }
//! thiserror = "2"
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for crate-level error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant that wraps a source.
/// * `From<SourceError>` for every variant with a `source` field
///   (or a field marked `#[source]` / `#[from]`).
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * `kind(&self) -> &'static str`, the variant name, for structured log fields.
/// * A private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field must have type `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use crafter_derive::crafter_error;
/// use std::borrow::Cow;
///
/// #[crafter_error]
/// pub enum ImportError {
///     #[error("Malformed JSON{}: {source}", format_context(.context))]
///     Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal import error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(text: &str) -> Result<serde_json::Value, ImportError> {
///     serde_json::from_str(text).context("Reading pasted options")
/// }
/// ```
#[proc_macro_attribute]
pub fn crafter_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}

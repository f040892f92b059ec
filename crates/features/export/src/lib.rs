//! # Export
//!
//! Turns a full [`Options`](crafter_domain::Options) value into the document users copy,
//! download or hand to a generator. The export keeps only the fields whose gates are
//! open and never contains an enable flag.
//!
//! The decision for each key is data-driven (see [`compiler::omission`]):
//!
//! 1. internal markers (`use_*`, `extended_*`) are dropped;
//! 2. a value field is dropped when its flag from the flag map is not `true`;
//! 3. compound [gating rules](crafter_domain::gating::GATING_RULES) drop field groups
//!    unless all of their flags are `true`;
//! 4. `image_count` is never exported;
//! 5. remaining `false` booleans are dropped.
//!
//! Key order is the declaration order of the schema.
//!
//! ```rust
//! use crafter_domain::Options;
//! use crafter_export::generate_output;
//!
//! let options = Options { prompt: "a quiet harbor".to_owned(), ..Options::default() };
//! let json = generate_output(&options).unwrap();
//! assert!(json.starts_with("{\n  \"prompt\": \"a quiet harbor\""));
//! assert!(!json.contains("use_"));
//! ```

pub mod compiler;
mod error;

pub use crate::compiler::{Omission, compile, generate_output, generate_output_compact, omission};
pub use crate::error::{ExportError, ExportErrorExt};

//! # Import
//!
//! Rebuilds a full, validated [`Options`](crafter_domain::Options) value from input the
//! tool does not control: pasted or uploaded JSON ([`loader`]), `--field value` pairs
//! ([`arguments`]) and multi-document files ([`bulk`]).
//!
//! Every path runs the same pipeline: reserved-key stripping, strict validation,
//! normalization, flag forcing, then a merge onto the defaults. A failure never yields a
//! partially applied result.

pub mod arguments;
pub mod bulk;
mod error;
pub mod loader;

pub use crate::arguments::options_from_args;
pub use crate::bulk::{BulkImport, import_bulk, split_bulk_payload};
pub use crate::error::{ImportError, ImportErrorExt};
pub use crate::loader::{load_options_from_json, reconstruct_from_value, reconstruct_options};

//! # Domain Models
//!
//! Pure data for the crafter workspace: the option schema, the flag map, the export
//! gating rules, the built-in preset catalogs and the application config model.
//! Keep it lean: no I/O and no logging, only data and lookups over it.

pub mod config;
pub mod flags;
pub mod gating;
pub mod options;
pub mod presets;

pub use options::{FIELDS, FieldKind, FieldSpec, Options, PartialOptions, StylePreset};

//! Kernel utilities shared across the feature crates.
//!
//! * [`validation`]: strict structural validation of untrusted option objects and the
//!   typed intake used by every import path.
//! * [`security`]: reserved-key stripping.
//! * [`config`]: layered config loading (file + `CRAFTER__*` environment).
//!
//! ```rust
//! use crafter_kernel::validation::is_valid_options;
//! use serde_json::json;
//!
//! assert!(is_valid_options(&json!({ "prompt": "hi", "steps": 10 })));
//! assert!(!is_valid_options(&json!({ "steps": "ten" })));
//! ```
pub mod config;
pub mod security;
pub mod validation;

pub use crafter_domain as domain;

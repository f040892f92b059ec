//! Facade crate for the crafter option pipeline.
//! Re-exports domain/kernel primitives and the feature slices (export, import, share,
//! presets). Keep this crate thin: it composes other crates, it does not implement
//! business logic.
//!
//! ## Usage
//! ```rust
//! let options = crafter::import::reconstruct_options(r#"{"prompt":"a lighthouse"}"#).unwrap();
//! let json = crafter::export::generate_output(&options).unwrap();
//! assert!(json.contains("a lighthouse"));
//! assert_eq!(crafter::share::decode(&crafter::share::encode(&options)), Some(options));
//! ```

pub use crafter_domain as domain;
pub use crafter_kernel as kernel;

/// Feature slices.
pub use crafter_export as export;
pub use crafter_import as import;
#[cfg(feature = "presets")]
pub use crafter_presets as presets;
pub use crafter_share as share;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled slices (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "export",
        "import",
        "share",
        #[cfg(feature = "presets")]
        "presets",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

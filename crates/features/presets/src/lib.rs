//! # Presets
//!
//! In-memory preset catalogs (style, camera, location and D&D option lists) and the
//! additive merge that extends them from bundles:
//!
//! ```json
//! { "stylePresets": { "Photography": ["tilt-shift"] }, "cameraPresets": { "lensTypeOptions": ["pinhole"] } }
//! ```
//!
//! Merging never removes or reorders entries. Bundles can come from JSON values, text,
//! files or URLs ([`PresetLoader`]).
//!
//! ```rust
//! use crafter_domain::presets::PresetGroup;
//! use crafter_presets::PresetLibrary;
//!
//! let mut library = PresetLibrary::builtin();
//! let report = library
//!     .import_str(r#"{ "stylePresets": { "Cat": ["existing", "new"] } }"#)
//!     .unwrap();
//! assert_eq!(report.added, 2);
//! assert_eq!(library.catalog(PresetGroup::Style, "Cat").map(<[String]>::len), Some(2));
//! ```

mod error;
mod library;
mod loader;

pub use crate::error::{PresetError, PresetErrorExt};
pub use crate::library::{Catalog, Catalogs, MergeReport, PresetBundle, PresetLibrary};
pub use crate::loader::{PresetLoader, load_file};

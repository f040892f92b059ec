use crate::error::{PresetError, PresetErrorExt};
use crafter_domain::presets::{CatalogSeed, PresetGroup};
use crafter_kernel::validation::describe;
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// A named list of selectable strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub name: String,
    pub entries: Vec<String>,
}

/// Catalogs of one group, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs(Vec<Catalog>);

/// What one bundle import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Entries appended across all catalogs.
    pub added: usize,
    /// Style categories that did not exist before.
    pub created: Vec<String>,
    /// Unknown groups and catalog names, as `group` or `group.catalog`.
    pub ignored: Vec<String>,
    /// Leaves that were not string arrays, as `group` or `group.catalog`.
    pub skipped: Vec<String>,
}

/// Snapshot of every catalog, shaped like an importable bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetBundle {
    groups: BTreeMap<PresetGroup, Catalogs>,
}

/// The in-memory preset catalogs, seeded from the built-in data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetLibrary {
    groups: BTreeMap<PresetGroup, Catalogs>,
}

impl Catalogs {
    fn seeded(seeds: &[CatalogSeed]) -> Self {
        Self(
            seeds
                .iter()
                .map(|(name, entries)| Catalog {
                    name: (*name).to_owned(),
                    entries: entries.iter().map(|entry| (*entry).to_owned()).collect(),
                })
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Catalog> {
        self.0.iter().find(|catalog| catalog.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|catalog| catalog.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }
}

impl PresetLibrary {
    /// A library holding only the built-in catalogs.
    #[must_use]
    pub fn builtin() -> Self {
        let groups =
            PresetGroup::iter().map(|group| (group, Catalogs::seeded(group.builtin()))).collect();
        Self { groups }
    }

    /// Drops every imported entry.
    pub fn reset(&mut self) {
        *self = Self::builtin();
        debug!("Preset catalogs reset to built-in data");
    }

    #[must_use]
    pub fn group(&self, group: PresetGroup) -> &Catalogs {
        static EMPTY: Catalogs = Catalogs(Vec::new());
        self.groups.get(&group).unwrap_or(&EMPTY)
    }

    #[must_use]
    pub fn catalog(&self, group: PresetGroup, name: &str) -> Option<&[String]> {
        self.group(group).get(name).map(|catalog| catalog.entries.as_slice())
    }

    /// Merges a bundle into the catalogs.
    ///
    /// Existing entries keep their order; supplied values are appended in order unless
    /// already present. Unknown groups and unknown camera, location or D&D catalog names
    /// are ignored, unknown style categories are created, and leaves that are not string
    /// arrays are skipped.
    ///
    /// # Errors
    /// [`PresetError::NotAnObject`] when `bundle` is not a JSON object. Nothing is merged.
    pub fn import_bundle(&mut self, bundle: &Value) -> Result<MergeReport, PresetError> {
        let Value::Object(groups) = bundle else {
            return Err(PresetError::NotAnObject { found: describe(bundle), context: None });
        };

        let mut report = MergeReport::default();
        for (key, catalogs) in groups {
            let Ok(group) = PresetGroup::from_str(key) else {
                debug!(group = %key, "Unknown preset group ignored");
                report.ignored.push(key.clone());
                continue;
            };
            let Value::Object(catalogs) = catalogs else {
                warn!(group = %key, found = describe(catalogs), "Preset group skipped");
                report.skipped.push(key.clone());
                continue;
            };

            let target = self.groups.entry(group).or_default();
            for (name, entries) in catalogs {
                let path = format!("{key}.{name}");
                let Some(values) = string_array(entries) else {
                    warn!(catalog = %path, found = describe(entries), "Preset leaf skipped");
                    report.skipped.push(path);
                    continue;
                };

                let index = match target.position(name) {
                    Some(index) => index,
                    None if group.accepts_new_catalogs() => {
                        report.created.push(name.clone());
                        target.0.push(Catalog { name: name.clone(), entries: Vec::new() });
                        target.0.len() - 1
                    },
                    None => {
                        debug!(catalog = %path, "Unknown preset catalog ignored");
                        report.ignored.push(path);
                        continue;
                    },
                };

                let catalog = &mut target.0[index];
                for value in values {
                    if !catalog.entries.iter().any(|entry| entry == value) {
                        catalog.entries.push(value.to_owned());
                        report.added += 1;
                    }
                }
            }
        }

        debug!(
            added = report.added,
            created = report.created.len(),
            skipped = report.skipped.len(),
            "Preset bundle merged"
        );
        Ok(report)
    }

    /// [`import_bundle`](Self::import_bundle) for JSON text.
    ///
    /// # Errors
    /// [`PresetError::Json`] for unparsable text, otherwise see `import_bundle`.
    pub fn import_str(&mut self, text: &str) -> Result<MergeReport, PresetError> {
        let bundle = serde_json::from_str::<Value>(text).context("Parsing preset bundle")?;
        self.import_bundle(&bundle)
    }

    /// Current catalogs, in the shape [`import_bundle`](Self::import_bundle) accepts.
    #[must_use]
    pub fn export(&self) -> PresetBundle {
        PresetBundle { groups: self.groups.clone() }
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PresetBundle {
    #[must_use]
    pub fn group(&self, group: PresetGroup) -> Option<&Catalogs> {
        self.groups.get(&group)
    }
}

fn string_array(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}

// --- Serialize ---

impl Serialize for Catalogs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|catalog| (&catalog.name, &catalog.entries)))
    }
}

impl Serialize for PresetBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.groups.iter().map(|(group, catalogs)| (group.as_ref(), catalogs)))
    }
}

//! Compound export rules that need more than one flag.

/// Key prefixes of internal markers; such keys never reach the export.
pub const INTERNAL_PREFIXES: &[&str] = &["use_", "extended_"];

/// Fields dropped from every export.
pub const ALWAYS_OMITTED: &[&str] = &["image_count"];

/// `fields` are exported only while every flag in `requires` is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatingRule {
    pub name: &'static str,
    pub fields: &'static [&'static str],
    pub requires: &'static [&'static str],
}

const DND_FIELDS: &[&str] = &[
    "dnd_character_race",
    "dnd_character_class",
    "dnd_character_background",
    "dnd_character_alignment",
    "dnd_monster_type",
    "dnd_environment",
    "dnd_magic_school",
    "dnd_item_type",
];

pub const GATING_RULES: &[GatingRule] = &[
    GatingRule {
        name: "dimensions",
        fields: &["width", "height"],
        requires: &["use_dimensions_format", "use_dimensions"],
    },
    GatingRule {
        name: "material",
        fields: &["made_out_of", "secondary_material"],
        requires: &["use_material"],
    },
    GatingRule {
        name: "secondary_material",
        fields: &["secondary_material"],
        requires: &["use_material", "use_secondary_material"],
    },
    GatingRule {
        name: "camera_composition",
        fields: &["lens_type"],
        requires: &["use_camera_composition", "use_lens_type"],
    },
    GatingRule {
        name: "motion",
        fields: &["duration_seconds"],
        requires: &["use_motion_animation", "use_duration"],
    },
    GatingRule {
        name: "enhancement_safety",
        fields: &["upscale", "safety_filter", "quality_booster"],
        requires: &["use_enhancement_safety"],
    },
    GatingRule {
        name: "face_enhancements",
        fields: &["subject_gender", "makeup_style", "character_mood"],
        requires: &["use_face_enhancements"],
    },
    GatingRule {
        name: "settings_location",
        fields: &["environment", "location", "time_of_year", "season", "atmosphere_mood"],
        requires: &["use_settings_location"],
    },
    GatingRule { name: "dnd_section", fields: DND_FIELDS, requires: &["use_dnd_section"] },
];

/// Whether `key` is an internal marker.
#[must_use]
pub fn is_internal(key: &str) -> bool {
    INTERNAL_PREFIXES.iter().any(|prefix| key.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_markers_are_recognised() {
        assert!(is_internal("use_dnd_section"));
        assert!(is_internal("extended_fps"));
        assert!(!is_internal("user_prompt_prefix"));
        assert!(!is_internal("fps"));
    }

    #[test]
    fn dnd_rule_covers_all_eight_fields() {
        let rule = GATING_RULES.iter().find(|rule| rule.name == "dnd_section").unwrap();
        assert_eq!(rule.fields.len(), 8);
        assert!(rule.fields.iter().all(|field| field.starts_with("dnd_")));
    }
}

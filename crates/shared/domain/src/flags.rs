//! Which enable flag gates which value field.

/// `(value_field, enable_flag)` pairs. A value field is exported only while its flag is `true`.
pub const OPTION_FLAG_MAP: &[(&str, &str)] = &[
    ("negative_prompt", "use_negative_prompt"),
    ("width", "use_dimensions_format"),
    ("height", "use_dimensions_format"),
    ("aspect_ratio", "use_dimensions_format"),
    ("output_format", "use_dimensions_format"),
    ("dynamic_range", "use_dimensions_format"),
    ("style_preset", "use_style_preset"),
    ("made_out_of", "use_material"),
    ("secondary_material", "use_secondary_material"),
    ("lighting", "use_lighting"),
    ("color_grade", "use_color_grading"),
    ("environment", "use_environment"),
    ("location", "use_location"),
    ("time_of_year", "use_time_of_year"),
    ("year", "use_settings_location"),
    ("season", "use_season"),
    ("atmosphere_mood", "use_atmosphere_mood"),
    ("subject_mood", "use_subject_mood"),
    ("sword_type", "use_sword_type"),
    ("sword_vibe", "use_sword_type"),
    ("upscale", "use_upscale_factor"),
    ("safety_filter", "use_safety_filter"),
    ("quality_booster", "use_quality_booster"),
    ("prevent_deformities", "use_enhancement_safety"),
    ("keep_typography_details", "use_enhancement_safety"),
    ("enhance_object_reflections", "use_enhancement_safety"),
    ("keep_key_details", "use_enhancement_safety"),
    ("add_same_face", "use_face_enhancements"),
    ("dont_change_face", "use_face_enhancements"),
    ("subject_gender", "use_subject_gender"),
    ("makeup_style", "use_makeup_style"),
    ("character_mood", "use_character_mood"),
    ("black_and_white_preset", "use_black_and_white"),
    ("special_effects", "use_special_effects"),
    ("lut_preset", "use_lut_preset"),
    ("dnd_character_race", "use_dnd_character_race"),
    ("dnd_character_class", "use_dnd_character_class"),
    ("dnd_character_background", "use_dnd_character_background"),
    ("dnd_character_alignment", "use_dnd_character_alignment"),
    ("dnd_monster_type", "use_dnd_monster_type"),
    ("dnd_environment", "use_dnd_environment"),
    ("dnd_magic_school", "use_dnd_magic_school"),
    ("dnd_item_type", "use_dnd_item_type"),
    ("camera_angle", "use_camera_composition"),
    ("shot_type", "use_camera_composition"),
    ("subject_focus", "use_camera_composition"),
    ("composition_rules", "use_camera_composition"),
    ("camera_type", "use_camera_composition"),
    ("lens_type", "use_lens_type"),
    ("aperture", "use_aperture"),
    ("depth_of_field", "use_dof"),
    ("blur_style", "use_blur_style"),
    ("motion_strength", "use_motion_animation"),
    ("camera_motion", "use_motion_animation"),
    ("motion_direction", "use_motion_animation"),
    ("fps", "use_motion_animation"),
    ("frame_interpolation", "use_motion_animation"),
    ("duration_seconds", "use_duration"),
    ("seed", "use_core_settings"),
    ("steps", "use_core_settings"),
    ("guidance_scale", "use_core_settings"),
    ("temperature", "use_core_settings"),
    ("cfg_rescale", "use_core_settings"),
    ("quality", "use_core_settings"),
    ("signature", "use_signature"),
];

/// How a [`PresenceRule`] matches field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePattern {
    Prefix(&'static str),
    Exact(&'static [&'static str]),
}

impl NamePattern {
    #[must_use]
    pub fn matches(self, field: &str) -> bool {
        match self {
            Self::Prefix(prefix) => field.starts_with(prefix),
            Self::Exact(names) => names.contains(&field),
        }
    }
}

/// Forces `flag` on import whenever a field matching `pattern` is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceRule {
    pub pattern: NamePattern,
    pub flag: &'static str,
}

pub const PRESENCE_RULES: &[PresenceRule] = &[
    PresenceRule { pattern: NamePattern::Prefix("dnd_"), flag: "use_dnd_section" },
    PresenceRule { pattern: NamePattern::Exact(&["width", "height"]), flag: "use_dimensions" },
];

/// Enable flag of a value field, if it has one.
#[must_use]
pub fn flag_for(field: &str) -> Option<&'static str> {
    OPTION_FLAG_MAP.iter().find(|(name, _)| *name == field).map(|(_, flag)| *flag)
}

/// Every flag that the presence of `field` switches on during import.
pub fn forced_flags(field: &str) -> impl Iterator<Item = &'static str> + '_ {
    flag_for(field).into_iter().chain(
        PRESENCE_RULES.iter().filter(move |rule| rule.pattern.matches(field)).map(|rule| rule.flag),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_group_flags() {
        assert_eq!(flag_for("fps"), Some("use_motion_animation"));
        assert_eq!(flag_for("seed"), Some("use_core_settings"));
        assert_eq!(flag_for("prompt"), None);
    }

    #[test]
    fn width_forces_both_dimension_flags() {
        let flags: Vec<_> = forced_flags("width").collect();
        assert_eq!(flags, ["use_dimensions_format", "use_dimensions"]);
    }

    #[test]
    fn dnd_fields_force_the_section_flag() {
        let flags: Vec<_> = forced_flags("dnd_magic_school").collect();
        assert_eq!(flags, ["use_dnd_magic_school", "use_dnd_section"]);
    }
}

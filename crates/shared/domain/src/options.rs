//! The option schema.
//!
//! Every field is declared exactly once in [`options_schema!`] with its Rust type and
//! default. The macro expands that single declaration into:
//!
//! * [`Options`]: the full configuration, every field always present;
//! * [`PartialOptions`]: the same fields, each optional, used as the typed target of
//!   untrusted input;
//! * [`FIELDS`]: the field table in declaration order, which is also the serialized
//!   key order of [`Options`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JSON shape a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    /// Non-negative integer that fits in `u32`; whole floats such as `30.0` count.
    Integer,
    /// Integer that fits in `i32`; whole floats count.
    SignedInteger,
    /// Any finite JSON number.
    Number,
    Boolean,
    /// `null` or an integer that fits in `i64` (negative seeds included).
    NullableInteger,
    TextList,
    /// `{ "category": string, "style": string }`, no other keys.
    StylePreset,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::SignedInteger => "signed integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::NullableInteger => "integer or null",
            Self::TextList => "list of text",
            Self::StylePreset => "style preset",
        }
    }
}

/// One entry of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Ties a Rust field type to its [`FieldKind`] and, for booleans, exposes it as a flag.
pub trait FieldValue {
    const KIND: FieldKind;

    fn as_flag(&self) -> Option<bool> {
        None
    }

    /// Writes `value` when the field is a boolean; returns whether it was.
    fn set_flag(&mut self, _value: bool) -> bool {
        false
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn as_flag(&self) -> Option<bool> {
        Some(*self)
    }

    fn set_flag(&mut self, value: bool) -> bool {
        *self = value;
        true
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Text;
}

impl FieldValue for u32 {
    const KIND: FieldKind = FieldKind::Integer;
}

impl FieldValue for i32 {
    const KIND: FieldKind = FieldKind::SignedInteger;
}

impl FieldValue for f64 {
    const KIND: FieldKind = FieldKind::Number;
}

impl FieldValue for Option<i64> {
    const KIND: FieldKind = FieldKind::NullableInteger;
}

impl FieldValue for Vec<String> {
    const KIND: FieldKind = FieldKind::TextList;
}

impl FieldValue for StylePreset {
    const KIND: FieldKind = FieldKind::StylePreset;
}

/// Selected entry of the style catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylePreset {
    pub category: String,
    pub style: String,
}

impl StylePreset {
    pub fn new(category: impl Into<String>, style: impl Into<String>) -> Self {
        Self { category: category.into(), style: style.into() }
    }
}

/// Writes whole floats as integers (`7`, not `7.0`).
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation, clippy::float_cmp)]
fn compact_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

    if value.is_finite() && value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Maps a present key to `Some`, so `"seed": null` becomes `Some(None)` rather than `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

macro_rules! options_schema {
    ($( $(#[$attr:meta])* $name:ident : $ty:ty = $default:expr ),* $(,)?) => {
        /// A full configuration. Deserializing fills missing keys from [`Options::default`]
        /// and rejects unknown ones.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct Options {
            $( $(#[$attr])* pub $name: $ty, )*
        }

        impl Default for Options {
            fn default() -> Self {
                Self { $( $name: $default, )* }
            }
        }

        /// Any subset of [`Options`]. A `None` field was absent from the input.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct PartialOptions {
            $(
                #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
                pub $name: Option<$ty>,
            )*
        }

        /// Every schema field in declaration order.
        pub const FIELDS: &[FieldSpec] = &[
            $( FieldSpec { name: stringify!($name), kind: <$ty as FieldValue>::KIND }, )*
        ];

        impl Options {
            /// Overwrites every field present in `partial`.
            pub fn apply(&mut self, partial: PartialOptions) {
                $( if let Some(value) = partial.$name { self.$name = value; } )*
            }

            /// Value of a boolean field, `None` for unknown or non-boolean names.
            #[must_use]
            pub fn flag(&self, name: &str) -> Option<bool> {
                $( if name == stringify!($name) { return FieldValue::as_flag(&self.$name); } )*
                None
            }

            /// Sets a boolean field by name; returns `false` when `name` is not one.
            pub fn set_flag(&mut self, name: &str, value: bool) -> bool {
                $( if name == stringify!($name) { return FieldValue::set_flag(&mut self.$name, value); } )*
                false
            }
        }

        impl PartialOptions {
            /// Names of the fields present, in declaration order.
            #[must_use]
            pub fn present_fields(&self) -> Vec<&'static str> {
                let mut fields = Vec::new();
                $( if self.$name.is_some() { fields.push(stringify!($name)); } )*
                fields
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                $( self.$name.is_none() && )* true
            }
        }
    };
}

options_schema! {
    prompt: String = String::new(),
    negative_prompt: String = "blurry, low quality, distorted".to_owned(),
    use_negative_prompt: bool = false,
    /// `None` lets the generator pick a random seed.
    seed: Option<i64> = None,
    steps: u32 = 30,
    #[serde(serialize_with = "compact_float")]
    guidance_scale: f64 = 7.5,
    width: u32 = 1024,
    height: u32 = 1024,
    use_dimensions: bool = false,
    aspect_ratio: String = "16:9".to_owned(),
    #[serde(serialize_with = "compact_float")]
    cfg_rescale: f64 = 0.7,
    style_preset: StylePreset = StylePreset::new("Photography", "cinematic"),
    use_style_preset: bool = true,
    quality: String = "high".to_owned(),
    #[serde(serialize_with = "compact_float")]
    temperature: f64 = 1.0,
    dynamic_range: String = "SDR".to_owned(),
    output_format: String = "png".to_owned(),
    duration_seconds: u32 = 5,
    fps: u32 = 24,
    #[serde(serialize_with = "compact_float")]
    motion_strength: f64 = 5.0,
    camera_motion: String = "static".to_owned(),
    motion_direction: String = "forward".to_owned(),
    camera_angle: String = "eye level".to_owned(),
    shot_type: String = "medium shot".to_owned(),
    subject_focus: String = "center".to_owned(),
    composition_rules: Vec<String> = vec!["rule of thirds".to_owned()],
    lighting: String = "natural light".to_owned(),
    color_grade: String = "neutral".to_owned(),
    depth_of_field: String = "medium".to_owned(),
    lens_type: String = "standard".to_owned(),
    frame_interpolation: String = "smooth".to_owned(),
    #[serde(serialize_with = "compact_float")]
    upscale: f64 = 2.0,
    safety_filter: String = "moderate".to_owned(),
    made_out_of: String = String::new(),
    environment: String = String::new(),
    use_signature: bool = false,
    signature: String = String::new(),
    blur_style: String = "gaussian".to_owned(),
    aperture: String = "f/2.8".to_owned(),
    use_motion_animation: bool = false,
    use_enhancement_safety: bool = false,
    camera_type: String = "digital cinema camera".to_owned(),
    use_settings_location: bool = false,
    year: i32 = 2024,
    use_season: bool = false,
    season: String = String::new(),
    use_atmosphere_mood: bool = false,
    atmosphere_mood: String = String::new(),
    use_subject_mood: bool = false,
    subject_mood: String = String::new(),
    use_sword_type: bool = false,
    sword_type: String = String::new(),
    sword_vibe: String = String::new(),
    use_core_settings: bool = true,
    use_dimensions_format: bool = true,
    use_lighting: bool = false,
    use_material: bool = false,
    use_secondary_material: bool = false,
    secondary_material: String = String::new(),
    use_color_grading: bool = false,
    use_environment: bool = false,
    use_time_of_year: bool = false,
    time_of_year: String = String::new(),
    use_character_mood: bool = false,
    character_mood: String = String::new(),
    use_sword_details: bool = false,
    prevent_deformities: bool = false,
    use_upscale_factor: bool = false,
    use_safety_filter: bool = false,
    keep_typography_details: bool = false,
    use_face_enhancements: bool = false,
    add_same_face: bool = false,
    dont_change_face: bool = false,
    use_subject_gender: bool = false,
    subject_gender: String = String::new(),
    use_makeup_style: bool = false,
    makeup_style: String = String::new(),
    use_quality_booster: bool = false,
    quality_booster: String = String::new(),
    enhance_object_reflections: bool = false,
    keep_key_details: bool = false,
    use_black_and_white: bool = false,
    black_and_white_preset: String = String::new(),
    use_location: bool = false,
    location: String = String::new(),
    use_special_effects: bool = false,
    special_effects: Vec<String> = Vec::new(),
    use_lut_preset: bool = false,
    lut_preset: String = String::new(),
    use_dnd_section: bool = false,
    use_dnd_character_race: bool = false,
    dnd_character_race: String = String::new(),
    use_dnd_character_class: bool = false,
    dnd_character_class: String = String::new(),
    use_dnd_character_background: bool = false,
    dnd_character_background: String = String::new(),
    use_dnd_character_alignment: bool = false,
    dnd_character_alignment: String = String::new(),
    use_dnd_monster_type: bool = false,
    dnd_monster_type: String = String::new(),
    use_dnd_environment: bool = false,
    dnd_environment: String = String::new(),
    use_dnd_magic_school: bool = false,
    dnd_magic_school: String = String::new(),
    use_dnd_item_type: bool = false,
    dnd_item_type: String = String::new(),
    use_camera_angle: bool = false,
    use_lens_type: bool = false,
    use_aperture: bool = false,
    use_dof: bool = false,
    use_blur_style: bool = false,
    use_camera_composition: bool = false,
    extended_motion_strength: bool = false,
    extended_fps: bool = false,
    use_duration: bool = false,
    /// Number of images to request; never exported.
    image_count: u32 = 1,
}

/// Looks up a field by name.
#[must_use]
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

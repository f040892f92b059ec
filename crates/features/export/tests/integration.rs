use crafter_domain::flags::OPTION_FLAG_MAP;
use crafter_domain::{FIELDS, FieldKind, Options};
use crafter_export::{compile, generate_output};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn exported(options: &Options) -> Map<String, Value> {
    let text = generate_output(options).expect("options compile");
    serde_json::from_str::<Value>(&text).expect("export is valid JSON").as_object().cloned().unwrap()
}

const DND_FIELDS: [&str; 8] = [
    "dnd_character_race",
    "dnd_character_class",
    "dnd_character_background",
    "dnd_character_alignment",
    "dnd_monster_type",
    "dnd_environment",
    "dnd_magic_school",
    "dnd_item_type",
];

#[test]
fn negative_prompt_follows_its_flag() {
    let on = Options { use_negative_prompt: true, ..Options::default() };
    assert!(exported(&on).contains_key("negative_prompt"));

    let off = Options { use_negative_prompt: false, ..Options::default() };
    assert!(!exported(&off).contains_key("negative_prompt"));
}

#[test]
fn disabled_format_drops_every_dimension_field() {
    let options = Options { use_dimensions_format: false, use_dimensions: true, ..Options::default() };
    let out = exported(&options);
    for key in ["width", "height", "aspect_ratio", "output_format", "dynamic_range"] {
        assert!(!out.contains_key(key), "{key} should be dropped");
    }
}

#[test]
fn aspect_ratio_survives_without_axis_dimensions() {
    let options = Options { use_dimensions_format: true, use_dimensions: false, ..Options::default() };
    let out = exported(&options);
    assert!(!out.contains_key("width"));
    assert!(!out.contains_key("height"));
    assert!(out.contains_key("aspect_ratio"));

    let both = Options { use_dimensions: true, ..options };
    let out = exported(&both);
    assert_eq!(out["width"], 1024);
    assert_eq!(out["height"], 1024);
}

#[test]
fn dnd_section_gates_individually_enabled_fields() {
    let mut options = Options {
        use_dnd_section: false,
        dnd_character_race: "elf".to_owned(),
        dnd_magic_school: "illusion".to_owned(),
        ..Options::default()
    };
    for field in DND_FIELDS {
        assert!(options.set_flag(&format!("use_{field}"), true));
    }
    let out = exported(&options);
    assert!(DND_FIELDS.iter().all(|field| !out.contains_key(*field)));

    options.use_dnd_section = true;
    let out = exported(&options);
    assert_eq!(out["dnd_character_race"], "elf");
    assert_eq!(out["dnd_magic_school"], "illusion");
}

#[test]
fn material_and_motion_groups() {
    let options = Options {
        use_material: false,
        use_secondary_material: true,
        made_out_of: "glass".to_owned(),
        secondary_material: "brass".to_owned(),
        use_motion_animation: true,
        use_duration: false,
        ..Options::default()
    };
    let out = exported(&options);
    assert!(!out.contains_key("made_out_of"));
    assert!(!out.contains_key("secondary_material"));
    assert!(out.contains_key("fps"));
    assert!(out.contains_key("camera_motion"));
    assert!(!out.contains_key("duration_seconds"));
}

#[test]
fn location_group_requires_the_settings_flag() {
    let options = Options {
        use_settings_location: false,
        use_location: true,
        location: "Kyoto".to_owned(),
        use_season: true,
        season: "autumn".to_owned(),
        ..Options::default()
    };
    let out = exported(&options);
    assert!(!out.contains_key("location"));
    assert!(!out.contains_key("season"));
    assert!(!out.contains_key("year"));

    let open = Options { use_settings_location: true, ..options };
    let out = exported(&open);
    assert_eq!(out["location"], "Kyoto");
    assert_eq!(out["season"], "autumn");
    assert_eq!(out["year"], 2024);
}

#[test]
fn enhancement_group_keeps_only_true_booleans() {
    let options = Options {
        use_enhancement_safety: true,
        prevent_deformities: true,
        keep_key_details: false,
        use_upscale_factor: true,
        upscale: 4.0,
        ..Options::default()
    };
    let out = exported(&options);
    assert_eq!(out["prevent_deformities"], true);
    assert!(!out.contains_key("keep_key_details"));
    assert_eq!(out["upscale"].to_string(), "4");
    assert!(!out.contains_key("safety_filter"));
}

#[test]
fn output_keeps_declaration_order_and_two_space_indent() {
    let options = Options {
        prompt: "test".to_owned(),
        use_negative_prompt: true,
        seed: Some(7),
        ..Options::default()
    };
    let text = generate_output(&options).unwrap();
    assert!(text.starts_with("{\n  \"prompt\": \"test\",\n  \"negative_prompt\": "));

    let keys: Vec<String> = compile(&options).unwrap().keys().cloned().collect();
    let order: Vec<&str> =
        FIELDS.iter().map(|spec| spec.name).filter(|name| keys.iter().any(|k| k == name)).collect();
    assert_eq!(keys, order);
}

#[test]
fn image_count_is_never_exported() {
    let options = Options { image_count: 4, ..Options::default() };
    assert!(!exported(&options).contains_key("image_count"));
}

fn boolean_fields() -> Vec<&'static str> {
    FIELDS.iter().filter(|spec| spec.kind == FieldKind::Boolean).map(|spec| spec.name).collect()
}

proptest! {
    #[test]
    fn export_never_leaks_flags_or_unknown_keys(
        bits in proptest::collection::vec(any::<bool>(), boolean_fields().len())
    ) {
        let mut options = Options::default();
        for (name, value) in boolean_fields().into_iter().zip(bits) {
            prop_assert!(options.set_flag(name, value));
        }

        let out = exported(&options);
        for (key, value) in &out {
            prop_assert!(FIELDS.iter().any(|spec| spec.name == key));
            prop_assert!(!key.starts_with("use_") && !key.starts_with("extended_"));
            prop_assert_ne!(value, &Value::Bool(false));
        }
        prop_assert!(!out.contains_key("image_count"));

        for (field, flag) in OPTION_FLAG_MAP {
            if options.flag(flag) != Some(true) {
                prop_assert!(!out.contains_key(*field), "{} exported while {} is off", field, flag);
            }
        }
    }
}

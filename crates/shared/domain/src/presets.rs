//! Built-in preset catalogs.
//!
//! A catalog is a named list of selectable strings. Catalogs are grouped the way
//! preset bundles are keyed: style presets by category, the other groups by list name.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// `(catalog name, entries)`.
pub type CatalogSeed = (&'static str, &'static [&'static str]);

/// Top-level keys of a preset bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(AsRefStr, Display, EnumIter, EnumString)]
pub enum PresetGroup {
    #[strum(serialize = "stylePresets")]
    Style,
    #[strum(serialize = "cameraPresets")]
    Camera,
    #[strum(serialize = "locationPresets")]
    Location,
    #[strum(serialize = "dndPresets")]
    Dnd,
}

impl PresetGroup {
    #[must_use]
    pub const fn builtin(self) -> &'static [CatalogSeed] {
        match self {
            Self::Style => STYLE_PRESETS,
            Self::Camera => CAMERA_PRESETS,
            Self::Location => LOCATION_PRESETS,
            Self::Dnd => DND_PRESETS,
        }
    }

    /// Style categories are open-ended; the other groups only extend known lists.
    #[must_use]
    pub const fn accepts_new_catalogs(self) -> bool {
        matches!(self, Self::Style)
    }
}

pub const STYLE_PRESETS: &[CatalogSeed] = &[
    (
        "Classic Art & Painting",
        &[
            "oil painting",
            "watercolor",
            "impressionism",
            "baroque",
            "renaissance",
            "art nouveau",
            "ukiyo-e",
            "charcoal sketch",
        ],
    ),
    (
        "Photography",
        &[
            "cinematic",
            "portrait",
            "street photography",
            "macro",
            "long exposure",
            "film noir",
            "polaroid",
            "drone aerial",
        ],
    ),
    (
        "Digital Art",
        &["concept art", "pixel art", "low poly", "vaporwave", "cyberpunk", "isometric", "3d render"],
    ),
    ("Illustration", &["comic book", "manga", "storybook", "line art", "flat vector", "chibi"]),
];

pub const CAMERA_PRESETS: &[CatalogSeed] = &[
    (
        "shotTypeOptions",
        &[
            "extreme close-up",
            "close-up",
            "medium close-up",
            "medium shot",
            "cowboy shot",
            "full shot",
            "wide shot",
            "extreme wide shot",
        ],
    ),
    (
        "cameraAngleOptions",
        &["eye level", "low angle", "high angle", "bird's eye view", "worm's eye view", "dutch angle", "over the shoulder"],
    ),
    (
        "compositionRulesOptions",
        &["rule of thirds", "golden ratio", "leading lines", "symmetry", "framing", "negative space"],
    ),
    (
        "cameraTypeOptions",
        &["digital cinema camera", "DSLR", "mirrorless", "35mm film", "medium format", "smartphone", "action camera"],
    ),
    ("lensTypeOptions", &["standard", "wide angle", "telephoto", "fisheye", "macro", "anamorphic", "tilt-shift"]),
    ("apertureOptions", &["f/1.2", "f/1.8", "f/2.8", "f/4", "f/5.6", "f/8", "f/11", "f/16"]),
    ("blurStyleOptions", &["gaussian", "bokeh", "motion blur", "radial blur", "tilt-shift blur"]),
    ("depthOfFieldOptions", &["shallow", "medium", "deep"]),
    ("subjectFocusOptions", &["center", "left", "right", "top", "bottom"]),
];

pub const LOCATION_PRESETS: &[CatalogSeed] = &[
    (
        "environmentOptions",
        &["forest", "desert", "ocean", "mountains", "city street", "countryside", "jungle", "arctic"],
    ),
    ("locationOptions", &["Paris", "Tokyo", "New York", "Reykjavik", "Marrakesh", "Kyoto", "Venice"]),
    ("seasonOptions", &["spring", "summer", "autumn", "winter"]),
    (
        "atmosphereMoodOptions",
        &["serene", "mysterious", "eerie", "joyful", "melancholic", "tense", "romantic"],
    ),
];

pub const DND_PRESETS: &[CatalogSeed] = &[
    (
        "characterRaceOptions",
        &[
            "human",
            "elf",
            "half-elf",
            "drow",
            "high elf",
            "wood elf",
            "dark elf",
            "orc",
            "half-orc",
            "dwarf",
            "hill dwarf",
            "mountain dwarf",
            "gnome",
            "halfling",
            "tiefling",
            "dragonborn",
            "goblin",
            "kobold",
            "tabaxi",
            "firbolg",
            "goliath",
            "aasimar",
            "genasi",
            "lizardfolk",
            "tortle",
            "yuan-ti",
            "triton",
            "minotaur",
            "bugbear",
            "kenku",
            "changeling",
            "warforged",
            "shifter",
            "centaur",
            "satyr",
            "fairy",
        ],
    ),
    (
        "characterClassOptions",
        &[
            "barbarian",
            "bard",
            "cleric",
            "druid",
            "fighter",
            "monk",
            "paladin",
            "ranger",
            "rogue",
            "sorcerer",
            "warlock",
            "wizard",
            "artificer",
            "blood hunter",
        ],
    ),
    (
        "characterBackgroundOptions",
        &[
            "acolyte",
            "charlatan",
            "criminal",
            "entertainer",
            "folk hero",
            "guild artisan",
            "hermit",
            "noble",
            "outlander",
            "sage",
            "sailor",
            "soldier",
            "urchin",
            "gladiator",
            "knight",
            "pirate",
            "spy",
        ],
    ),
    (
        "characterAlignmentOptions",
        &[
            "lawful good",
            "neutral good",
            "chaotic good",
            "lawful neutral",
            "true neutral",
            "chaotic neutral",
            "lawful evil",
            "neutral evil",
            "chaotic evil",
        ],
    ),
    (
        "monsterTypeOptions",
        &[
            "dragon",
            "beholder",
            "lich",
            "mind flayer",
            "vampire",
            "werewolf",
            "skeleton",
            "zombie",
            "goblin",
            "troll",
            "ogre",
            "basilisk",
            "giant",
            "demon",
            "devil",
            "fey",
            "aberration",
            "construct",
            "elemental",
            "undead",
            "plant",
            "ooze",
            "celestial",
            "fiend",
        ],
    ),
    (
        "dndEnvironmentOptions",
        &[
            "dungeon",
            "cave",
            "ruins",
            "ancient temple",
            "enchanted forest",
            "mountain pass",
            "underground lake",
            "sewer",
            "city tavern",
            "market square",
            "castle keep",
            "royal court",
            "wizard's tower",
            "elven city",
            "dwarven mine",
            "orc camp",
            "abandoned village",
            "desert",
            "arctic tundra",
            "swamp",
            "haunted graveyard",
            "mystic portal",
            "floating island",
        ],
    ),
    (
        "magicSchoolOptions",
        &[
            "abjuration",
            "conjuration",
            "divination",
            "enchantment",
            "evocation",
            "illusion",
            "necromancy",
            "transmutation",
        ],
    ),
    (
        "itemTypeOptions",
        &[
            "magic sword",
            "enchanted shield",
            "healing potion",
            "scroll",
            "spellbook",
            "ring of invisibility",
            "amulet",
            "bag of holding",
            "wand",
            "staff",
            "orb",
            "cloak of protection",
            "boots of speed",
            "helmet",
            "armor",
            "key",
            "map",
            "trap",
            "treasure chest",
            "mimic",
            "artifact",
        ],
    ),
];

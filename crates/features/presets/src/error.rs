use std::borrow::Cow;

#[crafter_derive::crafter_error]
pub enum PresetError {
    #[error("Preset bundle must be a JSON object, got {found}{}", format_context(.context))]
    NotAnObject { found: &'static str, context: Option<Cow<'static, str>> },

    #[error("Failed to load custom presets{}: invalid JSON: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Failed to load custom presets{}: network error: {source}", format_context(.context))]
    Network { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Failed to load custom presets from {url}: HTTP {status}{}", format_context(.context))]
    HttpStatus { url: String, status: u16, context: Option<Cow<'static, str>> },

    #[error("Failed to load custom presets{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal preset error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

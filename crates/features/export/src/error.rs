use std::borrow::Cow;

#[crafter_derive::crafter_error]
pub enum ExportError {
    #[error("Failed to serialize options{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal export error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

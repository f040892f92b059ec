use crafter_kernel::validation::ValidationError;
use std::borrow::Cow;

#[crafter_derive::crafter_error]
pub enum ShareError {
    #[error("Share token is not valid base64{}: {source}", format_context(.context))]
    Base64 { source: base64::DecodeError, context: Option<Cow<'static, str>> },

    #[error("Share token is truncated ({len} bytes){}", format_context(.context))]
    Truncated { len: usize, context: Option<Cow<'static, str>> },

    #[error("Unsupported share token version {version}{}", format_context(.context))]
    UnsupportedVersion { version: u8, context: Option<Cow<'static, str>> },

    #[error("Share token declares {declared} bytes, limit is {limit}{}", format_context(.context))]
    PayloadTooLarge { declared: usize, limit: usize, context: Option<Cow<'static, str>> },

    #[error("Share token payload is corrupt{}: {source}", format_context(.context))]
    Decompress { source: lz4_flex::block::DecompressError, context: Option<Cow<'static, str>> },

    #[error("Share token JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Shared options rejected{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },

    #[error("Invalid share link{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("Share link carries no options token{}", format_context(.context))]
    NoToken { context: Option<Cow<'static, str>> },

    #[error("Internal share error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

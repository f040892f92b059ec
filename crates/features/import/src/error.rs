use crafter_kernel::validation::ValidationError;
use std::borrow::Cow;

#[crafter_derive::crafter_error]
pub enum ImportError {
    #[error("Malformed JSON{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Options rejected{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },

    #[error("Unknown option `--{field}`{}", format_context(.context))]
    UnknownArgument { field: String, context: Option<Cow<'static, str>> },

    #[error("Invalid value `{value}` for `--{field}`: expected {expected}{}", format_context(.context))]
    InvalidArgument {
        field: String,
        value: String,
        expected: &'static str,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal import error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

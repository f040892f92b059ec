use crafter_derive::crafter_error;
use std::borrow::Cow;

#[crafter_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown field `{field}`{}", format_context(.context))]
    UnknownField { field: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk")).context("Reading options")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert_eq!(err.to_string(), "IO error (Reading options): disk");

    let err: DemoError = "boom".into();
    assert_eq!(err.kind(), "Internal");

    let err = Err::<(), _>(DemoError::UnknownField { field: "x".to_owned(), context: None })
        .context("Validating")
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown field `x` (Validating)");
}

use crate::error::{ShareError, ShareErrorExt};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use crafter_domain::Options;
use crafter_kernel::validation::parse_untrusted;
use serde_json::Value;
use tracing::{debug, error};

/// First byte of every token.
pub const TOKEN_VERSION: u8 = 1;

/// Largest decompressed payload a token may declare.
pub const MAX_PAYLOAD_LEN: usize = 1024 * 1024;

const SIZE_PREFIX_LEN: usize = 4;

/// Encodes `options` into a share token.
///
/// # Errors
/// [`ShareError::Json`] if the options cannot be serialized.
pub fn try_encode(options: &Options) -> Result<String, ShareError> {
    let json = serde_json::to_vec(options).context("Serializing shared options")?;
    Ok(seal(&json))
}

/// Infallible form of [`try_encode`]: failures are logged and yield an empty string.
#[must_use]
pub fn encode(options: &Options) -> String {
    try_encode(options).unwrap_or_else(|err| {
        error!(kind = err.kind(), error = %err, "Could not encode share token");
        String::new()
    })
}

/// Decodes a share token back into full options.
///
/// # Errors
/// Any [`ShareError`] describing the first stage that failed: base64, version,
/// size guard, decompression, JSON, or schema validation.
pub fn try_decode(token: &str) -> Result<Options, ShareError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim()).context("Decoding share token")?;
    let json = open(&bytes)?;

    let value = serde_json::from_slice::<Value>(&json).context("Parsing shared options")?;
    let partial = parse_untrusted(value)?;

    let mut options = Options::default();
    options.apply(partial);
    debug!(bytes = json.len(), "Share token decoded");
    Ok(options)
}

/// [`try_decode`] for callers that only need the outcome; the cause is logged.
#[must_use]
pub fn decode(token: &str) -> Option<Options> {
    match try_decode(token) {
        Ok(options) => Some(options),
        Err(err) => {
            error!(kind = err.kind(), error = %err, "Could not decode share token");
            None
        },
    }
}

/// Wraps raw JSON bytes into a token.
pub(crate) fn seal(json: &[u8]) -> String {
    let compressed = lz4_flex::compress_prepend_size(json);
    let mut payload = Vec::with_capacity(1 + compressed.len());
    payload.push(TOKEN_VERSION);
    payload.extend_from_slice(&compressed);
    URL_SAFE_NO_PAD.encode(payload)
}

/// Checks the header and returns the decompressed JSON bytes.
fn open(bytes: &[u8]) -> Result<Vec<u8>, ShareError> {
    let (&version, body) =
        bytes.split_first().ok_or(ShareError::Truncated { len: bytes.len(), context: None })?;
    if version != TOKEN_VERSION {
        return Err(ShareError::UnsupportedVersion { version, context: None });
    }

    let prefix: [u8; SIZE_PREFIX_LEN] = body
        .get(..SIZE_PREFIX_LEN)
        .and_then(|prefix| prefix.try_into().ok())
        .ok_or(ShareError::Truncated { len: bytes.len(), context: None })?;
    let declared = usize::try_from(u32::from_le_bytes(prefix)).unwrap_or(usize::MAX);
    if declared > MAX_PAYLOAD_LEN {
        return Err(ShareError::PayloadTooLarge {
            declared,
            limit: MAX_PAYLOAD_LEN,
            context: None,
        });
    }

    lz4_flex::decompress_size_prepended(body).context("Decompressing share token")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_url_safe() {
        let token = encode(&Options::default());
        assert!(!token.is_empty());
        assert!(token.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    }

    #[test]
    fn garbage_is_rejected_with_a_typed_error() {
        assert_eq!(try_decode("AQ").unwrap_err().kind(), "Truncated");
        assert_eq!(try_decode("@@@").unwrap_err().kind(), "Base64");
        assert_eq!(try_decode("").unwrap_err().kind(), "Truncated");
    }

    #[test]
    fn unknown_versions_are_rejected() {
        let mut bytes = URL_SAFE_NO_PAD.decode(seal(b"{}")).unwrap();
        bytes[0] = 9;
        let token = URL_SAFE_NO_PAD.encode(bytes);
        assert!(matches!(try_decode(&token), Err(ShareError::UnsupportedVersion { version: 9, .. })));
    }

    #[test]
    fn oversized_declarations_are_rejected_before_decompression() {
        let mut bytes = vec![TOKEN_VERSION];
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&[0x1f; 16]);
        let token = URL_SAFE_NO_PAD.encode(bytes);

        let err = try_decode(&token).unwrap_err();
        assert!(matches!(err, ShareError::PayloadTooLarge { limit: MAX_PAYLOAD_LEN, .. }));
    }

    #[test]
    fn non_json_payload_is_rejected() {
        assert_eq!(try_decode(&seal(b"not json")).unwrap_err().kind(), "Json");
    }

    #[test]
    fn reserved_keys_are_stripped() {
        let token = seal(
            br#"{"__proto__":{"polluted":"yes"},"constructor":{"evil":true},"prototype":{"bad":1},"prompt":"safe"}"#,
        );
        let options = try_decode(&token).unwrap();
        assert_eq!(options, Options { prompt: "safe".to_owned(), ..Options::default() });
    }

    #[test]
    fn schema_violations_are_rejected() {
        assert_eq!(try_decode(&seal(br#"{"steps":"ten"}"#)).unwrap_err().kind(), "Validation");
    }

    #[test]
    fn flags_are_not_forced() {
        let token = seal(br#"{"negative_prompt":"fog","use_negative_prompt":false}"#);
        let options = try_decode(&token).unwrap();
        assert_eq!(options.negative_prompt, "fog");
        assert!(!options.use_negative_prompt);
    }
}

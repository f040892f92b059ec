//! Share links: a base URL carrying a token in its fragment (or, for links produced
//! elsewhere, in the `o` query parameter).

use crate::codec::{try_decode, try_encode};
use crate::error::{ShareError, ShareErrorExt};
use crafter_domain::Options;
use tracing::{debug, error, warn};
use url::Url;

/// Query parameter consulted when the fragment carries no usable token.
pub const QUERY_PARAM: &str = "o";

/// Builds a link to `base` whose fragment holds the token for `options`.
///
/// # Errors
/// [`ShareError::Url`] if `base` is not an absolute URL, or any [`try_encode`] error.
pub fn share_link(base: &str, options: &Options) -> Result<String, ShareError> {
    let mut url = Url::parse(base).context("Parsing share base URL")?;
    let token = try_encode(options)?;
    url.set_fragment(Some(&token));
    Ok(url.into())
}

/// Extracts and decodes the options token carried by `link`.
///
/// The fragment is tried first; when it is missing or does not decode, the `o` query
/// parameter is tried next.
///
/// # Errors
/// [`ShareError::Url`] for unparsable links, [`ShareError::NoToken`] when neither
/// location holds a token, otherwise the decoding error of the last token tried.
pub fn try_options_from_url(link: &str) -> Result<Options, ShareError> {
    let url = Url::parse(link.trim()).context("Parsing share link")?;

    let fragment = url.fragment().filter(|fragment| !fragment.is_empty()).map(str::to_owned);
    let query = url
        .query_pairs()
        .find(|(key, value)| key == QUERY_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned());

    let mut last_error = None;
    for (source, token) in [("fragment", fragment), ("query", query)] {
        let Some(token) = token else { continue };
        match try_decode(&token) {
            Ok(options) => {
                debug!(source, len = token.len(), "Options token decoded from link");
                return Ok(options);
            },
            Err(err) => {
                warn!(source, kind = err.kind(), error = %err, "Options token in link rejected");
                last_error = Some(err);
            },
        }
    }

    Err(last_error.unwrap_or(ShareError::NoToken { context: None }))
}

/// [`try_options_from_url`] that logs the failure and yields `None`.
#[must_use]
pub fn options_from_url(link: &str) -> Option<Options> {
    match try_options_from_url(link) {
        Ok(options) => Some(options),
        Err(err) => {
            error!(kind = err.kind(), error = %err, "Could not load options from link");
            None
        },
    }
}

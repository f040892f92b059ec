//! # Share
//!
//! Packs a full [`Options`](crafter_domain::Options) value, flags included, into a token
//! that fits in a URL fragment or query value, and unpacks it again.
//!
//! ## Token format
//!
//! ```text
//! base64url-nopad( version:u8 | lz4 block with u32 LE size prefix ( JSON ) )
//! ```
//!
//! Decoding checks the declared size against [`MAX_PAYLOAD_LEN`] before anything is
//! decompressed, then applies the same reserved-key stripping and strict validation as
//! every other import path. Missing keys fall back to the defaults; flags are taken as
//! given.
//!
//! ```rust
//! use crafter_domain::Options;
//! use crafter_share::{decode, encode};
//!
//! let options = Options { prompt: "hello world".to_owned(), ..Options::default() };
//! let token = encode(&options);
//! assert_eq!(decode(&token), Some(options));
//! ```

pub mod codec;
mod error;
pub mod link;

pub use crate::codec::{MAX_PAYLOAD_LEN, TOKEN_VERSION, decode, encode, try_decode, try_encode};
pub use crate::error::{ShareError, ShareErrorExt};
pub use crate::link::{QUERY_PARAM, options_from_url, share_link, try_options_from_url};

pub mod reserved;

pub use reserved::{RESERVED_KEYS, strip_reserved_keys};

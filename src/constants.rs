/// The number of secret bytes packed into each field element.
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// The largest block size whose values all fit below the field prime.
pub const MAX_BLOCK_SIZE: usize = 16;

/// The field prime `p = 2^128 + 51`, big-endian hex.
pub const FIELD_PRIME_HEX: &str = "0100000000000000000000000000000033";

/// Width in bytes of the big-endian encoding of the field prime.
pub const FIELD_BYTES: usize = 17;

/// The share encoding version written by [`crate::Share::to_json`].
pub const SHARE_FORMAT_VERSION: u32 = 1;

#![doc(html_root_url = "https://docs.rs/bc-paper-shamir/0.1.0")]

//! # Introduction
//!
//! Shamir's Secret Sharing for secrets of any length, intended for paper
//! backups. A secret is cut into fixed-size blocks, each block becomes an
//! element of the prime field GF(2^128 + 51), and each element is shared with
//! its own random polynomial. Any `threshold` of the resulting shares
//! recover the exact original bytes; fewer reveal nothing about them.
//!
//! # Getting Started
//!
//! ```toml
//! [dependencies]
//! bc-paper-shamir = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```
//! use bc_paper_shamir::{Share, recover_secret, split_secret};
//! use bc_rand::SecureRandomNumberGenerator;
//!
//! let secret = b"correct horse battery staple";
//! let mut rng = SecureRandomNumberGenerator;
//! let shares = split_secret(3, 5, secret, &mut rng).unwrap();
//!
//! // Shares travel as JSON records.
//! let encoded: Vec<String> = shares.iter().map(|s| s.to_json().unwrap()).collect();
//! let decoded: Vec<Share> = encoded[2..]
//!     .iter()
//!     .map(|json| Share::from_json(json).unwrap())
//!     .collect();
//!
//! assert_eq!(recover_secret(&decoded).unwrap(), secret);
//! ```

mod constants;
pub use constants::{DEFAULT_BLOCK_SIZE, FIELD_PRIME_HEX, MAX_BLOCK_SIZE, SHARE_FORMAT_VERSION};

mod field;
pub use field::{FieldElement, field_prime};

mod block;
mod interpolate;
mod polynomial;

mod shamir_error;
pub use shamir_error::ShamirError;

mod share;
pub use share::Share;

mod shamir;
pub use shamir::{recover_secret, split_secret, split_secret_with_block_size};

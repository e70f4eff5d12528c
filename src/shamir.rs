use std::collections::HashSet;

use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;

use crate::{
    ShamirError, Share,
    block::{blocks_to_bytes, bytes_to_blocks},
    constants::{DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE},
    field::{FieldElement, field_prime},
    interpolate::{interpolate, lagrange_basis},
    polynomial::Polynomial,
};

fn validate_parameters(threshold: usize, share_count: usize, block_size: usize) -> Result<(), ShamirError> {
    if threshold < 1 {
        return Err(ShamirError::InvalidParameters("threshold must be at least 1"));
    } else if threshold > share_count {
        return Err(ShamirError::InvalidParameters("threshold exceeds share count"));
    } else if BigUint::from(share_count) >= *field_prime() {
        return Err(ShamirError::InvalidParameters("share count exceeds the field size"));
    } else if block_size < 1 || block_size > MAX_BLOCK_SIZE {
        return Err(ShamirError::InvalidParameters("block size out of range"));
    }
    Ok(())
}

/// Splits a secret into shares using a Shamir's Secret Sharing scheme with
/// the default block size.
///
/// The secret is cut into blocks of [`DEFAULT_BLOCK_SIZE`] bytes and each
/// block is shared with its own random polynomial of degree `threshold - 1`.
/// Any `threshold` of the resulting `share_count` shares recover the secret.
///
/// # Parameters
///
/// - `threshold`: The minimum number of shares required to reconstruct the
///   secret. Must be at least 1 and at most `share_count`.
/// - `share_count`: The total number of shares to generate.
/// - `secret`: The secret to split. Any length, including empty.
/// - `random_generator`: The source of polynomial coefficients. Use
///   `bc_rand::SecureRandomNumberGenerator` outside of tests.
///
/// # Errors
///
/// [`ShamirError::InvalidParameters`] for an unusable `threshold` or
/// `share_count`. No shares are returned on failure.
///
/// # Example
///
/// ```
/// use bc_paper_shamir::{recover_secret, split_secret};
/// use bc_rand::SecureRandomNumberGenerator;
///
/// let mut rng = SecureRandomNumberGenerator;
/// let shares = split_secret(2, 3, b"Hello, world!", &mut rng).unwrap();
/// assert_eq!(shares.len(), 3);
///
/// let recovered = recover_secret(&shares[1..]).unwrap();
/// assert_eq!(recovered, b"Hello, world!");
/// ```
pub fn split_secret(
    threshold: usize,
    share_count: usize,
    secret: &[u8],
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<Vec<Share>, ShamirError> {
    split_secret_with_block_size(threshold, share_count, secret, DEFAULT_BLOCK_SIZE, random_generator)
}

/// Like [`split_secret`], with a caller-chosen block size between 1 and
/// [`MAX_BLOCK_SIZE`] bytes.
pub fn split_secret_with_block_size(
    threshold: usize,
    share_count: usize,
    secret: &[u8],
    block_size: usize,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<Vec<Share>, ShamirError> {
    validate_parameters(threshold, share_count, block_size)?;

    let blocks = bytes_to_blocks(secret, block_size)?;
    debug_assert_eq!(blocks.iter().map(|block| block.len).sum::<usize>(), secret.len());
    log::debug!(
        "splitting {} blocks of {} bytes into {} shares with threshold {}",
        blocks.len(),
        block_size,
        share_count,
        threshold
    );

    let xs: Vec<FieldElement> = (1..=share_count as u64).map(FieldElement::from).collect();
    let mut ys = vec![Vec::with_capacity(blocks.len()); share_count];

    for block in blocks {
        let polynomial = Polynomial::random(threshold - 1, block.value, random_generator);
        for (x, share_ys) in xs.iter().zip(ys.iter_mut()) {
            share_ys.push(polynomial.evaluate(x));
        }
    }

    Ok(ys
        .into_iter()
        .zip(1u64..)
        .map(|(share_ys, x)| Share::new(x, threshold, block_size, secret.len(), share_ys))
        .collect())
}

/// Recovers the secret from a set of shares.
///
/// The threshold, block size and secret length are read from the shares
/// themselves. When more shares than the threshold are supplied, the first
/// `threshold` in the given order are used.
///
/// A share that did not come from the same split, or was altered, is not
/// detected: the result is a deterministic but wrong secret.
///
/// # Errors
///
/// - [`ShamirError::InconsistentShares`] if the shares disagree on threshold,
///   block size, secret length or block count.
/// - [`ShamirError::DuplicateShare`] if two shares have the same x coordinate.
/// - [`ShamirError::InsufficientShares`] if fewer shares than the threshold
///   are supplied.
pub fn recover_secret(shares: &[Share]) -> Result<Vec<u8>, ShamirError> {
    let first = shares.first().ok_or(ShamirError::InsufficientShares { required: 1, supplied: 0 })?;

    if !shares.iter().all(|share| first.is_compatible_with(share)) {
        return Err(ShamirError::InconsistentShares);
    }

    let mut seen = HashSet::with_capacity(shares.len());
    if let Some(duplicate) = shares.iter().find(|share| !seen.insert(share.x())) {
        return Err(ShamirError::DuplicateShare(duplicate.x()));
    }

    let threshold = first.threshold();
    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares { required: threshold, supplied: shares.len() });
    }

    let chosen = &shares[..threshold];
    log::debug!(
        "recovering {} blocks of {} bytes from {} shares",
        first.ys().len(),
        first.block_size(),
        threshold
    );

    let xs: Vec<FieldElement> = chosen.iter().map(|share| FieldElement::from(share.x())).collect();
    let basis = lagrange_basis(&xs, &FieldElement::zero())?;

    let values: Vec<FieldElement> = (0..first.ys().len())
        .map(|index| interpolate(&basis, chosen.iter().map(|share| &share.ys()[index])))
        .collect();

    blocks_to_bytes(&values, first.block_size(), first.secret_len())
}

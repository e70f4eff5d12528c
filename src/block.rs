use bc_crypto::memzero;

use crate::{field::FieldElement, ShamirError};

/// One chunk of a secret mapped into the field.
///
/// A short final chunk is right-padded with zeros to the block width before
/// conversion, so `len` is the only place its true length is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub value: FieldElement,
    pub len: usize,
}

pub fn block_count(secret_len: usize, block_size: usize) -> usize {
    secret_len.div_ceil(block_size)
}

/// Partitions `secret` into big-endian field elements of `block_size` bytes.
pub fn bytes_to_blocks(secret: &[u8], block_size: usize) -> Result<Vec<Block>, ShamirError> {
    let mut buf = vec![0u8; block_size];
    let blocks = secret
        .chunks(block_size)
        .map(|chunk| -> Result<Block, ShamirError> {
            memzero(&mut buf);
            buf[..chunk.len()].copy_from_slice(chunk);
            let value = FieldElement::from_bytes_be(&buf)?;
            Ok(Block { value, len: chunk.len() })
        })
        .collect::<Result<Vec<_>, ShamirError>>();
    memzero(&mut buf);
    blocks
}

/// Reassembles `total_len` secret bytes from block values.
pub fn blocks_to_bytes(
    values: &[FieldElement],
    block_size: usize,
    total_len: usize,
) -> Result<Vec<u8>, ShamirError> {
    let expected = block_count(total_len, block_size);
    if values.len() != expected {
        return Err(ShamirError::LengthMismatch { expected, actual: values.len() });
    }

    let mut result = Vec::with_capacity(expected * block_size);
    for (index, value) in values.iter().enumerate() {
        if value.as_biguint().bits() > (block_size * 8) as u64 {
            log::warn!("recovered block {} is wider than {} bytes; shares may be corrupt or foreign", index, block_size);
        }
        let mut bytes = value.to_bytes_be_padded(block_size);
        result.extend_from_slice(&bytes);
        memzero(&mut bytes);
    }
    result.truncate(total_len);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BLOCK_SIZE;
    use hex_literal::hex;

    fn round_trip(secret: &[u8], block_size: usize) -> Vec<u8> {
        let blocks = bytes_to_blocks(secret, block_size).unwrap();
        let values: Vec<_> = blocks.into_iter().map(|b| b.value).collect();
        blocks_to_bytes(&values, block_size, secret.len()).unwrap()
    }

    #[test]
    fn test_empty_secret_has_no_blocks() {
        assert!(bytes_to_blocks(&[], DEFAULT_BLOCK_SIZE).unwrap().is_empty());
        assert_eq!(blocks_to_bytes(&[], DEFAULT_BLOCK_SIZE, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_block() {
        let secret = [0xabu8; DEFAULT_BLOCK_SIZE * 2];
        let blocks = bytes_to_blocks(&secret, DEFAULT_BLOCK_SIZE).unwrap();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| b.len == DEFAULT_BLOCK_SIZE));
        assert_eq!(round_trip(&secret, DEFAULT_BLOCK_SIZE), secret);
    }

    #[test]
    fn test_short_final_block_is_right_padded() {
        let blocks = bytes_to_blocks(&hex!("0102030405"), 4).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].value, FieldElement::from(0x01020304));
        assert_eq!(blocks[1], Block { value: FieldElement::from(0x05000000), len: 1 });
    }

    #[test]
    fn test_zero_blocks_keep_their_length() {
        let zeros = [0u8; DEFAULT_BLOCK_SIZE];
        let blocks = bytes_to_blocks(&zeros, DEFAULT_BLOCK_SIZE).unwrap();
        assert_eq!(blocks, vec![Block { value: FieldElement::zero(), len: DEFAULT_BLOCK_SIZE }]);
        assert_eq!(round_trip(&zeros, DEFAULT_BLOCK_SIZE), zeros);
    }

    #[test]
    fn test_edge_vectors() {
        let bs = DEFAULT_BLOCK_SIZE;
        let mut leading_zero = vec![0u8];
        leading_zero.extend(std::iter::repeat_n(0x5a, bs));
        let mut boundary_zero = vec![0x11u8; bs];
        boundary_zero.push(0);
        boundary_zero.extend(std::iter::repeat_n(0x22, bs));
        let mut final_zeros = vec![0x33u8; bs];
        final_zeros.extend_from_slice(&[0x00, 0x01]);
        let one_extra_zero = {
            let mut v = vec![0x44u8; bs * 3];
            v.push(0);
            v
        };

        for secret in [leading_zero, boundary_zero, final_zeros, one_extra_zero] {
            for block_size in [1, 5, bs] {
                assert_eq!(round_trip(&secret, block_size), secret);
            }
        }
    }

    #[test]
    fn test_block_count_mismatch() {
        let values = vec![FieldElement::one(); 2];
        assert_eq!(
            blocks_to_bytes(&values, DEFAULT_BLOCK_SIZE, 40),
            Err(ShamirError::LengthMismatch { expected: 3, actual: 2 })
        );
    }

    #[test]
    fn test_wide_value_is_truncated_not_rejected() {
        let wide = FieldElement::from(0x0102_0304_0506);
        assert_eq!(blocks_to_bytes(&[wide], 2, 2).unwrap(), hex!("0506"));
    }
}

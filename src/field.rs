use std::{
    ops::{Add, Mul, Neg, Sub},
    sync::LazyLock,
};

use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{constants::FIELD_BYTES, ShamirError};

static FIELD_PRIME: LazyLock<BigUint> = LazyLock::new(|| (BigUint::one() << 128u32) + 51u32);

static FIELD_PRIME_MINUS_TWO: LazyLock<BigUint> = LazyLock::new(|| &*FIELD_PRIME - 2u32);

/// The prime modulus shared by every split and combine.
pub fn field_prime() -> &'static BigUint {
    &FIELD_PRIME
}

/// An element of GF(p), always kept reduced into `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn one() -> Self {
        Self(BigUint::one())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Wraps `value`, refusing anything that is not already reduced.
    pub fn try_from_biguint(value: BigUint) -> Result<Self, ShamirError> {
        if value >= *FIELD_PRIME {
            return Err(ShamirError::BlockOutOfRange);
        }
        Ok(Self(value))
    }

    /// Interprets `bytes` as a big-endian unsigned integer.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, ShamirError> {
        Self::try_from_biguint(BigUint::from_bytes_be(bytes))
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Minimal big-endian encoding. Zero encodes as a single `0x00` byte.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Big-endian encoding of exactly `width` bytes.
    ///
    /// Short encodings are left-padded with zeros. Values wider than `width`
    /// keep only their low-order `width` bytes.
    pub fn to_bytes_be_padded(&self, width: usize) -> Vec<u8> {
        let mut bytes = self.0.to_bytes_be();
        let mut result = vec![0u8; width];
        if bytes.len() <= width {
            result[width - bytes.len()..].copy_from_slice(&bytes);
        } else {
            result.copy_from_slice(&bytes[bytes.len() - width..]);
        }
        memzero(&mut bytes);
        result
    }

    /// The multiplicative inverse, computed as `a^(p-2) mod p`.
    pub fn inverse(&self) -> Result<Self, ShamirError> {
        if self.is_zero() {
            return Err(ShamirError::ZeroInverse);
        }
        Ok(Self(self.0.modpow(&FIELD_PRIME_MINUS_TWO, &FIELD_PRIME)))
    }

    /// Draws a uniformly distributed element.
    ///
    /// Candidates are masked to the bit length of `p` and rejected when they
    /// are not below `p`, so the result carries no modulo bias.
    pub fn random(rng: &mut impl RandomNumberGenerator) -> Self {
        let top_bits = (FIELD_PRIME.bits() % 8) as u32;
        let mut buf = [0u8; FIELD_BYTES];
        loop {
            rng.fill_random_data(&mut buf);
            if top_bits != 0 {
                buf[0] &= (1u8 << top_bits) - 1;
            }
            let candidate = BigUint::from_bytes_be(&buf);
            if candidate < *FIELD_PRIME {
                memzero(&mut buf);
                return Self(candidate);
            }
        }
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl Add for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement((&self.0 + &rhs.0) % &*FIELD_PRIME)
    }
}

impl Sub for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        FieldElement((&self.0 + &*FIELD_PRIME - &rhs.0) % &*FIELD_PRIME)
    }
}

impl Mul for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement((&self.0 * &rhs.0) % &*FIELD_PRIME)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            FieldElement::zero()
        } else {
            FieldElement(&*FIELD_PRIME - &self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIELD_PRIME_HEX;
    use bc_rand::make_fake_random_number_generator;
    use hex_literal::hex;

    fn p_minus(n: u32) -> FieldElement {
        FieldElement::try_from_biguint(field_prime() - n).unwrap()
    }

    #[test]
    fn test_prime_constant() {
        assert_eq!(::hex::encode(field_prime().to_bytes_be()), FIELD_PRIME_HEX);
        assert_eq!(field_prime().bits(), 129);
        assert_eq!(field_prime().to_bytes_be().len(), FIELD_BYTES);
    }

    #[test]
    fn test_every_block_value_fits() {
        let max = FieldElement::from_bytes_be(&[0xff; 16]).unwrap();
        assert_eq!(max.to_bytes_be_padded(16), vec![0xff; 16]);
        assert_eq!(
            FieldElement::from_bytes_be(&hex!("0100000000000000000000000000000033")),
            Err(ShamirError::BlockOutOfRange)
        );
    }

    #[test]
    fn test_add_sub_wrap() {
        let a = p_minus(1);
        let b = FieldElement::from(2);
        assert_eq!(&a + &b, FieldElement::one());
        assert_eq!(&FieldElement::one() - &b, a);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!(-&FieldElement::one(), a);
        assert_eq!(-&FieldElement::zero(), FieldElement::zero());
    }

    #[test]
    fn test_mul_inverse() {
        let mut rng = make_fake_random_number_generator();
        for _ in 0..32 {
            let a = FieldElement::random(&mut rng);
            if a.is_zero() {
                continue;
            }
            let inv = a.inverse().unwrap();
            assert_eq!(&a * &inv, FieldElement::one());
        }
        assert_eq!(&p_minus(1) * &p_minus(1), FieldElement::one());
    }

    #[test]
    fn test_zero_has_no_inverse() {
        assert_eq!(FieldElement::zero().inverse(), Err(ShamirError::ZeroInverse));
    }

    #[test]
    fn test_random_is_reduced_and_deterministic() {
        let mut rng1 = make_fake_random_number_generator();
        let mut rng2 = make_fake_random_number_generator();
        for _ in 0..64 {
            let a = FieldElement::random(&mut rng1);
            assert!(a.as_biguint() < field_prime());
            assert_eq!(a, FieldElement::random(&mut rng2));
        }
    }

    #[test]
    fn test_padded_encoding() {
        assert_eq!(FieldElement::zero().to_bytes_be(), vec![0]);
        assert_eq!(FieldElement::zero().to_bytes_be_padded(4), vec![0; 4]);
        assert_eq!(FieldElement::from(0x0102).to_bytes_be_padded(4), hex!("00000102"));
        assert_eq!(FieldElement::from(0x01020304).to_bytes_be_padded(2), hex!("0304"));
    }
}

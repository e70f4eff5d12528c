use serde::{Deserialize, Serialize};

use crate::{
    ShamirError,
    block::block_count,
    constants::{MAX_BLOCK_SIZE, SHARE_FORMAT_VERSION},
    field::FieldElement,
};

/// One trustee's portion of a split secret.
///
/// A share holds its x coordinate, one y value per block of the secret, and
/// the metadata a combiner needs: the threshold, the block size, and the
/// total secret length. Shares are immutable once produced.
///
/// Shares carry no integrity check. Combining with a corrupted or foreign
/// share silently yields a wrong secret.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShareRecord", into = "ShareRecord")]
pub struct Share {
    x: u64,
    threshold: usize,
    block_size: usize,
    secret_len: usize,
    ys: Vec<FieldElement>,
}

impl Share {
    pub(crate) fn new(
        x: u64,
        threshold: usize,
        block_size: usize,
        secret_len: usize,
        ys: Vec<FieldElement>,
    ) -> Self {
        Self { x, threshold, block_size, secret_len, ys }
    }

    pub fn x(&self) -> u64 {
        self.x
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn secret_len(&self) -> usize {
        self.secret_len
    }

    pub fn ys(&self) -> &[FieldElement] {
        &self.ys
    }

    /// Whether `other` could belong to the same split as `self`.
    pub fn is_compatible_with(&self, other: &Share) -> bool {
        self.threshold == other.threshold
            && self.block_size == other.block_size
            && self.secret_len == other.secret_len
            && self.ys.len() == other.ys.len()
    }

    pub fn to_json(&self) -> Result<String, ShamirError> {
        Ok(serde_json::to_string(&ShareRecord::from(self.clone()))?)
    }

    pub fn from_json(json: &str) -> Result<Self, ShamirError> {
        let record: ShareRecord = serde_json::from_str(json)?;
        Share::try_from(record)
    }
}

/// The stable wire shape of a [`Share`].
///
/// Each y value is the lowercase big-endian hex of its field element.
#[derive(Debug, Serialize, Deserialize)]
struct ShareRecord {
    version: u32,
    x: u64,
    threshold: usize,
    block_size: usize,
    secret_len: usize,
    ys: Vec<String>,
}

impl From<Share> for ShareRecord {
    fn from(share: Share) -> Self {
        Self {
            version: SHARE_FORMAT_VERSION,
            x: share.x,
            threshold: share.threshold,
            block_size: share.block_size,
            secret_len: share.secret_len,
            ys: share.ys.iter().map(|y| hex::encode(y.to_bytes_be())).collect(),
        }
    }
}

impl TryFrom<ShareRecord> for Share {
    type Error = ShamirError;

    fn try_from(record: ShareRecord) -> Result<Self, Self::Error> {
        let malformed = |reason: &str| ShamirError::MalformedShare(reason.to_string());

        if record.version != SHARE_FORMAT_VERSION {
            return Err(ShamirError::MalformedShare(format!("unsupported version {}", record.version)));
        }
        if record.x == 0 {
            return Err(malformed("x coordinate must be nonzero"));
        }
        if record.threshold < 1 {
            return Err(malformed("threshold must be at least 1"));
        }
        if record.block_size < 1 || record.block_size > MAX_BLOCK_SIZE {
            return Err(malformed("block size out of range"));
        }
        if record.ys.len() != block_count(record.secret_len, record.block_size) {
            return Err(malformed("y value count does not match secret length"));
        }

        let ys = record
            .ys
            .iter()
            .map(|y| -> Result<FieldElement, ShamirError> {
                let bytes = hex::decode(y).map_err(|_| malformed("y value is not valid hex"))?;
                FieldElement::from_bytes_be(&bytes).map_err(|_| malformed("y value is outside the field"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Share::new(record.x, record.threshold, record.block_size, record.secret_len, ys))
    }
}

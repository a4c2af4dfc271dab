// src/padding.rs
//! Block padding schemes: Zero, PKCS#5 and PKCS#7
//!
//! `pad` always appends at least one byte: input that is already
//! block-aligned (including empty input) gains a full block of padding, so
//! `unpad` never has to guess whether padding is present.
//!
//! PKCS#5 was specified for 8-byte blocks; here it generalizes to the active
//! block size and is operationally identical to PKCS#7. Both variants are
//! kept because callers select them by name.

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

/// Padding discipline bound to a block-mode cipher at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum PaddingScheme {
    /// Appends `0x00` bytes.
    ///
    /// Lossy hazard: unpadding strips *all* trailing zero bytes, so a
    /// plaintext that genuinely ends in `0x00` cannot round-trip. Do not use
    /// this scheme for such data.
    Zero,
    /// Appends `n` bytes of value `n` (8-byte-block heritage, generalized).
    Pkcs5,
    /// Appends `n` bytes of value `n`, for block sizes up to 255.
    #[default]
    Pkcs7,
}

impl PaddingScheme {
    /// Extend `data` to a whole multiple of `block_size`.
    ///
    /// The result is always strictly longer than the input: aligned input
    /// gains one full block.
    pub fn pad(&self, data: &[u8], block_size: usize) -> Vec<u8> {
        let n = block_size - data.len() % block_size;
        let mut out = Vec::with_capacity(data.len() + n);
        out.extend_from_slice(data);

        let fill = match self {
            PaddingScheme::Zero => 0x00,
            PaddingScheme::Pkcs5 | PaddingScheme::Pkcs7 => n as u8,
        };
        out.resize(data.len() + n, fill);
        out
    }

    /// Strip the padding appended by [`pad`](Self::pad).
    ///
    /// Validates the trailing bytes *before* deriving the unpadded length;
    /// a corrupt trailing byte is never treated as a valid padding count.
    pub fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>, CryptoError> {
        match self {
            PaddingScheme::Zero => {
                let end = data.iter().rposition(|&b| b != 0x00).map_or(0, |i| i + 1);
                Ok(data[..end].to_vec())
            }
            PaddingScheme::Pkcs5 | PaddingScheme::Pkcs7 => {
                let Some(&last) = data.last() else {
                    return Err(CryptoError::InvalidPadding);
                };

                let n = last as usize;
                if n == 0 || n > block_size || n > data.len() {
                    return Err(CryptoError::InvalidPadding);
                }
                if data[data.len() - n..].iter().any(|&b| b != last) {
                    return Err(CryptoError::InvalidPadding);
                }

                Ok(data[..data.len() - n].to_vec())
            }
        }
    }
}

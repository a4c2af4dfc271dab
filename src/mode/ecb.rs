// src/mode/ecb.rs
//! AES-ECB with a caller-selected padding scheme
//!
//! Every block is transformed independently: identical plaintext blocks
//! yield identical ciphertext blocks, so ECB leaks structure. It is kept for
//! compatibility with existing data, not recommended for new designs.

use crate::block::{BlockCipher, BLOCK_SIZE};
use crate::error::CryptoError;
use crate::mode::check_block_aligned;
use crate::padding::PaddingScheme;

/// ECB mode facade. No IV; key and padding scheme only.
pub struct EcbCipher {
    cipher: BlockCipher,
    padding: PaddingScheme,
}

impl EcbCipher {
    /// Bind a key (16/24/32 bytes) and a padding scheme.
    pub fn new(key: &[u8], padding: PaddingScheme) -> Result<Self, CryptoError> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
            padding,
        })
    }

    /// Pad, then encrypt each block independently.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut out = self.padding.pad(plaintext, BLOCK_SIZE);
        for chunk in out.chunks_exact_mut(BLOCK_SIZE) {
            self.cipher.encrypt_block(chunk);
        }
        Ok(out)
    }

    /// Decrypt each block independently, then unpad.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_block_aligned(ciphertext)?;

        let mut out = ciphertext.to_vec();
        for chunk in out.chunks_exact_mut(BLOCK_SIZE) {
            self.cipher.decrypt_block(chunk);
        }

        self.padding.unpad(&out, BLOCK_SIZE)
    }
}

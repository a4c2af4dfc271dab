// src/mode/ofb.rs
//! AES-OFB, no padding
//!
//! The keystream feeds back on itself: block `i` is the forward transform of
//! block `i-1`, seeded by the IV. Ciphertext never enters the feedback path,
//! so encryption and decryption are the same XOR transform and length is
//! preserved.

use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::CryptoError;
use crate::mode::{check_iv, xor_in_place};

/// OFB mode facade.
pub struct OfbCipher {
    cipher: BlockCipher,
    iv: Block,
}

impl OfbCipher {
    /// Bind a key (16/24/32 bytes) and a one-block IV.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
            iv: check_iv(iv)?,
        })
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(self.keystream_xor(plaintext))
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(self.keystream_xor(ciphertext))
    }

    fn keystream_xor(&self, data: &[u8]) -> Vec<u8> {
        let mut out = data.to_vec();

        let mut keystream = self.iv;
        for chunk in out.chunks_mut(BLOCK_SIZE) {
            self.cipher.encrypt_block(&mut keystream);
            xor_in_place(chunk, &keystream);
        }

        out
    }
}

// src/mode/cbc.rs
//! AES-CBC with a caller-selected padding scheme
//!
//! Each plaintext block is XORed with the previous ciphertext block (the IV
//! for the first) before the forward transform. Ciphertext is always a whole
//! multiple of the block size.

use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::CryptoError;
use crate::mode::{check_block_aligned, check_iv, xor_in_place};
use crate::padding::PaddingScheme;

/// CBC mode facade. Immutable after construction; reusable and safe to
/// share across threads for independent calls.
pub struct CbcCipher {
    cipher: BlockCipher,
    iv: Block,
    padding: PaddingScheme,
}

impl CbcCipher {
    /// Bind a key (16/24/32 bytes), a one-block IV and a padding scheme.
    pub fn new(key: &[u8], iv: &[u8], padding: PaddingScheme) -> Result<Self, CryptoError> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
            iv: check_iv(iv)?,
            padding,
        })
    }

    /// Pad, then chain-encrypt block by block.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut out = self.padding.pad(plaintext, BLOCK_SIZE);

        let mut prev = self.iv;
        for chunk in out.chunks_exact_mut(BLOCK_SIZE) {
            xor_in_place(chunk, &prev);
            self.cipher.encrypt_block(chunk);
            prev.copy_from_slice(chunk);
        }

        Ok(out)
    }

    /// Inverse transform each block, un-chain, then unpad.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        check_block_aligned(ciphertext)?;

        let mut out = ciphertext.to_vec();
        let mut prev = self.iv;
        for chunk in out.chunks_exact_mut(BLOCK_SIZE) {
            let mut cur = [0u8; BLOCK_SIZE];
            cur.copy_from_slice(chunk);

            self.cipher.decrypt_block(chunk);
            xor_in_place(chunk, &prev);
            prev = cur;
        }

        self.padding.unpad(&out, BLOCK_SIZE)
    }
}

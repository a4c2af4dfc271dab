// src/mode/cfb.rs
//! AES-CFB (full-block feedback), no padding
//!
//! The keystream for each segment is the forward transform of the previous
//! ciphertext block (the IV for the first). Decryption regenerates the same
//! keystream with the forward transform — the inverse transform is never
//! used. Ciphertext length always equals plaintext length; a trailing
//! partial block is handled byte-wise.

use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::CryptoError;
use crate::mode::{check_iv, xor_in_place};

/// CFB mode facade.
pub struct CfbCipher {
    cipher: BlockCipher,
    iv: Block,
}

impl CfbCipher {
    /// Bind a key (16/24/32 bytes) and a one-block IV.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
            iv: check_iv(iv)?,
        })
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut out = plaintext.to_vec();

        let mut feedback = self.iv;
        for chunk in out.chunks_mut(BLOCK_SIZE) {
            let mut keystream = feedback;
            self.cipher.encrypt_block(&mut keystream);
            xor_in_place(chunk, &keystream);
            // feedback is the ciphertext just produced; a partial final
            // chunk never feeds another segment
            if chunk.len() == BLOCK_SIZE {
                feedback.copy_from_slice(chunk);
            }
        }

        Ok(out)
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut out = ciphertext.to_vec();

        let mut feedback = self.iv;
        let cipher_chunks = ciphertext.chunks(BLOCK_SIZE);
        for (chunk, cipher_chunk) in out.chunks_mut(BLOCK_SIZE).zip(cipher_chunks) {
            let mut keystream = feedback;
            self.cipher.encrypt_block(&mut keystream);
            xor_in_place(chunk, &keystream);
            if cipher_chunk.len() == BLOCK_SIZE {
                feedback.copy_from_slice(cipher_chunk);
            }
        }

        Ok(out)
    }
}

// src/mode/ctr.rs
//! AES-CTR, no padding
//!
//! The caller-supplied nonce is the initial counter block. Each keystream
//! block is the forward transform of the counter, which increments as a
//! big-endian integer and wraps across the full block width. Encryption and
//! decryption are the same XOR transform.

use crate::block::{Block, BlockCipher, BLOCK_SIZE};
use crate::error::CryptoError;
use crate::mode::{check_counter_nonce, xor_in_place};

/// CTR mode facade.
pub struct CtrCipher {
    cipher: BlockCipher,
    nonce: Block,
}

impl CtrCipher {
    /// Bind a key (16/24/32 bytes) and a one-block nonce (the initial
    /// counter value).
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            cipher: BlockCipher::new(key)?,
            nonce: check_counter_nonce(nonce)?,
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

        let mut counter = self.nonce;
        for chunk in out.chunks_mut(BLOCK_SIZE) {
            let mut keystream = counter;
            self.cipher.encrypt_block(&mut keystream);
            xor_in_place(chunk, &keystream);
            increment(&mut counter);
        }

        out
    }
}

/// Big-endian increment with wraparound over the whole block.
fn increment(counter: &mut Block) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

// src/mode/mod.rs
//! The mode engine: one module per chaining algorithm
//!
//! Every mode exposes the same shape — a constructor that validates its
//! parameters up front, then `encrypt`/`decrypt` over arbitrary-length byte
//! slices. CBC and ECB pad; CFB, OFB and CTR are length-preserving stream
//! transforms; GCM is authenticated and appends its tag.

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod gcm;
pub mod ofb;

pub use cbc::CbcCipher;
pub use cfb::CfbCipher;
pub use ctr::CtrCipher;
pub use ecb::EcbCipher;
pub use gcm::GcmCipher;
pub use ofb::OfbCipher;

use crate::block::{Block, BLOCK_SIZE};
use crate::error::CryptoError;

/// Shared construction-time IV check: all IV-taking modes require exactly
/// one block. Returns the IV as an owned block so facades hold no borrows.
pub(crate) fn check_iv(iv: &[u8]) -> Result<Block, CryptoError> {
    let got = iv.len();
    if got != BLOCK_SIZE {
        return Err(CryptoError::InvalidIvLength {
            got,
            want: BLOCK_SIZE,
        });
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(iv);
    Ok(block)
}

/// Counterpart of [`check_iv`] for CTR, whose nonce is the initial counter
/// block and must also be exactly one block. Only the error kind differs.
pub(crate) fn check_counter_nonce(nonce: &[u8]) -> Result<Block, CryptoError> {
    check_iv(nonce).map_err(|_| CryptoError::InvalidNonceLength {
        got: nonce.len(),
        want: BLOCK_SIZE,
    })
}

/// Shared decrypt-time alignment check for the block modes.
pub(crate) fn check_block_aligned(ciphertext: &[u8]) -> Result<(), CryptoError> {
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidCiphertextLength(ciphertext.len()));
    }
    Ok(())
}

/// XOR `keystream` into `data`, byte-wise. `data` may be shorter than a
/// block (trailing partial segment of a stream mode).
pub(crate) fn xor_in_place(data: &mut [u8], keystream: &Block) {
    for (b, k) in data.iter_mut().zip(keystream) {
        *b ^= k;
    }
}

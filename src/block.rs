// src/block.rs
//! Binding to the AES block primitive (RustCrypto `aes` crate)
//!
//! The key length picks the cipher variant once, at construction; the mode
//! engine then drives single-block transforms and never touches key
//! scheduling again. AES itself is never reimplemented here.

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::error::CryptoError;

/// AES block size in bytes, independent of key size.
pub const BLOCK_SIZE: usize = 16;

/// One AES block.
pub(crate) type Block = [u8; BLOCK_SIZE];

/// The keyed block primitive, dispatched once on key length.
pub(crate) enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    /// Key the primitive. Accepts exactly 16, 24 or 32 bytes.
    pub(crate) fn new(key: &[u8]) -> Result<Self, CryptoError> {
        match key.len() {
            16 => Ok(Self::Aes128(Aes128::new(GenericArray::from_slice(key)))),
            24 => Ok(Self::Aes192(Aes192::new(GenericArray::from_slice(key)))),
            32 => Ok(Self::Aes256(Aes256::new(GenericArray::from_slice(key)))),
            n => Err(CryptoError::InvalidKeyLength(n)),
        }
    }

    /// Forward transform of a single block, in place.
    ///
    /// `block` must be exactly [`BLOCK_SIZE`] bytes; every caller hands in
    /// either a [`Block`] or a `chunks_exact` slice.
    pub(crate) fn encrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.encrypt_block(block),
            Self::Aes192(c) => c.encrypt_block(block),
            Self::Aes256(c) => c.encrypt_block(block),
        }
    }

    /// Inverse transform of a single block, in place.
    pub(crate) fn decrypt_block(&self, block: &mut [u8]) {
        let block = GenericArray::from_mut_slice(block);
        match self {
            Self::Aes128(c) => c.decrypt_block(block),
            Self::Aes192(c) => c.decrypt_block(block),
            Self::Aes256(c) => c.decrypt_block(block),
        }
    }
}

// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

/// Everything that can go wrong while constructing a cipher or running
/// `encrypt`/`decrypt`.
///
/// Construction failures (`InvalidKeyLength`, `InvalidIvLength`,
/// `InvalidNonceLength`) are raised once, at `new`, and prevent a usable
/// cipher from existing at all. The remaining kinds are raised at call time.
///
/// A wrong key and a corrupt padding byte both surface as
/// [`CryptoError::InvalidPadding`] — decryption deliberately does not
/// distinguish the two.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid key length: {0} bytes (want 16, 24 or 32)")]
    InvalidKeyLength(usize),

    #[error("invalid IV length: {got} bytes (want {want})")]
    InvalidIvLength { got: usize, want: usize },

    #[error("invalid nonce length: {got} bytes (want {want})")]
    InvalidNonceLength { got: usize, want: usize },

    #[error("ciphertext length {0} is not a multiple of the block size")]
    InvalidCiphertextLength(usize),

    #[error("invalid padding")]
    InvalidPadding,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("plaintext exceeds the AEAD length limit")]
    PlaintextTooLong,
}

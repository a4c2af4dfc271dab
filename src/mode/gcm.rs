// src/mode/gcm.rs
//! AES-GCM, delegated to the `aes-gcm` AEAD primitive
//!
//! Encrypt returns `ciphertext ‖ tag` (16-byte tag appended, the primitive's
//! layout). Decrypt verifies the tag over the whole input first and releases
//! no plaintext on mismatch.
//!
//! Nonce reuse under the same key voids both confidentiality and
//! authenticity. This toolkit never generates nonces; the caller owns
//! uniqueness.

use aes::cipher::consts::U12;
use aes::Aes192;
use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Key, KeyInit, Nonce};

use crate::error::CryptoError;

/// Nonce length the standard GCM construction accepts (96 bits).
pub const GCM_NONCE_SIZE: usize = 12;

/// Authentication tag length appended to every ciphertext.
pub const GCM_TAG_SIZE: usize = 16;

type Aes192Gcm = AesGcm<Aes192, U12>;

enum GcmBackend {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

/// GCM mode facade.
pub struct GcmCipher {
    aead: GcmBackend,
    nonce: [u8; GCM_NONCE_SIZE],
}

impl GcmCipher {
    /// Bind a key (16/24/32 bytes) and a 12-byte nonce.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, CryptoError> {
        let aead = match key.len() {
            16 => GcmBackend::Aes128(Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(key))),
            24 => GcmBackend::Aes192(Aes192Gcm::new(Key::<Aes192Gcm>::from_slice(key))),
            32 => GcmBackend::Aes256(Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key))),
            n => return Err(CryptoError::InvalidKeyLength(n)),
        };

        if nonce.len() != GCM_NONCE_SIZE {
            return Err(CryptoError::InvalidNonceLength {
                got: nonce.len(),
                want: GCM_NONCE_SIZE,
            });
        }
        let mut bound = [0u8; GCM_NONCE_SIZE];
        bound.copy_from_slice(nonce);

        Ok(Self { aead, nonce: bound })
    }

    /// Encrypt with no associated data.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.encrypt_with_aad(plaintext, &[])
    }

    /// Decrypt `ciphertext ‖ tag` produced with no associated data.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.decrypt_with_aad(ciphertext, &[])
    }

    /// Encrypt, additionally authenticating `aad`. The associated data is
    /// not encrypted and not included in the output; the caller must supply
    /// the identical bytes at decryption.
    pub fn encrypt_with_aad(&self, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = Nonce::<U12>::from_slice(&self.nonce);
        let payload = Payload {
            msg: plaintext,
            aad,
        };

        let sealed = match &self.aead {
            GcmBackend::Aes128(aead) => aead.encrypt(nonce, payload),
            GcmBackend::Aes192(aead) => aead.encrypt(nonce, payload),
            GcmBackend::Aes256(aead) => aead.encrypt(nonce, payload),
        };

        // The primitive's encrypt is fallible only on inputs past the GCM
        // length bound.
        sealed.map_err(|_| CryptoError::PlaintextTooLong)
    }

    /// Decrypt `ciphertext ‖ tag`, verifying the tag over the ciphertext and
    /// `aad` before releasing any plaintext.
    pub fn decrypt_with_aad(&self, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let nonce = Nonce::<U12>::from_slice(&self.nonce);
        let payload = Payload {
            msg: ciphertext,
            aad,
        };

        let opened = match &self.aead {
            GcmBackend::Aes128(aead) => aead.decrypt(nonce, payload),
            GcmBackend::Aes192(aead) => aead.decrypt(nonce, payload),
            GcmBackend::Aes256(aead) => aead.decrypt(nonce, payload),
        };

        opened.map_err(|_| CryptoError::AuthenticationFailed)
    }
}

// src/lib.rs
//! cipher-toolkit — AES chaining modes and padding behind one small contract
//!
//! Features:
//! - CBC / ECB block modes with Zero, PKCS#5 or PKCS#7 padding
//! - CFB / OFB / CTR stream modes (length-preserving, no padding)
//! - GCM authenticated mode (tag appended, optional associated data)
//! - AES-128/192/256 selected by key length, validated at construction
//!
//! Every mode is a facade constructed once per (key, IV-or-nonce, padding)
//! binding and is immutable afterwards: `encrypt`/`decrypt` take `&self`,
//! perform no I/O, and are safe to call concurrently. Keys and IVs are
//! caller-supplied; the toolkit never generates key material.
//!
//! ```
//! use cipher_toolkit::{CbcCipher, PaddingScheme};
//!
//! let key = b"AES256Key-32Characters1234567890";
//! let cbc = CbcCipher::new(key, &key[..16], PaddingScheme::Pkcs7)?;
//!
//! let ciphertext = cbc.encrypt(b"Iloveyiigo")?;
//! assert_eq!(cbc.decrypt(&ciphertext)?, b"Iloveyiigo");
//! # Ok::<(), cipher_toolkit::CryptoError>(())
//! ```

pub mod block;
pub mod error;
pub mod mode;
pub mod padding;

// Re-export everything users need at the crate root
pub use block::BLOCK_SIZE;
pub use error::CryptoError;
pub use mode::gcm::{GCM_NONCE_SIZE, GCM_TAG_SIZE};
pub use mode::{CbcCipher, CfbCipher, CtrCipher, EcbCipher, GcmCipher, OfbCipher};
pub use padding::PaddingScheme;

//! AES encryption implementation for PDF
//!
//! This module provides AES-128 and AES-256 encryption support according to
//! ISO 32000-1 Section 7.6 (PDF 1.6+ and PDF 2.0).
//!
//! Implementation uses production-grade RustCrypto crates (aes, cbc).

use aes::{Aes128, Aes256};
use cbc::{Decryptor, Encryptor};
use cipher::block_padding::Pkcs7;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

/// AES key sizes supported by PDF
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AesKeySize {
    /// AES-128 (16 bytes)
    Aes128,
    /// AES-256 (32 bytes)
    Aes256,
}

impl AesKeySize {
    /// Get key size in bytes
    pub fn key_length(&self) -> usize {
        match self {
            AesKeySize::Aes128 => 16,
            AesKeySize::Aes256 => 32,
        }
    }

    /// Get block size (always 16 bytes for AES)
    pub fn block_size(&self) -> usize {
        16
    }
}

/// AES encryption key
#[derive(Debug, Clone)]
pub struct AesKey {
    /// Key bytes
    key: Vec<u8>,
    /// Key size
    size: AesKeySize,
}

impl AesKey {
    /// Create new AES-128 key
    pub fn new_128(key: Vec<u8>) -> Result<Self, AesError> {
        if key.len() != 16 {
            return Err(AesError::InvalidKeyLength {
                expected: 16,
                actual: key.len(),
            });
        }

        Ok(Self {
            key,
            size: AesKeySize::Aes128,
        })
    }

    /// Create new AES-256 key
    pub fn new_256(key: Vec<u8>) -> Result<Self, AesError> {
        if key.len() != 32 {
            return Err(AesError::InvalidKeyLength {
                expected: 32,
                actual: key.len(),
            });
        }

        Ok(Self {
            key,
            size: AesKeySize::Aes256,
        })
    }

    /// Get key bytes
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Get key size
    pub fn size(&self) -> AesKeySize {
        self.size
    }

    /// Get key length in bytes
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Check if key is empty (should never happen)
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// AES-related errors
#[derive(Debug, Clone, PartialEq)]
pub enum AesError {
    /// Invalid key length
    InvalidKeyLength { expected: usize, actual: usize },
    /// Invalid IV length (must be 16 bytes)
    InvalidIvLength { expected: usize, actual: usize },
    /// Encryption failed
    EncryptionFailed(String),
    /// Decryption failed
    DecryptionFailed(String),
    /// PKCS#7 padding error
    PaddingError(String),
}

impl std::fmt::Display for AesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AesError::InvalidKeyLength { expected, actual } => {
                write!(f, "Invalid key length: expected {expected}, got {actual}")
            }
            AesError::InvalidIvLength { expected, actual } => {
                write!(f, "Invalid IV length: expected {expected}, got {actual}")
            }
            AesError::EncryptionFailed(msg) => write!(f, "Encryption failed: {msg}"),
            AesError::DecryptionFailed(msg) => write!(f, "Decryption failed: {msg}"),
            AesError::PaddingError(msg) => write!(f, "Padding error: {msg}"),
        }
    }
}

impl std::error::Error for AesError {}

/// AES cipher implementation using RustCrypto (production-grade)
///
/// This implementation uses the audited `aes` and `cbc` crates from the
/// RustCrypto project for secure AES-128 and AES-256 encryption.
pub struct Aes {
    key: AesKey,
}

impl Aes {
    /// Create new AES cipher
    pub fn new(key: AesKey) -> Self {
        Self { key }
    }

    /// Encrypt data using AES-CBC mode with PKCS#7 padding
    ///
    /// Uses RustCrypto's `cbc` crate for production-grade encryption.
    pub fn encrypt_cbc(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, AesError> {
        if iv.len() != 16 {
            return Err(AesError::InvalidIvLength {
                expected: 16,
                actual: iv.len(),
            });
        }

        let iv_array: [u8; 16] = iv.try_into().map_err(|_| AesError::InvalidIvLength {
            expected: 16,
            actual: iv.len(),
        })?;

        match self.key.size() {
            AesKeySize::Aes128 => {
                let key_array: [u8; 16] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 16,
                            actual: self.key.len(),
                        })?;
                let encryptor = Encryptor::<Aes128>::new(&key_array.into(), &iv_array.into());
                // Buffer size: plaintext + padding (up to 16 bytes)
                let mut buffer = vec![0u8; data.len() + 16];
                buffer[..data.len()].copy_from_slice(data);
                let ciphertext = encryptor
                    .encrypt_padded_mut::<Pkcs7>(&mut buffer, data.len())
                    .map_err(|e| AesError::EncryptionFailed(format!("Padding error: {e}")))?;
                Ok(ciphertext.to_vec())
            }
            AesKeySize::Aes256 => {
                let key_array: [u8; 32] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 32,
                            actual: self.key.len(),
                        })?;
                let encryptor = Encryptor::<Aes256>::new(&key_array.into(), &iv_array.into());
                let mut buffer = vec![0u8; data.len() + 16];
                buffer[..data.len()].copy_from_slice(data);
                let ciphertext = encryptor
                    .encrypt_padded_mut::<Pkcs7>(&mut buffer, data.len())
                    .map_err(|e| AesError::EncryptionFailed(format!("Padding error: {e}")))?;
                Ok(ciphertext.to_vec())
            }
        }
    }

    /// Decrypt data using AES-CBC mode with PKCS#7 padding removal
    ///
    /// Uses RustCrypto's `cbc` crate for production-grade decryption.
    pub fn decrypt_cbc(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, AesError> {
        if iv.len() != 16 {
            return Err(AesError::InvalidIvLength {
                expected: 16,
                actual: iv.len(),
            });
        }

        if data.len() % 16 != 0 {
            return Err(AesError::DecryptionFailed(
                "Data length must be multiple of 16 bytes".to_string(),
            ));
        }

        let iv_array: [u8; 16] = iv.try_into().map_err(|_| AesError::InvalidIvLength {
            expected: 16,
            actual: iv.len(),
        })?;

        match self.key.size() {
            AesKeySize::Aes128 => {
                let key_array: [u8; 16] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 16,
                            actual: self.key.len(),
                        })?;
                let decryptor = Decryptor::<Aes128>::new(&key_array.into(), &iv_array.into());
                let mut buffer = data.to_vec();
                let plaintext = decryptor
                    .decrypt_padded_mut::<Pkcs7>(&mut buffer)
                    .map_err(|e| AesError::PaddingError(format!("Unpadding error: {e}")))?;
                Ok(plaintext.to_vec())
            }
            AesKeySize::Aes256 => {
                let key_array: [u8; 32] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 32,
                            actual: self.key.len(),
                        })?;
                let decryptor = Decryptor::<Aes256>::new(&key_array.into(), &iv_array.into());
                let mut buffer = data.to_vec();
                let plaintext = decryptor
                    .decrypt_padded_mut::<Pkcs7>(&mut buffer)
                    .map_err(|e| AesError::PaddingError(format!("Unpadding error: {e}")))?;
                Ok(plaintext.to_vec())
            }
        }
    }

    /// Encrypt data using AES-ECB mode (for Perms entry in R6)
    ///
    /// Note: ECB mode is generally insecure but required by PDF spec for Perms entry.
    pub fn encrypt_ecb(&self, data: &[u8]) -> Result<Vec<u8>, AesError> {
        use aes::cipher::{BlockEncrypt, KeyInit};

        if data.len() % 16 != 0 {
            return Err(AesError::EncryptionFailed(
                "Data length must be multiple of 16 bytes for ECB mode".to_string(),
            ));
        }

        let mut encrypted = Vec::with_capacity(data.len());

        match self.key.size() {
            AesKeySize::Aes128 => {
                let key_array: [u8; 16] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 16,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes128::new(&key_array.into());

                for chunk in data.chunks(16) {
                    let mut block =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(chunk);
                    cipher.encrypt_block(&mut block);
                    encrypted.extend_from_slice(&block);
                }
            }
            AesKeySize::Aes256 => {
                let key_array: [u8; 32] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 32,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes256::new(&key_array.into());

                for chunk in data.chunks(16) {
                    let mut block =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(chunk);
                    cipher.encrypt_block(&mut block);
                    encrypted.extend_from_slice(&block);
                }
            }
        }

        Ok(encrypted)
    }

    /// Decrypt data using AES-ECB mode (for Perms entry verification in R6)
    #[allow(dead_code)] // Will be used in R6 implementation
    pub fn decrypt_ecb(&self, data: &[u8]) -> Result<Vec<u8>, AesError> {
        use aes::cipher::{BlockDecrypt, KeyInit};

        if data.len() % 16 != 0 {
            return Err(AesError::DecryptionFailed(
                "Data length must be multiple of 16 bytes for ECB mode".to_string(),
            ));
        }

        let mut decrypted = Vec::with_capacity(data.len());

        match self.key.size() {
            AesKeySize::Aes128 => {
                let key_array: [u8; 16] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 16,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes128::new(&key_array.into());

                for chunk in data.chunks(16) {
                    let mut block =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(chunk);
                    cipher.decrypt_block(&mut block);
                    decrypted.extend_from_slice(&block);
                }
            }
            AesKeySize::Aes256 => {
                let key_array: [u8; 32] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 32,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes256::new(&key_array.into());

                for chunk in data.chunks(16) {
                    let mut block =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(chunk);
                    cipher.decrypt_block(&mut block);
                    decrypted.extend_from_slice(&block);
                }
            }
        }

        Ok(decrypted)
    }

    /// Encrypt data using AES-CBC mode WITHOUT padding
    ///
    /// Used for R5/R6 UE entry encryption where data is already block-aligned (32 bytes).
    /// Unlike encrypt_cbc, this does not add PKCS#7 padding.
    ///
    /// # Requirements
    /// - Data length must be a multiple of 16 bytes
    /// - IV must be exactly 16 bytes
    pub fn encrypt_cbc_raw(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, AesError> {
        use aes::cipher::{BlockEncrypt, KeyInit};

        if iv.len() != 16 {
            return Err(AesError::InvalidIvLength {
                expected: 16,
                actual: iv.len(),
            });
        }

        if data.len() % 16 != 0 {
            return Err(AesError::EncryptionFailed(
                "Data length must be multiple of 16 bytes for raw CBC mode".to_string(),
            ));
        }

        let mut encrypted = Vec::with_capacity(data.len());
        let mut prev_block: [u8; 16] = iv.try_into().map_err(|_| AesError::InvalidIvLength {
            expected: 16,
            actual: iv.len(),
        })?;

        match self.key.size() {
            AesKeySize::Aes128 => {
                let key_array: [u8; 16] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 16,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes128::new(&key_array.into());

                for chunk in data.chunks(16) {
                    // XOR with previous ciphertext (or IV for first block)
                    let mut block: [u8; 16] = [0u8; 16];
                    for i in 0..16 {
                        block[i] = chunk[i] ^ prev_block[i];
                    }
                    let mut block_ga =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(&block);
                    cipher.encrypt_block(&mut block_ga);
                    prev_block.copy_from_slice(&block_ga);
                    encrypted.extend_from_slice(&block_ga);
                }
            }
            AesKeySize::Aes256 => {
                let key_array: [u8; 32] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 32,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes256::new(&key_array.into());

                for chunk in data.chunks(16) {
                    // XOR with previous ciphertext (or IV for first block)
                    let mut block: [u8; 16] = [0u8; 16];
                    for i in 0..16 {
                        block[i] = chunk[i] ^ prev_block[i];
                    }
                    let mut block_ga =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(&block);
                    cipher.encrypt_block(&mut block_ga);
                    prev_block.copy_from_slice(&block_ga);
                    encrypted.extend_from_slice(&block_ga);
                }
            }
        }

        Ok(encrypted)
    }

    /// Decrypt data using AES-CBC mode WITHOUT padding
    ///
    /// Used for R5/R6 UE entry decryption where data is already block-aligned (32 bytes).
    /// Unlike decrypt_cbc, this does not expect or remove PKCS#7 padding.
    ///
    /// # Requirements
    /// - Data length must be a multiple of 16 bytes
    /// - IV must be exactly 16 bytes
    pub fn decrypt_cbc_raw(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>, AesError> {
        use aes::cipher::{BlockDecrypt, KeyInit};

        if iv.len() != 16 {
            return Err(AesError::InvalidIvLength {
                expected: 16,
                actual: iv.len(),
            });
        }

        if data.len() % 16 != 0 {
            return Err(AesError::DecryptionFailed(
                "Data length must be multiple of 16 bytes for raw CBC mode".to_string(),
            ));
        }

        let mut decrypted = Vec::with_capacity(data.len());
        let mut prev_block: [u8; 16] = iv.try_into().map_err(|_| AesError::InvalidIvLength {
            expected: 16,
            actual: iv.len(),
        })?;

        match self.key.size() {
            AesKeySize::Aes128 => {
                let key_array: [u8; 16] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 16,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes128::new(&key_array.into());

                for chunk in data.chunks(16) {
                    let mut block =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(chunk);
                    cipher.decrypt_block(&mut block);
                    // XOR with previous ciphertext (or IV for first block)
                    for i in 0..16 {
                        block[i] ^= prev_block[i];
                    }
                    prev_block.copy_from_slice(chunk);
                    decrypted.extend_from_slice(&block);
                }
            }
            AesKeySize::Aes256 => {
                let key_array: [u8; 32] =
                    self.key
                        .key()
                        .try_into()
                        .map_err(|_| AesError::InvalidKeyLength {
                            expected: 32,
                            actual: self.key.len(),
                        })?;
                let cipher = Aes256::new(&key_array.into());

                for chunk in data.chunks(16) {
                    let mut block =
                        aes::cipher::generic_array::GenericArray::clone_from_slice(chunk);
                    cipher.decrypt_block(&mut block);
                    // XOR with previous ciphertext (or IV for first block)
                    for i in 0..16 {
                        block[i] ^= prev_block[i];
                    }
                    prev_block.copy_from_slice(chunk);
                    decrypted.extend_from_slice(&block);
                }
            }
        }

        Ok(decrypted)
    }
}

/// Generate random IV for AES encryption
pub fn generate_iv() -> Vec<u8> {
    // In production, use a cryptographically secure random number generator
    // For now, use a simple approach with multiple entropy sources
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::SystemTime;

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let mut hasher = DefaultHasher::new();

    // Hash multiple entropy sources to ensure uniqueness
    SystemTime::now().hash(&mut hasher);
    thread::current().id().hash(&mut hasher);
    std::process::id().hash(&mut hasher);
    COUNTER.fetch_add(1, Ordering::SeqCst).hash(&mut hasher);

    let seed = hasher.finish();
    let mut iv = Vec::new();

    for i in 0..16 {
        iv.push(((seed >> (i * 4)) as u8) ^ (i as u8));
    }

    iv
}

// src/key_ops.rs
//! Symmetric key generation sized by COSE algorithm

use coset::Algorithm;

use crate::aliases::{
    Key128, Key192, Key256, Key384, Key512, SecureConversionsExt, SecureRandomExt, SymmetricKey,
};
use crate::algo::{algorithm_name, symmetric_key_len};
use crate::error::{ContextError, Result};

/// Generate a random raw key of the length `alg` expects
pub fn generate_symmetric_key(alg: &Algorithm) -> Result<SymmetricKey> {
    let bytes = match symmetric_key_len(alg) {
        Some(16) => Key128::random().expose_secret().to_vec(),
        Some(24) => Key192::random().expose_secret().to_vec(),
        Some(32) => Key256::random().expose_secret().to_vec(),
        Some(48) => Key384::random().expose_secret().to_vec(),
        Some(64) => Key512::random().expose_secret().to_vec(),
        _ => return Err(ContextError::NotSymmetric(algorithm_name(alg))),
    };
    Ok(SymmetricKey::new(bytes))
}

/// Lowercase hex of a key, for test vectors and debugging tools
pub fn key_hex(key: &SymmetricKey) -> String {
    key.expose_secret().to_hex()
}

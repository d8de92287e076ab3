// src/algo.rs
//! Algorithm registry helpers
//!
//! Algorithms themselves are `coset::Algorithm` values from the IANA COSE
//! registry. This module only maps them to and from the human-readable
//! names used in config files and logs.

use coset::iana::{self, EnumI64, WithPrivateRange};
use coset::{Algorithm, RegisteredLabelWithPrivate};

use crate::error::{ContextError, Result};

/// Registered names accepted by [`parse_algorithm`]
const NAMED: &[(&str, iana::Algorithm)] = &[
    // signatures
    ("ES256", iana::Algorithm::ES256),
    ("ES384", iana::Algorithm::ES384),
    ("ES512", iana::Algorithm::ES512),
    ("EdDSA", iana::Algorithm::EdDSA),
    ("PS256", iana::Algorithm::PS256),
    ("PS384", iana::Algorithm::PS384),
    ("PS512", iana::Algorithm::PS512),
    ("RS256", iana::Algorithm::RS256),
    // key distribution
    ("Direct", iana::Algorithm::Direct),
    ("A128KW", iana::Algorithm::A128KW),
    ("A192KW", iana::Algorithm::A192KW),
    ("A256KW", iana::Algorithm::A256KW),
    // content encryption
    ("A128GCM", iana::Algorithm::A128GCM),
    ("A192GCM", iana::Algorithm::A192GCM),
    ("A256GCM", iana::Algorithm::A256GCM),
    ("AES_CCM_16_64_128", iana::Algorithm::AES_CCM_16_64_128),
    ("AES_CCM_16_64_256", iana::Algorithm::AES_CCM_16_64_256),
    ("AES_CCM_64_64_128", iana::Algorithm::AES_CCM_64_64_128),
    ("AES_CCM_64_64_256", iana::Algorithm::AES_CCM_64_64_256),
    ("ChaCha20Poly1305", iana::Algorithm::ChaCha20Poly1305),
    // MAC
    ("HMAC_256_64", iana::Algorithm::HMAC_256_64),
    ("HMAC_256_256", iana::Algorithm::HMAC_256_256),
    ("HMAC_384_384", iana::Algorithm::HMAC_384_384),
    ("HMAC_512_512", iana::Algorithm::HMAC_512_512),
    ("AES_MAC_128_64", iana::Algorithm::AES_MAC_128_64),
    ("AES_MAC_256_64", iana::Algorithm::AES_MAC_256_64),
    ("AES_MAC_128_128", iana::Algorithm::AES_MAC_128_128),
    ("AES_MAC_256_128", iana::Algorithm::AES_MAC_256_128),
];

fn normalize(name: &str) -> String {
    name.trim().replace('-', "_").to_ascii_uppercase()
}

/// Parse an algorithm from a registered name (`"ES256"`, `"hmac-256-256"`)
/// or a signed IANA id (`"-7"`).
pub fn parse_algorithm(s: &str) -> Result<Algorithm> {
    let wanted = normalize(s);
    if let Some((_, alg)) = NAMED.iter().find(|(name, _)| normalize(name) == wanted) {
        return Ok(Algorithm::Assigned(*alg));
    }

    if let Ok(id) = s.trim().parse::<i64>() {
        // 0 is IANA's reserved entry, not a usable algorithm
        if let Some(alg) =
            iana::Algorithm::from_i64(id).filter(|a| *a != iana::Algorithm::Reserved)
        {
            return Ok(Algorithm::Assigned(alg));
        }
        if iana::Algorithm::is_private(id) {
            return Ok(Algorithm::PrivateUse(id));
        }
    }

    Err(ContextError::UnknownAlgorithm(s.to_string()))
}

/// Human-readable name: the registered name when known, else the numeric id
pub fn algorithm_name(alg: &Algorithm) -> String {
    match alg {
        RegisteredLabelWithPrivate::Assigned(a) => NAMED
            .iter()
            .find(|(_, known)| known == a)
            .map(|(name, _)| (*name).to_string())
            .unwrap_or_else(|| a.to_i64().to_string()),
        RegisteredLabelWithPrivate::PrivateUse(id) => id.to_string(),
        RegisteredLabelWithPrivate::Text(text) => text.clone(),
    }
}

/// Raw key length in bytes for symmetric AEAD and MAC algorithms
pub fn symmetric_key_len(alg: &Algorithm) -> Option<usize> {
    use iana::Algorithm::*;

    let RegisteredLabelWithPrivate::Assigned(a) = alg else {
        return None;
    };
    match a {
        A128GCM | A128KW | AES_CCM_16_64_128 | AES_CCM_64_64_128 | AES_MAC_128_64
        | AES_MAC_128_128 => Some(16),
        A192GCM | A192KW => Some(24),
        A256GCM | A256KW | AES_CCM_16_64_256 | AES_CCM_64_64_256 | AES_MAC_256_64
        | AES_MAC_256_128 | ChaCha20Poly1305 | HMAC_256_64 | HMAC_256_256 => Some(32),
        HMAC_384_384 => Some(48),
        HMAC_512_512 => Some(64),
        _ => None,
    }
}

// src/engine.rs
//! Seam for the external COSE engine that consumes a `CryptoContext`
//!
//! The engine owns encoding and the cryptographic primitives. It reads
//! [`CryptoContext::message_tag`] to pick a processing path,
//! [`CryptoContext::algorithm`] to pick the primitive and
//! [`CryptoContext::keying`] for the key material.

use crate::context::CryptoContext;

/// A COSE/CWT implementation driven by a `CryptoContext`.
///
/// Contract:
/// - `protect` turns a payload into an encoded COSE message of the
///   context's `message_tag()` (sign, MAC or encrypt).
/// - `unprotect` verifies or decrypts an encoded message and returns the payload.
/// - Engine failures (unsupported algorithm, key mismatch, malformed CBOR)
///   are returned as `Self::Error` and reach the caller unchanged.
pub trait CoseEngine {
    type Error: std::error::Error;

    fn protect(
        &self,
        ctx: &CryptoContext<'_>,
        payload: &[u8],
        external_aad: &[u8],
    ) -> Result<Vec<u8>, Self::Error>;

    fn unprotect(
        &self,
        ctx: &CryptoContext<'_>,
        message: &[u8],
        external_aad: &[u8],
    ) -> Result<Vec<u8>, Self::Error>;
}

impl<E: CoseEngine + ?Sized> CoseEngine for &E {
    type Error = E::Error;

    fn protect(
        &self,
        ctx: &CryptoContext<'_>,
        payload: &[u8],
        external_aad: &[u8],
    ) -> Result<Vec<u8>, Self::Error> {
        (**self).protect(ctx, payload, external_aad)
    }

    fn unprotect(
        &self,
        ctx: &CryptoContext<'_>,
        message: &[u8],
        external_aad: &[u8],
    ) -> Result<Vec<u8>, Self::Error> {
        (**self).unprotect(ctx, message, external_aad)
    }
}

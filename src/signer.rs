// src/signer.rs
//! Signer handles for multi-signer COSE_Sign contexts

use std::fmt;

use coset::{Algorithm, CoseKey, Header};

/// A signing key plus the headers of the `COSE_Signature` it will produce
#[derive(Clone, PartialEq)]
pub struct Signer {
    pub key: CoseKey,
    pub protected: Header,
    pub unprotected: Header,
}

impl Signer {
    pub fn new(key: CoseKey) -> Self {
        Self {
            key,
            protected: Header::default(),
            unprotected: Header::default(),
        }
    }

    pub fn with_protected(mut self, protected: Header) -> Self {
        self.protected = protected;
        self
    }

    pub fn with_unprotected(mut self, unprotected: Header) -> Self {
        self.unprotected = unprotected;
        self
    }

    /// Per-signature algorithm: protected header first, then the key's own `alg`
    pub fn algorithm(&self) -> Option<&Algorithm> {
        self.protected.alg.as_ref().or(self.key.alg.as_ref())
    }
}

// The key holds private parameters; only its id is printed.
impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("key_id", &self.key.key_id)
            .field("key", &format_args!("<redacted>"))
            .field("protected", &self.protected)
            .field("unprotected", &self.unprotected)
            .finish()
    }
}

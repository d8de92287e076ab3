// src/context.rs
//! `CryptoContext` — what COSE operation, with which keys, under which algorithm
//!
//! Each variant carries only the key material that is legal for its
//! operation, so "exactly one key field is populated" holds by construction.
//! Key material is borrowed from the caller: the context never clones,
//! zeroes or drops it. Build contexts with the `for_*` factories, which
//! document what each COSE message type expects.

use std::fmt;

use coset::{Algorithm, CoseKey, CoseRecipient};

#[cfg(feature = "logging")]
use tracing::trace;

use crate::enums::{Intent, MessageTag};
use crate::signer::Signer;

/// Signing, MAC-ing or encryption context for one COSE/CWT message family
#[derive(Clone, PartialEq)]
pub enum CryptoContext<'a> {
    Encrypt {
        recipients: &'a [CoseRecipient],
        alg: Algorithm,
    },
    Encrypt0 {
        key: &'a [u8],
        alg: Algorithm,
    },
    Mac {
        recipients: &'a [CoseRecipient],
        alg: Algorithm,
    },
    Mac0 {
        key: &'a [u8],
        alg: Algorithm,
    },
    SignCreate {
        signers: &'a [Signer],
        alg: Algorithm,
    },
    SignVerify {
        public_key: &'a CoseKey,
        alg: Algorithm,
    },
    Sign1Create {
        private_key: &'a CoseKey,
        alg: Algorithm,
    },
    Sign1Verify {
        public_key: &'a CoseKey,
        alg: Algorithm,
    },
}

/// The key material a context carries, one variant per kind
#[derive(Clone, Copy, PartialEq)]
pub enum Keying<'a> {
    Recipients(&'a [CoseRecipient]),
    SymmetricKey(&'a [u8]),
    Signers(&'a [Signer]),
    PrivateKey(&'a CoseKey),
    PublicKey(&'a CoseKey),
}

impl<'a> CryptoContext<'a> {
    /// Context for making or verifying COSE_Encrypt messages
    pub fn for_encrypt(recipients: &'a [CoseRecipient], alg: impl Into<Algorithm>) -> Self {
        Self::Encrypt {
            recipients,
            alg: alg.into(),
        }
        .traced()
    }

    /// Context for encrypting and decrypting COSE_Encrypt0 messages
    pub fn for_encrypt0(key: &'a [u8], alg: impl Into<Algorithm>) -> Self {
        Self::Encrypt0 {
            key,
            alg: alg.into(),
        }
        .traced()
    }

    /// Context for making or verifying COSE_Mac messages
    pub fn for_mac(recipients: &'a [CoseRecipient], alg: impl Into<Algorithm>) -> Self {
        Self::Mac {
            recipients,
            alg: alg.into(),
        }
        .traced()
    }

    /// Context for making or verifying COSE_Mac0 messages
    pub fn for_mac0(key: &'a [u8], alg: impl Into<Algorithm>) -> Self {
        Self::Mac0 {
            key,
            alg: alg.into(),
        }
        .traced()
    }

    /// Context for making COSE_Sign messages, one signature per signer
    pub fn for_sign_create(signers: &'a [Signer], alg: impl Into<Algorithm>) -> Self {
        Self::SignCreate {
            signers,
            alg: alg.into(),
        }
        .traced()
    }

    /// Context for verifying COSE_Sign messages
    pub fn for_sign_verify(public_key: &'a CoseKey, alg: impl Into<Algorithm>) -> Self {
        Self::SignVerify {
            public_key,
            alg: alg.into(),
        }
        .traced()
    }

    /// Context for signing COSE_Sign1 messages
    pub fn for_sign1_create(private_key: &'a CoseKey, alg: impl Into<Algorithm>) -> Self {
        Self::Sign1Create {
            private_key,
            alg: alg.into(),
        }
        .traced()
    }

    /// Context for verifying COSE_Sign1 messages
    pub fn for_sign1_verify(public_key: &'a CoseKey, alg: impl Into<Algorithm>) -> Self {
        Self::Sign1Verify {
            public_key,
            alg: alg.into(),
        }
        .traced()
    }

    #[inline]
    fn traced(self) -> Self {
        #[cfg(feature = "logging")]
        trace!(
            intent = ?self.intent(),
            alg = %crate::algo::algorithm_name(self.algorithm()),
            "built COSE crypto context"
        );
        self
    }

    pub fn intent(&self) -> Intent {
        match self {
            Self::Encrypt { .. } => Intent::Encrypt,
            Self::Encrypt0 { .. } => Intent::Encrypt0,
            Self::Mac { .. } => Intent::Mac,
            Self::Mac0 { .. } => Intent::Mac0,
            Self::SignCreate { .. } => Intent::SignCreate,
            Self::SignVerify { .. } => Intent::SignVerify,
            Self::Sign1Create { .. } => Intent::Sign1Create,
            Self::Sign1Verify { .. } => Intent::Sign1Verify,
        }
    }

    /// What kind of COSE message this context creates or processes
    pub fn message_tag(&self) -> MessageTag {
        self.intent().message_tag()
    }

    pub fn algorithm(&self) -> &Algorithm {
        match self {
            Self::Encrypt { alg, .. }
            | Self::Encrypt0 { alg, .. }
            | Self::Mac { alg, .. }
            | Self::Mac0 { alg, .. }
            | Self::SignCreate { alg, .. }
            | Self::SignVerify { alg, .. }
            | Self::Sign1Create { alg, .. }
            | Self::Sign1Verify { alg, .. } => alg,
        }
    }

    pub fn keying(&self) -> Keying<'a> {
        match *self {
            Self::Encrypt { recipients, .. } | Self::Mac { recipients, .. } => {
                Keying::Recipients(recipients)
            }
            Self::Encrypt0 { key, .. } | Self::Mac0 { key, .. } => Keying::SymmetricKey(key),
            Self::SignCreate { signers, .. } => Keying::Signers(signers),
            Self::Sign1Create { private_key, .. } => Keying::PrivateKey(private_key),
            Self::SignVerify { public_key, .. } | Self::Sign1Verify { public_key, .. } => {
                Keying::PublicKey(public_key)
            }
        }
    }

    /// Signers of a COSE_Sign create context; empty for everything else
    pub fn signers(&self) -> &'a [Signer] {
        match self.keying() {
            Keying::Signers(signers) => signers,
            _ => &[],
        }
    }

    /// Recipients of a COSE_Encrypt or COSE_Mac context; empty otherwise
    pub fn recipients(&self) -> &'a [CoseRecipient] {
        match self.keying() {
            Keying::Recipients(recipients) => recipients,
            _ => &[],
        }
    }

    pub fn private_key(&self) -> Option<&'a CoseKey> {
        match self.keying() {
            Keying::PrivateKey(key) => Some(key),
            _ => None,
        }
    }

    pub fn public_key(&self) -> Option<&'a CoseKey> {
        match self.keying() {
            Keying::PublicKey(key) => Some(key),
            _ => None,
        }
    }

    /// Raw symmetric key of a COSE_Encrypt0 or COSE_Mac0 context
    pub fn symmetric_key(&self) -> Option<&'a [u8]> {
        match self.keying() {
            Keying::SymmetricKey(key) => Some(key),
            _ => None,
        }
    }
}

// Prints key lengths only, never symmetric or private key bytes.
impl fmt::Debug for Keying<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keying::Recipients(r) => f.debug_tuple("Recipients").field(&r.len()).finish(),
            Keying::SymmetricKey(k) => f
                .debug_tuple("SymmetricKey")
                .field(&format_args!("<{} bytes>", k.len()))
                .finish(),
            Keying::Signers(signers) => f.debug_tuple("Signers").field(signers).finish(),
            Keying::PrivateKey(_) => f
                .debug_tuple("PrivateKey")
                .field(&format_args!("<redacted>"))
                .finish(),
            Keying::PublicKey(k) => f.debug_tuple("PublicKey").field(k).finish(),
        }
    }
}

impl fmt::Debug for CryptoContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoContext")
            .field("intent", &self.intent())
            .field("alg", self.algorithm())
            .field("keying", &self.keying())
            .finish()
    }
}

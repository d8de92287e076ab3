// src/enums.rs
//! Public enum types used throughout the crate
//!
//! `MessageTag` names the six COSE message families, `Intent` the eight
//! ways a `CryptoContext` can be built. Several intents share a tag:
//! creating and verifying a COSE_Sign1 both produce `MessageTag::Sign1`.

use std::fmt;

use coset::{
    CoseEncrypt, CoseEncrypt0, CoseMac, CoseMac0, CoseSign, CoseSign1, TaggedCborSerializable,
};
use serde::{Deserialize, Serialize};

/// Which kind of COSE message a context can create or process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageTag {
    Sign,
    Sign1,
    Encrypt,
    Encrypt0,
    Mac,
    Mac0,
}

impl MessageTag {
    pub const ALL: [MessageTag; 6] = [
        MessageTag::Sign,
        MessageTag::Sign1,
        MessageTag::Encrypt,
        MessageTag::Encrypt0,
        MessageTag::Mac,
        MessageTag::Mac0,
    ];

    /// CBOR tag number of the corresponding COSE structure (RFC 9052 §2)
    pub fn cbor_tag(self) -> u64 {
        match self {
            MessageTag::Sign => CoseSign::TAG,
            MessageTag::Sign1 => CoseSign1::TAG,
            MessageTag::Encrypt => CoseEncrypt::TAG,
            MessageTag::Encrypt0 => CoseEncrypt0::TAG,
            MessageTag::Mac => CoseMac::TAG,
            MessageTag::Mac0 => CoseMac0::TAG,
        }
    }

    pub fn from_cbor_tag(tag: u64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.cbor_tag() == tag)
    }

    /// Sign, Encrypt and Mac carry a list of signers/recipients;
    /// the 0/1 variants use a single key directly.
    pub fn is_multi_party(self) -> bool {
        matches!(
            self,
            MessageTag::Sign | MessageTag::Encrypt | MessageTag::Mac
        )
    }
}

impl fmt::Display for MessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageTag::Sign => "COSE_Sign",
            MessageTag::Sign1 => "COSE_Sign1",
            MessageTag::Encrypt => "COSE_Encrypt",
            MessageTag::Encrypt0 => "COSE_Encrypt0",
            MessageTag::Mac => "COSE_Mac",
            MessageTag::Mac0 => "COSE_Mac0",
        };
        f.write_str(name)
    }
}

/// The factory a context was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Encrypt,
    Encrypt0,
    Mac,
    Mac0,
    SignCreate,
    SignVerify,
    Sign1Create,
    Sign1Verify,
}

impl Intent {
    pub fn message_tag(self) -> MessageTag {
        match self {
            Intent::Encrypt => MessageTag::Encrypt,
            Intent::Encrypt0 => MessageTag::Encrypt0,
            Intent::Mac => MessageTag::Mac,
            Intent::Mac0 => MessageTag::Mac0,
            Intent::SignCreate | Intent::SignVerify => MessageTag::Sign,
            Intent::Sign1Create | Intent::Sign1Verify => MessageTag::Sign1,
        }
    }

    /// Only signature contexts are one-directional. Encrypt and MAC
    /// contexts serve both protect and unprotect.
    pub fn is_verification(self) -> bool {
        matches!(self, Intent::SignVerify | Intent::Sign1Verify)
    }
}

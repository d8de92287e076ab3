// src/lib.rs
//! cose-crypto-ctx — signing, MAC-ing and encryption contexts for COSE/CWT messages
//!
//! Features:
//! - One factory per COSE intent (Sign, Sign1, Encrypt, Encrypt0, Mac, Mac0)
//! - Illegal key/operation combinations are unrepresentable
//! - coset key, recipient and algorithm types, borrowed rather than copied
//! - TOML-configured default algorithms per message family

pub mod aliases;
pub mod algo;
pub mod config;
pub mod consts;
pub mod context;
pub mod engine;
pub mod enums;
pub mod error;
pub mod key_ops;
pub mod signer;

// Re-export everything users need at the crate root
pub use algo::{algorithm_name, parse_algorithm, symmetric_key_len};
pub use config::load as load_config;
pub use context::{CryptoContext, Keying};
pub use engine::CoseEngine;
pub use enums::{Intent, MessageTag};
pub use error::{ContextError, Result};
pub use key_ops::generate_symmetric_key;
pub use signer::Signer;

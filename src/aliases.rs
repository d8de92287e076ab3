// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Contexts only borrow key bytes; these are the types callers are
//! expected to own them in, so the bytes are zeroized on drop.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt, SecureRandomExt};

// Fixed-size secrets, one per symmetric key length in the registry
fixed_alias!(Key128, 16);
fixed_alias!(Key192, 24);
fixed_alias!(Key256, 32);
fixed_alias!(Key384, 48);
fixed_alias!(Key512, 64);

// Dynamic secrets
dynamic_alias!(SymmetricKey, Vec<u8>); // raw key for COSE_Encrypt0 / COSE_Mac0

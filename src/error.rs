// src/error.rs
//! Public error type for the entire crate
//!
//! `CryptoContext` itself cannot fail. Only the supporting pieces
//! (algorithm names, key generation, config files) return these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("unknown COSE algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("algorithm {0} does not use a raw symmetric key")]
    NotSymmetric(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ContextError>;

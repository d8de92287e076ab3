// src/config/mod.rs
//! Configuration system for cose-crypto-ctx
//!
//! Default algorithm per COSE message family, from TOML with an env override.

pub use app::{load, Algorithms, Config};

mod app;
mod defaults;

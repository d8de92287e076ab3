// src/config/defaults.rs
use crate::config::app::Algorithms;
use crate::consts::{DEFAULT_ENCRYPT_ALGO, DEFAULT_MAC_ALGO, DEFAULT_SIGN_ALGO};

pub fn default_sign() -> String {
    DEFAULT_SIGN_ALGO.into()
}

pub fn default_encrypt() -> String {
    DEFAULT_ENCRYPT_ALGO.into()
}

pub fn default_mac() -> String {
    DEFAULT_MAC_ALGO.into()
}

pub fn default_algorithms() -> Algorithms {
    Algorithms {
        sign: default_sign(),
        sign1: default_sign(),
        encrypt: default_encrypt(),
        encrypt0: default_encrypt(),
        mac: default_mac(),
        mac0: default_mac(),
    }
}

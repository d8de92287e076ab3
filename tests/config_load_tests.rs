// tests/config_load_tests.rs
//! `load()` caches process-wide, so this binary holds a single test.

use std::fs;

use cose_crypto_ctx::consts::CONFIG_ENV_VAR;
use cose_crypto_ctx::{load_config, MessageTag};
use tempfile::tempdir;

mod common;

#[test]
fn test_load_reads_env_path_once() {
    common::setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[algorithms]\nmac0 = \"HMAC_512_512\"\n").unwrap();
    std::env::set_var(CONFIG_ENV_VAR, &path);

    let first = load_config();
    assert_eq!(first.algorithm_name_for(MessageTag::Mac0), "HMAC_512_512");
    assert_eq!(first.algorithm_name_for(MessageTag::Sign1), "ES256");

    // later edits are not picked up
    fs::write(&path, "[algorithms]\nmac0 = \"HMAC_256_64\"\n").unwrap();
    let second = load_config();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.algorithm_name_for(MessageTag::Mac0), "HMAC_512_512");
}

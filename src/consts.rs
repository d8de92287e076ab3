// src/consts.rs
//! Shared constants — default algorithms and config locations

/// Environment variable naming an alternative config file
pub const CONFIG_ENV_VAR: &str = "COSE_CTX_CONFIG";

/// Config file looked up in the working directory when the env var is unset
pub const DEFAULT_CONFIG_FILE: &str = "cose-ctx.toml";

/// Default signature algorithm for COSE_Sign and COSE_Sign1
pub const DEFAULT_SIGN_ALGO: &str = "ES256";

/// Default content encryption algorithm for COSE_Encrypt and COSE_Encrypt0
pub const DEFAULT_ENCRYPT_ALGO: &str = "A256GCM";

/// Default MAC algorithm for COSE_Mac and COSE_Mac0
pub const DEFAULT_MAC_ALGO: &str = "HMAC_256_256";

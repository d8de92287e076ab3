// tests/support.rs
//! Key, recipient and signer fixtures

use coset::{
    iana, Algorithm, CoseKey, CoseKeyBuilder, CoseRecipient, CoseRecipientBuilder, HeaderBuilder,
};
use cose_crypto_ctx::Signer;

#[allow(dead_code)]
pub fn alg(a: iana::Algorithm) -> Algorithm {
    Algorithm::Assigned(a)
}

#[allow(dead_code)]
pub fn public_key(kid: &[u8]) -> CoseKey {
    CoseKeyBuilder::new_ec2_pub_key(iana::EllipticCurve::P_256, vec![1; 32], vec![2; 32])
        .key_id(kid.to_vec())
        .algorithm(iana::Algorithm::ES256)
        .build()
}

#[allow(dead_code)]
pub fn private_key(kid: &[u8]) -> CoseKey {
    CoseKeyBuilder::new_ec2_priv_key(
        iana::EllipticCurve::P_256,
        vec![1; 32],
        vec![2; 32],
        vec![3; 32],
    )
    .key_id(kid.to_vec())
    .algorithm(iana::Algorithm::ES256)
    .build()
}

#[allow(dead_code)]
pub fn recipient(kid: &[u8]) -> CoseRecipient {
    CoseRecipientBuilder::new()
        .unprotected(
            HeaderBuilder::new()
                .algorithm(iana::Algorithm::A128KW)
                .key_id(kid.to_vec())
                .build(),
        )
        .build()
}

#[allow(dead_code)]
pub fn recipients() -> Vec<CoseRecipient> {
    vec![recipient(b"alice"), recipient(b"bob"), recipient(b"carol")]
}

#[allow(dead_code)]
pub fn signers() -> Vec<Signer> {
    vec![
        Signer::new(private_key(b"s1")),
        Signer::new(private_key(b"s2"))
            .with_protected(HeaderBuilder::new().algorithm(iana::Algorithm::ES384).build()),
    ]
}

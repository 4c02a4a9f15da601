//! Parameter sets fixing the group provider and the protocol knobs at compile time.

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::group::{Ed25519, Group};

/// How the prover combines the nonce with the challenge into the response `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseRule {
    /// `s = r + c · x mod L`.
    ScalarProduct,
    /// `s = r + bytes(c · publicKey) mod L`: the point `c · publicKey` is computed
    /// and its encoding is added to `r` as if it were a scalar.
    ///
    /// This reproduces the call sequence of the legacy prover over the configured provider.
    /// It does not interoperate with that prover, which used X25519 arithmetic,
    /// and its proofs are not accepted by [`Verifier`](crate::Verifier).
    PointBytes,
}

/// Proof parameters.
pub trait ProofParams: 'static + Debug + Clone + Copy + Send + Sync + PartialEq + Eq {
    /// The group arithmetic provider.
    type Group: Group;

    /// The number of nonce commitments the prover draws before giving up.
    const MAX_NONCE_ATTEMPTS: usize;

    /// The response computation used by the prover.
    const RESPONSE_RULE: ResponseRule;

    /// Returns ``true`` if the parameters can produce proofs at all.
    const SELF_CONSISTENT: bool = Self::MAX_NONCE_ATTEMPTS > 0;
}

/// Ed25519 with the standard Schnorr response.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ed25519Params;

impl ProofParams for Ed25519Params {
    type Group = Ed25519;
    // A correct provider never needs a second attempt.
    const MAX_NONCE_ATTEMPTS: usize = 64;
    const RESPONSE_RULE: ResponseRule = ResponseRule::ScalarProduct;
}

static_assertions::const_assert!(Ed25519Params::SELF_CONSISTENT);

/// Ed25519 with the legacy point-bytes response.
///
/// Use only to replay the legacy prover's computation over Ed25519; its proofs do not verify.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceParams;

impl ProofParams for ReferenceParams {
    type Group = Ed25519;
    const MAX_NONCE_ATTEMPTS: usize = 64;
    const RESPONSE_RULE: ResponseRule = ResponseRule::PointBytes;
}

static_assertions::const_assert!(ReferenceParams::SELF_CONSISTENT);

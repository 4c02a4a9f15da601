//! Schnorr proof of knowledge of a discrete logarithm.
//!
//! Publish `P` and prove that we know a secret `x` such that `x · G = P`,
//! where `G` is the group generator. The challenge is `c = H(R ‖ P) mod L`.

mod challenge;
mod nonce;
mod proof;
mod prover;
mod verifier;

pub use proof::{Proof, PROOF_BYTES};
pub use prover::Prover;
pub use verifier::Verifier;

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    missing_docs,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::indexing_slicing))]

/*!
## Features

`std` (default): enables [`TimingObserver`], which measures proof phases with `std::time::Instant`.

`dev`: a deliberately misbehaving group provider and random source for exercising failure paths. See the [`dev`] module.
*/

extern crate alloc;

mod entities;
mod error;
mod group;
mod observe;
mod params;
mod sigma;
mod tools;

#[cfg(any(test, feature = "dev"))]
pub mod dev;

pub use entities::{KeyPair, ProofComponents};
pub use error::{DecodeError, PointLabel, ProofError, ProviderError};
pub use group::{Ed25519, Group, GroupError, Point, Scalar, WideScalar, POINT_BYTES, SCALAR_BYTES, WIDE_SCALAR_BYTES};
pub use observe::{NoopObserver, Observer, Outcome, Phase};
pub use params::{Ed25519Params, ProofParams, ReferenceParams, ResponseRule};
pub use sigma::{Proof, Prover, Verifier, PROOF_BYTES};

#[cfg(feature = "std")]
pub use observe::TimingObserver;

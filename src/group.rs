//! This module is an adapter to the ECC backend.
//! The protocol only ever talks to the [`Group`] trait over fixed-width byte strings,
//! and all the `curve25519-dalek` specifics are isolated in the [`Ed25519`] provider.

mod bytes;
mod ed25519;
mod provider;

pub use bytes::{Point, Scalar, WideScalar, POINT_BYTES, SCALAR_BYTES, WIDE_SCALAR_BYTES};
pub use ed25519::Ed25519;
pub use provider::{Group, GroupError};

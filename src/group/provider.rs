use core::fmt::Debug;

use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;

use super::bytes::{Point, Scalar, WideScalar};

/// Errors reported by a [`Group`] implementation.
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupError {
    /// The operand is not a valid element of the prime-order subgroup.
    InvalidPoint,
    /// The random source failed to produce bytes.
    RandomSource,
}

impl core::error::Error for GroupError {}

/// Scalar and point arithmetic of a prime-order group over fixed-width byte strings.
///
/// Which operand plays which role matters: the prover and the verifier are only compatible
/// with each other as long as they run the same calls on the same provider.
///
/// Implementations are expected to be stateless; all methods take `&self`.
pub trait Group: Debug {
    /// Returns a uniformly random scalar.
    fn random_scalar(&self, rng: &mut impl CryptoRngCore) -> Result<Scalar, GroupError>;

    /// Returns `scalar · G`, where `G` is the distinguished base point.
    fn base_mul(&self, scalar: &Scalar) -> Point;

    /// Returns `scalar · point`.
    ///
    /// Fails if `point` is not a valid subgroup element.
    fn mul(&self, scalar: &Scalar, point: &Point) -> Result<Point, GroupError>;

    /// Returns `p + q`.
    ///
    /// Fails if either operand is not a valid subgroup element.
    fn add(&self, p: &Point, q: &Point) -> Result<Point, GroupError>;

    /// Returns `true` if `point` is a canonically encoded member of the prime-order subgroup.
    fn is_valid_point(&self, point: &Point) -> bool;

    /// Hashes the concatenation of `parts` into a non-reduced wide output.
    fn hash(&self, parts: &[&[u8]]) -> WideScalar;

    /// Reduces a wide hash output modulo the group order.
    fn reduce(&self, wide: &WideScalar) -> Scalar;

    /// Returns `(a + b) mod L`. Non-reduced operands are accepted.
    fn scalar_add(&self, a: &Scalar, b: &Scalar) -> Scalar;

    /// Returns `(a · b) mod L`. Non-reduced operands are accepted.
    fn scalar_mul(&self, a: &Scalar, b: &Scalar) -> Scalar;

    /// Constant-time byte equality.
    fn equals(&self, a: &[u8], b: &[u8]) -> bool {
        a.ct_eq(b).into()
    }
}

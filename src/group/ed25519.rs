use blake2::Blake2b512;
use curve25519_dalek::{edwards::CompressedEdwardsY, EdwardsPoint};
use digest::Digest;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use super::bytes::{Point, Scalar, WideScalar, WIDE_SCALAR_BYTES};
use super::provider::{Group, GroupError};

type BackendScalar = curve25519_dalek::Scalar;

/// The prime-order subgroup of Ed25519, hashed with BLAKE2b-512.
///
/// Points use the standard 32-byte compressed Edwards encoding, scalars are 32-byte little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ed25519;

impl Ed25519 {
    fn to_backend(scalar: &Scalar) -> BackendScalar {
        BackendScalar::from_bytes_mod_order(scalar.to_bytes())
    }

    fn from_backend(scalar: &BackendScalar) -> Scalar {
        Scalar::from_bytes(scalar.to_bytes())
    }

    fn encode(point: &EdwardsPoint) -> Point {
        Point::from_bytes(point.compress().to_bytes())
    }

    /// Decodes a point, accepting only canonical encodings of torsion-free, non-small-order points.
    fn decode(point: &Point) -> Option<EdwardsPoint> {
        let compressed = CompressedEdwardsY(point.to_bytes());
        let decoded = compressed.decompress()?;
        let valid = decoded.compress() == compressed && !decoded.is_small_order() && decoded.is_torsion_free();
        valid.then_some(decoded)
    }
}

impl Group for Ed25519 {
    fn random_scalar(&self, rng: &mut impl CryptoRngCore) -> Result<Scalar, GroupError> {
        let mut wide = [0u8; WIDE_SCALAR_BYTES];
        rng.try_fill_bytes(&mut wide).map_err(|err| {
            tracing::error!(%err, "random source failure");
            GroupError::RandomSource
        })?;
        let mut scalar = BackendScalar::from_bytes_mod_order_wide(&wide);
        wide.zeroize();
        let result = Self::from_backend(&scalar);
        scalar.zeroize();
        Ok(result)
    }

    fn base_mul(&self, scalar: &Scalar) -> Point {
        Self::encode(&EdwardsPoint::mul_base(&Self::to_backend(scalar)))
    }

    fn mul(&self, scalar: &Scalar, point: &Point) -> Result<Point, GroupError> {
        let point = Self::decode(point).ok_or(GroupError::InvalidPoint)?;
        Ok(Self::encode(&(Self::to_backend(scalar) * point)))
    }

    fn add(&self, p: &Point, q: &Point) -> Result<Point, GroupError> {
        let p = Self::decode(p).ok_or(GroupError::InvalidPoint)?;
        let q = Self::decode(q).ok_or(GroupError::InvalidPoint)?;
        Ok(Self::encode(&(p + q)))
    }

    fn is_valid_point(&self, point: &Point) -> bool {
        Self::decode(point).is_some()
    }

    fn hash(&self, parts: &[&[u8]]) -> WideScalar {
        let mut digest = Blake2b512::new();
        for part in parts {
            digest.update(part);
        }
        let mut output = [0u8; WIDE_SCALAR_BYTES];
        output.copy_from_slice(&digest.finalize());
        WideScalar::from_bytes(output)
    }

    fn reduce(&self, wide: &WideScalar) -> Scalar {
        Self::from_backend(&BackendScalar::from_bytes_mod_order_wide(wide.as_bytes()))
    }

    fn scalar_add(&self, a: &Scalar, b: &Scalar) -> Scalar {
        Self::from_backend(&(Self::to_backend(a) + Self::to_backend(b)))
    }

    fn scalar_mul(&self, a: &Scalar, b: &Scalar) -> Scalar {
        Self::from_backend(&(Self::to_backend(a) * Self::to_backend(b)))
    }
}

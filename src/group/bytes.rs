use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_encoded_bytes::{Hex, SliceLike};
use zeroize::{DefaultIsZeroes, Zeroize};

use crate::error::DecodeError;

/// Width of an encoded scalar.
pub const SCALAR_BYTES: usize = 32;

/// Width of an encoded group element.
pub const POINT_BYTES: usize = 32;

/// Width of a non-reduced hash output.
pub const WIDE_SCALAR_BYTES: usize = 64;

// A point's bytes are fed into scalar addition by `ResponseRule::PointBytes`.
static_assertions::const_assert_eq!(SCALAR_BYTES, POINT_BYTES);
static_assertions::const_assert_eq!(WIDE_SCALAR_BYTES, 2 * SCALAR_BYTES);

fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N], DecodeError> {
    bytes.try_into().map_err(|_| DecodeError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

/// An integer modulo the group order, encoded as a little-endian byte string.
///
/// The encoding is not required to be reduced: every operation of a [`Group`](crate::Group)
/// accepting a scalar reduces it first.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scalar([u8; SCALAR_BYTES]);

impl Scalar {
    /// Wraps a raw encoding.
    pub const fn from_bytes(bytes: [u8; SCALAR_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw encoding.
    pub fn as_bytes(&self) -> &[u8; SCALAR_BYTES] {
        &self.0
    }

    /// Consumes the scalar returning its raw encoding.
    pub fn to_bytes(self) -> [u8; SCALAR_BYTES] {
        self.0
    }
}

impl DefaultIsZeroes for Scalar {}

impl AsRef<[u8]> for Scalar {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<'a> TryFrom<&'a [u8]> for Scalar {
    type Error = DecodeError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        to_array(bytes).map(Self)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", hex::encode(self.0))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SliceLike::<Hex>::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SliceLike::<Hex>::deserialize(deserializer)
    }
}

/// A compressed encoding of a group element.
///
/// Wrapping arbitrary bytes is always possible; whether they denote a member of the prime-order
/// subgroup is decided by [`Group::is_valid_point`](crate::Group::is_valid_point).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point([u8; POINT_BYTES]);

impl Point {
    /// Wraps a raw encoding.
    pub const fn from_bytes(bytes: [u8; POINT_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw encoding.
    pub fn as_bytes(&self) -> &[u8; POINT_BYTES] {
        &self.0
    }

    /// Consumes the point returning its raw encoding.
    pub fn to_bytes(self) -> [u8; POINT_BYTES] {
        self.0
    }

    /// Reads the encoding of this point as if it were a scalar.
    ///
    /// This has no algebraic meaning; it exists to express [`ResponseRule::PointBytes`](crate::ResponseRule::PointBytes).
    pub fn reinterpret_as_scalar(&self) -> Scalar {
        Scalar(self.0)
    }
}

impl AsRef<[u8]> for Point {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<'a> TryFrom<&'a [u8]> for Point {
    type Error = DecodeError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        to_array(bytes).map(Self)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", hex::encode(self.0))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SliceLike::<Hex>::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SliceLike::<Hex>::deserialize(deserializer)
    }
}

/// A non-reduced hash output, twice the scalar width.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct WideScalar([u8; WIDE_SCALAR_BYTES]);

impl WideScalar {
    /// Wraps a raw hash output.
    pub const fn from_bytes(bytes: [u8; WIDE_SCALAR_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw hash output.
    pub fn as_bytes(&self) -> &[u8; WIDE_SCALAR_BYTES] {
        &self.0
    }
}

impl fmt::Debug for WideScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideScalar({})", hex::encode(self.0))
    }
}

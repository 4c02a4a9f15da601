use core::fmt;

use crate::group::{Group, Point, Scalar};

/// The Fiat-Shamir challenge `c = reduce(hash(R ‖ publicKey))`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct Challenge(Scalar);

impl Challenge {
    pub fn new(group: &impl Group, commitment: &Point, public_key: &Point) -> Self {
        let wide = group.hash(&[commitment.as_bytes().as_slice(), public_key.as_bytes().as_slice()]);
        Self(group.reduce(&wide))
    }

    pub fn as_scalar(&self) -> &Scalar {
        &self.0
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

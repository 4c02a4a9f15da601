use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::group::{Point, Scalar, POINT_BYTES, SCALAR_BYTES};

/// Length of [`Proof::to_bytes`].
pub const PROOF_BYTES: usize = POINT_BYTES + SCALAR_BYTES + POINT_BYTES;

/// A non-interactive proof of knowledge of the discrete logarithm of `public_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    commitment: Point,
    response: Scalar,
    public_key: Point,
}

impl Proof {
    /// Assembles a proof from its parts.
    ///
    /// Nothing is validated here; that is the verifier's job.
    pub fn new(commitment: Point, response: Scalar, public_key: Point) -> Self {
        Self {
            commitment,
            response,
            public_key,
        }
    }

    /// The nonce commitment `R`.
    pub fn commitment(&self) -> &Point {
        &self.commitment
    }

    /// The response `s`.
    pub fn response(&self) -> &Scalar {
        &self.response
    }

    /// The public key the proof is made for.
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    /// Encodes the proof as `R ‖ s ‖ publicKey`, without any framing.
    pub fn to_bytes(&self) -> [u8; PROOF_BYTES] {
        let mut bytes = [0u8; PROOF_BYTES];
        let parts = self
            .commitment
            .as_bytes()
            .iter()
            .chain(self.response.as_bytes())
            .chain(self.public_key.as_bytes());
        for (dst, src) in bytes.iter_mut().zip(parts) {
            *dst = *src;
        }
        bytes
    }

    /// Decodes a proof produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != PROOF_BYTES {
            return Err(DecodeError::InvalidLength {
                expected: PROOF_BYTES,
                actual: bytes.len(),
            });
        }
        let (commitment, rest) = bytes.split_at(POINT_BYTES);
        let (response, public_key) = rest.split_at(SCALAR_BYTES);
        Ok(Self {
            commitment: Point::try_from(commitment)?,
            response: Scalar::try_from(response)?,
            public_key: Point::try_from(public_key)?,
        })
    }
}

use rand_core::CryptoRngCore;

use crate::error::ProofError;
use crate::group::{Group, Point, Scalar};
use crate::tools::Secret;

/// A secret scalar together with its public group element `publicKey = scalar · G`.
///
/// Key pairs are normally supplied by a key-management collaborator through [`ProofComponents`];
/// the proof protocol only reads them.
#[derive(Debug, Clone)]
pub struct KeyPair {
    scalar: Secret<Scalar>,
    public_key: Point,
}

impl KeyPair {
    /// Creates a key pair from its components.
    ///
    /// The pair is taken as is; see [`is_consistent`](Self::is_consistent) for a check.
    pub fn new(scalar: Scalar, public_key: Point) -> Self {
        Self {
            scalar: Secret::init_with(|| scalar),
            public_key,
        }
    }

    /// Creates a random key pair using the provider's scalar generation and base point multiplication.
    pub fn random(group: &impl Group, rng: &mut impl CryptoRngCore) -> Result<Self, ProofError> {
        let scalar = Secret::try_init_with(|| group.random_scalar(rng))?;
        let public_key = group.base_mul(scalar.expose_secret());
        Ok(Self { scalar, public_key })
    }

    /// Returns the public group element.
    pub fn public_key(&self) -> &Point {
        &self.public_key
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        self.scalar.expose_secret()
    }

    /// Returns `true` if `publicKey == scalar · G` in the given group.
    pub fn is_consistent(&self, group: &impl Group) -> bool {
        group.equals(group.base_mul(self.scalar()).as_bytes(), self.public_key.as_bytes())
    }
}

/// A source of proof inputs, e.g. a keychain entry.
pub trait ProofComponents {
    /// Returns the scalar and the public key the proof is made for.
    fn proof_components(&self) -> KeyPair;
}

impl ProofComponents for KeyPair {
    fn proof_components(&self) -> KeyPair {
        self.clone()
    }
}

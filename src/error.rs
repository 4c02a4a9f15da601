use core::fmt;

use crate::group::GroupError;

/// Identifies the group element that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLabel {
    /// The commitment `R`.
    Commitment,
    /// The challenge-scaled public key `c · publicKey`.
    ChallengeTimesPublicKey,
    /// The public key itself.
    PublicKey,
    /// The sum `R + c · publicKey`.
    Sum,
}

impl PointLabel {
    /// Short name of the point, as used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commitment => "R",
            Self::ChallengeTimesPublicKey => "cPK",
            Self::PublicKey => "publicKey",
            Self::Sum => "R + cPK",
        }
    }
}

impl fmt::Display for PointLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of the group provider that the protocol does not recover from.
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderError {
    /// No valid nonce commitment was produced in {attempts} attempts.
    NonceExhausted {
        /// The number of rejected commitments.
        attempts: usize,
    },
    /// Group operation failed: {0}
    Group(GroupError),
}

/// Errors of proof generation and verification.
///
/// A well-formed proof that does not verify is not an error; see [`Verifier::verify_proof`](crate::Verifier::verify_proof).
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofError {
    /// Invalid group element `{0}`.
    InvalidPoint(PointLabel),
    /// {0}
    Provider(ProviderError),
}

impl From<ProviderError> for ProofError {
    fn from(source: ProviderError) -> Self {
        Self::Provider(source)
    }
}

impl From<GroupError> for ProofError {
    fn from(source: GroupError) -> Self {
        Self::Provider(ProviderError::Group(source))
    }
}

impl core::error::Error for ProviderError {}

impl core::error::Error for ProofError {}

/// Errors of decoding fixed-width byte strings.
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Expected {expected} bytes, got {actual}.
    InvalidLength {
        /// The required length.
        expected: usize,
        /// The length received.
        actual: usize,
    },
}

impl core::error::Error for DecodeError {}

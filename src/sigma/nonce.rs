use rand_core::CryptoRngCore;

use crate::error::{ProofError, ProviderError};
use crate::group::{Group, Point, Scalar};
use crate::tools::Secret;

/// The prover's ephemeral secret `r` and its commitment `R = r · G`.
///
/// Lives for the duration of one proof; `r` is zeroized on drop.
#[derive(Debug)]
pub(crate) struct Nonce {
    secret: Secret<Scalar>,
    commitment: Point,
}

impl Nonce {
    /// Draws nonces until the commitment is a valid group element.
    ///
    /// On a correct provider the first attempt always succeeds.
    pub fn generate(group: &impl Group, rng: &mut impl CryptoRngCore, max_attempts: usize) -> Result<Self, ProofError> {
        for attempt in 1..=max_attempts {
            let secret = Secret::try_init_with(|| group.random_scalar(rng))?;
            let commitment = group.base_mul(secret.expose_secret());
            if group.is_valid_point(&commitment) {
                return Ok(Self { secret, commitment });
            }
            tracing::warn!(attempt, %commitment, "nonce commitment is not a valid group element, retrying");
        }

        tracing::error!(attempts = max_attempts, "failed to produce a valid nonce commitment");
        Err(ProviderError::NonceExhausted { attempts: max_attempts }.into())
    }

    pub fn secret(&self) -> &Scalar {
        self.secret.expose_secret()
    }

    pub fn commitment(&self) -> &Point {
        &self.commitment
    }
}

#[cfg(test)]
mod tests {
    use rand_core::OsRng;

    use super::Nonce;
    use crate::dev::FaultyGroup;
    use crate::error::{ProofError, ProviderError};
    use crate::group::{Ed25519, Group};

    #[test]
    fn commitment_matches_secret() {
        let group = Ed25519;
        let nonce = Nonce::generate(&group, &mut OsRng, 1).unwrap();
        assert_eq!(&group.base_mul(nonce.secret()), nonce.commitment());
        assert!(group.is_valid_point(nonce.commitment()));
    }

    #[test]
    fn fresh_per_call() {
        let group = Ed25519;
        let n1 = Nonce::generate(&group, &mut OsRng, 1).unwrap();
        let n2 = Nonce::generate(&group, &mut OsRng, 1).unwrap();
        assert_ne!(n1.commitment(), n2.commitment());
    }

    #[test_log::test]
    fn retries_invalid_commitments() {
        let group = FaultyGroup::new(3);
        let nonce = Nonce::generate(&group, &mut OsRng, 4).unwrap();
        assert!(group.is_valid_point(nonce.commitment()));
        assert_eq!(group.remaining_faults(), 0);
    }

    #[test_log::test]
    fn gives_up_after_max_attempts() {
        let group = FaultyGroup::new(5);
        let result = Nonce::generate(&group, &mut OsRng, 5);
        assert_eq!(
            result.unwrap_err(),
            ProofError::Provider(ProviderError::NonceExhausted { attempts: 5 })
        );
    }
}

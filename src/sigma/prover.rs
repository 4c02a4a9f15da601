use core::marker::PhantomData;

use rand_core::CryptoRngCore;

use super::challenge::Challenge;
use super::nonce::Nonce;
use super::proof::Proof;
use crate::entities::ProofComponents;
use crate::error::{PointLabel, ProofError};
use crate::group::{Group, Point, Scalar};
use crate::observe::{NoopObserver, Observer, Outcome, Phase, PhaseScope};
use crate::params::{ProofParams, ResponseRule};

/// The prover side of the protocol.
#[derive(Debug, Clone)]
pub struct Prover<P: ProofParams, O: Observer = NoopObserver> {
    group: P::Group,
    observer: O,
    phantom: PhantomData<P>,
}

impl<P: ProofParams> Prover<P> {
    /// Creates a prover over the given group provider.
    pub fn new(group: P::Group) -> Self {
        Self {
            group,
            observer: NoopObserver,
            phantom: PhantomData,
        }
    }
}

impl<P: ProofParams> Default for Prover<P>
where
    P::Group: Default,
{
    fn default() -> Self {
        Self::new(P::Group::default())
    }
}

impl<P: ProofParams, O: Observer> Prover<P, O> {
    /// Replaces the observer notified about each proof generation.
    pub fn with_observer<O2: Observer>(self, observer: O2) -> Prover<P, O2> {
        Prover {
            group: self.group,
            observer,
            phantom: PhantomData,
        }
    }

    /// The group provider.
    pub fn group(&self) -> &P::Group {
        &self.group
    }

    /// Proves knowledge of `scalar` such that `scalar · G == public_key`.
    ///
    /// The inputs are taken as is: a proof for an inconsistent pair is produced, but does not verify.
    pub fn generate_proof(
        &self,
        rng: &mut impl CryptoRngCore,
        scalar: &Scalar,
        public_key: &Point,
    ) -> Result<Proof, ProofError> {
        let mut scope = PhaseScope::enter(&self.observer, Phase::Generation);

        let nonce = Nonce::generate(&self.group, rng, P::MAX_NONCE_ATTEMPTS)?;
        let challenge = Challenge::new(&self.group, nonce.commitment(), public_key);

        let response = match P::RESPONSE_RULE {
            ResponseRule::ScalarProduct => {
                let cx = self.group.scalar_mul(challenge.as_scalar(), scalar);
                self.group.scalar_add(nonce.secret(), &cx)
            }
            ResponseRule::PointBytes => {
                let cs = self.group.mul(challenge.as_scalar(), public_key).map_err(|err| {
                    tracing::error!(%err, %public_key, "public key is not a valid group element");
                    ProofError::InvalidPoint(PointLabel::PublicKey)
                })?;
                self.group.scalar_add(nonce.secret(), &cs.reinterpret_as_scalar())
            }
        };

        let proof = Proof::new(*nonce.commitment(), response, *public_key);
        tracing::debug!(
            commitment = %proof.commitment(),
            %challenge,
            response = %proof.response(),
            "generated proof"
        );

        scope.complete(Outcome::Generated);
        Ok(proof)
    }

    /// Fetches the inputs from `components` once and proves knowledge of its scalar.
    pub fn prove(&self, rng: &mut impl CryptoRngCore, components: &impl ProofComponents) -> Result<Proof, ProofError> {
        let key = components.proof_components();
        self.generate_proof(rng, key.scalar(), key.public_key())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::cell::Cell;

    use rand_chacha::ChaCha8Rng;
    use rand_core::{OsRng, SeedableRng};

    use super::Prover;
    use crate::dev::{FailingRng, FaultyGroup, FaultyParams};
    use crate::entities::{KeyPair, ProofComponents};
    use crate::error::{PointLabel, ProofError, ProviderError};
    use crate::group::{Ed25519, Group, GroupError, Point};
    use crate::observe::tests::RecordingObserver;
    use crate::observe::{Outcome, Phase};
    use crate::params::{Ed25519Params, ReferenceParams};
    use crate::sigma::challenge::Challenge;

    #[test]
    fn public_key_is_passed_through() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let proof = Prover::<Ed25519Params>::default()
            .generate_proof(&mut OsRng, key.scalar(), key.public_key())
            .unwrap();
        assert_eq!(proof.public_key(), key.public_key());
        assert!(Ed25519.is_valid_point(proof.commitment()));
    }

    #[test]
    fn response_is_nonce_plus_challenge_times_scalar() {
        let group = Ed25519;
        let key = KeyPair::random(&group, &mut OsRng).unwrap();
        let proof = Prover::<Ed25519Params>::default().prove(&mut OsRng, &key).unwrap();

        // s·G == R + c·x·G
        let challenge = Challenge::new(&group, proof.commitment(), proof.public_key());
        let c_pk = group.mul(challenge.as_scalar(), key.public_key()).unwrap();
        assert_eq!(
            group.base_mul(proof.response()),
            group.add(proof.commitment(), &c_pk).unwrap()
        );
    }

    #[test]
    fn nonces_are_fresh() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let prover = Prover::<Ed25519Params>::default();
        let commitments = (0..8)
            .map(|_| *prover.prove(&mut OsRng, &key).unwrap().commitment())
            .collect::<Vec<_>>();
        for (i, c1) in commitments.iter().enumerate() {
            for c2 in commitments.iter().skip(i + 1) {
                assert_ne!(c1, c2);
            }
        }
    }

    #[test]
    fn reproducible_with_seeded_rng() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let prover = Prover::<Ed25519Params>::default();
        let p1 = prover.prove(&mut ChaCha8Rng::seed_from_u64(7), &key).unwrap();
        let p2 = prover.prove(&mut ChaCha8Rng::seed_from_u64(7), &key).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn point_bytes_rule_follows_legacy_call_sequence() {
        let group = Ed25519;
        let key = KeyPair::random(&group, &mut OsRng).unwrap();
        let prover = Prover::<ReferenceParams>::default();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let proof = prover.prove(&mut rng, &key).unwrap();

        // Replay the legacy call sequence on the same provider with the same random stream.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let r = group.random_scalar(&mut rng).unwrap();
        let commitment = group.base_mul(&r);
        let c = Challenge::new(&group, &commitment, key.public_key());
        let cs = group.mul(c.as_scalar(), key.public_key()).unwrap();
        let s = group.scalar_add(&r, &cs.reinterpret_as_scalar());

        assert_eq!(proof.commitment(), &commitment);
        assert_eq!(proof.response(), &s);
    }

    #[test]
    fn point_bytes_rule_rejects_invalid_public_key() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let result = Prover::<ReferenceParams>::default().generate_proof(
            &mut OsRng,
            key.scalar(),
            &Point::from_bytes([0; 32]),
        );
        assert_eq!(result, Err(ProofError::InvalidPoint(PointLabel::PublicKey)));
    }

    #[test_log::test]
    fn survives_faulty_provider() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let prover = Prover::<FaultyParams>::new(FaultyGroup::new(3));
        let proof = prover.prove(&mut OsRng, &key).unwrap();
        assert!(Ed25519.is_valid_point(proof.commitment()));
    }

    #[test_log::test]
    fn reports_exhausted_provider() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let observer = RecordingObserver::default();
        let prover = Prover::<FaultyParams>::new(FaultyGroup::new(10)).with_observer(&observer);

        assert_eq!(
            prover.prove(&mut OsRng, &key),
            Err(ProofError::Provider(ProviderError::NonceExhausted { attempts: 4 }))
        );
        assert_eq!(*observer.finished.borrow(), [(Phase::Generation, Outcome::Failed)]);
    }

    #[test_log::test]
    fn random_source_failure_is_not_retried() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let mut rng = FailingRng::default();
        assert_eq!(
            Prover::<Ed25519Params>::default().prove(&mut rng, &key),
            Err(ProofError::Provider(ProviderError::Group(GroupError::RandomSource)))
        );
        assert_eq!(rng.requests(), 1);
    }

    #[test]
    fn components_are_fetched_once() {
        struct CountingKeychain {
            key: KeyPair,
            calls: Cell<usize>,
        }

        impl ProofComponents for CountingKeychain {
            fn proof_components(&self) -> KeyPair {
                self.calls.set(self.calls.get() + 1);
                self.key.clone()
            }
        }

        let keychain = CountingKeychain {
            key: KeyPair::random(&Ed25519, &mut OsRng).unwrap(),
            calls: Cell::new(0),
        };
        let proof = Prover::<Ed25519Params>::default().prove(&mut OsRng, &keychain).unwrap();
        assert_eq!(keychain.calls.get(), 1);
        assert_eq!(proof.public_key(), keychain.key.public_key());
    }
}

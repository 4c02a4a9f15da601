use core::marker::PhantomData;

use super::challenge::Challenge;
use super::proof::Proof;
use crate::error::{PointLabel, ProofError};
use crate::group::Group;
use crate::observe::{NoopObserver, Observer, Outcome, Phase, PhaseScope};
use crate::params::ProofParams;

/// The verifier side of the protocol.
#[derive(Debug, Clone)]
pub struct Verifier<P: ProofParams, O: Observer = NoopObserver> {
    group: P::Group,
    observer: O,
    phantom: PhantomData<P>,
}

impl<P: ProofParams> Verifier<P> {
    /// Creates a verifier over the given group provider.
    pub fn new(group: P::Group) -> Self {
        Self {
            group,
            observer: NoopObserver,
            phantom: PhantomData,
        }
    }
}

impl<P: ProofParams> Default for Verifier<P>
where
    P::Group: Default,
{
    fn default() -> Self {
        Self::new(P::Group::default())
    }
}

impl<P: ProofParams, O: Observer> Verifier<P, O> {
    /// Replaces the observer notified about each verification.
    pub fn with_observer<O2: Observer>(self, observer: O2) -> Verifier<P, O2> {
        Verifier {
            group: self.group,
            observer,
            phantom: PhantomData,
        }
    }

    /// Checks `s · G == R + c · publicKey` with `c = H(R ‖ publicKey) mod L`.
    ///
    /// Returns `Ok(false)` for a well-formed proof that does not verify,
    /// and an error if `R` or `c · publicKey` is not a valid group element.
    pub fn verify_proof(&self, proof: &Proof) -> Result<bool, ProofError> {
        let mut scope = PhaseScope::enter(&self.observer, Phase::Verification);
        let group = &self.group;
        let commitment = proof.commitment();

        let challenge = Challenge::new(group, commitment, proof.public_key());
        let s_g = group.base_mul(proof.response());
        let c_pk = group.mul(challenge.as_scalar(), proof.public_key());

        if !group.is_valid_point(commitment) {
            tracing::error!(%commitment, "R is not a valid group element");
            return Err(ProofError::InvalidPoint(PointLabel::Commitment));
        }

        let c_pk = match c_pk {
            Ok(c_pk) if group.is_valid_point(&c_pk) => c_pk,
            Ok(c_pk) => {
                tracing::error!(%c_pk, "c * publicKey is not a valid group element");
                return Err(ProofError::InvalidPoint(PointLabel::ChallengeTimesPublicKey));
            }
            Err(err) => {
                tracing::error!(%err, public_key = %proof.public_key(), "failed to compute c * publicKey");
                return Err(ProofError::InvalidPoint(PointLabel::ChallengeTimesPublicKey));
            }
        };

        let sum = group.add(commitment, &c_pk).map_err(|err| {
            tracing::error!(%err, %commitment, %c_pk, "point addition failed");
            ProofError::InvalidPoint(PointLabel::Sum)
        })?;

        let accepted = group.equals(s_g.as_bytes(), sum.as_bytes());
        tracing::debug!(%challenge, accepted, "verified proof");

        scope.complete(if accepted { Outcome::Accepted } else { Outcome::Rejected });
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use impls::impls;
    use rand_core::OsRng;

    use super::Verifier;
    use crate::dev::{Fault, FaultyGroup, FaultyParams};
    use crate::entities::KeyPair;
    use crate::error::{PointLabel, ProofError};
    use crate::group::{Ed25519, Group, Point};
    use crate::observe::tests::RecordingObserver;
    use crate::observe::{NoopObserver, Outcome, Phase};
    use crate::params::{Ed25519Params, ReferenceParams};
    use crate::sigma::{Proof, Prover, PROOF_BYTES};

    fn make_proof() -> Proof {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        Prover::<Ed25519Params>::default().prove(&mut OsRng, &key).unwrap()
    }

    fn flip(proof: &Proof, index: usize, mask: u8) -> Proof {
        let mut bytes = proof.to_bytes();
        bytes[index] ^= mask;
        Proof::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn completeness() {
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let prover = Prover::<Ed25519Params>::default();
        let verifier = Verifier::<Ed25519Params>::default();
        for _ in 0..16 {
            let proof = prover.prove(&mut OsRng, &key).unwrap();
            assert_eq!(verifier.verify_proof(&proof), Ok(true));
        }
    }

    #[test]
    fn tampered_response_is_rejected() {
        let proof = make_proof();
        let verifier = Verifier::<Ed25519Params>::default();
        for index in 32..64 {
            for mask in [0x01, 0x80] {
                assert_eq!(verifier.verify_proof(&flip(&proof, index, mask)), Ok(false));
            }
        }
    }

    #[test]
    fn tampered_points_are_rejected_or_invalid() {
        let proof = make_proof();
        let verifier = Verifier::<Ed25519Params>::default();
        for index in (0..32).chain(64..PROOF_BYTES) {
            let result = verifier.verify_proof(&flip(&proof, index, 0x01));
            assert!(
                matches!(result, Ok(false) | Err(ProofError::InvalidPoint(_))),
                "byte {index}: {result:?}"
            );
        }
    }

    #[test]
    fn invalid_commitment_is_an_error() {
        let proof = make_proof();
        let tampered = Proof::new(Point::from_bytes([0; 32]), *proof.response(), *proof.public_key());
        assert_eq!(
            Verifier::<Ed25519Params>::default().verify_proof(&tampered),
            Err(ProofError::InvalidPoint(PointLabel::Commitment))
        );
    }

    #[test]
    fn invalid_public_key_is_an_error() {
        let proof = make_proof();
        let tampered = Proof::new(*proof.commitment(), *proof.response(), Point::from_bytes([0; 32]));
        assert_eq!(
            Verifier::<Ed25519Params>::default().verify_proof(&tampered),
            Err(ProofError::InvalidPoint(PointLabel::ChallengeTimesPublicKey))
        );
    }

    #[test_log::test]
    fn invalid_challenge_times_public_key_is_an_error() {
        let proof = make_proof();
        let verifier = Verifier::<FaultyParams>::new(FaultyGroup::with_fault(Fault::Mul, 1));
        assert_eq!(
            verifier.verify_proof(&proof),
            Err(ProofError::InvalidPoint(PointLabel::ChallengeTimesPublicKey))
        );
    }

    #[test_log::test]
    fn failed_addition_is_an_error() {
        let proof = make_proof();
        let observer = RecordingObserver::default();
        let verifier =
            Verifier::<FaultyParams>::new(FaultyGroup::with_fault(Fault::Add, 1)).with_observer(&observer);

        assert_eq!(verifier.verify_proof(&proof), Err(ProofError::InvalidPoint(PointLabel::Sum)));
        assert_eq!(*observer.finished.borrow(), [(Phase::Verification, Outcome::Failed)]);

        // The fault is used up, so the same proof now verifies.
        assert_eq!(verifier.verify_proof(&proof), Ok(true));
    }

    #[test]
    fn proof_for_another_key_is_rejected() {
        let proof = make_proof();
        let other = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let swapped = Proof::new(*proof.commitment(), *proof.response(), *other.public_key());
        assert_eq!(Verifier::<Ed25519Params>::default().verify_proof(&swapped), Ok(false));
    }

    #[test]
    fn inconsistent_key_pair_does_not_verify() {
        let group = Ed25519;
        let key = KeyPair::random(&group, &mut OsRng).unwrap();
        let wrong_scalar = group.random_scalar(&mut OsRng).unwrap();
        let proof = Prover::<Ed25519Params>::default()
            .generate_proof(&mut OsRng, &wrong_scalar, key.public_key())
            .unwrap();
        assert_eq!(Verifier::<Ed25519Params>::default().verify_proof(&proof), Ok(false));
    }

    #[test_log::test]
    fn point_bytes_proofs_do_not_verify() {
        // The legacy response adds the encoding of `c · publicKey` instead of `c · x`,
        // so `s · G` misses `R + c · publicKey`.
        let key = KeyPair::random(&Ed25519, &mut OsRng).unwrap();
        let proof = Prover::<ReferenceParams>::default().prove(&mut OsRng, &key).unwrap();
        assert_eq!(Verifier::<ReferenceParams>::default().verify_proof(&proof), Ok(false));
    }

    #[test]
    fn observer_sees_every_outcome() {
        let observer = RecordingObserver::default();
        let verifier = Verifier::<Ed25519Params>::default().with_observer(&observer);

        let proof = make_proof();
        let invalid = Proof::new(Point::from_bytes([0; 32]), *proof.response(), *proof.public_key());

        assert_eq!(verifier.verify_proof(&proof), Ok(true));
        assert_eq!(verifier.verify_proof(&flip(&proof, 40, 0x01)), Ok(false));
        assert!(verifier.verify_proof(&invalid).is_err());

        assert_eq!(
            *observer.finished.borrow(),
            [
                (Phase::Verification, Outcome::Accepted),
                (Phase::Verification, Outcome::Rejected),
                (Phase::Verification, Outcome::Failed),
            ]
        );
    }

    #[test]
    fn auto_traits() {
        assert!(impls!(Verifier<Ed25519Params, NoopObserver>: Send & Sync & Clone));
        assert!(impls!(Prover<Ed25519Params, NoopObserver>: Send & Sync & Clone));
        assert!(impls!(Proof: Send & Sync & Copy));
        assert!(impls!(KeyPair: Send & Sync & !Copy));
    }
}

//! A misbehaving group provider and random source **for testing purposes only**.

use core::num::NonZeroU32;
use core::sync::atomic::{AtomicUsize, Ordering};

use rand_core::{CryptoRng, CryptoRngCore, RngCore};
use serde::{Deserialize, Serialize};

use crate::group::{Ed25519, Group, GroupError, Point, Scalar, WideScalar, POINT_BYTES};
use crate::params::{ProofParams, ResponseRule};

// Encodes a point of order 4.
const INVALID_POINT: Point = Point::from_bytes([0u8; POINT_BYTES]);

/// The operation a [`FaultyGroup`] gets wrong.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// `base_mul` returns an encoding that is not a valid group element.
    #[default]
    BaseMul,
    /// `mul` succeeds, but returns an encoding that is not a valid group element.
    Mul,
    /// `add` fails with [`GroupError::InvalidPoint`] even for valid operands.
    Add,
}

/// Behaves as [`Ed25519`], except that the first `faults` calls of the operation
/// selected by [`Fault`] misbehave.
#[derive(Debug, Default)]
pub struct FaultyGroup {
    fault: Fault,
    faults: AtomicUsize,
}

impl FaultyGroup {
    /// Creates a provider whose base point multiplication misbehaves `faults` times.
    pub fn new(faults: usize) -> Self {
        Self::with_fault(Fault::BaseMul, faults)
    }

    /// Creates a provider where `fault` happens `faults` times.
    pub fn with_fault(fault: Fault, faults: usize) -> Self {
        Self {
            fault,
            faults: AtomicUsize::new(faults),
        }
    }

    /// The number of faulty calls still to come.
    pub fn remaining_faults(&self) -> usize {
        self.faults.load(Ordering::Relaxed)
    }

    fn take_fault(&self, operation: Fault) -> bool {
        operation == self.fault
            && self
                .faults
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |faults| faults.checked_sub(1))
                .is_ok()
    }
}

impl Group for FaultyGroup {
    fn random_scalar(&self, rng: &mut impl CryptoRngCore) -> Result<Scalar, GroupError> {
        Ed25519.random_scalar(rng)
    }

    fn base_mul(&self, scalar: &Scalar) -> Point {
        if self.take_fault(Fault::BaseMul) {
            INVALID_POINT
        } else {
            Ed25519.base_mul(scalar)
        }
    }

    fn mul(&self, scalar: &Scalar, point: &Point) -> Result<Point, GroupError> {
        if self.take_fault(Fault::Mul) {
            Ok(INVALID_POINT)
        } else {
            Ed25519.mul(scalar, point)
        }
    }

    fn add(&self, p: &Point, q: &Point) -> Result<Point, GroupError> {
        if self.take_fault(Fault::Add) {
            Err(GroupError::InvalidPoint)
        } else {
            Ed25519.add(p, q)
        }
    }

    fn is_valid_point(&self, point: &Point) -> bool {
        Ed25519.is_valid_point(point)
    }

    fn hash(&self, parts: &[&[u8]]) -> WideScalar {
        Ed25519.hash(parts)
    }

    fn reduce(&self, wide: &WideScalar) -> Scalar {
        Ed25519.reduce(wide)
    }

    fn scalar_add(&self, a: &Scalar, b: &Scalar) -> Scalar {
        Ed25519.scalar_add(a, b)
    }

    fn scalar_mul(&self, a: &Scalar, b: &Scalar) -> Scalar {
        Ed25519.scalar_mul(a, b)
    }
}

/// Parameters using [`FaultyGroup`] with a small retry budget.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultyParams;

impl ProofParams for FaultyParams {
    type Group = FaultyGroup;
    const MAX_NONCE_ATTEMPTS: usize = 4;
    const RESPONSE_RULE: ResponseRule = ResponseRule::ScalarProduct;
}

static_assertions::const_assert!(FaultyParams::SELF_CONSISTENT);

const UNAVAILABLE: NonZeroU32 = match NonZeroU32::new(rand_core::Error::CUSTOM_START) {
    Some(code) => code,
    None => NonZeroU32::MIN,
};

/// A random source that never produces bytes.
///
/// The infallible [`RngCore`] methods panic, as [`rand_core::OsRng`] does on failure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FailingRng {
    requests: usize,
}

impl FailingRng {
    /// How many times bytes were requested.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(dest) {
            panic!("{err}");
        }
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.requests += 1;
        Err(UNAVAILABLE.into())
    }
}

impl CryptoRng for FailingRng {}

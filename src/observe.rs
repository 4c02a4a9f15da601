//! Optional observation of proof generation and verification.
//!
//! The protocol does not measure or print anything by itself; callers inject an [`Observer`]
//! into a [`Prover`](crate::Prover) or a [`Verifier`](crate::Verifier) to get notified
//! when a phase starts and ends.

/// The protocol phase being observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// [`Prover::generate_proof`](crate::Prover::generate_proof).
    Generation,
    /// [`Verifier::verify_proof`](crate::Verifier::verify_proof).
    Verification,
}

/// How a phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A proof was produced.
    Generated,
    /// The proof verified.
    Accepted,
    /// The proof was well-formed but did not verify.
    Rejected,
    /// The phase returned an error.
    Failed,
}

/// Receives notifications about protocol phases.
pub trait Observer {
    /// State carried from [`start`](Self::start) to [`finish`](Self::finish), e.g. a start time.
    type Timer;

    /// Called when a phase begins.
    fn start(&self, phase: Phase) -> Self::Timer;

    /// Called exactly once per [`start`](Self::start), on every exit path of the phase.
    fn finish(&self, phase: Phase, timer: Self::Timer, outcome: Outcome);
}

impl<O: Observer> Observer for &O {
    type Timer = O::Timer;

    fn start(&self, phase: Phase) -> Self::Timer {
        O::start(self, phase)
    }

    fn finish(&self, phase: Phase, timer: Self::Timer, outcome: Outcome) {
        O::finish(self, phase, timer, outcome)
    }
}

/// An observer that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    type Timer = ();

    fn start(&self, _phase: Phase) -> Self::Timer {}

    fn finish(&self, _phase: Phase, _timer: Self::Timer, _outcome: Outcome) {}
}

/// Reports the wall-clock duration of each phase as a `tracing` event.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingObserver;

#[cfg(feature = "std")]
impl Observer for TimingObserver {
    type Timer = std::time::Instant;

    fn start(&self, phase: Phase) -> Self::Timer {
        tracing::debug!(?phase, "phase started");
        std::time::Instant::now()
    }

    fn finish(&self, phase: Phase, timer: Self::Timer, outcome: Outcome) {
        let elapsed = timer.elapsed();
        tracing::info!(?phase, ?outcome, ?elapsed, "phase finished");
    }
}

/// Notifies the observer of the end of a phase when dropped.
///
/// The outcome defaults to [`Outcome::Failed`], so an early return through `?` is reported as a failure.
pub(crate) struct PhaseScope<'a, O: Observer> {
    observer: &'a O,
    phase: Phase,
    timer: Option<O::Timer>,
    outcome: Outcome,
}

impl<'a, O: Observer> PhaseScope<'a, O> {
    pub fn enter(observer: &'a O, phase: Phase) -> Self {
        Self {
            observer,
            phase,
            timer: Some(observer.start(phase)),
            outcome: Outcome::Failed,
        }
    }

    pub fn complete(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

impl<O: Observer> Drop for PhaseScope<'_, O> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.observer.finish(self.phase, timer, self.outcome);
        }
    }
}

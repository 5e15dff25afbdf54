//! In-flight guard for overlapping submissions
//!
//! Every submit attempt that is allowed to proceed holds a
//! [`SubmissionToken`]. The token carries a monotonically increasing id and
//! releases the in-flight slot when dropped, on every exit path.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// How the controller treats a submit while another is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPolicy {
    /// Refuse the new submit; nothing is sent.
    #[default]
    Exclusive,
    /// Send it; only the most recent submission may apply its result.
    LatestWins,
    /// Send it; every completion applies, so the last to arrive wins.
    Unguarded,
}

#[derive(Debug, Default)]
pub(crate) struct SubmitGuard {
    policy: SubmitPolicy,
    in_flight: AtomicUsize,
    latest: AtomicU64,
}

impl SubmitGuard {
    pub(crate) fn new(policy: SubmitPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub(crate) fn policy(&self) -> SubmitPolicy {
        self.policy
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Claim a token, or `None` if the policy refuses a concurrent attempt.
    pub(crate) fn begin(&self) -> Option<SubmissionToken<'_>> {
        match self.policy {
            SubmitPolicy::Exclusive => {
                self.in_flight
                    .compare_exchange(0, 1, Ordering::SeqCst, Ordering::SeqCst)
                    .ok()?;
            }
            SubmitPolicy::LatestWins | SubmitPolicy::Unguarded => {
                self.in_flight.fetch_add(1, Ordering::SeqCst);
            }
        }

        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Some(SubmissionToken { guard: self, id })
    }

    /// Whether the holder of `token` may still write results.
    pub(crate) fn may_apply(&self, token: &SubmissionToken<'_>) -> bool {
        match self.policy {
            SubmitPolicy::LatestWins => self.latest.load(Ordering::SeqCst) == token.id,
            SubmitPolicy::Exclusive | SubmitPolicy::Unguarded => true,
        }
    }
}

#[derive(Debug)]
pub(crate) struct SubmissionToken<'a> {
    guard: &'a SubmitGuard,
    id: u64,
}

impl SubmissionToken<'_> {
    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for SubmissionToken<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

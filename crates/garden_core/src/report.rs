use crate::lifecycle::Outcome;
use serde::Serialize;
use std::ops::AddAssign;

/// Summary of what one garden-wide event did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventReport {
    /// Plants that took the mutation and are still alive.
    pub applied: usize,
    /// Plants that died from this event.
    pub killed: usize,
    /// Dead plants the event skipped.
    pub rejected: usize,
    /// Plants saved from a pest by pesticide.
    pub protected: usize,
    /// Plants whose vulnerability set matched the pest (pest events only).
    pub matched: usize,
}

impl EventReport {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Applied => self.applied += 1,
            Outcome::Killed => self.killed += 1,
            Outcome::Rejected => self.rejected += 1,
        }
    }

    /// Number of plants the event touched at all.
    #[must_use]
    pub fn touched(&self) -> usize {
        self.applied + self.killed + self.protected
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for EventReport {
    fn add_assign(&mut self, rhs: Self) {
        self.applied += rhs.applied;
        self.killed += rhs.killed;
        self.rejected += rhs.rejected;
        self.protected += rhs.protected;
        self.matched += rhs.matched;
    }
}

impl FromIterator<Outcome> for EventReport {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut report = Self::default();
        for outcome in iter {
            report.record(outcome);
        }
        report
    }
}

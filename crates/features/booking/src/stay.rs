//! The stay interval and its two rules: minimum length and overlap.

use crate::error::BookingError;
use chrono::{NaiveDateTime, TimeDelta};
use std::fmt;

/// A validated `[check_in, check_out]` interval in hotel-local time.
///
/// Construction enforces the stay-length rule, so every `Stay` in the ledger ends on a later
/// calendar day than it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stay {
    check_in: NaiveDateTime,
    check_out: NaiveDateTime,
}

impl Stay {
    /// Validates the stay length.
    ///
    /// A check-out on a later calendar day is valid no matter how little wall-clock time has
    /// elapsed (23:59 to 00:01 passes). A same-day check-out would additionally need 24 hours,
    /// which a single calendar day cannot hold, so same-day stays are always refused.
    ///
    /// # Errors
    /// Returns [`BookingError::CheckoutInvalid`] when check-out is not after check-in or falls on
    /// the check-in day.
    pub fn new(check_in: NaiveDateTime, check_out: NaiveDateTime) -> Result<Self, BookingError> {
        let duration = check_out.signed_duration_since(check_in);
        let same_day = check_in.date() == check_out.date();

        if duration <= TimeDelta::zero() || (same_day && duration < TimeDelta::hours(24)) {
            return Err(BookingError::CheckoutInvalid);
        }

        Ok(Self { check_in, check_out })
    }

    #[must_use]
    pub const fn check_in(&self) -> NaiveDateTime {
        self.check_in
    }

    #[must_use]
    pub const fn check_out(&self) -> NaiveDateTime {
        self.check_out
    }

    /// Number of calendar-day boundaries crossed. Always at least one.
    #[must_use]
    pub fn nights(&self) -> i64 {
        self.check_out.date().signed_duration_since(self.check_in.date()).num_days()
    }

    /// Inclusive overlap: the stays conflict unless one ends strictly before the other begins.
    ///
    /// Touching endpoints count as a conflict, so a same-instant handoff is not free.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in <= other.check_out && other.check_in <= self.check_out
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.check_in, self.check_out)
    }
}

//! Release date windows used by discovery queries.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A release-date constraint, resolved against the day of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ReleaseWindow {
    /// The last `days` days, both ends inclusive.
    #[display("last {} days", days)]
    Recent {
        /// Length of the window in days
        days: i64,
    },
    /// Released on or before the given date.
    #[display("released on or before {}", _0)]
    Until(NaiveDate),
}

impl ReleaseWindow {
    /// Window covering the last `days` days.
    pub fn recent(days: i64) -> Self {
        Self::Recent { days }
    }

    /// Lower and upper release-date bounds for a run on `today`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinecast_core::ReleaseWindow;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    /// let (from, to) = ReleaseWindow::recent(7).bounds(today);
    /// assert_eq!(from, NaiveDate::from_ymd_opt(2024, 3, 8));
    /// assert_eq!(to, today);
    /// ```
    pub fn bounds(&self, today: NaiveDate) -> (Option<NaiveDate>, NaiveDate) {
        match *self {
            Self::Recent { days } => (Some(today - Duration::days(days)), today),
            Self::Until(cutoff) => (None, cutoff),
        }
    }
}

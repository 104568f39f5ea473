// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule serialization.

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};

use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_FREQ, KW_RRULE_FREQ_DAILY, KW_RRULE_FREQ_MONTHLY,
    KW_RRULE_FREQ_WEEKLY, KW_RRULE_FREQ_YEARLY, KW_RRULE_UNTIL,
};
use crate::value::{WeekDay, format_utc};

/// Recurrence frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[expect(missing_docs)]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceFrequency::Daily => write!(f, "{KW_RRULE_FREQ_DAILY}"),
            RecurrenceFrequency::Weekly => write!(f, "{KW_RRULE_FREQ_WEEKLY}"),
            RecurrenceFrequency::Monthly => write!(f, "{KW_RRULE_FREQ_MONTHLY}"),
            RecurrenceFrequency::Yearly => write!(f, "{KW_RRULE_FREQ_YEARLY}"),
        }
    }
}

/// Recurrence rule.
///
/// Only the rule parts this writer emits are modeled: `FREQ`, `BYDAY` and
/// `UNTIL`. The `UNTIL` instant is kept in UTC because RFC 5545 requires the
/// UTC form whenever the `DTSTART` it applies to carries a `TZID`.
#[derive(Debug, Clone)]
pub struct RecurrenceRule {
    /// Frequency of recurrence.
    pub freq: RecurrenceFrequency,

    /// Days of week the recurrence falls on, in emission order.
    pub by_day: Vec<WeekDay>,

    /// Inclusive end of the recurrence, in UTC.
    pub until: Option<DateTime<Utc>>,
}

impl RecurrenceRule {
    /// A weekly rule on the given days, until the given instant.
    #[must_use]
    pub fn weekly(by_day: Vec<WeekDay>, until: DateTime<Utc>) -> Self {
        Self {
            freq: RecurrenceFrequency::Weekly,
            by_day,
            until: Some(until),
        }
    }
}

impl Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KW_RRULE_FREQ}={}", self.freq)?;
        if !self.by_day.is_empty() {
            write!(f, ";{KW_RRULE_BYDAY}=")?;
            for (i, day) in self.by_day.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{day}")?;
            }
        }
        if let Some(until) = self.until {
            write!(f, ";{KW_RRULE_UNTIL}={}", format_utc(until))?;
        }
        Ok(())
    }
}

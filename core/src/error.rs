// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Unrecoverable conversion error.
///
/// Anything recoverable (a malformed schedule segment, a row without a
/// schedule cell) never surfaces here; those are skipped locally and only
/// counted in the [`ConversionReport`](crate::ConversionReport).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The input table could not be decoded.
    #[error("failed to decode the input table: {0}")]
    Decode(#[from] csv::Error),
}

/// Why one schedule segment was skipped.
///
/// Per-segment failures are intentionally swallowed: they are logged at debug
/// level and counted, but never abort sibling segments or rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentErrorKind {
    /// The segment did not split into exactly four ` | `-separated fields.
    #[error("expected 4 `|`-separated fields, found {0}")]
    FieldCount(usize),

    /// The date-range field was not `YYYY-MM-DD - YYYY-MM-DD`.
    #[error("malformed date range: {0:?}")]
    DateRange(String),

    /// The end date precedes the start date.
    #[error("end date precedes start date")]
    InvertedDateRange,

    /// A day code was not one of `Mon Tue Wed Thu Fri Sat Sun`.
    #[error("unrecognized day code: {0:?}")]
    DayCode(String),

    /// The day-code field mapped to no weekdays at all.
    #[error("day-code field contains no weekdays")]
    NoWeekdays,

    /// The time-range field was not `H:MM a.m./p.m. - H:MM a.m./p.m.`.
    #[error("malformed time range: {0:?}")]
    TimeRange(String),

    /// The end time does not come after the start time on the same day.
    #[error("end time does not follow start time")]
    EmptyTimeWindow,
}

// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Schedule-string parsing.
//!
//! One schedule cell holds one or more newline-separated segments, each of
//! the form:
//!
//! ```txt
//! 2025-01-06 - 2025-04-07 | Mon Wed Fri | 10:00 a.m. - 11:00 a.m. | ICCS 200
//! ```
//!
//! A malformed segment fails on its own; it never aborts sibling segments or
//! other rows.

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::error::SegmentErrorKind;

const FIELD_SEPARATOR: &str = " | ";
const RANGE_SEPARATOR: &str = " - ";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One fully parsed schedule segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
    /// First calendar date of the range (term anchor, not necessarily a
    /// class day).
    pub start_date: NaiveDate,

    /// Last calendar date of the range, inclusive.
    pub end_date: NaiveDate,

    /// Weekdays the section meets on, in the order given, deduplicated.
    /// Never empty.
    pub weekdays: Vec<Weekday>,

    /// Start of the daily time window.
    pub start_time: NaiveTime,

    /// End of the daily time window; always after `start_time`.
    pub end_time: NaiveTime,

    /// Meeting location, verbatim; may be empty.
    pub location: String,
}

/// Derive the course title from the section label: the part before the first
/// `" - "` (section codes conventionally prefix a longer description).
#[must_use]
pub fn derive_title(section: &str) -> &str {
    section
        .split_once(RANGE_SEPARATOR)
        .map_or(section, |(code, _)| code)
}

/// The non-blank segments of one schedule cell, in order.
pub(crate) fn segments(cell: &str) -> impl Iterator<Item = &str> {
    cell.lines().map(str::trim).filter(|s| !s.is_empty())
}

/// Parse one schedule segment.
pub(crate) fn parse_segment(segment: &str) -> Result<ParsedSchedule, SegmentErrorKind> {
    let fields: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
    let [date_range, day_codes, time_range, location] = fields.as_slice() else {
        return Err(SegmentErrorKind::FieldCount(fields.len()));
    };

    let (start_date, end_date) = parse_date_range(date_range)?;
    if end_date < start_date {
        return Err(SegmentErrorKind::InvertedDateRange);
    }

    let weekdays = parse_day_codes(day_codes)?;

    let (start_time, end_time) = parse_time_range(time_range)?;
    if end_time <= start_time {
        return Err(SegmentErrorKind::EmptyTimeWindow);
    }

    Ok(ParsedSchedule {
        start_date,
        end_date,
        weekdays,
        start_time,
        end_time,
        location: (*location).to_string(),
    })
}

fn parse_date_range(field: &str) -> Result<(NaiveDate, NaiveDate), SegmentErrorKind> {
    let Some((start, end)) = field.split_once(RANGE_SEPARATOR) else {
        return Err(SegmentErrorKind::DateRange(field.to_string()));
    };
    let parse = |s: &str| {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map_err(|_| SegmentErrorKind::DateRange(field.to_string()))
    };
    Ok((parse(start)?, parse(end)?))
}

fn parse_day_codes(field: &str) -> Result<Vec<Weekday>, SegmentErrorKind> {
    let mut weekdays = Vec::new();
    for code in field.split_whitespace() {
        let day = match code {
            "Mon" => Weekday::Mon,
            "Tue" => Weekday::Tue,
            "Wed" => Weekday::Wed,
            "Thu" => Weekday::Thu,
            "Fri" => Weekday::Fri,
            "Sat" => Weekday::Sat,
            "Sun" => Weekday::Sun,
            _ => return Err(SegmentErrorKind::DayCode(code.to_string())),
        };
        if !weekdays.contains(&day) {
            weekdays.push(day);
        }
    }
    if weekdays.is_empty() {
        return Err(SegmentErrorKind::NoWeekdays);
    }
    Ok(weekdays)
}

fn parse_time_range(field: &str) -> Result<(NaiveTime, NaiveTime), SegmentErrorKind> {
    let Some((start, end)) = field.split_once(RANGE_SEPARATOR) else {
        return Err(SegmentErrorKind::TimeRange(field.to_string()));
    };
    Ok((parse_time(start)?, parse_time(end)?))
}

/// Parse a `H:MM a.m.` / `H:MM p.m.` 12-hour clock time.
///
/// Some export revisions put a non-breaking space before the period marker;
/// both that and a plain space are accepted.
fn parse_time(s: &str) -> Result<NaiveTime, SegmentErrorKind> {
    let err = || SegmentErrorKind::TimeRange(s.to_string());

    let normalized = s.replace('\u{a0}', " ");
    let mut parts = normalized.split_whitespace();
    let (Some(clock), Some(period), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(err());
    };

    let Some((hour, minute)) = clock.split_once(':') else {
        return Err(err());
    };
    let hour: u32 = hour.parse().map_err(|_| err())?;
    let minute: u32 = minute.parse().map_err(|_| err())?;
    if !(1..=12).contains(&hour) {
        return Err(err());
    }

    let hour = match period {
        "a.m." if hour == 12 => 0,
        "a.m." => hour,
        "p.m." if hour == 12 => 12,
        "p.m." => hour + 12,
        _ => return Err(err()),
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(err)
}

// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Recurring-event materialization.

use chrono::offset::LocalResult;
use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
    Weekday,
};
use chrono_tz::Tz;
use termcal_ical::{RecurrenceRule, VEvent, WeekDay};
use uuid::Uuid;

use crate::schedule::ParsedSchedule;

/// One weekly recurring event, ready for serialization.
///
/// Created once per schedule segment, immutable afterwards.
#[derive(Debug, Clone)]
pub struct EventDescriptor {
    /// Unique identifier (v4 UUID).
    pub uid: String,

    /// Course title (section code).
    pub title: String,

    /// Meeting location, verbatim from the export; may be empty.
    pub location: String,

    /// Timezone all the instants below were resolved in.
    pub timezone: Tz,

    /// Start of the first instance.
    pub start: DateTime<Tz>,

    /// End of the first instance.
    pub end: DateTime<Tz>,

    /// Inclusive end of the recurrence: end date at 23:59:59 local.
    pub until: DateTime<Tz>,

    /// Weekdays of the weekly recurrence, in parse order.
    pub weekdays: Vec<Weekday>,
}

impl EventDescriptor {
    /// Convert to a `VEVENT` for serialization.
    ///
    /// `dtstamp` is supplied by the caller so a whole conversion run carries
    /// one consistent stamp and tests stay deterministic.
    #[must_use]
    pub fn to_vevent(&self, dtstamp: DateTime<Utc>) -> VEvent {
        VEvent {
            uid: self.uid.clone(),
            dtstamp,
            tzid: self.timezone.name().to_string(),
            start: self.start.naive_local(),
            end: self.end.naive_local(),
            rrule: Some(RecurrenceRule::weekly(
                self.weekdays.iter().copied().map(ical_weekday).collect(),
                self.until.with_timezone(&Utc),
            )),
            summary: self.title.clone(),
            location: (!self.location.is_empty()).then(|| self.location.clone()),
        }
    }
}

/// First date on or after `start_date` whose weekday is in `weekdays`.
///
/// Exports anchor date ranges to the term start, which is not necessarily a
/// class day. Scans forward up to 7 days inclusive; if nothing matches
/// (unreachable for a non-empty weekday set) the range anchor itself is
/// returned.
#[must_use]
pub fn first_occurrence(start_date: NaiveDate, weekdays: &[Weekday]) -> NaiveDate {
    for offset in 0..=7u64 {
        if let Some(date) = start_date.checked_add_days(Days::new(offset)) {
            if weekdays.contains(&date.weekday()) {
                return date;
            }
        }
    }
    start_date
}

/// Materialize one parsed schedule into one event descriptor.
pub(crate) fn materialize(schedule: &ParsedSchedule, title: &str, timezone: Tz) -> EventDescriptor {
    let first_day = first_occurrence(schedule.start_date, &schedule.weekdays);
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap();

    EventDescriptor {
        uid: Uuid::new_v4().to_string(),
        title: title.to_string(),
        location: schedule.location.clone(),
        timezone,
        start: resolve_local(timezone, first_day.and_time(schedule.start_time)),
        end: resolve_local(timezone, first_day.and_time(schedule.end_time)),
        until: resolve_local(timezone, schedule.end_date.and_time(end_of_day)),
        weekdays: schedule.weekdays.clone(),
    }
}

/// Resolve a wall-clock time in `tz`.
///
/// Ambiguous times (fall-back transition) pick the earliest instant;
/// nonexistent times (spring-forward gap) shift past the gap.
fn resolve_local(tz: Tz, dt: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&dt) {
        LocalResult::Single(resolved) => resolved,
        LocalResult::Ambiguous(earliest, _) => {
            tracing::warn!(%dt, %tz, "ambiguous local time, picking earliest");
            earliest
        }
        LocalResult::None => {
            tracing::warn!(%dt, %tz, "nonexistent local time, shifting past the DST gap");
            match tz.from_local_datetime(&(dt + TimeDelta::hours(1))).earliest() {
                Some(resolved) => resolved,
                None => dt.and_utc().with_timezone(&tz),
            }
        }
    }
}

fn ical_weekday(day: Weekday) -> WeekDay {
    match day {
        Weekday::Mon => WeekDay::Monday,
        Weekday::Tue => WeekDay::Tuesday,
        Weekday::Wed => WeekDay::Wednesday,
        Weekday::Thu => WeekDay::Thursday,
        Weekday::Fri => WeekDay::Friday,
        Weekday::Sat => WeekDay::Saturday,
        Weekday::Sun => WeekDay::Sunday,
    }
}

// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::formatter::Formatter;
use crate::keyword::{
    KW_BEGIN, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_END, KW_LOCATION, KW_RRULE, KW_SUMMARY,
    KW_TZID, KW_UID, KW_VEVENT,
};
use crate::rrule::RecurrenceRule;
use crate::value::{escape_text, format_local, format_utc};

/// A `VEVENT` component.
///
/// Start and end are wall-clock times in the timezone named by `tzid`; they
/// are written as TZID-qualified DATE-TIME values.
#[derive(Debug, Clone)]
pub struct VEvent {
    /// Globally unique identifier of the event.
    pub uid: String,

    /// Creation instant of this calendar representation, in UTC.
    pub dtstamp: DateTime<Utc>,

    /// IANA timezone identifier the wall-clock times belong to.
    pub tzid: String,

    /// Start of the first instance (wall clock).
    pub start: NaiveDateTime,

    /// End of the first instance (wall clock).
    pub end: NaiveDateTime,

    /// Recurrence rule, if the event repeats.
    pub rrule: Option<RecurrenceRule>,

    /// Event summary.
    pub summary: String,

    /// Event location. `None` is omitted from the output.
    pub location: Option<String>,
}

impl VEvent {
    pub(crate) fn write(&self, f: &mut Formatter<impl Write>) -> io::Result<()> {
        write_property(f, KW_BEGIN, KW_VEVENT)?;
        write_property(f, KW_UID, &self.uid)?;
        write_property(f, KW_DTSTAMP, &format_utc(self.dtstamp))?;
        write_tzid_property(f, KW_DTSTART, &self.tzid, self.start)?;
        write_tzid_property(f, KW_DTEND, &self.tzid, self.end)?;
        if let Some(rrule) = &self.rrule {
            write_property(f, KW_RRULE, &rrule.to_string())?;
        }
        write_property(f, KW_SUMMARY, &escape_text(&self.summary))?;
        if let Some(location) = &self.location {
            write_property(f, KW_LOCATION, &escape_text(location))?;
        }
        write_property(f, KW_END, KW_VEVENT)
    }
}

/// Write one `NAME:value` content line.
pub(crate) fn write_property(
    f: &mut Formatter<impl Write>,
    name: &str,
    value: &str,
) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

/// Write one `NAME;TZID=tzid:value` content line.
fn write_tzid_property(
    f: &mut Formatter<impl Write>,
    name: &str,
    tzid: &str,
    value: NaiveDateTime,
) -> io::Result<()> {
    write!(f, "{name};{KW_TZID}={tzid}:{}", format_local(value))?;
    f.writeln()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};

    use super::*;
    use crate::formatter::FormatOptions;
    use crate::value::WeekDay;

    fn sample_event() -> VEvent {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        VEvent {
            uid: "9c4dbb95-7d84-4a83-b33c-09c0326e6a5e".into(),
            dtstamp: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            tzid: "America/Vancouver".into(),
            start: date.and_hms_opt(10, 0, 0).unwrap(),
            end: date.and_hms_opt(11, 0, 0).unwrap(),
            rrule: Some(RecurrenceRule::weekly(
                vec![WeekDay::Monday, WeekDay::Wednesday, WeekDay::Friday],
                Utc.with_ymd_and_hms(2025, 4, 8, 7, 59, 59).unwrap(),
            )),
            summary: "CPSC 110".into(),
            location: Some("ICCS 200".into()),
        }
    }

    fn render(event: &VEvent) -> String {
        let mut f = Formatter::new(Vec::new(), FormatOptions::default());
        event.write(&mut f).unwrap();
        String::from_utf8(f.into_writer()).unwrap()
    }

    #[test]
    fn test_write_event() {
        let out = render(&sample_event());
        let lines: Vec<&str> = out.split_terminator("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "BEGIN:VEVENT",
                "UID:9c4dbb95-7d84-4a83-b33c-09c0326e6a5e",
                "DTSTAMP:20250102T030405Z",
                "DTSTART;TZID=America/Vancouver:20250106T100000",
                "DTEND;TZID=America/Vancouver:20250106T110000",
                "RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR;UNTIL=20250408T075959Z",
                "SUMMARY:CPSC 110",
                "LOCATION:ICCS 200",
                "END:VEVENT",
            ]
        );
    }

    #[test]
    fn test_write_event_without_location() {
        let mut event = sample_event();
        event.location = None;
        let out = render(&event);
        assert!(!out.contains("LOCATION"));
    }

    #[test]
    fn test_summary_is_escaped() {
        let mut event = sample_event();
        event.summary = "Labs; odd weeks, maybe".into();
        let out = render(&event);
        assert!(out.contains("SUMMARY:Labs\\; odd weeks\\, maybe"));
    }
}

// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use termcal_ical::Calendar;

use crate::config::Config;
use crate::recurrence::{EventDescriptor, materialize};
use crate::schedule::{derive_title, parse_segment, segments};
use crate::table::Table;

/// The outcome of one conversion run.
///
/// Besides the events themselves, the report counts what was passed over so
/// the caller can surface it. Skips are normal: exports routinely contain
/// waitlisted or online rows with a blank schedule cell.
#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    /// One descriptor per successfully parsed schedule segment, in row order.
    pub events: Vec<EventDescriptor>,

    /// Course rows examined (header rows excluded).
    pub rows_total: usize,

    /// Rows skipped because the schedule cell was blank or missing.
    pub rows_skipped: usize,

    /// Malformed segments skipped within otherwise processed rows.
    pub segments_skipped: usize,
}

impl ConversionReport {
    /// Serialize the events into a [`Calendar`] with the given display name.
    ///
    /// `now` becomes every event's `DTSTAMP`; the caller passes it in so one
    /// run carries a single consistent stamp.
    #[must_use]
    pub fn into_calendar(self, name: &str, now: DateTime<Utc>) -> Calendar {
        let mut calendar = Calendar::new(name);
        for event in &self.events {
            calendar.push(event.to_vevent(now));
        }
        calendar
    }
}

/// Convert a decoded course table into recurring event descriptors.
///
/// Header rows are dropped per `config.header_rows`. For each remaining row
/// the section label and schedule cell are read from the configured columns;
/// a blank or missing schedule cell skips the row, and each segment of the
/// cell yields one event. A malformed segment is logged and counted but never
/// aborts its siblings.
#[must_use]
pub fn convert(table: &Table, config: &Config) -> ConversionReport {
    let mut report = ConversionReport::default();

    for (index, row) in table.rows().iter().enumerate().skip(config.header_rows) {
        report.rows_total += 1;

        let section = row
            .get(config.section_column)
            .map(String::as_str)
            .unwrap_or_default();
        let schedule = row
            .get(config.schedule_column)
            .map(String::as_str)
            .unwrap_or_default();

        if schedule.trim().is_empty() {
            tracing::debug!(row = index, section, "no schedule cell, skipping row");
            report.rows_skipped += 1;
            continue;
        }

        let title = derive_title(section);
        for segment in segments(schedule) {
            match parse_segment(segment) {
                Ok(parsed) => {
                    report
                        .events
                        .push(materialize(&parsed, title, config.timezone));
                }
                Err(err) => {
                    tracing::debug!(row = index, section, segment, %err, "skipping segment");
                    report.segments_skipped += 1;
                }
            }
        }
    }

    tracing::info!(
        events = report.events.len(),
        rows = report.rows_total,
        rows_skipped = report.rows_skipped,
        segments_skipped = report.segments_skipped,
        "conversion finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, NaiveTime, TimeZone, Weekday};

    use super::*;

    const HEADER_ROWS: usize = 3;

    /// A table shaped like the real export: three header rows, then course
    /// rows with the section label in column 4 and the schedule in column 7.
    fn table(courses: &[(&str, &str)]) -> Table {
        let mut rows = vec![
            vec!["My Enrolled Courses".to_string()],
            vec![String::new()],
            vec![
                String::new(),
                "Course Listing".into(),
                "Credits".into(),
                "Grading Basis".into(),
                "Section".into(),
                "Registration Status".into(),
                "Instructional Format".into(),
                "Meeting Patterns".into(),
            ],
        ];
        for (section, schedule) in courses {
            let mut row = vec![String::new(); 8];
            row[4] = (*section).to_string();
            row[7] = (*schedule).to_string();
            rows.push(row);
        }
        Table::from_rows(rows)
    }

    #[test]
    fn test_convert_single_course() {
        let table = table(&[(
            "CPSC 110 - Computation, Programs, and Programming",
            "2025-01-06 - 2025-04-07 | Mon Wed Fri | 10:00 a.m. - 11:00 a.m. | ICCS 200",
        )]);
        let report = convert(&table, &Config::default());

        assert_eq!(report.rows_total, 1);
        assert_eq!(report.rows_skipped, 0);
        assert_eq!(report.segments_skipped, 0);
        assert_eq!(report.events.len(), 1);

        let event = &report.events[0];
        assert_eq!(event.title, "CPSC 110");
        assert_eq!(event.location, "ICCS 200");
        assert_eq!(
            event.start.date_naive(),
            NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
        );
        assert_eq!(event.start.time(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(event.end.time(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(
            event.weekdays,
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
    }

    #[test]
    fn test_convert_aligns_to_first_class_day() {
        // 2025-01-02 is a Thursday; a Tue/Thu section starts that same day
        let table = table(&[(
            "MATH 100 - Differential Calculus",
            "2025-01-02 - 2025-04-08 | Tue Thu | 2:00 p.m. - 3:30 p.m. | MATH 100",
        )]);
        let report = convert(&table, &Config::default());
        let event = &report.events[0];
        assert_eq!(
            event.start.date_naive(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
        );
        assert_eq!(event.start.weekday(), Weekday::Thu);
    }

    #[test]
    fn test_convert_blank_schedule_skips_row() {
        // Online/waitlisted rows come through with an empty schedule cell
        let table = table(&[("CPSC 121 - Models of Computation", "   ")]);
        let report = convert(&table, &Config::default());
        assert!(report.events.is_empty());
        assert_eq!(report.rows_total, 1);
        assert_eq!(report.rows_skipped, 1);
    }

    #[test]
    fn test_convert_short_row_skipped() {
        let mut rows = vec![vec![String::new()]; HEADER_ROWS];
        rows.push(vec!["only".to_string(), "two".into()]);
        let report = convert(&Table::from_rows(rows), &Config::default());
        assert!(report.events.is_empty());
        assert_eq!(report.rows_skipped, 1);
    }

    #[test]
    fn test_convert_multi_segment_row() {
        // Lecture plus lab in one cell: two events, same title
        let table = table(&[(
            "PHYS 101 - Energy and Waves",
            "2025-01-06 - 2025-04-07 | Mon Wed | 9:00 a.m. - 10:00 a.m. | HENN 200\n\
             2025-01-06 - 2025-04-07 | Thu | 2:00 p.m. - 4:00 p.m. | HEBB 10",
        )]);
        let report = convert(&table, &Config::default());
        assert_eq!(report.events.len(), 2);
        assert_eq!(report.events[0].title, "PHYS 101");
        assert_eq!(report.events[1].title, "PHYS 101");
        assert_eq!(report.events[1].weekdays, vec![Weekday::Thu]);
        assert_eq!(
            report.events[1].end.time(),
            NaiveTime::from_hms_opt(16, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_convert_malformed_segment_spares_siblings() {
        let table = table(&[(
            "CHEM 121 - Structure and Bonding",
            "not a schedule\n\
             2025-01-06 - 2025-04-07 | Fri | 1:00 p.m. - 2:00 p.m. | CHEM B150",
        )]);
        let report = convert(&table, &Config::default());
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.segments_skipped, 1);
        assert_eq!(report.events[0].weekdays, vec![Weekday::Fri]);
    }

    #[test]
    fn test_convert_preserves_row_order() {
        let table = table(&[
            (
                "CPSC 110",
                "2025-01-06 - 2025-04-07 | Mon | 10:00 a.m. - 11:00 a.m. | A",
            ),
            (
                "MATH 100",
                "2025-01-06 - 2025-04-07 | Tue | 10:00 a.m. - 11:00 a.m. | B",
            ),
        ]);
        let report = convert(&table, &Config::default());
        let titles: Vec<&str> = report.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["CPSC 110", "MATH 100"]);
    }

    #[test]
    fn test_convert_custom_columns() {
        let mut rows = vec![vec![String::new()]; 1];
        rows.push(vec![
            "CPSC 110".to_string(),
            "2025-01-06 - 2025-04-07 | Mon | 10:00 a.m. - 11:00 a.m. | X".into(),
        ]);
        let config = Config {
            section_column: 0,
            schedule_column: 1,
            header_rows: 1,
            ..Config::default()
        };
        let report = convert(&Table::from_rows(rows), &config);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].title, "CPSC 110");
    }

    #[test]
    fn test_into_calendar() {
        let table = table(&[(
            "CPSC 110 - Computation, Programs, and Programming",
            "2025-01-06 - 2025-04-07 | Mon Wed Fri | 10:00 a.m. - 11:00 a.m. | ICCS 200",
        )]);
        let report = convert(&table, &Config::default());
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let calendar = report.into_calendar("Schedule", now);
        let ics = calendar.to_ics().unwrap();

        assert!(ics.contains("X-WR-CALNAME:Schedule\r\n"));
        assert!(ics.contains("DTSTART;TZID=America/Vancouver:20250106T100000\r\n"));
        assert!(ics.contains("DTEND;TZID=America/Vancouver:20250106T110000\r\n"));
        // 2025-04-07 23:59:59 PDT is 06:59:59Z the next day
        assert!(
            ics.contains("RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR;UNTIL=20250408T065959Z\r\n")
        );
        assert!(ics.contains("SUMMARY:CPSC 110\r\n"));
        assert!(ics.contains("LOCATION:ICCS 200\r\n"));
    }
}

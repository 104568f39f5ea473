// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use chrono_tz::Tz;

/// The name of the termcal application.
pub const APP_NAME: &str = "termcal";

/// Header captions expected over the configured columns, used for the
/// layout sanity check. Matching is case-insensitive and prefix-based, since
/// the captions varied slightly across export revisions.
const SECTION_CAPTION: &str = "section";
const SCHEDULE_CAPTION: &str = "meeting";

/// Conversion configuration.
///
/// The exact column positions shifted between export revisions, so both
/// indices are configuration rather than literals. Every field has a
/// default; a configuration file is optional.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Timezone the wall-clock dates and times in the export belong to.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,

    /// Zero-based column index of the course/section label.
    #[serde(default = "default_section_column")]
    pub section_column: usize,

    /// Zero-based column index of the schedule text cell.
    #[serde(default = "default_schedule_column")]
    pub schedule_column: usize,

    /// Number of header rows preceding the course rows.
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,

    /// Display name of the generated calendar.
    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            section_column: default_section_column(),
            schedule_column: default_schedule_column(),
            header_rows: default_header_rows(),
            calendar_name: default_calendar_name(),
        }
    }
}

impl Config {
    /// Cross-check the configured column layout against a header row.
    ///
    /// Returns one [`HeaderMismatch`] per configured column whose caption
    /// does not look like the expected one. An empty result means the layout
    /// is plausible; mismatches are advisory (the caller decides whether to
    /// warn or proceed), since older exports captioned columns differently.
    pub fn validate_header(&self, header: &[String]) -> Vec<HeaderMismatch> {
        let mut mismatches = Vec::new();
        for (column, expected) in [
            (self.section_column, SECTION_CAPTION),
            (self.schedule_column, SCHEDULE_CAPTION),
        ] {
            let found = header.get(column).map(String::as_str).unwrap_or_default();
            if !found.trim().to_lowercase().starts_with(expected) {
                mismatches.push(HeaderMismatch {
                    column,
                    expected,
                    found: found.to_string(),
                });
            }
        }
        mismatches
    }
}

/// One configured column whose header caption did not match expectations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMismatch {
    /// Zero-based column index that was checked.
    pub column: usize,

    /// Caption prefix the check looked for.
    pub expected: &'static str,

    /// Caption actually present in the header row (empty if the row is
    /// shorter than the configured index).
    pub found: String,
}

fn default_timezone() -> Tz {
    chrono_tz::America::Vancouver
}

fn default_section_column() -> usize {
    4
}

fn default_schedule_column() -> usize {
    7
}

fn default_header_rows() -> usize {
    3
}

fn default_calendar_name() -> String {
    "Schedule".to_string()
}

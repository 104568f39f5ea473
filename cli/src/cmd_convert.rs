// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::Utc;
use chrono_tz::Tz;
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use termcal_core::{Config, Table, convert};
use tokio::fs;

/// Convert one exported course table into an `.ics` file.
#[derive(Debug, Clone)]
pub struct CmdConvert {
    /// Path to the exported course table.
    pub input: PathBuf,

    /// Path of the iCalendar file to write.
    pub output: PathBuf,

    /// Timezone override for the dates and times in the export.
    pub timezone: Option<Tz>,

    /// Display-name override for the generated calendar.
    pub calendar_name: Option<String>,

    /// Column-index override for the section label.
    pub section_column: Option<usize>,

    /// Column-index override for the schedule cell.
    pub schedule_column: Option<usize>,

    /// Header-row-count override.
    pub header_rows: Option<usize>,
}

impl CmdConvert {
    pub const NAME: &str = "convert";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a course-table export (.csv/.tsv) to an iCalendar file")
            .arg(
                arg!(<INPUT> "Path to the exported course table (.csv or .tsv)")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output [OUTPUT] "Path of the .ics file to write")
                    .default_value("schedule.ics")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--timezone [TIMEZONE] "Timezone of the dates and times in the export")
                    .value_parser(value_parser!(Tz)),
            )
            .arg(arg!(--"calendar-name" [NAME] "Display name of the generated calendar"))
            .arg(
                arg!(--"section-column" [INDEX] "Zero-based column index of the section label")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                arg!(--"schedule-column" [INDEX] "Zero-based column index of the schedule cell")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                arg!(--"header-rows" [COUNT] "Number of header rows preceding the course rows")
                    .value_parser(value_parser!(usize)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: matches
                .get_one::<PathBuf>("INPUT")
                .cloned()
                .unwrap_or_default(),
            output: matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_default(),
            timezone: matches.get_one::<Tz>("timezone").copied(),
            calendar_name: matches.get_one::<String>("calendar-name").cloned(),
            section_column: matches.get_one::<usize>("section-column").copied(),
            schedule_column: matches.get_one::<usize>("schedule-column").copied(),
            header_rows: matches.get_one::<usize>("header-rows").copied(),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting course table...");
        let config = self.apply_overrides(config.clone());

        let raw = fs::read(&self.input)
            .await
            .map_err(|e| format!("Failed to read {}: {e}", self.input.display()))?;
        let table = Table::from_delimited(raw.as_slice(), delimiter_for(&self.input))?;

        // The caption row is the last header row
        if let Some(caption_row) = config
            .header_rows
            .checked_sub(1)
            .and_then(|i| table.rows().get(i))
        {
            for mismatch in config.validate_header(caption_row) {
                tracing::warn!(
                    column = mismatch.column,
                    expected = mismatch.expected,
                    found = %mismatch.found,
                    "unexpected header caption, check the column layout"
                );
            }
        }

        let report = convert(&table, &config);
        let events = report.events.len();
        let rows_skipped = report.rows_skipped;
        let segments_skipped = report.segments_skipped;

        let ics = report
            .into_calendar(&config.calendar_name, Utc::now())
            .to_ics()?;
        fs::write(&self.output, ics)
            .await
            .map_err(|e| format!("Failed to write {}: {e}", self.output.display()))?;

        println!(
            "{} {events} event(s) written to {}",
            "Converted:".green(),
            self.output.display()
        );
        if rows_skipped > 0 {
            println!(
                "{} {rows_skipped} row(s) without a schedule",
                "Skipped:".yellow()
            );
        }
        if segments_skipped > 0 {
            println!(
                "{} {segments_skipped} malformed schedule segment(s)",
                "Skipped:".yellow()
            );
        }
        Ok(())
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(timezone) = self.timezone {
            config.timezone = timezone;
        }
        if let Some(name) = &self.calendar_name {
            config.calendar_name = name.clone();
        }
        if let Some(column) = self.section_column {
            config.section_column = column;
        }
        if let Some(column) = self.schedule_column {
            config.schedule_column = column;
        }
        if let Some(rows) = self.header_rows {
            config.header_rows = rows;
        }
        config
    }
}

fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}

// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::event::{VEvent, write_property};
use crate::formatter::{FormatOptions, Formatter};
use crate::keyword::{
    KW_BEGIN, KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_END, KW_PRODID, KW_VCALENDAR, KW_VERSION,
    KW_VERSION_2_0, KW_X_WR_CALNAME,
};
use crate::value::escape_text;

const PRODID: &str = concat!("-//termcal//", env!("CARGO_PKG_VERSION"), "//EN");

/// Error while writing a calendar.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Writing to the underlying writer failed.
    #[error("failed to write calendar: {0}")]
    Io(#[from] io::Error),

    /// The produced byte stream was not valid UTF-8.
    #[error("calendar output is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// A `VCALENDAR` with its events, in insertion order.
#[derive(Debug, Clone)]
pub struct Calendar {
    /// Display name of the calendar (`X-WR-CALNAME`).
    pub name: String,

    /// Events in the order they were added.
    pub events: Vec<VEvent>,
}

impl Calendar {
    /// Create an empty calendar with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Append an event.
    pub fn push(&mut self, event: VEvent) {
        self.events.push(event);
    }

    /// Write the calendar to `w` with the given options.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, w: impl Write, options: FormatOptions) -> io::Result<()> {
        let mut f = Formatter::new(w, options);
        write_property(&mut f, KW_BEGIN, KW_VCALENDAR)?;
        write_property(&mut f, KW_VERSION, KW_VERSION_2_0)?;
        write_property(&mut f, KW_PRODID, PRODID)?;
        write_property(&mut f, KW_CALSCALE, KW_CALSCALE_GREGORIAN)?;
        write_property(&mut f, KW_X_WR_CALNAME, &escape_text(&self.name))?;
        for event in &self.events {
            event.write(&mut f)?;
        }
        write_property(&mut f, KW_END, KW_VCALENDAR)
    }

    /// Serialize the calendar to an RFC 5545 string with default options.
    ///
    /// # Errors
    /// Returns an error if writing fails or the output is not valid UTF-8.
    pub fn to_ics(&self) -> Result<String, WriteError> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, FormatOptions::default())?;
        Ok(String::from_utf8(buffer)?)
    }
}

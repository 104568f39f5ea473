// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Write iCalendar (RFC 5545) calendars with weekly recurring events.
//!
//! This crate is a writer only: it produces RFC 5545 content lines (CRLF
//! terminated, folded at 75 octets) for a `VCALENDAR` containing `VEVENT`
//! components with an optional weekly `RRULE`. It does not parse calendars.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

mod calendar;
mod event;
pub mod formatter;
pub mod keyword;
mod rrule;
mod value;

pub use crate::calendar::{Calendar, WriteError};
pub use crate::event::VEvent;
pub use crate::formatter::{FormatOptions, Formatter};
pub use crate::rrule::{RecurrenceFrequency, RecurrenceRule};
pub use crate::value::{WeekDay, escape_text};

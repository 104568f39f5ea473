// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Core pipeline: course-table rows in, recurring event descriptors out.
//!
//! The pipeline is a pure, synchronous, single-pass transform with no shared
//! state: the row extractor skips headers and schedule-less rows, the
//! schedule-string parser turns each `date range | days | time range |
//! location` segment into a structured descriptor, and the recurrence
//! materializer aligns it to the first actual class day and emits one weekly
//! recurring event per segment.

mod config;
mod convert;
mod error;
mod recurrence;
mod schedule;
mod table;

pub use crate::config::{APP_NAME, Config, HeaderMismatch};
pub use crate::convert::{ConversionReport, convert};
pub use crate::error::{ConvertError, SegmentErrorKind};
pub use crate::recurrence::{EventDescriptor, first_occurrence};
pub use crate::schedule::{ParsedSchedule, derive_title};
pub use crate::table::Table;

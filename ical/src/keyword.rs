// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545, limited to the writer's vocabulary.

#![allow(missing_docs)]

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";

// Section 3.7 - Calendar Properties
pub const KW_CALSCALE: &str = "CALSCALE";
pub const KW_CALSCALE_GREGORIAN: &str = "GREGORIAN";
pub const KW_PRODID: &str = "PRODID";
pub const KW_VERSION: &str = "VERSION";
pub const KW_VERSION_2_0: &str = "2.0";
pub const KW_X_WR_CALNAME: &str = "X-WR-CALNAME";

// Section 3.2 - Property Parameters
pub const KW_TZID: &str = "TZID";

// Section 3.8 - Component Properties
pub const KW_DTEND: &str = "DTEND";
pub const KW_DTSTAMP: &str = "DTSTAMP";
pub const KW_DTSTART: &str = "DTSTART";
pub const KW_LOCATION: &str = "LOCATION";
pub const KW_RRULE: &str = "RRULE";
pub const KW_SUMMARY: &str = "SUMMARY";
pub const KW_UID: &str = "UID";

// Section 3.3.10 - Recurrence Rule
pub const KW_RRULE_BYDAY: &str = "BYDAY";
pub const KW_RRULE_FREQ: &str = "FREQ";
pub const KW_RRULE_FREQ_DAILY: &str = "DAILY";
pub const KW_RRULE_FREQ_MONTHLY: &str = "MONTHLY";
pub const KW_RRULE_FREQ_WEEKLY: &str = "WEEKLY";
pub const KW_RRULE_FREQ_YEARLY: &str = "YEARLY";
pub const KW_RRULE_UNTIL: &str = "UNTIL";

pub const KW_DAY_SU: &str = "SU";
pub const KW_DAY_MO: &str = "MO";
pub const KW_DAY_TU: &str = "TU";
pub const KW_DAY_WE: &str = "WE";
pub const KW_DAY_TH: &str = "TH";
pub const KW_DAY_FR: &str = "FR";
pub const KW_DAY_SA: &str = "SA";

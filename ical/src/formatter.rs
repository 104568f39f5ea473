// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

//! Content-line formatter for RFC 5545 output.
//!
//! Writes bytes to any [`std::io::Write`] implementer, terminating lines with
//! CRLF and folding lines longer than 75 octets with a CRLF + SPACE
//! continuation, without ever splitting a multi-byte UTF-8 sequence.

use std::io::{self, Write};

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { folding: Some(75) }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub const fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }
}

/// iCalendar content-line formatter that writes to any `Write` implementer.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
        }
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a CRLF line ending.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        Ok(())
    }

    /// Insert line folding: CRLF + SPACE.
    ///
    /// The whitespace after the CRLF counts as 1 byte of the next line.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n ")?;
        self.line_length = 1;
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            // Folding disabled, write directly
            return self.writer.write(buf);
        };

        let mut remaining = buf;
        while !remaining.is_empty() {
            let available = max_len.saturating_sub(self.line_length);
            let available = if available == 0 {
                self.insert_fold()?;
                max_len.saturating_sub(self.line_length)
            } else {
                available
            };

            let bytes_to_write = available.min(remaining.len());

            // Never break a multi-byte UTF-8 sequence across a fold
            let bytes_to_write = find_safe_write_length(remaining, bytes_to_write);

            self.writer.write_all(&remaining[..bytes_to_write])?;
            self.line_length += bytes_to_write;
            remaining = &remaining[bytes_to_write..];
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Find the maximum number of bytes we can write without breaking a UTF-8
/// sequence.
///
/// UTF-8 encoding:
/// - 0xxxxxxx: 1 byte (ASCII)
/// - 110xxxxx / 1110xxxx / 11110xxx: start of a 2/3/4 byte sequence
/// - 10xxxxxx: continuation byte (not a start byte)
fn find_safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    let mut pos = max_bytes;
    while pos > 0 && (buf[pos] & 0xC0) == 0x80 {
        pos -= 1;
    }

    // A fold must make progress; if the first character itself does not fit,
    // write it whole and let the line exceed the limit by a couple of octets.
    if pos == 0 {
        let mut end = max_bytes;
        while end < buf.len() && (buf[end] & 0xC0) == 0x80 {
            end += 1;
        }
        return end;
    }

    pos
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn format_line(line: &str, folding: Option<usize>) -> String {
        let mut f = Formatter::new(Vec::new(), FormatOptions::default().folding(folding));
        f.write_all(line.as_bytes()).unwrap();
        f.writeln().unwrap();
        String::from_utf8(f.into_writer()).unwrap()
    }

    #[test]
    fn test_short_line_not_folded() {
        let out = format_line("SUMMARY:CPSC 110", Some(75));
        assert_eq!(out, "SUMMARY:CPSC 110\r\n");
    }

    #[test]
    fn test_long_line_folded_at_limit() {
        let line = format!("DESCRIPTION:{}", "a".repeat(100));
        let out = format_line(&line, Some(75));
        for physical in out.split("\r\n") {
            assert!(physical.len() <= 75, "line too long: {physical:?}");
        }
        // Unfolding restores the logical line
        let unfolded = out.replace("\r\n ", "").replace("\r\n", "");
        assert_eq!(unfolded, line);
    }

    #[test]
    fn test_folding_disabled() {
        let line = format!("DESCRIPTION:{}", "a".repeat(100));
        let out = format_line(&line, None);
        assert_eq!(out, format!("{line}\r\n"));
    }

    #[test]
    fn test_fold_does_not_split_utf8() {
        let line = format!("SUMMARY:{}", "é".repeat(60));
        let out = format_line(&line, Some(75));
        // Every physical line must still be valid UTF-8 on its own
        for physical in out.split("\r\n") {
            assert!(std::str::from_utf8(physical.as_bytes()).is_ok());
        }
        let unfolded = out.replace("\r\n ", "").replace("\r\n", "");
        assert_eq!(unfolded, line);
    }

    #[test]
    fn test_multiple_writes_share_line_length() {
        let mut f = Formatter::new(Vec::new(), FormatOptions::default());
        f.write_all("SUMMARY:".as_bytes()).unwrap();
        f.write_all("b".repeat(80).as_bytes()).unwrap();
        f.writeln().unwrap();
        let out = String::from_utf8(f.into_writer()).unwrap();
        for physical in out.split("\r\n") {
            assert!(physical.len() <= 75);
        }
    }
}

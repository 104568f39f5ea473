// SPDX-FileCopyrightText: 2026 The termcal authors
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use crate::error::ConvertError;

/// A decoded spreadsheet table: rows of untyped string cells.
///
/// How the table was decoded is not this crate's concern; anything that can
/// produce rows of cells can feed the converter. The delimited-text adapter
/// below covers the common CSV/TSV export path.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from already-decoded rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Decode a delimited-text table (CSV with `b','`, TSV with `b'\t'`).
    ///
    /// Rows may have differing cell counts; no header inference is done,
    /// header handling belongs to the row extractor.
    ///
    /// # Errors
    /// Returns [`ConvertError::Decode`] if the input is not decodable as
    /// delimited text.
    pub fn from_delimited(reader: impl Read, delimiter: u8) -> Result<Self, ConvertError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(ToString::to_string).collect());
        }
        Ok(Self { rows })
    }

    /// All rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

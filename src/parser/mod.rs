//! Positional CSV parser for articulation sheets.
//!
//! Turns the fixed 20-column layout into [`ArticulationRecord`]s. The sheets
//! are hand-edited spreadsheets, so every numeric column follows a
//! parse-or-default policy: a cell that does not parse as an integer is
//! replaced by the column's default instead of failing the row. Structural
//! problems (a row with missing columns) do fail, with the offending line
//! number, before any output is written.

use crate::error::{CsvError, CsvResult};
use crate::models::{ArticulationRecord, InputSwitch, OutputMessage};
use std::path::Path;

/// Column positions of the articulation sheet layout.
///
/// Each output group occupies four adjacent columns in the order
/// type, channel, selector, value.
mod col {
    pub const NAME: usize = 0;
    pub const CHANNEL: usize = 1;
    pub const SYMBOL: usize = 2;
    pub const INPUT_STATUS: usize = 3;
    pub const INPUT_SELECTOR: usize = 4;
    pub const INPUT_VALUE_START: usize = 5;
    pub const INPUT_VALUE_END: usize = 6;
    pub const INPUT_MODE: usize = 7;
    pub const OUT1_STATUS: usize = 8;
    pub const OUT1_CHANNEL: usize = 9;
    pub const OUT1_SELECTOR: usize = 10;
    pub const OUT1_VALUE: usize = 11;
    pub const OUT2_STATUS: usize = 12;
    pub const OUT3_STATUS: usize = 16;

    /// Number of columns every data row must provide.
    pub const COUNT: usize = 20;
}

/// Name substituted for a blank articulation name cell.
pub const DEFAULT_NAME: &str = "--";

/// Status substituted for a blank first-output type cell.
pub const DEFAULT_OUTPUT_STATUS: &str = "Note On";

/// Parse a cell as an integer, falling back to `default`.
///
/// The uniform policy for every numeric column: blank cells, stray text and
/// non-integer values all yield the column default.
pub fn parse_or_default(raw: &str, default: i64) -> i64 {
    raw.trim().parse().unwrap_or(default)
}

/// One split data row with positional field access.
struct RawRow<'a> {
    fields: Vec<&'a str>,
}

impl<'a> RawRow<'a> {
    fn split(line: &'a str, line_number: usize) -> CsvResult<Self> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < col::COUNT {
            return Err(CsvError::TooFewColumns {
                line: line_number,
                expected: col::COUNT,
                found: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    /// Cell text with trailing whitespace removed.
    fn text(&self, index: usize) -> &'a str {
        self.fields[index].trim_end()
    }

    fn int_or(&self, index: usize, default: i64) -> i64 {
        parse_or_default(self.fields[index], default)
    }

    /// A 1-based channel cell normalized to 0-based; 0 when unparseable.
    fn channel(&self, index: usize) -> i64 {
        self.fields[index]
            .trim()
            .parse::<i64>()
            .map(|c| c - 1)
            .unwrap_or(0)
    }
}

/// Parse the contents of an articulation sheet.
///
/// The first line is the header and is ignored; every following non-blank
/// line becomes exactly one record, in order, with IDs assigned from 1.
pub fn parse_records(content: &str) -> CsvResult<Vec<ArticulationRecord>> {
    let mut lines = content.lines();
    if lines.next().is_none() {
        return Err(CsvError::EmptyFile);
    }

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let line_number = index + 2; // 1-based, counting the header
        if line.trim().is_empty() {
            continue;
        }
        let row = RawRow::split(line, line_number)?;
        let id = records.len() as u32 + 1;
        records.push(parse_record(&row, id));
    }

    Ok(records)
}

/// Read and parse an articulation sheet from disk.
pub fn parse_csv_file(path: &Path) -> CsvResult<Vec<ArticulationRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

fn parse_record(row: &RawRow<'_>, id: u32) -> ArticulationRecord {
    let name = match row.text(col::NAME) {
        "" => DEFAULT_NAME.to_string(),
        name => name.to_string(),
    };

    let input = match row.text(col::INPUT_STATUS) {
        "" => None,
        status => Some(InputSwitch {
            status: status.to_string(),
            selector: row.int_or(col::INPUT_SELECTOR, 0),
            value_start: row.int_or(col::INPUT_VALUE_START, 1),
            value_end: row.int_or(col::INPUT_VALUE_END, 127),
            mode: row.text(col::INPUT_MODE).to_string(),
        }),
    };

    let output1 = OutputMessage {
        status: match row.text(col::OUT1_STATUS) {
            "" => DEFAULT_OUTPUT_STATUS.to_string(),
            status => status.to_string(),
        },
        channel: row.channel(col::OUT1_CHANNEL),
        selector: row.int_or(col::OUT1_SELECTOR, 0),
        value: row.int_or(col::OUT1_VALUE, 0),
    };

    ArticulationRecord {
        id,
        name,
        channel: row.channel(col::CHANNEL),
        symbol: row.text(col::SYMBOL).to_string(),
        input,
        output1,
        output2: parse_extra_output(row, col::OUT2_STATUS),
        output3: parse_extra_output(row, col::OUT3_STATUS),
    }
}

/// Outputs 2 and 3 exist only when their type column is non-blank; the
/// remaining cells of the group are defaulted independently of each other.
fn parse_extra_output(row: &RawRow<'_>, status_index: usize) -> Option<OutputMessage> {
    match row.text(status_index) {
        "" => None,
        status => Some(OutputMessage {
            status: status.to_string(),
            channel: row.channel(status_index + 1),
            selector: row.int_or(status_index + 2, 0),
            value: row.int_or(status_index + 3, 0),
        }),
    }
}

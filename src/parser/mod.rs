mod current;
mod roster;
mod tabular;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{LineBidError, LineBidResult};

pub use current::{split_current_employee, CurrentEmployeeSplit, CURRENT_EMPLOYEE_ID};

/// Hint returned to the caller when no bid record could be parsed
pub const FORMAT_HINT: &str =
    "Expected one bid per line: <seniority> <employee id> <line> [<line> ...]";

/// One employee's bid as extracted from the submitted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRecord {
    pub seniority_rank: u32,
    pub employee_id: String,
    pub employee_name: Option<String>,
    /// Candidate lines, most wanted first
    pub preferences: Vec<u32>,
    /// Set for the record taken from a "<name> Sen: <n>" annotation
    #[serde(default)]
    pub is_current: bool,
}

/// Table layouts the parser understands, tried in `DETECTION_ORDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Whitespace table under a "seniority ... crew/id" header line
    LegacyTabular,
    /// Printed roster: names, 7-digit ids, base/code/station columns
    Roster,
    /// Whitespace table, optional header
    Plain,
}

impl TableFormat {
    pub const DETECTION_ORDER: [TableFormat; 3] = [
        TableFormat::LegacyTabular,
        TableFormat::Roster,
        TableFormat::Plain,
    ];

    /// Parses `lines` in this layout. `None` means the layout does not apply
    /// or produced no usable record.
    pub fn parse(self, lines: &[&str]) -> Option<Vec<BidRecord>> {
        match self {
            TableFormat::LegacyTabular => tabular::parse_legacy(lines),
            TableFormat::Roster => roster::parse_roster(lines),
            TableFormat::Plain => tabular::parse_plain(lines),
        }
    }
}

/// Picks the first table layout that yields records
pub fn detect_table(lines: &[&str]) -> Option<(TableFormat, Vec<BidRecord>)> {
    TableFormat::DETECTION_ORDER
        .iter()
        .find_map(|format| format.parse(lines).map(|records| (*format, records)))
}

/// Parses raw bid text into records, in source order.
///
/// A leading current-employee annotation contributes one extra record ahead
/// of the table. Malformed lines and tokens are skipped; the call only fails
/// when nothing usable remains.
pub fn parse_bid_data(data: &str) -> LineBidResult<Vec<BidRecord>> {
    let lines: Vec<&str> = data.lines().collect();

    let (current, remainder) = match split_current_employee(&lines) {
        Some(split) => (split.record, split.remainder),
        None => (None, &lines[..]),
    };

    let mut records: Vec<BidRecord> = current.into_iter().collect();
    match detect_table(remainder) {
        Some((format, table)) => {
            debug!("Detected {:?} layout with {} records", format, table.len());
            records.extend(table);
        }
        None => debug!("No table layout matched"),
    }

    if records.is_empty() {
        return Err(LineBidError::ParseFailure(FORMAT_HINT.to_string()));
    }

    info!("Parsed {} bid records", records.len());
    Ok(records)
}

/// Splits a line into non-negative integers, dropping tokens that are not
pub(crate) fn parse_line_numbers(line: &str) -> Vec<u32> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<u32>() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!("Dropping non-numeric preference token {:?}", token);
                None
            }
        })
        .collect()
}

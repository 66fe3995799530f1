use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use super::{parse_line_numbers, BidRecord};

/// NAME TOKENS  1234567  <sen>  BAS  123  STA  <line> <line> ...
static ROSTER_RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<name>[A-Z][A-Z ,.'\-]*?)",
        r"\s+(?P<id>\d{7})",
        r"\s+(?P<sen>\d+)",
        r"\s+(?P<base>[A-Z]{3})",
        r"\s+(?P<code>\d{3})",
        r"\s+(?P<station>[A-Z]{3})",
        r"(?P<bids>(?:\s+\d+)*)\s*$",
    ))
    .expect("roster record pattern is valid")
});

/// Indentation that marks a line as overflow of the previous record's bids
const CONTINUATION_INDENT: usize = 6;

/// Scans a printed roster. Applies only if at least one line has the roster
/// record shape.
pub(super) fn parse_roster(lines: &[&str]) -> Option<Vec<BidRecord>> {
    if !lines.iter().any(|line| ROSTER_RECORD_RE.is_match(line)) {
        return None;
    }

    let mut records = Vec::new();
    // record still accepting continuation lines
    let mut open: Option<BidRecord> = None;

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() || is_page_furniture(line) {
            continue;
        }

        if is_continuation(line) {
            match open.as_mut() {
                Some(record) => record.preferences.extend(parse_line_numbers(line)),
                None => warn!("Line {}: continuation without a record, skipping", index + 1),
            }
            continue;
        }

        if let Some(record) = open.take() {
            push_usable(&mut records, record);
        }
        match parse_record_line(line) {
            Some(record) => open = Some(record),
            None => warn!("Line {}: not a roster record, skipping: {}", index + 1, line.trim()),
        }
    }

    if let Some(record) = open.take() {
        push_usable(&mut records, record);
    }

    if records.is_empty() {
        None
    } else {
        Some(records)
    }
}

/// Banners and repeated column headers between roster pages
fn is_page_furniture(line: &str) -> bool {
    line.contains("ONLY PILOTS") || (line.contains("NAME") && line.contains("ID#"))
}

fn is_continuation(line: &str) -> bool {
    let body = line.trim_start();
    let indent = line.len() - body.len();
    indent >= CONTINUATION_INDENT && !body.starts_with(|c: char| c.is_ascii_uppercase())
}

fn parse_record_line(line: &str) -> Option<BidRecord> {
    let caps = ROSTER_RECORD_RE.captures(line)?;

    let seniority_rank = match caps["sen"].parse::<u32>() {
        Ok(rank) => rank,
        Err(e) => {
            warn!("Seniority {:?} out of range: {}", &caps["sen"], e);
            return None;
        }
    };
    debug!(
        "Roster record {} base={} code={} station={}",
        &caps["id"], &caps["base"], &caps["code"], &caps["station"]
    );

    Some(BidRecord {
        seniority_rank,
        employee_id: caps["id"].to_string(),
        employee_name: Some(caps["name"].trim().to_string()),
        preferences: parse_line_numbers(&caps["bids"]),
        is_current: false,
    })
}

fn push_usable(records: &mut Vec<BidRecord>, record: BidRecord) {
    if record.preferences.is_empty() {
        warn!("Roster record {} has no bids, skipping", record.employee_id);
    } else {
        records.push(record);
    }
}

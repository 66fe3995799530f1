use log::{debug, warn};

use super::BidRecord;

/// Words that mark a plain table's first line as a column header
const HEADER_KEYWORDS: [&str; 3] = ["sen", "id", "bid"];

/// Table under a "Seniority / Crew ID" header line, as older bid sheets were
/// exported. Only applies when the first non-blank line is that header.
pub(super) fn parse_legacy(lines: &[&str]) -> Option<Vec<BidRecord>> {
    let (index, first) = first_non_blank(lines)?;
    if !is_legacy_header(first) {
        return None;
    }
    debug!("Legacy header: {}", first.trim());
    non_empty(parse_rows(&lines[index + 1..]))
}

/// Whitespace table, skipping a leading header line if there is one
pub(super) fn parse_plain(lines: &[&str]) -> Option<Vec<BidRecord>> {
    let (index, first) = first_non_blank(lines)?;
    let start = if is_header_line(first) {
        debug!("Skipping header: {}", first.trim());
        index + 1
    } else {
        index
    };
    non_empty(parse_rows(&lines[start..]))
}

fn first_non_blank<'a>(lines: &[&'a str]) -> Option<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index, *line))
}

fn is_legacy_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    (lower.contains("seniority") || lower.contains("senority"))
        && (lower.contains("crew") || lower.contains("id"))
}

fn is_header_line(line: &str) -> bool {
    let leads_with_number = line
        .split_whitespace()
        .next()
        .is_some_and(|token| token.parse::<u32>().is_ok());
    if leads_with_number {
        return false;
    }
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn non_empty(records: Vec<BidRecord>) -> Option<Vec<BidRecord>> {
    if records.is_empty() {
        None
    } else {
        Some(records)
    }
}

/// Parses `<seniority> <employee id> <line>...` rows. Rows that are too short
/// or carry a bad number are skipped whole.
fn parse_rows(lines: &[&str]) -> Vec<BidRecord> {
    let mut records = Vec::new();

    for (line_num, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line) {
            Ok(record) => records.push(record),
            Err(reason) => warn!("Row {} skipped ({}): {}", line_num + 1, reason, line),
        }
    }

    records
}

fn parse_row(line: &str) -> Result<BidRecord, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err("insufficient data".to_string());
    }

    let seniority_rank = parts[0]
        .parse::<u32>()
        .map_err(|e| format!("seniority {:?}: {}", parts[0], e))?;
    let preferences = parts[2..]
        .iter()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|e| format!("line {:?}: {}", token, e))
        })
        .collect::<Result<Vec<u32>, String>>()?;

    Ok(BidRecord {
        seniority_rank,
        employee_id: parts[1].to_string(),
        employee_name: None,
        preferences,
        is_current: false,
    })
}

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use super::{parse_line_numbers, BidRecord};

/// Placeholder employee id for the annotated current employee. The annotation
/// line carries no id of its own, so this stands in to keep ids non-empty.
pub const CURRENT_EMPLOYEE_ID: &str = "CURRENT";

/// "<name> Sen: <n>"
static CURRENT_EMPLOYEE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?P<name>\S.*?)\s*\bSen:\s*(?P<sen>\d+)\s*$")
        .expect("current employee pattern is valid")
});

/// Result of peeling the current-employee annotation off the top of a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentEmployeeSplit<'a> {
    /// `None` when the preference line had no usable numbers
    pub record: Option<BidRecord>,
    /// Lines after the preference line
    pub remainder: &'a [&'a str],
}

/// Recognises a "<name> Sen: <n>" first line followed by a preference line.
///
/// Returns `None` when the first non-blank line is not an annotation.
pub fn split_current_employee<'a>(lines: &'a [&'a str]) -> Option<CurrentEmployeeSplit<'a>> {
    let header_index = lines.iter().position(|line| !line.trim().is_empty())?;
    let caps = CURRENT_EMPLOYEE_RE.captures(lines[header_index])?;

    let seniority_rank = match caps["sen"].parse::<u32>() {
        Ok(rank) => rank,
        Err(e) => {
            warn!("Current employee seniority out of range: {}", e);
            return None;
        }
    };
    let name = caps["name"].trim().to_string();

    let prefs_index = lines[header_index + 1..]
        .iter()
        .position(|line| !line.trim().is_empty())
        .map(|offset| header_index + 1 + offset);

    let (preferences, remainder) = match prefs_index {
        Some(index) => (parse_line_numbers(lines[index]), &lines[index + 1..]),
        None => (Vec::new(), &lines[lines.len()..]),
    };

    let record = if preferences.is_empty() {
        warn!("Current employee {} has no usable preferences, skipping", name);
        None
    } else {
        debug!(
            "Current employee {} (seniority {}) bids {:?}",
            name, seniority_rank, preferences
        );
        Some(BidRecord {
            seniority_rank,
            employee_id: CURRENT_EMPLOYEE_ID.to_string(),
            employee_name: Some(name),
            preferences,
            is_current: true,
        })
    };

    Some(CurrentEmployeeSplit { record, remainder })
}

use serde::{Deserialize, Serialize};

use crate::parser::BidRecord;

/// Message for an employee none of whose lines were left
pub const NO_LINE_MESSAGE: &str = "No preferred lines available";

/// Annotation added to the current employee's result
pub const CURRENT_EMPLOYEE_NOTE: &str = "Current employee";

/// Outcome of the award for one bid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub seniority_rank: u32,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub awarded_line: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AssignmentResult {
    pub fn for_bid(bid: &BidRecord, awarded_line: Option<u32>) -> Self {
        let mut notes = Vec::new();
        if awarded_line.is_none() {
            notes.push(NO_LINE_MESSAGE);
        }
        if bid.is_current {
            notes.push(CURRENT_EMPLOYEE_NOTE);
        }

        AssignmentResult {
            seniority_rank: bid.seniority_rank,
            employee_id: bid.employee_id.clone(),
            employee_name: bid.employee_name.clone(),
            awarded_line,
            message: if notes.is_empty() {
                None
            } else {
                Some(notes.join("; "))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(is_current: bool) -> BidRecord {
        BidRecord {
            seniority_rank: 3,
            employee_id: "E003".to_string(),
            employee_name: Some("LEE".to_string()),
            preferences: vec![1],
            is_current,
        }
    }

    #[test]
    fn awarded_result_has_no_message() {
        let result = AssignmentResult::for_bid(&bid(false), Some(1));
        assert_eq!(result.awarded_line, Some(1));
        assert_eq!(result.message, None);
        assert_eq!(result.employee_name.as_deref(), Some("LEE"));
    }

    #[test]
    fn messages_are_joined() {
        let result = AssignmentResult::for_bid(&bid(true), None);
        assert_eq!(
            result.message.as_deref(),
            Some("No preferred lines available; Current employee")
        );
        let result = AssignmentResult::for_bid(&bid(true), Some(1));
        assert_eq!(result.message.as_deref(), Some(CURRENT_EMPLOYEE_NOTE));
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let result: AssignmentResult =
            serde_json::from_str(r#"{"seniority_rank": 2, "employee_id": "E2"}"#).unwrap();
        assert_eq!(result.awarded_line, None);
        assert_eq!(result.employee_name, None);
    }
}

use std::collections::HashSet;

use log::{debug, info};

use super::types::AssignmentResult;
use crate::parser::BidRecord;

/// Awards lines in seniority order.
///
/// Bids are stably sorted by rank (equal ranks keep input order); each bid
/// gets its first preference nobody earlier has claimed. Results come back in
/// that processing order, one per bid.
pub fn assign_lines(bids: &[BidRecord]) -> Vec<AssignmentResult> {
    let mut ordered: Vec<&BidRecord> = bids.iter().collect();
    ordered.sort_by_key(|bid| bid.seniority_rank);

    let mut claimed: HashSet<u32> = HashSet::new();
    let mut results = Vec::with_capacity(ordered.len());

    for bid in ordered {
        // insert() is false for a line someone already holds
        let awarded = bid.preferences.iter().copied().find(|line| claimed.insert(*line));

        match awarded {
            Some(line) => debug!(
                "{} (seniority {}) awarded line {}",
                bid.employee_id, bid.seniority_rank, line
            ),
            None => debug!(
                "{} (seniority {}): no preferred line left",
                bid.employee_id, bid.seniority_rank
            ),
        }
        results.push(AssignmentResult::for_bid(bid, awarded));
    }

    let unawarded = results.iter().filter(|r| r.awarded_line.is_none()).count();
    info!("Assigned {} bids, {} without a line", results.len(), unawarded);
    results
}

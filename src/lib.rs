//! Seniority line bidding.
//!
//! Turns free-form bid sheets into [`BidRecord`]s and awards schedule lines
//! greedily in seniority order.

pub mod assign;
pub mod display;
pub mod error;
pub mod parser;
pub mod web;

pub use assign::{assign_lines, AssignmentResult};
pub use error::{LineBidError, LineBidResult};
pub use parser::{parse_bid_data, BidRecord};

pub mod greedy;
pub mod types;

pub use greedy::assign_lines;
pub use types::{AssignmentResult, CURRENT_EMPLOYEE_NOTE, NO_LINE_MESSAGE};

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::assign::AssignmentResult;
use crate::error::LineBidResult;

/// Column titles of the exported results sheet
pub const CSV_HEADER: [&str; 5] = [
    "Seniority",
    "Employee ID",
    "Employee Name",
    "Awarded Line",
    "Message",
];

/// Formats an employee as `NAME (id)`, or just the id when unnamed
pub fn format_employee(result: &AssignmentResult) -> String {
    match &result.employee_name {
        Some(name) if !name.is_empty() => format!("{} ({})", name, result.employee_id),
        _ => result.employee_id.clone(),
    }
}

/// Writes results as CSV, one row per result in the given order
pub fn write_results_csv<W: Write>(results: &[AssignmentResult], writer: W) -> LineBidResult<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for result in results {
        let awarded = result.awarded_line.map(|line| line.to_string()).unwrap_or_default();
        wtr.write_record([
            result.seniority_rank.to_string().as_str(),
            result.employee_id.as_str(),
            result.employee_name.as_deref().unwrap_or(""),
            awarded.as_str(),
            result.message.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the results sheet to `path`
pub fn write_results_to_file<P: AsRef<Path>>(
    results: &[AssignmentResult],
    path: P,
) -> LineBidResult<()> {
    let file = File::create(path)?;
    write_results_csv(results, file)
}

/// Prints the award table to stdout
pub fn print_results(results: &[AssignmentResult]) {
    println!("\n=== Line Awards ===");
    println!("Total bids processed: {}", results.len());

    let unawarded: Vec<&AssignmentResult> =
        results.iter().filter(|r| r.awarded_line.is_none()).collect();
    if !unawarded.is_empty() {
        println!("⚠️  Employees without a line ({}):", unawarded.len());
        for result in &unawarded {
            println!("  - {} (Seniority: {})", format_employee(result), result.seniority_rank);
        }
    }

    println!();
    for result in results {
        let line = result
            .awarded_line
            .map(|line| format!("Line {}", line))
            .unwrap_or_else(|| "[NONE]".to_string());
        match &result.message {
            Some(message) => println!(
                "  {:>5}  {:<32} -> {} ({})",
                result.seniority_rank,
                format_employee(result),
                line,
                message
            ),
            None => println!(
                "  {:>5}  {:<32} -> {}",
                result.seniority_rank,
                format_employee(result),
                line
            ),
        }
    }
}

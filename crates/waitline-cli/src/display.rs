//! Console output for the waitline CLI.

use waitline_core::SignupRecord;

use crate::export::ExportOutcome;

/// Print the waitlist count and an aligned table of every record.
pub fn print_waitlist_dump(signups: &[SignupRecord]) {
    println!("=== Waitlist ===");
    println!("Total signups: {}", signups.len());
    if signups.is_empty() {
        return;
    }
    println!();
    println!("  {:<34} {:<26} {}", "email", "timestamp", "source");
    for record in signups {
        println!(
            "  {:<34} {:<26} {}",
            record.email, record.timestamp, record.source
        );
    }
}

pub fn print_submit_result(email: &str, delivered: bool) {
    if delivered {
        println!("{email} is on the waitlist (delivered to the sheet)");
    } else {
        println!("{email} is on the waitlist (kept on this device)");
    }
}

pub fn print_export_outcome(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Empty => println!("No signups to export yet."),
        ExportOutcome::Written { path, rows } => {
            println!("Wrote {} signups to {}", rows, path.display());
        }
    }
}

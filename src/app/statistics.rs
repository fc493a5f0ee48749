//! Exit statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs success and per-category failure counts at info level.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let successes = stats.successes();
    let total_errors = stats.total_errors();

    info!(
        "Processed {} request{} ({} succeeded, {} failed)",
        successes + total_errors,
        if successes + total_errors == 1 { "" } else { "s" },
        successes,
        total_errors
    );

    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }
}

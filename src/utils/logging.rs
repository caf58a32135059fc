// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored summary formatting

use crate::models::AuditSummary;
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

/// The three closing total lines.
pub fn format_summary(summary: &AuditSummary) -> Vec<String> {
    vec![
        format!("Total Valid: {}", summary.valid),
        format!("Total Valid With Config: {}", summary.valid_with_config),
        format!("Total Invalid: {}", summary.invalid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary() {
        let summary = AuditSummary {
            valid: 3,
            valid_with_config: 2,
            invalid: 1,
        };

        assert_eq!(
            format_summary(&summary),
            vec![
                "Total Valid: 3".to_string(),
                "Total Valid With Config: 2".to_string(),
                "Total Invalid: 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_plain_formatting_keeps_message() {
        colored::control::set_override(false);
        assert_eq!(format_warning("stale"), "⚠ stale");
        assert_eq!(format_success("done"), "✓ done");
        colored::control::unset_override();
    }
}

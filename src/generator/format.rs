//! Number formatting for reports.

/// Decimal places kept for lengths.
const LENGTH_DECIMALS: usize = 4;

/// Format a length in mm.
///
/// Whole numbers print without a decimal point; other values keep up to four
/// decimals with trailing zeros trimmed.
pub fn format_length(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    // Check for whole numbers first
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.prec$}", value, prec = LENGTH_DECIMALS);

    // Trim trailing zeros and possible trailing decimal point
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a percentage with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}", value)
}

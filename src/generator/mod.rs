//! Cut layout and report generation.

mod format;
mod layout;
mod report;

pub use format::{format_length, format_percent};
pub use layout::{generate_cut_layout, VisualBar, VisualSegment, REMAINDER_LABEL};
pub use report::{generate_cut_report, ReportWriter, REPORT_UNAVAILABLE};

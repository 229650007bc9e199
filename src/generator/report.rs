//! Plain-text cutting report.

use std::fmt::Write;

use super::format::{format_length, format_percent};
use crate::model::CuttingPlan;

/// Message returned for a plan that carries an error.
pub const REPORT_UNAVAILABLE: &str = "Unable to generate the cutting report.";

/// Width of the rule printed under each bar heading.
const RULE_WIDTH: usize = 45;

/// Line-oriented text buffer for the report.
pub struct ReportWriter {
    buffer: String,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Get the generated text.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated text.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a line.
    pub fn write_line(&mut self, content: &str) {
        writeln!(self.buffer, "{}", content).unwrap();
    }

    /// Write an empty line.
    pub fn write_blank(&mut self) {
        writeln!(self.buffer).unwrap();
    }

    /// Write a title underlined with `=`.
    pub fn write_title(&mut self, title: &str) {
        self.write_line(title);
        self.write_line(&"=".repeat(title.chars().count()));
    }

    /// Write a `-` rule.
    pub fn write_rule(&mut self) {
        self.write_line(&"-".repeat(RULE_WIDTH));
    }

    /// Write a `- ` list item.
    pub fn write_item(&mut self, content: &str) {
        writeln!(self.buffer, "- {}", content).unwrap();
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a plan as a text report.
pub fn generate_cut_report(plan: &CuttingPlan) -> String {
    if !plan.is_ok() {
        return REPORT_UNAVAILABLE.to_string();
    }

    let mut writer = ReportWriter::new();

    writer.write_title("PROFILE CUTTING PLAN");
    writer.write_blank();
    writer.write_line(&format!(
        "Stock bar length: {}mm",
        format_length(plan.stock_length)
    ));
    writer.write_line(&format!("Total bars required: {}", plan.total_bars));
    writer.write_line(&format!(
        "Global efficiency: {}%",
        format_percent(plan.global_efficiency_percent)
    ));
    writer.write_line(&format!(
        "Total waste: {}mm ({:.2}m)",
        format_length(plan.total_waste_length),
        plan.total_waste_meters()
    ));
    writer.write_blank();

    for bar in &plan.bars {
        writer.write_line(&format!(
            "BAR #{} - Efficiency: {}%",
            bar.id,
            format_percent(bar.utilization_percent)
        ));
        writer.write_rule();

        for piece in &bar.pieces {
            writer.write_item(&format!(
                "{}: {}mm (with kerf: {}mm)",
                piece.label,
                format_length(piece.length),
                format_length(piece.effective_length)
            ));
        }

        writer.write_item(&format!(
            "Remainder: {}mm",
            format_length(bar.remaining_length)
        ));
        writer.write_blank();
    }

    writer.take_output()
}

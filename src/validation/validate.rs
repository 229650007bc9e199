//! Validation logic for cut optimization input.

use std::collections::HashMap;

use crate::config::OptimizerConfig;
use crate::error::{OptimizeError, Result};
use crate::model::PieceRequest;
use tracing::{error, warn};

/// Findings from checking a piece list before optimizing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Problems that still allow a plan.
    pub warnings: Vec<String>,
    /// Problems that make optimizing fail.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// No errors found. Warnings don't count.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }

    fn fail(&mut self, message: String) {
        self.errors.push(message);
    }

    fn absorb(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    /// Emit every finding through `tracing`.
    pub fn log(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
        for err in &self.errors {
            error!("{}", err);
        }
    }
}

/// Validate the optimizer settings.
pub fn validate_config(config: &OptimizerConfig) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !config.stock_length.is_finite() || config.stock_length <= 0.0 {
        result.fail(format!("Invalid stock length ({})", config.stock_length));
    }

    if !config.kerf.is_finite() || config.kerf < 0.0 {
        result.fail(format!("Invalid kerf ({})", config.kerf));
    } else if config.kerf == 0.0 {
        result.warn("Kerf is zero: blade width is not accounted for".to_string());
    }

    result
}

/// Validate all requests against the settings.
pub fn validate_requests(
    requests: &[PieceRequest],
    config: &OptimizerConfig,
) -> Result<ValidationResult> {
    if requests.is_empty() {
        return Err(OptimizeError::EmptyPieceList);
    }

    let mut result = validate_config(config);

    for (idx, request) in requests.iter().enumerate() {
        result.absorb(validate_request(request, idx + 1, config));
    }

    if requests.iter().all(|r| r.quantity == 0) {
        result.fail("No pieces to cut: every request has zero quantity".to_string());
    }

    // Duplicate labels are allowed; only warn
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (idx, request) in requests.iter().enumerate() {
        match seen.get(request.label.as_str()) {
            Some(first) => result.warn(format!(
                "Piece {}: Label '{}' already used by piece {}",
                idx + 1,
                request.label,
                first
            )),
            None => {
                seen.insert(request.label.as_str(), idx + 1);
            }
        }
    }

    Ok(result)
}

/// Validate a single request.
pub fn validate_request(
    request: &PieceRequest,
    piece_num: usize,
    config: &OptimizerConfig,
) -> ValidationResult {
    let mut result = ValidationResult::default();

    if request.label.trim().is_empty() {
        result.warn(format!("Piece {}: Missing label", piece_num));
    }

    if !request.length.is_finite() || request.length <= 0.0 {
        result.fail(format!(
            "Piece {} ({}): Invalid length ({})",
            piece_num, request.label, request.length
        ));
        return result;
    }

    if request.quantity == 0 {
        result.warn(format!(
            "Piece {} ({}): Zero quantity, nothing will be cut",
            piece_num, request.label
        ));
        return result;
    }

    let effective = request.length + config.kerf;
    if effective > config.stock_length {
        result.fail(format!(
            "Piece {} ({}): Length {}mm plus kerf exceeds stock length {}mm",
            piece_num, request.label, request.length, config.stock_length
        ));
    } else if effective * 2.0 > config.stock_length {
        result.warn(format!(
            "Piece {} ({}): Longer than half a bar, each copy needs its own bar",
            piece_num, request.label
        ));
    }

    result
}

/// Validate, log the findings, and fail with the joined error messages.
pub fn quick_validate(requests: &[PieceRequest], config: &OptimizerConfig) -> Result<()> {
    let result = validate_requests(requests, config)?;
    result.log();

    if !result.passed() {
        return Err(OptimizeError::ValidationFailed(result.errors.join("; ")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests() -> Vec<PieceRequest> {
        vec![
            PieceRequest::new(1200.0, 4, "Montante"),
            PieceRequest::new(850.0, 2, "Travessa"),
        ]
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_warnings_do_not_fail() {
        let mut result = ValidationResult::default();
        result.warn("odd label".to_string());
        assert!(result.passed());

        let mut other = ValidationResult::default();
        other.fail("bad length".to_string());
        result.absorb(other);
        assert!(!result.passed());
        assert_eq!(result.warnings, vec!["odd label"]);
        assert_eq!(result.errors, vec!["bad length"]);
    }

    // ==================== validate_config tests ====================

    #[test]
    fn test_validate_config_zero_kerf_warning() {
        let result = validate_config(&OptimizerConfig::new(6000.0, 0.0));
        assert!(result.passed());
        assert!(result.warnings.iter().any(|w| w.contains("Kerf is zero")));
    }

    #[test]
    fn test_validate_config_invalid() {
        let result = validate_config(&OptimizerConfig::new(-1.0, -1.0));
        assert!(!result.passed());
        assert_eq!(result.errors.len(), 2);
    }

    // ==================== validate_requests tests ====================

    #[test]
    fn test_validate_requests_empty() {
        let result = validate_requests(&[], &OptimizerConfig::default());
        match result.unwrap_err() {
            OptimizeError::EmptyPieceList => {}
            _ => panic!("Expected EmptyPieceList error"),
        }
    }

    #[test]
    fn test_validate_requests_valid() {
        let result = validate_requests(&requests(), &OptimizerConfig::default()).unwrap();
        assert!(result.passed());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_requests_duplicate_label() {
        let mut list = requests();
        list.push(PieceRequest::new(300.0, 1, "Montante"));
        let result = validate_requests(&list, &OptimizerConfig::default()).unwrap();
        assert!(result.passed());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("already used by piece 1")));
    }

    #[test]
    fn test_validate_requests_all_zero_quantity() {
        let list = vec![PieceRequest::new(300.0, 0, "A")];
        let result = validate_requests(&list, &OptimizerConfig::default()).unwrap();
        assert!(!result.passed());
        assert!(result.warnings.iter().any(|w| w.contains("Zero quantity")));
    }

    // ==================== validate_request tests ====================

    #[test]
    fn test_validate_request_invalid_length() {
        let request = PieceRequest::new(0.0, 1, "Z");
        let result = validate_request(&request, 1, &OptimizerConfig::default());
        assert!(!result.passed());
        assert!(result.errors[0].contains("Invalid length"));
    }

    #[test]
    fn test_validate_request_oversized() {
        let request = PieceRequest::new(6000.0, 1, "Long");
        let result = validate_request(&request, 3, &OptimizerConfig::default());
        assert!(!result.passed());
        assert!(result.errors[0].contains("exceeds stock length"));
        assert!(result.errors[0].starts_with("Piece 3 (Long)"));
    }

    #[test]
    fn test_validate_request_half_bar_warning() {
        let request = PieceRequest::new(3500.0, 2, "Half");
        let result = validate_request(&request, 1, &OptimizerConfig::default());
        assert!(result.passed());
        assert!(result.warnings.iter().any(|w| w.contains("half a bar")));
    }

    #[test]
    fn test_validate_request_missing_label() {
        let request = PieceRequest::new(100.0, 1, "  ");
        let result = validate_request(&request, 1, &OptimizerConfig::default());
        assert!(result.passed());
        assert!(result.warnings.iter().any(|w| w.contains("Missing label")));
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        assert!(quick_validate(&requests(), &OptimizerConfig::default()).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let list = vec![PieceRequest::new(-5.0, 1, "bad")];
        let err = quick_validate(&list, &OptimizerConfig::default()).unwrap_err();
        assert!(matches!(err, OptimizeError::ValidationFailed(_)));
    }
}

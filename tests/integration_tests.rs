//! Integration tests for cut planning.
//!
//! These exercise the public API end to end: piece files on disk, the
//! optimizer, and the layout/report derived from its plans.

use barcut_rs::generator::REPORT_UNAVAILABLE;
use barcut_rs::{
    generate_cut_layout, generate_cut_report, optimize_piece_file, CutOptimizer, CuttingPlan,
    OptimizeError, PackingStrategy, PieceRequest,
};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::PathBuf;

const EPS: f64 = 1e-6;

// ==================== Test Helpers ====================

fn gate_frame() -> Vec<PieceRequest> {
    vec![
        PieceRequest::new(1200.0, 4, "Montante"),
        PieceRequest::new(850.0, 3, "Travessa"),
        PieceRequest::new(2350.0, 1, "Base"),
    ]
}

fn mixed_job() -> Vec<PieceRequest> {
    vec![
        PieceRequest::new(2350.0, 3, "Base"),
        PieceRequest::new(1200.0, 9, "Montante"),
        PieceRequest::new(850.0, 14, "Travessa"),
        PieceRequest::new(412.5, 6, "Reforço"),
        PieceRequest::new(1200.0, 2, "Montante"),
        PieceRequest::new(5100.0, 1, "Viga"),
    ]
}

/// Write a file into a fresh temp dir and return both.
fn write_fixture(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    (dir, path)
}

/// Count (label, nominal length in 0.1 mm) pairs.
fn multiset_from_plan(plan: &CuttingPlan) -> HashMap<(String, i64), u32> {
    let mut counts = HashMap::new();
    for bar in &plan.bars {
        for piece in &bar.pieces {
            *counts
                .entry((piece.label.clone(), (piece.length * 10.0).round() as i64))
                .or_insert(0) += 1;
        }
    }
    counts
}

fn multiset_from_requests(requests: &[PieceRequest]) -> HashMap<(String, i64), u32> {
    let mut counts = HashMap::new();
    for r in requests {
        if r.quantity > 0 {
            *counts
                .entry((r.label.clone(), (r.length * 10.0).round() as i64))
                .or_insert(0) += r.quantity;
        }
    }
    counts
}

// ==================== Plan properties ====================

#[test]
fn test_conservation_of_pieces() {
    for strategy in [
        PackingStrategy::FirstFitDecreasing,
        PackingStrategy::BestFitDecreasing,
    ] {
        let mut optimizer = CutOptimizer::new();
        optimizer.set_strategy(strategy);
        let requests = mixed_job();
        let plan = optimizer.optimize(&requests);

        assert!(plan.is_ok(), "{:?}", plan.error);
        let expected: u32 = requests.iter().map(|r| r.quantity).sum();
        assert_eq!(plan.piece_count(), expected as usize);
        assert_eq!(multiset_from_plan(&plan), multiset_from_requests(&requests));
    }
}

#[test]
fn test_capacity_and_totals() {
    let plan = CutOptimizer::new().optimize(&mixed_job());

    assert_eq!(plan.total_bars, plan.bars.len());
    for (idx, bar) in plan.bars.iter().enumerate() {
        assert_eq!(bar.id, idx + 1);
        assert!(bar.used_length <= plan.stock_length + EPS);
        assert!((bar.used_length + bar.remaining_length - plan.stock_length).abs() < EPS);
    }

    let waste: f64 = plan.bars.iter().map(|b| b.remaining_length).sum();
    assert!((plan.total_waste_length - waste).abs() < EPS);
    assert!(plan.global_efficiency_percent > 0.0);
    assert!(plan.global_efficiency_percent <= 100.0);
}

#[test]
fn test_deterministic_output() {
    let optimizer = CutOptimizer::new();
    let first = optimizer.optimize(&mixed_job());
    let second = optimizer.optimize(&mixed_job());
    assert_eq!(first, second);
    assert_eq!(generate_cut_report(&first), generate_cut_report(&second));
    assert_eq!(generate_cut_layout(&first), generate_cut_layout(&second));
}

#[test]
fn test_equal_lengths_keep_input_order() {
    // Two requests with the same length: the first request's pieces come first
    let requests = vec![
        PieceRequest::new(900.0, 2, "early"),
        PieceRequest::new(2000.0, 1, "long"),
        PieceRequest::new(900.0, 2, "late"),
    ];
    let plan = CutOptimizer::new().optimize(&requests);
    let order: Vec<&str> = plan.bars[0].pieces.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["long-1", "early-1", "early-2", "late-1", "late-2"]);
}

#[test]
fn test_empty_input_plan() {
    let plan = CutOptimizer::new().optimize(&[]);
    assert!(plan.error.is_some());
    assert!(plan.bars.is_empty());
    assert_eq!(plan.total_waste_length, 0.0);
    assert_eq!(plan.global_efficiency_percent, 0.0);
    assert!(generate_cut_layout(&plan).is_empty());
    assert_eq!(generate_cut_report(&plan), REPORT_UNAVAILABLE);
}

#[test]
fn test_two_bars_for_long_pieces() {
    let plan = CutOptimizer::new().optimize(&[PieceRequest::new(4000.0, 2, "A")]);
    assert_eq!(plan.total_bars, 2);
    assert_eq!(plan.total_waste_length, 3994.0);
    assert!((plan.global_efficiency_percent - 66.7167).abs() < 0.001);
}

#[test]
fn test_oversized_piece_is_rejected() {
    let err = CutOptimizer::new()
        .try_optimize(&[PieceRequest::new(6500.0, 1, "Viga")])
        .unwrap_err();
    assert_eq!(err.code_value(), 101);
}

#[test]
fn test_no_bar_goes_over_stock_length() {
    let mut optimizer = CutOptimizer::new();
    optimizer.set_kerf(0.0);

    let plan = optimizer.optimize(&[PieceRequest::new(3000.00005, 2, "Y")]);
    assert_eq!(plan.total_bars, 2);
    assert!(plan.total_waste_length > 0.0);
    for bar in &plan.bars {
        assert!(bar.used_length <= plan.stock_length);
        assert!(bar.remaining_length > 0.0);
    }
    for visual in generate_cut_layout(&plan) {
        assert!(visual.remainder().is_some());
    }

    let plan = optimizer.optimize(&[PieceRequest::new(6000.00009, 1, "Over")]);
    assert!(!plan.is_ok());
    assert!(plan.bars.is_empty());
}

// ==================== Layout and report ====================

#[test]
fn test_layout_matches_plan() {
    let plan = CutOptimizer::new().optimize(&mixed_job());
    let layout = generate_cut_layout(&plan);

    assert_eq!(layout.len(), plan.bars.len());
    for (visual, bar) in layout.iter().zip(&plan.bars) {
        assert_eq!(visual.id, bar.id);
        assert_eq!(visual.piece_segments().count(), bar.pieces.len());

        let mut position = 0.0;
        for segment in &visual.segments {
            assert!((segment.start_position - position).abs() < EPS);
            position = segment.end_position;
        }
        assert!((position - plan.stock_length).abs() < EPS || bar.is_full());
    }
}

#[test]
fn test_gate_frame_report_snapshot() {
    let optimizer = CutOptimizer::new();
    let plan = optimizer.optimize(&gate_frame());
    let report = optimizer.generate_cut_report(&plan);
    insta::assert_snapshot!("gate_frame_report", report);
}

// ==================== Piece files ====================

#[test]
fn test_optimize_json_file() {
    let (_dir, path) = write_fixture(
        "job.json",
        r#"{
            "stock_length": 3000,
            "kerf": 0,
            "pieces": [
                {"length": 1000, "quantity": 6, "label": "Perna"}
            ]
        }"#,
    );

    let plan = optimize_piece_file(&path).expect("Failed to optimize");
    assert_eq!(plan.stock_length, 3000.0);
    assert_eq!(plan.total_bars, 2);
    assert_eq!(plan.total_waste_length, 0.0);
    assert_eq!(plan.global_efficiency_percent, 100.0);
}

#[test]
fn test_optimize_text_file() {
    let (_dir, path) = write_fixture(
        "job.txt",
        "# portão lateral\nkerf = 3\nMontante;1200;4\nTravessa;850;3\nBase;2350;1\n",
    );

    let plan = optimize_piece_file(&path).expect("Failed to optimize");
    let expected = CutOptimizer::new().optimize(&gate_frame());
    assert_eq!(plan.total_bars, expected.total_bars);
    assert_eq!(plan.total_waste_length, expected.total_waste_length);
}

#[test]
fn test_optimize_file_errors() {
    let (_dir, path) = write_fixture("bad.txt", "Montante;1200;4\nTravessa;oops;3\n");
    match optimize_piece_file(&path).unwrap_err() {
        OptimizeError::ParseError { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    let (_dir, path) = write_fixture("long.txt", "Viga;6500;1\n");
    match optimize_piece_file(&path).unwrap_err() {
        OptimizeError::ValidationFailed(message) => assert!(message.contains("Viga")),
        other => panic!("Expected ValidationFailed, got {:?}", other),
    }

    let (_dir, path) = write_fixture("empty.json", "[]");
    assert!(matches!(
        optimize_piece_file(&path).unwrap_err(),
        OptimizeError::EmptyPieceList
    ));
}

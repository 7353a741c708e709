mod common;

use common::frames::{blank_frame, blemished_frame, block_frame};
use part_inspector::catalog::{color_products, color_standard, product_spec};
use part_inspector::color::ColorVerdict;
use part_inspector::defects::DefectKind;
use part_inspector::dimensional::MeasurementStatus;
use part_inspector::{
    aggregate::Disposition, GlossRange, InspectError, Inspector, InspectorParams, QualityTier,
};

fn inspector() -> Inspector {
    let _ = env_logger::builder().is_test(true).try_init();
    Inspector::new(InspectorParams::default())
}

#[test]
fn portrait_and_landscape_parts_measure_the_same() {
    let spec = product_spec("CUSTOM").unwrap();
    let inspector = inspector();

    // 1000x500 px at the default 10 px/mm is the 100x50 mm nominal.
    let landscape = block_frame(1280, 720, 140, 110, 1000, 500);
    let portrait = block_frame(720, 1280, 110, 140, 500, 1000);

    for frame in [landscape, portrait] {
        let report = inspector
            .measure_dimensions(&frame.as_view(), &spec)
            .unwrap();
        assert_eq!(report.status, MeasurementStatus::Passed);
        assert!((report.measurements.length - 100.0).abs() < 1.0);
        assert!((report.measurements.width - 50.0).abs() < 1.0);
        assert!(report.bounding_box.width_px >= report.bounding_box.height_px);
    }
}

#[test]
fn calibration_rescales_following_measurements() {
    let inspector = inspector();

    // The same 856x540 px silhouette declared as a half-size reference
    // doubles the scale to ~20 px/mm.
    let reference = block_frame(1000, 640, 72, 50, 856, 540);
    let cal = inspector
        .calibrate(&reference.as_view(), 42.8, 26.99)
        .unwrap();
    assert!((cal.pixels_per_unit - 20.0).abs() < 0.1);

    // A part that passed at 10 px/mm now reads half size and fails.
    let part = block_frame(1280, 720, 140, 110, 1000, 500);
    let spec = product_spec("CUSTOM").unwrap();
    let report = inspector
        .measure_dimensions(&part.as_view(), &spec)
        .unwrap();
    assert_eq!(report.status, MeasurementStatus::Failed);
    assert!((report.measurements.length - 50.0).abs() < 0.5);
    assert!((report.measurements.width - 25.0).abs() < 0.5);
    assert_eq!(report.issues.len(), 2);
}

#[test]
fn empty_bench_reports_cleanly_across_operations() {
    let frame = blank_frame(320, 200);
    let inspector = inspector();
    let spec = product_spec("FRC-180-STD").unwrap();

    let err = inspector
        .measure_dimensions(&frame.as_view(), &spec)
        .unwrap_err();
    assert_eq!(err, InspectError::ObjectNotDetected);

    // No object is an error for measurement but a clean result for the
    // surface scan.
    let found = inspector.detect_defects(&frame.as_view()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn off_standard_panel_is_rejected_with_both_notes() {
    // A tan panel judged against the natural-gray standard: far off in
    // color, and a flat synthetic frame has no gloss at all.
    let frame = part_inspector::image::RgbBufferU8::filled(120, 120, [200, 150, 120]);
    let standard = color_standard("GRAY").unwrap();

    let report = inspector()
        .analyze_color(
            &frame.as_view(),
            &standard,
            QualityTier::Functional,
            GlossRange::new(40.0, 60.0),
        )
        .unwrap();

    assert_eq!(report.measured_lab.l, 66.1);
    assert!(report.delta_e > 17.5 && report.delta_e < 18.5);
    assert_eq!(report.color_verdict, ColorVerdict::OutOfSpec);
    assert!(!report.gloss_in_range);
    assert_eq!(report.disposition, Disposition::Reject);

    let parts: Vec<&str> = report.recommendation.split(" | ").collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].starts_with("Color deviation high"));
    assert!(parts[1].starts_with("Gloss level"));
}

#[test]
fn every_catalog_product_analyzes_from_a_simulated_frame() {
    let inspector = inspector();
    for product in color_products() {
        let report = inspector
            .analyze_color_simulated(&product, 9)
            .unwrap_or_else(|e| panic!("{} failed: {e}", product.code));
        assert!(report.delta_e >= 0.0);
        assert!((0.0..=100.0).contains(&report.gloss_value));
        assert!((85.0..=99.0).contains(&report.confidence));
        assert_eq!(report.timing.stages.len(), 3);
        assert!(report.latency_ms > 0.0);
        assert_eq!(report.product_code.as_deref(), Some(product.code.as_str()));
    }
}

#[test]
fn surface_blemishes_rank_by_size_through_the_rgb_path() {
    // An elongated handling mark and a compact pit.
    let frame = blemished_frame(320, 200, &[(30, 60, 40, 8), (150, 100, 15, 15)]);
    let found = inspector().detect_defects(&frame.as_view()).unwrap();

    assert_eq!(found.len(), 2);
    assert!(found[0].area >= found[1].area);
    let kinds: Vec<DefectKind> = found.iter().map(|d| d.kind).collect();
    assert!(kinds.contains(&DefectKind::Scratch));
    assert!(kinds.contains(&DefectKind::Spot));
    for d in &found {
        assert!((70.0..=95.0).contains(&d.confidence));
    }
}

#[test]
fn measurement_report_serializes_for_downstream_consumers() {
    let frame = block_frame(1280, 720, 140, 110, 1000, 500);
    let spec = product_spec("CUSTOM").unwrap();
    let report = inspector()
        .measure_dimensions(&frame.as_view(), &spec)
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["productCode"], "CUSTOM");
    assert_eq!(json["status"], "PASSED");
    assert!(json["boundingBox"]["widthPx"].is_number());
    assert_eq!(json["timing"]["stages"].as_array().unwrap().len(), 3);
    // Height is unobservable from a single frame and stays absent.
    assert!(json["measurements"].get("height").is_none());
    assert!(json["contourArea"].as_f64().unwrap() > 400_000.0);
}

use part_inspector::catalog::{color_product, color_standard, product_spec};
use part_inspector::config::{self, RuntimeConfig};
use part_inspector::defects::{threshold_mask, DefectCandidate};
use part_inspector::geometry::shape_mask;
use part_inspector::image::io::{load_rgb_image, save_grayscale_u8, save_mask, write_json_file};
use part_inspector::image::{RgbBufferU8, RgbImageU8};
use part_inspector::preprocess::rgb_to_gray;
use part_inspector::report::{ColorAnalysisResult, MeasurementResult};
use part_inspector::synthetic::simulated_part_image;
use part_inspector::Inspector;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Combined record of everything the demo ran.
#[derive(Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    measurement: Option<MeasurementResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color_analysis: Option<ColorAnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defects: Option<Vec<DefectCandidate>>,
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "inspect_demo".to_string());
    let config = config::parse_cli(&program)?;
    let inspector = Inspector::new(config.params.clone());

    let report = match &config.input_path {
        Some(path) => run_on_image(&inspector, &config, path)?,
        None => run_simulated(&inspector, &config)?,
    };

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn run_on_image(
    inspector: &Inspector,
    config: &RuntimeConfig,
    path: &Path,
) -> Result<DemoReport, String> {
    let frame = load_rgb_image(path)?;
    let view = frame.as_view();
    let mut report = DemoReport::default();

    if let Some(code) = &config.product_code {
        let spec = product_spec(code).map_err(|e| e.to_string())?;
        let measurement = inspector
            .measure_dimensions(&view, &spec)
            .map_err(|e| e.to_string())?;
        print_measurement(&measurement);
        report.measurement = Some(measurement);
    }

    if let Some(code) = &config.color_product {
        let product = color_product(code).map_err(|e| e.to_string())?;
        let analysis = inspector
            .analyze_color_for_product(&view, &product)
            .map_err(|e| e.to_string())?;
        print_analysis(&analysis);
        report.color_analysis = Some(analysis);
    }

    if report.measurement.is_none() && report.color_analysis.is_none() {
        let found = inspector.detect_defects(&view).map_err(|e| e.to_string())?;
        print_defects(&found);
        report.defects = Some(found);
    }

    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &view, config)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(report)
}

fn run_simulated(inspector: &Inspector, config: &RuntimeConfig) -> Result<DemoReport, String> {
    let code = config.color_product.as_deref().unwrap_or("CNT-STR-001");
    let product = color_product(code).map_err(|e| e.to_string())?;

    println!(
        "Simulated run: product {} ({}), seed {}",
        product.code, product.name, config.simulate_seed
    );
    let analysis = inspector
        .analyze_color_simulated(&product, config.simulate_seed)
        .map_err(|e| e.to_string())?;
    print_analysis(&analysis);

    if let Some(dir) = &config.output.debug_dir {
        // Re-render the same frame; the seed makes it byte-identical.
        let standard = color_standard(&product.color_code).map_err(|e| e.to_string())?;
        let frame: RgbBufferU8 = simulated_part_image(&standard, config.simulate_seed);
        save_debug_artifacts(dir, &frame.as_view(), config)?;
        println!("Debug artifacts written to {}", dir.display());
    }

    Ok(DemoReport {
        color_analysis: Some(analysis),
        ..DemoReport::default()
    })
}

fn print_measurement(report: &MeasurementResult) {
    println!("Measurement summary");
    println!("  product: {} ({})", report.product_code, report.product_name);
    println!("  status: {:?}", report.status);
    println!(
        "  length: {:.2} mm (nominal {:.2} ± {:.2}, deviation {:+.2})",
        report.measurements.length,
        report.nominal.length,
        report.tolerance.length,
        report.deviations.length
    );
    println!(
        "  width: {:.2} mm (nominal {:.2} ± {:.2}, deviation {:+.2})",
        report.measurements.width,
        report.nominal.width,
        report.tolerance.width,
        report.deviations.width
    );
    for issue in &report.issues {
        println!("  issue: {issue}");
    }
    println!(
        "  boundary: area={:.0} px^2, rect {:.1}x{:.1} px at {:.1} deg",
        report.contour_area,
        report.bounding_box.width_px,
        report.bounding_box.height_px,
        report.bounding_box.angle_deg
    );
    println!("  confidence: {:.1}%", report.confidence);
    print_timings(&report.timing.stages, report.latency_ms);
}

fn print_analysis(report: &ColorAnalysisResult) {
    println!("Color analysis");
    if let (Some(code), Some(name)) = (&report.product_code, &report.product_name) {
        println!("  product: {code} ({name})");
    }
    println!(
        "  measured Lab: L={:.2} a={:.2} b={:.2}",
        report.measured_lab.l, report.measured_lab.a, report.measured_lab.b
    );
    println!(
        "  reference Lab: L={:.2} a={:.2} b={:.2}",
        report.reference_lab.l, report.reference_lab.a, report.reference_lab.b
    );
    println!(
        "  dE: {:.2} (tolerance {:.2}) -> {:?}",
        report.delta_e, report.delta_e_tolerance, report.color_verdict
    );
    println!(
        "  gloss: {:.1} GU (band {:.1}..{:.1}, in range: {})",
        report.gloss_value, report.gloss_range.min, report.gloss_range.max, report.gloss_in_range
    );
    print_defects(&report.defects);
    println!("  disposition: {:?}", report.disposition);
    println!("  recommendation: {}", report.recommendation);
    println!("  confidence: {:.1}%", report.confidence);
    print_timings(&report.timing.stages, report.latency_ms);
}

fn print_defects(found: &[DefectCandidate]) {
    println!("  defects: {}", found.len());
    for d in found {
        println!(
            "    {:?}/{:?} area={:.0} px^2 box={}x{} at ({}, {}) conf={:.1}%",
            d.kind,
            d.severity,
            d.area,
            d.bounding_box.w,
            d.bounding_box.h,
            d.bounding_box.x,
            d.bounding_box.y,
            d.confidence
        );
    }
}

fn print_timings(stages: &[part_inspector::report::StageTiming], total_ms: f64) {
    print!("  timings (ms):");
    for stage in stages {
        print!(" {}={:.3}", stage.label, stage.elapsed_ms);
    }
    println!(" total={total_ms:.3}");
}

fn save_debug_artifacts(
    dir: &Path,
    frame: &RgbImageU8<'_>,
    config: &RuntimeConfig,
) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create debug dir {}: {e}", dir.display()))?;

    let gray = rgb_to_gray(frame);
    save_grayscale_u8(&gray, &dir.join("grayscale.png"))?;

    let edges = shape_mask(gray.as_view(), &config.params.geometry);
    save_mask(&edges, &dir.join("edge_mask.png"))?;

    let defects = threshold_mask(gray.as_view(), &config.params.defects);
    save_mask(&defects, &dir.join("defect_mask.png"))?;

    Ok(())
}

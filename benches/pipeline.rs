use criterion::{black_box, criterion_group, criterion_main, Criterion};
use part_inspector::catalog::{color_product, color_standard, product_spec};
use part_inspector::image::RgbBufferU8;
use part_inspector::synthetic::simulated_part_image;
use part_inspector::{Inspector, InspectorParams};

fn measurement_frame() -> RgbBufferU8 {
    let mut frame = RgbBufferU8::filled(1280, 720, [220, 220, 220]);
    frame.fill_rect(140, 110, 1140, 610, [40, 40, 40]);
    frame
}

fn bench_measure_dimensions(c: &mut Criterion) {
    let inspector = Inspector::new(InspectorParams::default());
    let spec = product_spec("CUSTOM").unwrap();
    let frame = measurement_frame();

    c.bench_function("measure_dimensions_1280x720", |b| {
        b.iter(|| {
            let report = inspector
                .measure_dimensions(black_box(&frame.as_view()), &spec)
                .unwrap();
            black_box(report.status);
        })
    });
}

fn bench_color_analysis(c: &mut Criterion) {
    let inspector = Inspector::new(InspectorParams::default());
    let product = color_product("CNT-STR-001").unwrap();
    let standard = color_standard(&product.color_code).unwrap();
    let frame = simulated_part_image(&standard, 11);

    c.bench_function("analyze_color_1280x720", |b| {
        b.iter(|| {
            let report = inspector
                .analyze_color_for_product(black_box(&frame.as_view()), &product)
                .unwrap();
            black_box(report.disposition);
        })
    });
}

fn bench_defect_scan(c: &mut Criterion) {
    let inspector = Inspector::new(InspectorParams::default());
    let standard = color_standard("GRAY").unwrap();
    let frame = simulated_part_image(&standard, 3);

    c.bench_function("detect_defects_1280x720", |b| {
        b.iter(|| {
            let found = inspector
                .detect_defects(black_box(&frame.as_view()))
                .unwrap();
            black_box(found.len());
        })
    });
}

criterion_group!(
    benches,
    bench_measure_dimensions,
    bench_color_analysis,
    bench_defect_scan
);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use scatter_rs::core::{
    LinearScale, Margin, PlotArea, Viewport, project_markers, x_scale_from_records,
    y_scale_from_records,
};
use scatter_rs::data::StateRecord;
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 0.0, 1920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.value_to_pixel(4_321.123).expect("to pixel");
            let _ = scale.pixel_to_value(px).expect("from pixel");
        })
    });
}

fn bench_marker_projection_10k(c: &mut Criterion) {
    let plot = PlotArea::from_viewport(Viewport::new(1920, 1080), Margin::default())
        .expect("plot area");

    let records: Vec<StateRecord> = (0..10_000)
        .map(|i| {
            let poverty = 5.0 + (i as f64) * 0.002;
            let healthcare = 4.0 + ((i % 97) as f64) * 0.1;
            StateRecord::new(format!("State {i}"), format!("S{i}"), poverty, healthcare)
        })
        .collect();

    let x_scale = x_scale_from_records(&records, plot).expect("x scale");
    let y_scale = y_scale_from_records(&records, plot).expect("y scale");

    c.bench_function("marker_projection_10k", |b| {
        b.iter(|| {
            let _ = project_markers(
                black_box(&records),
                black_box(x_scale),
                black_box(y_scale),
                black_box(15.0),
            )
            .expect("projection should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_marker_projection_10k
);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use panelview::{ChartConfig, ChartGeometry, DeterministicTextMeasurer, Item, SurfaceSize, layout};
use std::hint::black_box;

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("axis {i}"), 10.0, (i % 11) as f64))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let config = ChartConfig::default();
    let surface = SurfaceSize::new(400.0, 400.0);
    let measurer = DeterministicTextMeasurer::default();

    let mut group = c.benchmark_group("layout");
    for n in [3usize, 8, 64] {
        let data = items(n);
        group.bench_function(format!("cold_{n}"), |b| {
            b.iter(|| layout(black_box(&data), &config, surface, &measurer))
        });
        let mut geometry = ChartGeometry::new();
        group.bench_function(format!("cached_{n}"), |b| {
            b.iter(|| geometry.layout(black_box(&data), &config, surface, &measurer))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inkline_core::walk::gaussian_walk;
use inkline_core::{Slopegraph, Sparkline};

fn build_slopegraph() -> Slopegraph {
    let mut graph = Slopegraph::new("Slopegraph", (1990.0, 2010.0));
    for (label, before, after) in [
        ("A", 10.0, 15.0),
        ("B", 30.0, 25.0),
        ("C", 20.0, 40.0),
        ("D", 50.0, 45.0),
        ("E", 40.0, 60.0),
    ] {
        graph.push(label, before, after);
    }
    graph
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");

    group.bench_function("slopegraph_5", |b| {
        let graph = build_slopegraph();
        let chart = graph.to_chart();
        let mut opts = graph.render_options();
        opts.draw_labels = false;
        b.iter(|| {
            let bytes = chart.render_to_png_bytes(&opts).expect("render");
            black_box(bytes);
        });
    });

    for &n in &[50usize, 5_000usize] {
        group.bench_function(format!("sparkline_{n}"), |b| {
            let spark = Sparkline::new(gaussian_walk(42, n));
            let chart = spark.to_chart();
            let mut opts = spark.render_options();
            opts.draw_labels = false;
            b.iter(|| {
                let bytes = chart.render_to_png_bytes(&opts).expect("render");
                black_box(bytes);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);

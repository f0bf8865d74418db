// File: crates/inkline-examples/src/bin/minimal.rs
// Summary: Renders the slopegraph and sparkline recipes to PNG files.

use inkline_core::walk::gaussian_walk;
use inkline_core::{Slopegraph, Sparkline};

fn main() {
    let mut graph = Slopegraph::new("Slopegraph: Changes from 1990 to 2010", (1990.0, 2010.0));
    for (label, before, after) in [
        ("A", 10.0, 15.0),
        ("B", 30.0, 25.0),
        ("C", 20.0, 40.0),
        ("D", 50.0, 45.0),
        ("E", 40.0, 60.0),
    ] {
        graph.push(label, before, after);
    }
    let out = std::path::PathBuf::from("target/out/example_slopegraph.png");
    graph
        .to_chart()
        .render_to_png(&graph.render_options(), &out)
        .expect("render to png");
    println!("Wrote {}", out.display());

    let spark = Sparkline::new(gaussian_walk(42, 50));
    let out = std::path::PathBuf::from("target/out/example_sparkline.png");
    spark
        .to_chart()
        .render_to_png(&spark.render_options(), &out)
        .expect("render to png");
    println!("Wrote {}", out.display());
}

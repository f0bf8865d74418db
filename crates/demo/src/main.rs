// File: crates/demo/src/main.rs
// Summary: Smoke check; renders the slopegraph and sparkline recipes with fixed data and discards the output.

use anyhow::Result;
use inkline_core::walk::gaussian_walk;
use inkline_core::{Slopegraph, Sparkline};

fn main() {
    match run() {
        Ok(()) => println!("All Tests Passed"),
        Err(e) => println!("Test Failed: {e}"),
    }
}

fn run() -> Result<()> {
    check_slopegraph()?;
    check_sparkline()?;
    Ok(())
}

fn check_slopegraph() -> Result<()> {
    println!("Testing Slopegraph...");

    // Five categories, measured in 1990 and 2010
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

    // Render in memory and discard; this only checks that drawing succeeds.
    let _ = graph.to_chart().render_to_png_bytes(&graph.render_options())?;
    println!("Slopegraph OK");
    Ok(())
}

fn check_sparkline() -> Result<()> {
    println!("Testing Sparkline...");

    let spark = Sparkline::new(gaussian_walk(42, 50));
    let _ = spark.to_chart().render_to_png_bytes(&spark.render_options())?;
    println!("Sparkline OK");
    Ok(())
}

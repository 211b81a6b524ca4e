// File: crates/latency-studies/src/bin/process_count.rs
// Summary: Average latency vs. number of processes, with the 1.5s timeout threshold.

use anyhow::Result;
use plot_core::{ChartSpec, ReferenceOverlay, Series};

fn main() -> Result<()> {
    let n_values = vec![3.0, 10.0, 100.0];

    let spec = ChartSpec::new(
        "Impact of Number of Processes on Latency (tle = 1.5s)",
        "Number of Processes (N)",
        "Average Latency (ms)",
    )
    .with_series(Series::new("α = 0", n_values.clone(), vec![2.0, 12.0, 1035.0]))
    .with_series(Series::new("α = 0.1", n_values.clone(), vec![1.0, 29.0, 1516.0]))
    .with_series(Series::new("α = 1", n_values, vec![2.0, 20.0, 1523.0]))
    .with_overlay(ReferenceOverlay::horizontal(1500.0, "t_le (1500ms)"))
    // Zoomed out a bit so the threshold line stays visible.
    .with_y_limits(0.0, 1800.0);

    plot_window::show(spec)
}

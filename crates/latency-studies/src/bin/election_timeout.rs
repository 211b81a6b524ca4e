// File: crates/latency-studies/src/bin/election_timeout.rs
// Summary: Average latency vs. leader election timeout, with the y = tle guide.

use anyhow::Result;
use plot_core::{ChartSpec, ReferenceOverlay, Series};

fn main() -> Result<()> {
    let tle_values = vec![500.0, 1000.0, 1500.0, 2000.0];

    let spec = ChartSpec::new(
        "Impact of Leader Election Timeout on Latency (N = 60)",
        "Leader Election Timeout (ms)",
        "Average Latency (ms)",
    )
    .with_series(Series::new("α = 0", tle_values.clone(), vec![504.0, 625.0, 612.0, 636.0]))
    .with_series(Series::new("α = 0.1", tle_values.clone(), vec![532.0, 956.0, 1281.0, 1277.0]))
    .with_series(Series::new("α = 1", tle_values, vec![518.0, 1052.0, 1074.0, 1210.0]))
    .with_overlay(ReferenceOverlay::identity("x = tle"));

    plot_window::show(spec)
}

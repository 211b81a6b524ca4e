// File: crates/latency-studies/src/bin/crash_probability.rs
// Summary: Average latency vs. crash probability; the election-timeout table sliced per tle.

use anyhow::Result;
use plot_core::{ChartSpec, Series};

fn main() -> Result<()> {
    let alpha_values = vec![0.0, 0.1, 1.0];

    let spec = ChartSpec::new(
        "Impact of Crash Probability on Latency (N = 60)",
        "Crash Probability (α)",
        "Average Latency (ms)",
    )
    .with_series(Series::new("tle = 0.5s", alpha_values.clone(), vec![504.0, 532.0, 518.0]))
    .with_series(Series::new("tle = 1.0s", alpha_values.clone(), vec![625.0, 956.0, 1052.0]))
    .with_series(Series::new("tle = 1.5s", alpha_values.clone(), vec![612.0, 1281.0, 1074.0]))
    .with_series(Series::new("tle = 2.0s", alpha_values, vec![636.0, 1277.0, 1210.0]));

    plot_window::show(spec)
}

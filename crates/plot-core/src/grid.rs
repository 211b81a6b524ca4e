// File: crates/plot-core/src/grid.rs
// Summary: Grid/tick layout helpers and tick label formatting.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Short decimal label for a tick value; trailing zeros trimmed.
pub fn tick_label(v: f64) -> String {
    if v.abs() >= 100.0 {
        return format!("{v:.0}");
    }
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints_and_count() {
        let v = linspace(0.0, 10.0, 6);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], 0.0);
        assert_eq!(*v.last().unwrap(), 10.0);
    }

    #[test]
    fn linspace_degenerate_steps() {
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0, 2.0]);
    }

    #[test]
    fn tick_labels_trim_zeros() {
        assert_eq!(tick_label(1500.0), "1500");
        assert_eq!(tick_label(0.1), "0.1");
        assert_eq!(tick_label(0.0), "0");
        assert_eq!(tick_label(-0.001), "0");
        assert_eq!(tick_label(2.5), "2.5");
    }
}

//! Serializable summaries of sorting runs and the timing sweep.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::config::SweepConfig;
use crate::disks::DiskRow;
use crate::sorting::{expected_swap_count, Algorithm, SortResult};

/// Outcome of running one algorithm on one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub light_count: usize,
    pub before: String,
    pub after: String,
    pub swap_count: u64,
    pub expected_swap_count: u64,
    pub sorted: bool,
}

impl RunReport {
    pub fn from_result(algorithm: Algorithm, before: &DiskRow, result: &SortResult) -> Self {
        RunReport {
            algorithm,
            light_count: before.light_count(),
            before: before.to_text(),
            after: result.after().to_text(),
            swap_count: result.swap_count(),
            expected_swap_count: expected_swap_count(before.light_count()),
            sorted: result.after().is_sorted(),
        }
    }

    /// Run `algorithm` on the canonical row with `light_count` disks per color.
    pub fn run(algorithm: Algorithm, light_count: usize) -> Self {
        let before = DiskRow::new(light_count);
        let result = algorithm.run(&before);
        Self::from_result(algorithm, &before, &result)
    }

    pub fn is_optimal(&self) -> bool {
        self.sorted && self.swap_count == self.expected_swap_count
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (n = {})", self.algorithm.name(), self.light_count)?;
        writeln!(f, "  before: {}", self.before)?;
        writeln!(f, "  after:  {}", self.after)?;
        write!(
            f,
            "  swaps:  {} (expected {}){}",
            self.swap_count,
            self.expected_swap_count,
            if self.sorted { "" } else { " NOT SORTED" }
        )
    }
}

/// One measurement from the timing sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub algorithm: Algorithm,
    pub light_count: usize,
    pub swap_count: u64,
    /// Fastest of the repeated runs, in microseconds.
    pub best_micros: f64,
}

/// Time each algorithm on rows of increasing size:
/// `n = step, 2 * step, ...` up to `max_light_count`.
///
/// # Panics
///
/// Panics if `config.step` or `config.repetitions` is zero. A config that
/// passed [`AppConfig::validate`](crate::config::AppConfig::validate) never is.
pub fn sweep(config: &SweepConfig, algorithms: &[Algorithm]) -> Vec<SweepRow> {
    assert!(config.step > 0, "sweep step must be > 0");
    assert!(config.repetitions > 0, "sweep repetitions must be > 0");
    let mut rows = Vec::new();

    for light_count in (config.step..=config.max_light_count).step_by(config.step) {
        let before = DiskRow::new(light_count);
        for &algorithm in algorithms {
            let mut best_micros = f64::INFINITY;
            let mut swap_count = 0;
            for _ in 0..config.repetitions {
                let start = Instant::now();
                let result = std::hint::black_box(algorithm.run(&before));
                let elapsed = start.elapsed().as_secs_f64() * 1e6;
                best_micros = best_micros.min(elapsed);
                swap_count = result.swap_count();
            }
            tracing::debug!(
                algorithm = algorithm.name(),
                light_count,
                swap_count,
                best_micros,
                "sweep step"
            );
            rows.push(SweepRow {
                algorithm,
                light_count,
                swap_count,
                best_micros,
            });
        }
    }

    rows
}

/// Render sweep rows as an aligned text table.
pub fn sweep_table(rows: &[SweepRow]) -> String {
    let mut out = format!(
        "{:<10} {:>8} {:>12} {:>14}\n",
        "algorithm", "n", "swaps", "best (us)"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<10} {:>8} {:>12} {:>14.2}\n",
            row.algorithm.name(),
            row.light_count,
            row.swap_count,
            row.best_micros
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_report_fields() {
        let report = RunReport::run(Algorithm::Alternate, 3);
        assert_eq!(report.before, "L D L D L D");
        assert_eq!(report.after, "L L L D D D");
        assert_eq!(report.swap_count, 3);
        assert_eq!(report.expected_swap_count, 3);
        assert!(report.sorted);
        assert!(report.is_optimal());
    }

    #[test]
    fn test_run_report_json() {
        let report = RunReport::run(Algorithm::Lawnmower, 1);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""algorithm":"lawnmower""#));
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_run_report_display() {
        let text = RunReport::run(Algorithm::Lawnmower, 4).to_string();
        assert!(text.starts_with("lawnmower (n = 4)"));
        assert!(text.contains("after:  L L L L D D D D"));
        assert!(text.contains("swaps:  6 (expected 6)"));
        assert!(!text.contains("NOT SORTED"));
    }

    #[test]
    fn test_sweep_covers_each_size_and_algorithm() {
        let config = SweepConfig {
            max_light_count: 10,
            step: 3,
            repetitions: 2,
        };
        let rows = sweep(&config, &Algorithm::ALL);
        let sizes: Vec<usize> = rows.iter().map(|r| r.light_count).collect();
        assert_eq!(sizes, vec![3, 3, 6, 6, 9, 9]);
        for row in &rows {
            assert_eq!(row.swap_count, expected_swap_count(row.light_count));
            assert!(row.best_micros.is_finite());
        }
    }

    #[test]
    #[should_panic(expected = "sweep step must be > 0")]
    fn test_sweep_rejects_zero_step() {
        let config = SweepConfig {
            max_light_count: 3,
            step: 0,
            repetitions: 1,
        };
        let _ = sweep(&config, &Algorithm::ALL);
    }

    #[test]
    #[should_panic(expected = "sweep repetitions must be > 0")]
    fn test_sweep_rejects_zero_repetitions() {
        let config = SweepConfig {
            max_light_count: 3,
            step: 1,
            repetitions: 0,
        };
        let _ = sweep(&config, &Algorithm::ALL);
    }

    #[test]
    fn test_sweep_table_has_header_and_rows() {
        let config = SweepConfig {
            max_light_count: 2,
            step: 1,
            repetitions: 1,
        };
        let table = sweep_table(&sweep(&config, &[Algorithm::Alternate]));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("algorithm"));
        assert!(lines[2].starts_with("alternate"));
    }
}

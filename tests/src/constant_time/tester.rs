use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;
use std::time::Instant;

use super::config::TestConfig;

/// Statistics from comparing two timing samples
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

impl fmt::Display for TimingAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  mean: {:.0} ns vs {:.0} ns (ratio {:.3})", self.mean_a, self.mean_b, self.mean_ratio)?;
        writeln!(
            f,
            "  t = {:.3}, df = {:.1}, p = {:.4}, d = {:.3}",
            self.t_statistic, self.degrees_of_freedom, self.p_value, self.cohens_d
        )?;
        write!(
            f,
            "  combined score {:.3} -> {}",
            self.combined_score,
            if self.is_constant_time { "PASS" } else { "FAIL" }
        )
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average time per call of `f`, once per sample.
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            times.push(start.elapsed().as_nanos() / self.num_iterations as u128);
        }
        times
    }

    /// Interleaves the two closures so drift affects both equally.
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                a();
            }
            times_a.push(start.elapsed().as_nanos() / self.num_iterations as u128);

            let start = Instant::now();
            for _ in 0..self.num_iterations {
                b();
            }
            times_b.push(start.elapsed().as_nanos() / self.num_iterations as u128);
        }
        (times_a, times_b)
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    // IQR filter
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let lower = q1 - 1.5 * iqr;
        let upper = q3 + 1.5 * iqr;

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    // Welch's t
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        (mean_a - mean_b).abs() / (var_a / n_a + var_b / n_b).sqrt()
    }

    // Welch-Satterthwaite
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let term_a = Self::variance(times_a, mean_a) / times_a.len() as f64;
        let term_b = Self::variance(times_b, mean_b) / times_b.len() as f64;
        (term_a + term_b).powi(2)
            / (term_a.powi(2) / (times_a.len() as f64 - 1.0)
                + term_b.powi(2) / (times_b.len() as f64 - 1.0))
    }

    /// Two-tailed p-value. Falls back to 1.0 when the distribution cannot be
    /// built (zero variance in both samples).
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() || !t_stat.is_finite() {
            return 1.0;
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 1.0,
        }
    }

    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        let pooled = ((Self::variance(times_a, mean_a) * (n_a - 1.0)
            + Self::variance(times_b, mean_b) * (n_b - 1.0))
            / (n_a + n_b - 2.0))
            .sqrt();
        (mean_a - mean_b).abs() / pooled
    }

    /// Weighted blend of mean ratio, t-statistic and relative spread.
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    pub fn analyze(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();
        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);

        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let cohens_d = Self::cohens_d(&clean_a, &clean_b);

        let rel_std_dev = (std_dev_a / mean_a).max(std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d,
            combined_score,
            is_constant_time: mean_ratio <= config.mean_ratio_max
                && (combined_score <= config.combined_score_threshold
                    || t_statistic <= config.t_stat_threshold),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlier_removal() {
        let times = [100, 101, 99, 102, 98, 100, 5000];
        let clean = TimingTester::remove_outliers(&times);
        assert!(!clean.contains(&5000));
        assert_eq!(clean.len(), 6);
    }

    #[test]
    fn test_identical_samples_pass() {
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let tester = TimingTester::new(a.len(), 1);
        let analysis = tester.analyze(&a, &a, &TestConfig::default()).unwrap();
        assert!((analysis.mean_ratio - 1.0).abs() < 1e-9);
        assert!(analysis.t_statistic < 1e-9);
        assert!(analysis.p_value > 0.99);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn test_separated_samples_fail() {
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let b = [200u128, 204, 196, 202, 198, 200, 206, 194];
        let tester = TimingTester::new(a.len(), 1);
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(analysis.mean_ratio > 1.9);
        assert!(analysis.p_value < 0.001);
        assert!(!analysis.is_constant_time);
    }

    #[test]
    fn test_too_few_samples() {
        let tester = TimingTester::new(1, 1);
        assert!(tester.analyze(&[1], &[2], &TestConfig::default()).is_err());
    }
}

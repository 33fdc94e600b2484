//! Asymptotic complexity fitting.
//!
//! Given the mean time of one variant at several problem sizes, fit
//! `t(n) ≈ c · g(n)` by least squares through the origin for each
//! candidate `g`, and report the coefficient together with the normalized
//! root-mean-square residual.

use std::fmt;

/// Candidate growth functions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Complexity {
    O1,
    OLogN,
    ON,
    ONLogN,
    ONSquared,
    ONCubed,
    /// Try every concrete candidate and keep the best fit
    Auto,
}

impl Complexity {
    /// Every concrete candidate, in the order `Auto` tries them
    pub const CANDIDATES: [Complexity; 6] = [
        Complexity::O1,
        Complexity::OLogN,
        Complexity::ON,
        Complexity::ONLogN,
        Complexity::ONSquared,
        Complexity::ONCubed,
    ];

    /// Evaluate the growth function at `n`.
    ///
    /// `Auto` has no growth function of its own and evaluates to 1.
    pub fn eval(self, n: f64) -> f64 {
        match self {
            Complexity::O1 | Complexity::Auto => 1.0,
            Complexity::OLogN => n.log2(),
            Complexity::ON => n,
            Complexity::ONLogN => n * n.log2(),
            Complexity::ONSquared => n * n,
            Complexity::ONCubed => n * n * n,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Complexity::O1 => "1",
            Complexity::OLogN => "lgN",
            Complexity::ON => "N",
            Complexity::ONLogN => "NlgN",
            Complexity::ONSquared => "N^2",
            Complexity::ONCubed => "N^3",
            Complexity::Auto => "auto",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a complexity fit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexityFit {
    pub complexity: Complexity,
    /// Scale factor `c` in `t(n) ≈ c · g(n)`
    pub coefficient: f64,
    /// RMS of the residuals divided by the mean time
    pub rms: f64,
}

/// Fit `times` measured at sizes `ns`.
///
/// Returns `None` when the slices differ in length, fewer than two distinct
/// sizes are present, or no candidate can be fitted.
pub fn fit(ns: &[usize], times: &[f64], complexity: Complexity) -> Option<ComplexityFit> {
    if ns.len() != times.len() {
        return None;
    }

    let mut distinct: Vec<usize> = ns.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() < 2 {
        return None;
    }

    match complexity {
        Complexity::Auto => Complexity::CANDIDATES
            .iter()
            .filter_map(|&c| fit_one(ns, times, c))
            .min_by(|a, b| a.rms.total_cmp(&b.rms)),
        concrete => fit_one(ns, times, concrete),
    }
}

fn fit_one(ns: &[usize], times: &[f64], complexity: Complexity) -> Option<ComplexityFit> {
    let g: Vec<f64> = ns.iter().map(|&n| complexity.eval(n as f64)).collect();

    let sum_gg: f64 = g.iter().map(|x| x * x).sum();
    if sum_gg <= 0.0 || !sum_gg.is_finite() {
        return None;
    }
    let sum_tg: f64 = times.iter().zip(&g).map(|(t, x)| t * x).sum();
    let coefficient = sum_tg / sum_gg;

    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let sse: f64 = times
        .iter()
        .zip(&g)
        .map(|(t, x)| {
            let residual = t - coefficient * x;
            residual * residual
        })
        .sum();
    let rms = (sse / times.len() as f64).sqrt();

    Some(ComplexityFit {
        complexity,
        coefficient,
        rms: if mean > 0.0 { rms / mean } else { rms },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

    fn times_for(f: impl Fn(f64) -> f64) -> Vec<f64> {
        SIZES.iter().map(|&n| f(n as f64)).collect()
    }

    #[test]
    fn test_linear_fit_recovers_coefficient() {
        let times = times_for(|n| 3.0 * n);
        let fit = fit(&SIZES, &times, Complexity::ON).expect("fit");
        assert_eq!(fit.complexity, Complexity::ON);
        assert!((fit.coefficient - 3.0).abs() < 1e-9);
        assert!(fit.rms < 1e-12);
    }

    #[test]
    fn test_auto_picks_quadratic() {
        let times = times_for(|n| 0.5 * n * n);
        let fit = fit(&SIZES, &times, Complexity::Auto).expect("fit");
        assert_eq!(fit.complexity, Complexity::ONSquared);
        assert!((fit.coefficient - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_auto_picks_nlogn() {
        let times = times_for(|n| 2.0 * n * n.log2());
        let fit = fit(&SIZES, &times, Complexity::Auto).expect("fit");
        assert_eq!(fit.complexity, Complexity::ONLogN);
    }

    #[test]
    fn test_auto_picks_constant() {
        let times = times_for(|_| 12.0);
        let fit = fit(&SIZES, &times, Complexity::Auto).expect("fit");
        assert_eq!(fit.complexity, Complexity::O1);
        assert!((fit.coefficient - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_forced_complexity_reports_poor_rms() {
        let times = times_for(|n| n * n);
        let fit = fit(&SIZES, &times, Complexity::O1).expect("fit");
        assert!(fit.rms > 0.5, "rms was {}", fit.rms);
    }

    #[test]
    fn test_needs_two_distinct_sizes() {
        assert!(fit(&[128], &[1.0], Complexity::Auto).is_none());
        assert!(fit(&[128, 128], &[1.0, 1.1], Complexity::ON).is_none());
        assert!(fit(&[1, 2], &[1.0], Complexity::ON).is_none());
    }

    #[test]
    fn test_log_of_one_is_skipped_not_nan() {
        // g(1) = 0 for lgN, the fit still works on the remaining sizes
        let fit = fit(&[1, 2, 4, 8], &[0.0, 1.0, 2.0, 3.0], Complexity::OLogN).expect("fit");
        assert!((fit.coefficient - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Complexity::ONLogN.to_string(), "NlgN");
        assert_eq!(Complexity::O1.to_string(), "1");
    }
}

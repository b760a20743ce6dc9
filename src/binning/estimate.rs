use serde::{Deserialize, Serialize};

use crate::binning::ladder::Ladder;
use crate::core::{BinningError, Scalar};

/// How the `converged` flag of an [`Estimate`] is decided.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ConvergencePolicy {
    /// Never report convergence; the flag is reserved.
    #[default]
    Never,

    /// Report convergence once the error estimate has levelled off.
    ///
    /// The last ladder level is ignored when there are more than two (the same
    /// back-off as the reported mean). Of the remaining levels, the last two
    /// error estimates `a` and `b` must satisfy
    /// `|a - b| <= rel_tolerance * max(a, b)`.
    Plateau { rel_tolerance: f64 },
}

/// Reported mean, error bar and convergence flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate<T> {
    pub mean: T,
    pub error: T,
    pub converged: bool,
}

/// Reduces a ladder to the reported triple.
///
/// The mean comes from the second-to-last level when there are more than two
/// levels (the last one is built from too few blocks), otherwise from the
/// first. The error is the largest `stderr` on the ladder, so it is not
/// under-reported while the plateau has not been reached.
pub fn final_estimate<T: Scalar>(
    ladder: &Ladder<T>,
    policy: ConvergencePolicy,
) -> Result<Estimate<T>, BinningError> {
    let levels = ladder.levels();
    let Some(first) = levels.first() else {
        return Err(BinningError::InsufficientData("empty binning ladder"));
    };

    let mean = if levels.len() > 2 {
        levels[levels.len() - 2].mean
    } else {
        first.mean
    };

    let error = levels
        .iter()
        .map(|l| l.stderr)
        .fold(first.stderr, |acc, e| acc.max(e));

    Ok(Estimate {
        mean,
        error,
        converged: is_converged(ladder, policy),
    })
}

fn is_converged<T: Scalar>(ladder: &Ladder<T>, policy: ConvergencePolicy) -> bool {
    let ConvergencePolicy::Plateau { rel_tolerance } = policy else {
        return false;
    };

    let levels = ladder.levels();
    let trusted = if levels.len() > 2 {
        &levels[..levels.len() - 1]
    } else {
        levels
    };
    let [.., prev, last] = trusted else {
        return false;
    };

    let (a, b) = (prev.stderr, last.stderr);
    (a - b).abs() <= T::from_real(rel_tolerance) * a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binning::ladder::Level;

    fn ladder(rows: &[(f64, f64, usize)]) -> Ladder<f64> {
        Ladder::from_levels(
            rows.iter()
                .map(|&(mean, stderr, block_count)| Level {
                    mean,
                    stderr,
                    block_count,
                })
                .collect(),
        )
    }

    #[test]
    fn single_level_reports_its_own_mean() {
        let est = final_estimate(&ladder(&[(2.0, 0.5, 3)]), ConvergencePolicy::Never).unwrap();
        assert_eq!(est.mean, 2.0);
        assert_eq!(est.error, 0.5);
        assert!(!est.converged);
    }

    #[test]
    fn two_levels_still_use_first_mean() {
        let est = final_estimate(
            &ladder(&[(1.0, 0.1, 10), (1.5, 0.2, 5)]),
            ConvergencePolicy::Never,
        )
        .unwrap();
        assert_eq!(est.mean, 1.0);
        assert_eq!(est.error, 0.2);
    }

    #[test]
    fn deeper_ladders_back_off_one_level() {
        let est = final_estimate(
            &ladder(&[(1.0, 0.1, 40), (1.1, 0.3, 20), (1.2, 0.2, 10), (1.3, 0.25, 5)]),
            ConvergencePolicy::Never,
        )
        .unwrap();
        assert_eq!(est.mean, 1.2);
        assert_eq!(est.error, 0.3);
    }

    #[test]
    fn never_policy_ignores_a_flat_ladder() {
        let flat = ladder(&[(0.0, 1.0, 40), (0.0, 1.0, 20), (0.0, 1.0, 10)]);
        assert!(!final_estimate(&flat, ConvergencePolicy::Never).unwrap().converged);
    }

    #[test]
    fn plateau_policy_compares_trusted_tail() {
        let policy = ConvergencePolicy::Plateau {
            rel_tolerance: 0.1,
        };

        // levels 1 and 2 agree within 10%; level 3 is ignored
        let flat = ladder(&[(0.0, 0.5, 80), (0.0, 1.0, 40), (0.0, 1.05, 20), (0.0, 3.0, 10)]);
        assert!(final_estimate(&flat, policy).unwrap().converged);

        let rising = ladder(&[(0.0, 0.5, 80), (0.0, 1.0, 40), (0.0, 1.5, 20), (0.0, 1.5, 10)]);
        assert!(!final_estimate(&rising, policy).unwrap().converged);
    }

    #[test]
    fn plateau_needs_two_trusted_levels() {
        let policy = ConvergencePolicy::Plateau {
            rel_tolerance: 1.0,
        };
        assert!(!final_estimate(&ladder(&[(0.0, 0.0, 4)]), policy).unwrap().converged);
        assert!(
            final_estimate(&ladder(&[(0.0, 0.2, 10), (0.0, 0.2, 5)]), policy)
                .unwrap()
                .converged
        );
    }

    #[test]
    fn zero_errors_count_as_plateau() {
        let policy = ConvergencePolicy::Plateau {
            rel_tolerance: 0.0,
        };
        let constant = ladder(&[(7.0, 0.0, 40), (7.0, 0.0, 20), (7.0, 0.0, 10)]);
        assert!(final_estimate(&constant, policy).unwrap().converged);
    }

    #[test]
    fn empty_ladder_is_rejected() {
        let err = final_estimate(&ladder(&[]), ConvergencePolicy::Never).unwrap_err();
        assert!(matches!(err, BinningError::InsufficientData(_)));
    }

    #[test]
    fn policy_round_trips_through_json() {
        let policy: ConvergencePolicy =
            serde_json::from_str(r#"{"kind":"plateau","rel_tolerance":0.2}"#).unwrap();
        assert_eq!(
            policy,
            ConvergencePolicy::Plateau {
                rel_tolerance: 0.2
            }
        );
        let never: ConvergencePolicy = serde_json::from_str(r#"{"kind":"never"}"#).unwrap();
        assert_eq!(never, ConvergencePolicy::Never);
    }
}

//! Bracketed root search shared by the reduction and hydride solvers.
//!
//! Both equilibria reduce to finding X in (0, 1) where a monotonically
//! increasing function f crosses zero: a coarse upward scan with the
//! configured increment brackets the first sign change, then bisection
//! refines inside the bracket until f lands in the [0, precision] band.
//! One iteration budget covers both phases. Exhausting the budget is a
//! soft failure: the caller gets the last candidate plus an explicit
//! converged flag and a warning is logged.

use super::ActivityData::EPS_X;
use log::warn;
use serde::Serialize;

/// Parameters of the equilibrium search: starting increment of the coarse
/// scan, total iteration budget, and the accepted residual band.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub increment: f64,
    pub iterations: usize,
    pub precision: f64,
}

impl SearchParams {
    /// defaults used for the reduction equilibrium
    pub fn reduction() -> Self {
        Self {
            increment: 0.001,
            iterations: 10000,
            precision: 1e-6,
        }
    }

    /// defaults used for the hydride equilibrium (tighter band: the
    /// residual is an activity difference, not J/mol)
    pub fn hydride() -> Self {
        Self {
            increment: 0.001,
            iterations: 10000,
            precision: 1e-7,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::reduction()
    }
}

/// Outcome of one search. `converged == false` means the iteration budget
/// ran out (or no sign change was found below X = 1) and `x` is the best
/// candidate seen, not an equilibrium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult {
    /// candidate mole fraction
    pub x: f64,
    /// f(x) at the candidate
    pub residual: f64,
    /// function evaluations spent
    pub evaluations: usize,
    pub converged: bool,
}

/// Finds x with f(x) in [0, precision] for monotonically increasing f that
/// is negative near x = 0. `label` names the caller in log output.
pub fn bracketed_root<F: Fn(f64) -> f64>(f: F, params: &SearchParams, label: &str) -> SearchResult {
    let budget = params.iterations;
    let mut evals = 0usize;

    // coarse scan: walk up from the first increment until f changes sign
    let mut lo = EPS_X;
    let mut hi = params.increment;
    let mut f_hi = f(hi);
    evals += 1;
    while f_hi < 0.0 {
        if evals >= budget || hi >= 1.0 {
            warn!(
                "{}: no sign change found after {} evaluations (x = {:.6}), returning last guess",
                label, evals, hi
            );
            return SearchResult {
                x: hi,
                residual: f_hi,
                evaluations: evals,
                converged: false,
            };
        }
        lo = hi;
        hi += params.increment;
        f_hi = f(hi);
        evals += 1;
    }
    if f_hi <= params.precision {
        return SearchResult {
            x: hi,
            residual: f_hi,
            evaluations: evals,
            converged: true,
        };
    }

    // bisection inside [lo, hi]: f(lo) < 0 <= f(hi)
    let mut best_x = hi;
    let mut best_f = f_hi;
    while evals < budget {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            // interval exhausted at floating point resolution
            break;
        }
        let f_mid = f(mid);
        evals += 1;
        if f_mid >= 0.0 && f_mid <= params.precision {
            return SearchResult {
                x: mid,
                residual: f_mid,
                evaluations: evals,
                converged: true,
            };
        }
        if f_mid < 0.0 {
            lo = mid;
        } else {
            hi = mid;
            best_x = mid;
            best_f = f_mid;
        }
    }
    warn!(
        "{}: not enough iterations to converge ({} evaluations, residual {:.3e})",
        label, evals, best_f
    );
    SearchResult {
        x: best_x,
        residual: best_f,
        evaluations: evals,
        converged: false,
    }
}

//////////////////////////////////TESTS///////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_function_root() {
        let params = SearchParams {
            increment: 0.01,
            iterations: 1000,
            precision: 1e-9,
        };
        // root at x = 0.3
        let result = bracketed_root(|x| x - 0.3, &params, "linear");
        assert!(result.converged);
        assert!((result.x - 0.3).abs() < 1e-6);
        assert!(result.residual >= 0.0 && result.residual <= 1e-9);
    }

    #[test]
    fn test_steep_function_root() {
        let params = SearchParams::reduction();
        // steep crossing like a reduction free energy curve
        let result = bracketed_root(|x| 3.0e5 * (x - 0.0551), &params, "steep");
        assert!(result.converged);
        assert!((result.x - 0.0551).abs() < 1e-9);
        assert!(result.residual <= params.precision);
    }

    #[test]
    fn test_no_sign_change_is_soft_failure() {
        let params = SearchParams {
            increment: 0.01,
            iterations: 10000,
            precision: 1e-9,
        };
        let result = bracketed_root(|_| -1.0, &params, "never_positive");
        assert!(!result.converged);
        assert!(result.x >= 1.0);
    }

    #[test]
    fn test_budget_exhaustion_is_soft_failure() {
        let params = SearchParams {
            increment: 0.001,
            iterations: 3,
            precision: 1e-12,
        };
        let result = bracketed_root(|x| 1.0e6 * (x - 0.5), &params, "tiny_budget");
        assert!(!result.converged);
        assert_eq!(result.evaluations, 3);
    }
}

//! Reduction of Nd2O3 by liquid magnesium:
//!
//! 3Mg(l) + Nd2O3 = 3MgO + 2Nd(l)
//!
//! The non-standard free energy of the reaction at melt composition X_Nd is
//!
//! dG(X) = (3*Gf_MgO + 2*Gf_NdL - Gf_Nd2O3) + R*T_K*ln(a_Nd^2 / a_Mg^3)
//!
//! and the equilibrium composition is the X where dG crosses zero. Under the
//! ideal-solution assumption a_Nd = X and a_Mg = 1 - X; the non-ideal model
//! corrects both with the interpolated activity coefficients.

use super::ActivityData::{R, TemperatureRecord};
use super::ActivityInterpolator::{ActivityCoefficients, linspace};
use super::EquilibriumSearch::{SearchParams, SearchResult, bracketed_root};
use nalgebra::DVector;

/// Activity model of the Mg-Nd melt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionModel {
    /// a_Nd = X, a_Mg = 1 - X
    Ideal,
    /// activities corrected by the interpolated coefficients
    NonIdeal,
}

/// Non-standard free energy of reduction at composition `X_Nd`, J/mol of Nd2O3.
#[allow(non_snake_case)]
pub fn delta_G_reduction(
    X_Nd: f64,
    model: SolutionModel,
    coeffs: &ActivityCoefficients,
    record: &TemperatureRecord,
) -> f64 {
    let (a_Nd, a_Mg) = match model {
        SolutionModel::Ideal => (X_Nd, 1.0 - X_Nd),
        SolutionModel::NonIdeal => (coeffs.a_Nd(X_Nd), coeffs.a_Mg(X_Nd)),
    };
    let dG0 = 3.0 * record.Gf_MgO + 2.0 * record.Gf_NdL - record.Gf_Nd2O3;
    dG0 + R * (record.T + 273.15) * f64::ln(a_Nd.powi(2) / a_Mg.powi(3))
}

/// Equilibrium reduction composition: the X_Nd where `delta_G_reduction`
/// enters the [0, precision] band. dG is monotonically increasing in X for
/// the tabulated data, so the bracketed search finds the unique crossing.
pub fn reduction_equilibrium(
    record: &TemperatureRecord,
    coeffs: &ActivityCoefficients,
    model: SolutionModel,
    params: &SearchParams,
) -> SearchResult {
    bracketed_root(
        |x| delta_G_reduction(x, model, coeffs, record),
        params,
        "reduction_equilibrium",
    )
}

/// dG(X) sampled on `n` points over the open composition interval, for
/// reporting. Endpoints stay 1e-6 away from 0 and 1 where dG diverges.
#[allow(non_snake_case)]
pub fn delta_G_curve(
    record: &TemperatureRecord,
    coeffs: &ActivityCoefficients,
    model: SolutionModel,
    n: usize,
) -> (DVector<f64>, DVector<f64>) {
    let xs = linspace(1e-6, 1.0 - 1e-6, n);
    let dg: Vec<f64> = xs
        .iter()
        .map(|&x| delta_G_reduction(x, model, coeffs, record))
        .collect();
    (DVector::from_vec(xs), DVector::from_vec(dg))
}

/// X_Nd reached at full reduction as a function of the initial Nd2O3
/// charge, expressed as the fraction `n` of the stoichiometric ratio
/// (3 mol Mg per mol Nd2O3): X = 2n / (2n + (3 - 3n)).
#[allow(non_snake_case)]
pub fn full_reduction_curve(n_points: usize) -> (DVector<f64>, DVector<f64>) {
    let fractions = linspace(0.0, 1.0, n_points);
    let x_full: Vec<f64> = fractions
        .iter()
        .map(|&n| (2.0 * n) / ((2.0 * n) + (3.0 - 3.0 * n)))
        .collect();
    (DVector::from_vec(fractions), DVector::from_vec(x_full))
}

//! NdH2 precipitation from the Mg-Nd melt:
//!
//! Nd(l) + H2(g) = NdH2
//!
//! At equilibrium the Nd activity takes the closed-form target
//!
//! a_Nd* = exp((Gf_NdH2 - Gf_NdL) / (R*T_K)) / P_H2
//!
//! Under the ideal model the equilibrium composition IS a_Nd*. Under the
//! non-ideal model the composition solves X * gamma_Nd(X) = a_Nd*; when
//! a_Nd* exceeds 1 no melt composition can reach the target activity and
//! the hydride precipitates at any Nd content (supersaturated regime) -
//! the raw a_Nd* is reported with a regime tag rather than an error.

use super::ActivityData::{R, TemperatureRecord};
use super::ActivityInterpolator::{ActivityCoefficients, linspace};
use super::EquilibriumSearch::{SearchParams, bracketed_root};
use super::ReductionEquilibrium::SolutionModel;
use nalgebra::DVector;
use serde::Serialize;

/// Which side of the saturation boundary a result sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HydrideRegime {
    /// the target activity is reachable by some melt composition
    Solution,
    /// a_Nd* > 1: hydride forms at every composition; `X_Nd` carries the
    /// raw target and is not a physical mole fraction
    Supersaturated,
}

/// Equilibrium hydriding composition at one temperature and pressure.
#[derive(Debug, Clone, Copy, Serialize)]
#[allow(non_snake_case)]
pub struct HydrideEquilibrium {
    pub X_Nd: f64,
    pub regime: HydrideRegime,
    /// false only when the non-ideal search ran out of iterations
    pub converged: bool,
}

/// Closed-form target activity a_Nd* at the given hydrogen partial pressure.
pub fn target_activity(record: &TemperatureRecord, p_h2: f64) -> f64 {
    f64::exp((record.Gf_NdH2 - record.Gf_NdL) / (R * (record.T + 273.15))) / p_h2
}

/// Equilibrium composition for hydride precipitation. Ideal: the closed
/// form directly. Non-ideal: bracketed search on X * gamma_Nd(X) - a_Nd*,
/// short-circuited in the supersaturated regime.
pub fn hydride_equilibrium(
    record: &TemperatureRecord,
    coeffs: &ActivityCoefficients,
    model: SolutionModel,
    p_h2: f64,
    params: &SearchParams,
) -> HydrideEquilibrium {
    let a_target = target_activity(record, p_h2);
    let regime = if a_target > 1.0 {
        HydrideRegime::Supersaturated
    } else {
        HydrideRegime::Solution
    };
    match model {
        SolutionModel::Ideal => HydrideEquilibrium {
            X_Nd: a_target,
            regime,
            converged: true,
        },
        SolutionModel::NonIdeal => {
            if regime == HydrideRegime::Supersaturated {
                return HydrideEquilibrium {
                    X_Nd: a_target,
                    regime,
                    converged: true,
                };
            }
            let result = bracketed_root(
                |x| coeffs.a_Nd(x) - a_target,
                params,
                "hydride_equilibrium",
            );
            HydrideEquilibrium {
                X_Nd: result.x,
                regime,
                converged: result.converged,
            }
        }
    }
}

/// Equilibrium composition over a hydrogen pressure range, one entry per
/// pressure sample.
pub fn pressure_sweep(
    record: &TemperatureRecord,
    coeffs: &ActivityCoefficients,
    model: SolutionModel,
    pressures: &[f64],
    params: &SearchParams,
) -> Vec<HydrideEquilibrium> {
    pressures
        .iter()
        .map(|&p| hydride_equilibrium(record, coeffs, model, p, params))
        .collect()
}

/// Default pressure range swept by the pipeline: 1e-6 to 1.1 atm.
pub fn default_pressure_range() -> Vec<f64> {
    linspace(0.000001, 1.1, 1100)
}

/// Non-standard free energy of hydride precipitation at composition `X_Nd`
/// and unit hydrogen pressure, J/mol.
#[allow(non_snake_case)]
pub fn delta_G_hydride(
    X_Nd: f64,
    model: SolutionModel,
    coeffs: &ActivityCoefficients,
    record: &TemperatureRecord,
) -> f64 {
    let a_Nd = match model {
        SolutionModel::Ideal => X_Nd,
        SolutionModel::NonIdeal => coeffs.a_Nd(X_Nd),
    };
    record.Gf_NdH2 - record.Gf_NdL + R * (record.T + 273.15) * f64::ln(1.0 / a_Nd)
}

/// dG_hydride(X) sampled on `n` points over the open composition interval.
#[allow(non_snake_case)]
pub fn delta_G_hydride_curve(
    record: &TemperatureRecord,
    coeffs: &ActivityCoefficients,
    model: SolutionModel,
    n: usize,
) -> (DVector<f64>, DVector<f64>) {
    let xs = linspace(1e-6, 1.0 - 1e-6, n);
    let dg: Vec<f64> = xs
        .iter()
        .map(|&x| delta_G_hydride(x, model, coeffs, record))
        .collect();
    (DVector::from_vec(xs), DVector::from_vec(dg))
}

//! # Equilibria Pipeline
//!
//! ## Purpose
//! Runs the full chain of calculations once over the compiled-in dataset:
//! derive activity coefficients per temperature, interpolate the Mg3Nd
//! liquidus, solve the reduction equilibrium under both solution models,
//! and sweep the hydride equilibrium over the hydrogen pressure range.
//!
//! ## Shape
//! One `TemperatureEquilibria` per dataset record, populated by the pure
//! functions of the sibling modules and never mutated afterward. Batch,
//! single-threaded, deterministic: rerunning on the same dataset produces
//! bit-identical results.

use super::ActivityData::{ActivityDataset, DataError, TemperatureRecord};
use super::ActivityInterpolator::ActivityCoefficients;
use super::EquilibriumSearch::{SearchParams, SearchResult};
use super::HydrideEquilibrium::{
    HydrideEquilibrium, default_pressure_range, pressure_sweep,
};
use super::Liquidus::Mg3NdLiquidus;
use super::ReductionEquilibrium::{SolutionModel, reduction_equilibrium};
use log::info;

/// Everything derived for one temperature record.
#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct TemperatureEquilibria {
    pub record: TemperatureRecord,
    pub coeffs: ActivityCoefficients,
    /// liquidus composition at this temperature (extrapolated above the
    /// tie-line data range)
    pub X_Nd_Mg3Nd: f64,
    pub X_Nd_eq_ideal: SearchResult,
    pub X_Nd_eq_nonideal: SearchResult,
    /// hydride sweep over the pipeline's pressure range, ideal model
    pub hyd_ideal: Vec<HydrideEquilibrium>,
    /// hydride sweep over the pipeline's pressure range, non-ideal model
    pub hyd_nonideal: Vec<HydrideEquilibrium>,
}

/// The whole computed system: dataset, liquidus, and per-temperature results.
#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct MgNdEquilibria {
    pub dataset: ActivityDataset,
    pub liquidus: Mg3NdLiquidus,
    pub P_H2_range: Vec<f64>,
    pub reduction_params: SearchParams,
    pub hydride_params: SearchParams,
    pub results: Vec<TemperatureEquilibria>,
}

impl MgNdEquilibria {
    /// Runs the pipeline on the compiled-in dataset with the published
    /// solver parameters and the default pressure range.
    pub fn new() -> Result<Self, DataError> {
        Self::with_dataset(
            ActivityDataset::new(),
            default_pressure_range(),
            SearchParams::reduction(),
            SearchParams::hydride(),
        )
    }

    /// Validates the dataset, then computes every per-temperature result.
    #[allow(non_snake_case)]
    pub fn with_dataset(
        dataset: ActivityDataset,
        P_H2_range: Vec<f64>,
        reduction_params: SearchParams,
        hydride_params: SearchParams,
    ) -> Result<Self, DataError> {
        dataset.validate()?;
        let liquidus = Mg3NdLiquidus::from_dataset(&dataset);
        let mut results = Vec::with_capacity(dataset.records.len());
        for record in &dataset.records {
            info!("computing equilibria at {} C", record.T);
            let coeffs = ActivityCoefficients::from_record(record);
            let X_Nd_Mg3Nd = liquidus.X_Nd_at(record.T);
            let X_Nd_eq_ideal =
                reduction_equilibrium(record, &coeffs, SolutionModel::Ideal, &reduction_params);
            let X_Nd_eq_nonideal =
                reduction_equilibrium(record, &coeffs, SolutionModel::NonIdeal, &reduction_params);
            let hyd_ideal = pressure_sweep(
                record,
                &coeffs,
                SolutionModel::Ideal,
                &P_H2_range,
                &hydride_params,
            );
            let hyd_nonideal = pressure_sweep(
                record,
                &coeffs,
                SolutionModel::NonIdeal,
                &P_H2_range,
                &hydride_params,
            );
            results.push(TemperatureEquilibria {
                record: record.clone(),
                coeffs,
                X_Nd_Mg3Nd,
                X_Nd_eq_ideal,
                X_Nd_eq_nonideal,
                hyd_ideal,
                hyd_nonideal,
            });
        }
        info!("pipeline complete: {} temperatures", results.len());
        Ok(Self {
            dataset,
            liquidus,
            P_H2_range,
            reduction_params,
            hydride_params,
            results,
        })
    }

    /// Result at the given temperature in C, if tabulated.
    #[allow(non_snake_case)]
    pub fn at(&self, T: f64) -> Option<&TemperatureEquilibria> {
        self.results.iter().find(|r| r.record.T == T)
    }
}

//////////////////////////////////TESTS///////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Thermochemistry::ActivityInterpolator::linspace;

    fn small_pipeline() -> MgNdEquilibria {
        // coarse pressure range keeps the test quick
        MgNdEquilibria::with_dataset(
            ActivityDataset::new(),
            linspace(0.000001, 1.1, 12),
            SearchParams::reduction(),
            SearchParams::hydride(),
        )
        .unwrap()
    }

    #[test]
    fn test_pipeline_covers_all_temperatures() {
        let eq = small_pipeline();
        assert_eq!(eq.results.len(), eq.dataset.records.len());
        assert!(eq.at(700.0).is_some());
        assert!(eq.at(701.0).is_none());
        for r in &eq.results {
            assert_eq!(r.hyd_ideal.len(), eq.P_H2_range.len());
            assert_eq!(r.hyd_nonideal.len(), eq.P_H2_range.len());
        }
    }

    #[test]
    fn test_reduction_equilibria_converge_everywhere() {
        let eq = small_pipeline();
        for r in &eq.results {
            assert!(r.X_Nd_eq_ideal.converged, "ideal at {} C", r.record.T);
            assert!(r.X_Nd_eq_nonideal.converged, "non-ideal at {} C", r.record.T);
            assert!(r.X_Nd_eq_ideal.x > 0.0 && r.X_Nd_eq_ideal.x < 1.0);
            assert!(r.X_Nd_eq_nonideal.x > 0.0 && r.X_Nd_eq_nonideal.x < 1.0);
        }
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let a = small_pipeline();
        let b = small_pipeline();
        for (ra, rb) in a.results.iter().zip(b.results.iter()) {
            assert_eq!(ra.X_Nd_eq_ideal.x.to_bits(), rb.X_Nd_eq_ideal.x.to_bits());
            assert_eq!(
                ra.X_Nd_eq_nonideal.x.to_bits(),
                rb.X_Nd_eq_nonideal.x.to_bits()
            );
            assert_eq!(ra.X_Nd_Mg3Nd.to_bits(), rb.X_Nd_Mg3Nd.to_bits());
            for (ha, hb) in ra.hyd_nonideal.iter().zip(rb.hyd_nonideal.iter()) {
                assert_eq!(ha.X_Nd.to_bits(), hb.X_Nd.to_bits());
            }
        }
    }
}

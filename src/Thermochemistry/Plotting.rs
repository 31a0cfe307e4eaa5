use super::Calculations::MgNdEquilibria;
use super::ReductionEquilibrium::{SolutionModel, delta_G_curve};
use RustedSciThe::Utils::plots::plots_terminal;
use nalgebra::{DMatrix, DVector};

/// points on the plotted activity curves
const SMOOTH_POINTS: usize = 201;
/// points on the plotted free-energy curves
const CURVE_POINTS: usize = 1000;

impl MgNdEquilibria {
    /// Terminal plot of interpolated activity and activity coefficient
    /// curves at the given temperature.
    #[allow(non_snake_case)]
    pub fn plot_activity_in_terminal(&self, T: f64) -> Result<(), String> {
        let r = self
            .at(T)
            .ok_or(format!("no record at {} C", T))?;
        let curves = r.coeffs.smooth_curves(SMOOTH_POINTS);
        let y = DMatrix::from_columns(&[curves.a_Nd, curves.a_Mg, curves.gamma_Nd, curves.gamma_Mg]);
        plots_terminal(
            "X_Nd".to_string(),
            vec![
                "a_Nd".to_string(),
                "a_Mg".to_string(),
                "gamma_Nd".to_string(),
                "gamma_Mg".to_string(),
            ],
            curves.X_Nd,
            y,
        );
        Ok(())
    }

    /// Terminal plot of the reduction free energy vs composition at the
    /// given temperature, ideal and non-ideal.
    #[allow(non_snake_case)]
    pub fn plot_delta_G_in_terminal(&self, T: f64) -> Result<(), String> {
        let r = self
            .at(T)
            .ok_or(format!("no record at {} C", T))?;
        let (xs, dg_ideal) = delta_G_curve(&r.record, &r.coeffs, SolutionModel::Ideal, CURVE_POINTS);
        let (_, dg_nonideal) =
            delta_G_curve(&r.record, &r.coeffs, SolutionModel::NonIdeal, CURVE_POINTS);
        let y = DMatrix::from_columns(&[dg_ideal, dg_nonideal]);
        plots_terminal(
            "X_Nd".to_string(),
            vec!["dG ideal".to_string(), "dG non-ideal".to_string()],
            xs,
            y,
        );
        Ok(())
    }

    /// Terminal plot of the equilibrium reduction composition as a
    /// function of temperature, both solution models.
    pub fn plot_equilibrium_vs_temperature_in_terminal(&self) {
        let temps = DVector::from_vec(self.dataset.temperatures());
        let ideal = DVector::from_vec(
            self.results
                .iter()
                .map(|r| r.X_Nd_eq_ideal.x)
                .collect::<Vec<f64>>(),
        );
        let nonideal = DVector::from_vec(
            self.results
                .iter()
                .map(|r| r.X_Nd_eq_nonideal.x)
                .collect::<Vec<f64>>(),
        );
        let y = DMatrix::from_columns(&[ideal, nonideal]);
        plots_terminal(
            "T".to_string(),
            vec!["X_Nd eq ideal".to_string(), "X_Nd eq non-ideal".to_string()],
            temps,
            y,
        );
    }

    /// Terminal plot of the hydride equilibrium composition vs hydrogen
    /// pressure at the given temperature, both solution models.
    #[allow(non_snake_case)]
    pub fn plot_hydride_sweep_in_terminal(&self, T: f64) -> Result<(), String> {
        let r = self
            .at(T)
            .ok_or(format!("no record at {} C", T))?;
        let p = DVector::from_vec(self.P_H2_range.clone());
        let ideal = DVector::from_vec(r.hyd_ideal.iter().map(|h| h.X_Nd).collect::<Vec<f64>>());
        let nonideal =
            DVector::from_vec(r.hyd_nonideal.iter().map(|h| h.X_Nd).collect::<Vec<f64>>());
        let y = DMatrix::from_columns(&[ideal, nonideal]);
        plots_terminal(
            "P_H2".to_string(),
            vec!["X_Nd eq ideal".to_string(), "X_Nd eq non-ideal".to_string()],
            p,
            y,
        );
        Ok(())
    }
}

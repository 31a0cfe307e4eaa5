use super::Calculations::MgNdEquilibria;
use super::HydrideEquilibrium::HydrideRegime;
use super::ReductionEquilibrium::{SolutionModel, delta_G_curve, full_reduction_curve};
use prettytable::{Table, row};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// points on the smooth activity/coefficient curves
const SMOOTH_POINTS: usize = 201;
/// points on the free-energy curves
const CURVE_POINTS: usize = 1000;

impl MgNdEquilibria {
    ////////////////////////INPUT/OUTPUT////////////////////////////////////////////////////////

    /// Prints the formation free energies of every record to the console.
    pub fn pretty_print_dataset(&self) {
        println!("__________formation free energies, J/mol__________");
        let mut table = Table::new();
        table.add_row(row!["T (C)", "Gf_Nd2O3", "Gf_MgO", "Gf_NdL", "Gf_NdH2"]);
        for rec in &self.dataset.records {
            table.add_row(row![rec.T, rec.Gf_Nd2O3, rec.Gf_MgO, rec.Gf_NdL, rec.Gf_NdH2]);
        }
        table.printstd();
        println!("_____________________________________________________________");
    }

    /// Prints the equilibrium reduction compositions and the liquidus
    /// composition per temperature.
    pub fn pretty_print_equilibria(&self) {
        println!("__________equilibrium reduction composition X_Nd__________");
        let mut table = Table::new();
        table.add_row(row![
            "T (C)",
            "X_Nd eq (ideal)",
            "converged",
            "X_Nd eq (non-ideal)",
            "converged",
            "X_Nd Mg3Nd forms"
        ]);
        for r in &self.results {
            table.add_row(row![
                r.record.T,
                format!("{:.6}", r.X_Nd_eq_ideal.x),
                r.X_Nd_eq_ideal.converged,
                format!("{:.6}", r.X_Nd_eq_nonideal.x),
                r.X_Nd_eq_nonideal.converged,
                format!("{:.6}", r.X_Nd_Mg3Nd)
            ]);
        }
        table.printstd();
        println!("_____________________________________________________________");
    }

    /// Prints a per-temperature summary of the hydride pressure sweep:
    /// the pressure below which hydride forms at any composition, and the
    /// equilibrium composition at the top of the pressure range.
    pub fn pretty_print_hydride_summary(&self) {
        println!("__________hydride precipitation vs H2 pressure__________");
        let mut table = Table::new();
        table.add_row(row![
            "T (C)",
            "P_H2 supersaturated below (atm)",
            "X_Nd eq at P_max (ideal)",
            "X_Nd eq at P_max (non-ideal)"
        ]);
        for r in &self.results {
            let p_super = self
                .P_H2_range
                .iter()
                .zip(r.hyd_nonideal.iter())
                .filter(|(_, h)| h.regime == HydrideRegime::Supersaturated)
                .map(|(p, _)| *p)
                .fold(0.0_f64, f64::max);
            let last_ideal = r.hyd_ideal.last();
            let last_nonideal = r.hyd_nonideal.last();
            table.add_row(row![
                r.record.T,
                format!("{:.6}", p_super),
                last_ideal.map_or("-".to_string(), |h| format!("{:.6}", h.X_Nd)),
                last_nonideal.map_or("-".to_string(), |h| format!("{:.6}", h.X_Nd))
            ]);
        }
        table.printstd();
        println!("_____________________________________________________________");
    }

    /// Exports every computed series as a column-oriented CSV: one column
    /// per series, one row per sample, shorter series padded with empty
    /// cells to the longest series' length.
    pub fn save_csv(&self, path: &Path) -> Result<(), std::io::Error> {
        let mut columns: Vec<(String, Vec<f64>)> = Vec::new();

        // smooth activity and coefficient curves
        let mut x_smooth_written = false;
        for r in &self.results {
            let curves = r.coeffs.smooth_curves(SMOOTH_POINTS);
            if !x_smooth_written {
                columns.push((
                    "X Nd Smooth".to_string(),
                    curves.X_Nd.as_slice().to_vec(),
                ));
                x_smooth_written = true;
            }
            let t = r.record.T;
            columns.push((
                format!("Gamma Nd Smooth at {}", t),
                curves.gamma_Nd.as_slice().to_vec(),
            ));
            columns.push((
                format!("Gamma Mg Smooth at {}", t),
                curves.gamma_Mg.as_slice().to_vec(),
            ));
            columns.push((
                format!("Activity Nd Smooth at {}", t),
                curves.a_Nd.as_slice().to_vec(),
            ));
            columns.push((
                format!("Activity Mg Smooth at {}", t),
                curves.a_Mg.as_slice().to_vec(),
            ));
        }

        // free energy of reduction vs composition
        let mut x_dg_written = false;
        for r in &self.results {
            let (xs, dg_ideal) =
                delta_G_curve(&r.record, &r.coeffs, SolutionModel::Ideal, CURVE_POINTS);
            let (_, dg_nonideal) =
                delta_G_curve(&r.record, &r.coeffs, SolutionModel::NonIdeal, CURVE_POINTS);
            if !x_dg_written {
                columns.push(("X Nd for Delta G".to_string(), xs.as_slice().to_vec()));
                x_dg_written = true;
            }
            let t = r.record.T;
            columns.push((format!("Delta G Ideal {}", t), dg_ideal.as_slice().to_vec()));
            columns.push((
                format!("Delta G Non-Ideal {}", t),
                dg_nonideal.as_slice().to_vec(),
            ));
        }

        // initial reactant ratio curve
        let (fractions, x_full) = full_reduction_curve(1001);
        columns.push((
            "Initial Fraction of Stoichiometric Ratio".to_string(),
            fractions.as_slice().to_vec(),
        ));
        columns.push((
            "X Nd at Full Reduction".to_string(),
            x_full.as_slice().to_vec(),
        ));

        // equilibrium composition vs temperature
        columns.push((
            "Temperature (C)".to_string(),
            self.results.iter().map(|r| r.record.T).collect(),
        ));
        columns.push((
            "Ideal Eq Concentration".to_string(),
            self.results.iter().map(|r| r.X_Nd_eq_ideal.x).collect(),
        ));
        columns.push((
            "Non-Ideal Eq Concentration".to_string(),
            self.results.iter().map(|r| r.X_Nd_eq_nonideal.x).collect(),
        ));
        columns.push((
            "X Nd Mg3Nd Forms".to_string(),
            self.results.iter().map(|r| r.X_Nd_Mg3Nd).collect(),
        ));

        // hydride sweeps
        columns.push(("PH2".to_string(), self.P_H2_range.clone()));
        for r in &self.results {
            let t = r.record.T;
            columns.push((
                format!("Hydride Precipitation X Nd Eq Ideal {}", t),
                r.hyd_ideal.iter().map(|h| h.X_Nd).collect(),
            ));
            columns.push((
                format!("Hydride Precipitation X Nd Eq Non-Ideal {}", t),
                r.hyd_nonideal.iter().map(|h| h.X_Nd).collect(),
            ));
        }

        let max_len = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        let header: Vec<&str> = columns.iter().map(|(name, _)| name.as_str()).collect();
        writeln!(w, "{}", header.join(","))?;
        for i in 0..max_len {
            let mut row = Vec::with_capacity(columns.len());
            for (_, series) in &columns {
                match series.get(i) {
                    Some(v) => row.push(v.to_string()),
                    None => row.push(String::new()),
                }
            }
            writeln!(w, "{}", row.join(","))?;
        }
        w.flush()
    }
}

//////////////////////////////////TESTS///////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Thermochemistry::ActivityData::ActivityDataset;
    use crate::Thermochemistry::ActivityInterpolator::linspace;
    use crate::Thermochemistry::Calculations::MgNdEquilibria;
    use crate::Thermochemistry::EquilibriumSearch::SearchParams;
    use std::fs;

    #[test]
    fn test_csv_export_pads_columns() {
        let eq = MgNdEquilibria::with_dataset(
            ActivityDataset::new(),
            linspace(0.000001, 1.1, 7),
            SearchParams::reduction(),
            SearchParams::hydride(),
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mg_nd_output.csv");
        eq.save_csv(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("X Nd Smooth"));
        assert!(header.contains("PH2"));
        assert!(header.contains("Hydride Precipitation X Nd Eq Non-Ideal 850"));

        let n_cols = header.split(',').count();
        let mut n_rows = 0;
        for line in lines {
            assert_eq!(line.split(',').count(), n_cols);
            n_rows += 1;
        }
        // longest series is the 1001-point reactant ratio curve
        assert_eq!(n_rows, 1001);
        // a padded cell: last row of the 7-point PH2 column must be empty
        let last = content.lines().last().unwrap();
        let ph2_idx = header.split(',').position(|h| h == "PH2").unwrap();
        assert_eq!(last.split(',').nth(ph2_idx).unwrap(), "");
    }
}

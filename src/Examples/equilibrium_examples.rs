use crate::Thermochemistry::ActivityData::{ActivityDataset, X_Nd_a_data};
use crate::Thermochemistry::ActivityInterpolator::ActivityCoefficients;
use crate::Thermochemistry::Calculations::MgNdEquilibria;
use crate::Thermochemistry::EquilibriumSearch::SearchParams;
use crate::Thermochemistry::HydrideEquilibrium::target_activity;
use crate::Thermochemistry::ReductionEquilibrium::{SolutionModel, reduction_equilibrium};
use std::path::Path;

pub fn equilibrium_examples(task: usize) {
    match task {
        0 => {
            // dataset overview
            let dataset = ActivityDataset::new();
            dataset.validate().unwrap();
            println!("temperatures on board {:?} \n", dataset.temperatures());
            let eq = MgNdEquilibria::new().unwrap();
            eq.pretty_print_dataset();
        }
        1 => {
            // activity coefficients at one temperature
            let dataset = ActivityDataset::new();
            let rec = dataset.record_at(700.0).unwrap();
            let coeffs = ActivityCoefficients::from_record(rec);
            for &x in &[0.05, 0.1234, 0.25, 0.5, 0.9] {
                println!(
                    "X_Nd = {}: gamma_Nd = {:.5}, gamma_Mg = {:.5}, a_Nd = {:.5}, a_Mg = {:.5}",
                    x,
                    coeffs.gamma_Nd.eval(x),
                    coeffs.gamma_Mg.eval(x),
                    coeffs.a_Nd(x),
                    coeffs.a_Mg(x)
                );
            }
            println!(
                "\n grid has {} points from {:.0e} to 1",
                X_Nd_a_data.len(),
                X_Nd_a_data[0]
            );
        }
        2 => {
            // reduction equilibria for the whole dataset
            let eq = MgNdEquilibria::new().unwrap();
            eq.pretty_print_equilibria();
        }
        3 => {
            // a single reduction solve, spelled out
            let dataset = ActivityDataset::new();
            let rec = dataset.record_at(700.0).unwrap();
            let coeffs = ActivityCoefficients::from_record(rec);
            let params = SearchParams::reduction();
            let ideal = reduction_equilibrium(rec, &coeffs, SolutionModel::Ideal, &params);
            let nonideal = reduction_equilibrium(rec, &coeffs, SolutionModel::NonIdeal, &params);
            println!(
                "700 C ideal:     X_Nd = {:.6} (converged {}, {} evaluations)",
                ideal.x, ideal.converged, ideal.evaluations
            );
            println!(
                "700 C non-ideal: X_Nd = {:.6} (converged {}, {} evaluations)",
                nonideal.x, nonideal.converged, nonideal.evaluations
            );
        }
        4 => {
            // hydride precipitation at 695 C
            let eq = MgNdEquilibria::new().unwrap();
            let rec = eq.at(695.0).unwrap();
            println!(
                "target activity at 695 C, 1 atm H2: {:.6e}",
                target_activity(&rec.record, 1.0)
            );
            eq.pretty_print_hydride_summary();
        }
        5 => {
            // spreadsheet export
            let eq = MgNdEquilibria::new().unwrap();
            let path = Path::new("Mg_Nd_Calculation_Output.csv");
            eq.save_csv(path).unwrap();
            println!("Data has been written to {}", path.display());
        }
        6 => {
            // terminal plots
            let eq = MgNdEquilibria::new().unwrap();
            eq.plot_activity_in_terminal(700.0).unwrap();
            eq.plot_delta_G_in_terminal(700.0).unwrap();
            eq.plot_equilibrium_vs_temperature_in_terminal();
            eq.plot_hydride_sweep_in_terminal(695.0).unwrap();
        }
        _ => {
            println!("no such task: {}", task);
        }
    }
}

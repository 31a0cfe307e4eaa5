#[cfg(test)]
mod tests {
    use crate::Thermochemistry::ActivityData::ActivityDataset;
    use crate::Thermochemistry::ActivityInterpolator::{ActivityCoefficients, linspace};
    use crate::Thermochemistry::EquilibriumSearch::SearchParams;
    use crate::Thermochemistry::HydrideEquilibrium::{
        HydrideRegime, default_pressure_range, hydride_equilibrium, pressure_sweep,
        target_activity,
    };
    use crate::Thermochemistry::ReductionEquilibrium::SolutionModel;
    use approx::assert_relative_eq;

    #[test]
    fn test_ideal_case_is_closed_form() {
        // under ideality the equilibrium composition IS the target activity
        let dataset = ActivityDataset::new();
        let rec = dataset.record_at(695.0).unwrap();
        let coeffs = ActivityCoefficients::from_record(rec);
        let params = SearchParams::hydride();
        for p in [0.01, 0.1, 0.5, 1.0] {
            let result = hydride_equilibrium(rec, &coeffs, SolutionModel::Ideal, p, &params);
            assert_eq!(result.X_Nd, target_activity(rec, p));
            assert!(result.converged);
        }
    }

    #[test]
    fn test_nonideal_satisfies_activity_target() {
        // |X * gamma_Nd(X) - a_Nd*| <= precision whenever a_Nd* <= 1
        let dataset = ActivityDataset::new();
        let rec = dataset.record_at(695.0).unwrap();
        let coeffs = ActivityCoefficients::from_record(rec);
        let params = SearchParams::hydride();
        for p in [0.01, 0.1, 0.5, 1.0] {
            let a_target = target_activity(rec, p);
            assert!(a_target <= 1.0, "test pressures must stay in solution regime");
            let result = hydride_equilibrium(rec, &coeffs, SolutionModel::NonIdeal, p, &params);
            assert!(result.converged);
            assert_eq!(result.regime, HydrideRegime::Solution);
            let residual = coeffs.a_Nd(result.X_Nd) - a_target;
            assert!(
                residual.abs() <= params.precision,
                "residual {} at P = {}",
                residual,
                p
            );
        }
    }

    #[test]
    fn test_supersaturated_regime_short_circuits() {
        // at vanishing pressure the target activity exceeds 1: hydride
        // forms at any composition and the raw target is passed through
        let dataset = ActivityDataset::new();
        let rec = dataset.record_at(695.0).unwrap();
        let coeffs = ActivityCoefficients::from_record(rec);
        let params = SearchParams::hydride();
        let p = 1e-6;
        let a_target = target_activity(rec, p);
        assert!(a_target > 1.0);
        let result = hydride_equilibrium(rec, &coeffs, SolutionModel::NonIdeal, p, &params);
        assert_eq!(result.regime, HydrideRegime::Supersaturated);
        assert_eq!(result.X_Nd, a_target);
        assert!(result.converged);
    }

    #[test]
    fn test_sweep_is_non_increasing_in_pressure() {
        // higher hydrogen pressure suppresses hydride formation at lower
        // Nd content: equilibrium composition never rises with pressure
        let dataset = ActivityDataset::new();
        let rec = dataset.record_at(695.0).unwrap();
        let coeffs = ActivityCoefficients::from_record(rec);
        let params = SearchParams::hydride();
        let pressures = default_pressure_range();
        for model in [SolutionModel::Ideal, SolutionModel::NonIdeal] {
            let sweep = pressure_sweep(rec, &coeffs, model, &pressures, &params);
            assert_eq!(sweep.len(), pressures.len());
            for w in sweep.windows(2) {
                assert!(
                    w[1].X_Nd <= w[0].X_Nd + 1e-9,
                    "composition rose with pressure: {} -> {}",
                    w[0].X_Nd,
                    w[1].X_Nd
                );
            }
        }
    }

    #[test]
    fn test_target_activity_formula() {
        let dataset = ActivityDataset::new();
        let rec = dataset.record_at(700.0).unwrap();
        // doubling the pressure halves the target
        let a1 = target_activity(rec, 0.4);
        let a2 = target_activity(rec, 0.8);
        assert_relative_eq!(a1, 2.0 * a2, max_relative = 1e-12);
    }

    #[test]
    fn test_sweep_covers_both_regimes() {
        let dataset = ActivityDataset::new();
        let rec = dataset.record_at(695.0).unwrap();
        let coeffs = ActivityCoefficients::from_record(rec);
        let params = SearchParams::hydride();
        let pressures = linspace(0.000001, 1.1, 50);
        let sweep = pressure_sweep(rec, &coeffs, SolutionModel::NonIdeal, &pressures, &params);
        assert!(sweep.iter().any(|h| h.regime == HydrideRegime::Supersaturated));
        assert!(sweep.iter().any(|h| h.regime == HydrideRegime::Solution));
        for h in sweep.iter().filter(|h| h.regime == HydrideRegime::Solution) {
            assert!(h.X_Nd < 1.0);
        }
    }
}

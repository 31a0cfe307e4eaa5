/// compiled-in activity tables, formation free energies and liquidus data
/// for the Mg-Nd-Nd2O3-NdH2 system
pub mod ActivityData;
/// activity coefficient derivation and piecewise-linear interpolation over
/// the composition grid
pub mod ActivityInterpolator;
/// per-temperature pipeline: coefficients, liquidus, reduction and hydride
/// equilibria, all derived once from the dataset
pub mod Calculations;
/// bracketed root search shared by the reduction and hydride solvers
pub mod EquilibriumSearch;
/// equilibrium composition for NdH2 precipitation from the Mg-Nd melt
pub mod HydrideEquilibrium;
mod HydrideEquilibrium_tests;
/// Mg3Nd liquidus tie-line interpolation, X_Nd as a function of T
pub mod Liquidus;
/// console tables and spreadsheet export of computed equilibria
pub mod Output;
/// terminal plots of activity, free energy and equilibrium curves
pub mod Plotting;
/// equilibrium composition for reduction of Nd2O3 by liquid Mg
pub mod ReductionEquilibrium;

#[allow(non_snake_case)]
pub mod equilibrium_examples;

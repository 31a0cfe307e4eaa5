//! Activity coefficient derivation and interpolation.
//!
//! gamma = a / X at every tabulated point, then a continuous piecewise-linear
//! gamma(X_Nd) per species per temperature, linearly extrapolated for queries
//! outside the grid. Both gamma_Nd and gamma_Mg are functions of X_Nd.
//! Coefficients are computed once per temperature right after the dataset is
//! built and are read-only afterward.

use super::ActivityData::{TemperatureRecord, X_Mg_a_data, X_Nd_a_data};
use nalgebra::DVector;

/// `n` evenly spaced points from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n as f64 - 1.0);
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Piecewise-linear curve through ordered knots, linearly extrapolated
/// beyond the first and last segments.
///
/// Queries far outside [0, 1] follow the end-segment slopes and can leave
/// the physical range; callers are expected not to ask for such points.
#[derive(Debug, Clone)]
pub struct PiecewiseLinear {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PiecewiseLinear {
    /// Knot arrays must be of equal length (>= 2) with strictly increasing x.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        assert_eq!(x.len(), y.len(), "knot arrays must have equal length");
        assert!(x.len() >= 2, "need at least two knots");
        Self { x, y }
    }

    /// Value at `x_new`: linear inside the containing segment, the first or
    /// last segment extended for points outside the knot range.
    pub fn eval(&self, x_new: f64) -> f64 {
        let n = self.x.len();
        // segment index: largest i with x[i] <= x_new, clamped to a valid segment
        let seg = if x_new <= self.x[0] {
            0
        } else if x_new >= self.x[n - 1] {
            n - 2
        } else {
            let mut low = 0usize;
            let mut high = n - 1;
            while high - low > 1 {
                let mid = (low + high) >> 1;
                if self.x[mid] <= x_new {
                    low = mid;
                } else {
                    high = mid;
                }
            }
            low
        };
        let (x0, x1) = (self.x[seg], self.x[seg + 1]);
        let (y0, y1) = (self.y[seg], self.y[seg + 1]);
        y0 + (y1 - y0) * (x_new - x0) / (x1 - x0)
    }

    pub fn knots(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }
}

/// Activity coefficient curves of both species at one temperature,
/// interpolable over X_Nd in [0, 1].
#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct ActivityCoefficients {
    /// temperature, degrees C
    pub T: f64,
    pub gamma_Nd: PiecewiseLinear,
    pub gamma_Mg: PiecewiseLinear,
}

/// Smooth curves for reporting: coefficients and reconstructed activities
/// sampled on an even X_Nd grid.
#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct SmoothActivityCurves {
    pub X_Nd: DVector<f64>,
    pub gamma_Nd: DVector<f64>,
    pub gamma_Mg: DVector<f64>,
    pub a_Nd: DVector<f64>,
    pub a_Mg: DVector<f64>,
}

impl ActivityCoefficients {
    /// Derives gamma = a / X elementwise over the composition grid and wraps
    /// both arrays in interpolable curves keyed on X_Nd. The grid's zero
    /// endpoints carry the epsilon substitute, so no division by zero occurs.
    pub fn from_record(record: &TemperatureRecord) -> Self {
        let x_nd = X_Nd_a_data.to_vec();
        let x_mg = X_Mg_a_data();
        let gamma_nd: Vec<f64> = record
            .a_Nd
            .iter()
            .zip(x_nd.iter())
            .map(|(a, x)| a / x)
            .collect();
        let gamma_mg: Vec<f64> = record
            .a_Mg
            .iter()
            .zip(x_mg.iter())
            .map(|(a, x)| a / x)
            .collect();
        Self {
            T: record.T,
            gamma_Nd: PiecewiseLinear::new(x_nd.clone(), gamma_nd),
            gamma_Mg: PiecewiseLinear::new(x_nd, gamma_mg),
        }
    }

    /// Nd activity at composition `x`: X_Nd * gamma_Nd(X_Nd)
    #[allow(non_snake_case)]
    pub fn a_Nd(&self, x: f64) -> f64 {
        x * self.gamma_Nd.eval(x)
    }

    /// Mg activity at composition `x`: (1 - X_Nd) * gamma_Mg(X_Nd)
    #[allow(non_snake_case)]
    pub fn a_Mg(&self, x: f64) -> f64 {
        (1.0 - x) * self.gamma_Mg.eval(x)
    }

    /// Samples gamma and reconstructed activity on `n` points over [0, 1].
    pub fn smooth_curves(&self, n: usize) -> SmoothActivityCurves {
        let xs = linspace(0.0, 1.0, n);
        let gamma_nd: Vec<f64> = xs.iter().map(|&x| self.gamma_Nd.eval(x)).collect();
        let gamma_mg: Vec<f64> = xs.iter().map(|&x| self.gamma_Mg.eval(x)).collect();
        let a_nd: Vec<f64> = xs
            .iter()
            .zip(gamma_nd.iter())
            .map(|(&x, g)| x * g)
            .collect();
        let a_mg: Vec<f64> = xs
            .iter()
            .zip(gamma_mg.iter())
            .map(|(&x, g)| (1.0 - x) * g)
            .collect();
        SmoothActivityCurves {
            X_Nd: DVector::from_vec(xs),
            gamma_Nd: DVector::from_vec(gamma_nd),
            gamma_Mg: DVector::from_vec(gamma_mg),
            a_Nd: DVector::from_vec(a_nd),
            a_Mg: DVector::from_vec(a_mg),
        }
    }
}

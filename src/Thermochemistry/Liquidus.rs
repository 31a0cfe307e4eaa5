//! Mg3Nd liquidus tie-line: the composition at which the Mg3Nd
//! intermetallic begins to form from the liquid, X_Nd as a function of
//! temperature. Interpolated quadratically (three-point Lagrange on the
//! local window) through the ThermoCalc tie-line points and extrapolated
//! outside the data range.

use super::ActivityData::ActivityDataset;
use super::ActivityInterpolator::linspace;
use nalgebra::DVector;

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Mg3NdLiquidus {
    /// temperatures, C, strictly increasing
    T: Vec<f64>,
    /// X_Nd at Mg3Nd formation for each temperature
    X_Nd: Vec<f64>,
}

impl Mg3NdLiquidus {
    pub fn from_dataset(dataset: &ActivityDataset) -> Self {
        Self {
            T: dataset.T_Mg3Nd_liquidus.clone(),
            X_Nd: dataset.X_Nd_Mg3Nd_liquidus.clone(),
        }
    }

    /// X_Nd of Mg3Nd formation at temperature `t` (C). Quadratic through
    /// the three tie-line points around the containing segment; the end
    /// windows extend beyond the data range.
    #[allow(non_snake_case)]
    pub fn X_Nd_at(&self, t: f64) -> f64 {
        let n = self.T.len();
        // segment index as in the linear interpolator
        let seg = if t <= self.T[0] {
            0
        } else if t >= self.T[n - 1] {
            n - 2
        } else {
            let mut low = 0usize;
            let mut high = n - 1;
            while high - low > 1 {
                let mid = (low + high) >> 1;
                if self.T[mid] <= t {
                    low = mid;
                } else {
                    high = mid;
                }
            }
            low
        };
        // three-point window centered on the segment, clamped at the ends
        let i0 = seg.saturating_sub(1).min(n - 3);
        let (t0, t1, t2) = (self.T[i0], self.T[i0 + 1], self.T[i0 + 2]);
        let (y0, y1, y2) = (self.X_Nd[i0], self.X_Nd[i0 + 1], self.X_Nd[i0 + 2]);
        let l0 = (t - t1) * (t - t2) / ((t0 - t1) * (t0 - t2));
        let l1 = (t - t0) * (t - t2) / ((t1 - t0) * (t1 - t2));
        let l2 = (t - t0) * (t - t1) / ((t2 - t0) * (t2 - t1));
        y0 * l0 + y1 * l1 + y2 * l2
    }

    /// Liquidus sampled on `n` temperatures over [t_start, t_end].
    pub fn smooth(&self, t_start: f64, t_end: f64, n: usize) -> (DVector<f64>, DVector<f64>) {
        let ts = linspace(t_start, t_end, n);
        let xs: Vec<f64> = ts.iter().map(|&t| self.X_Nd_at(t)).collect();
        (DVector::from_vec(ts), DVector::from_vec(xs))
    }

    /// temperature range covered by the tie-line data, C
    pub fn data_range(&self) -> (f64, f64) {
        (self.T[0], self.T[self.T.len() - 1])
    }
}

//////////////////////////////////TESTS///////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reproduces_tie_line_points() {
        let dataset = ActivityDataset::new();
        let liquidus = Mg3NdLiquidus::from_dataset(&dataset);
        for (t, x) in dataset
            .T_Mg3Nd_liquidus
            .iter()
            .zip(dataset.X_Nd_Mg3Nd_liquidus.iter())
        {
            assert_relative_eq!(liquidus.X_Nd_at(*t), *x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_interpolated_point_between_neighbors() {
        let dataset = ActivityDataset::new();
        let liquidus = Mg3NdLiquidus::from_dataset(&dataset);
        // 700 C sits between the 696.77694 and 713.04319 tie-line points
        let x = liquidus.X_Nd_at(700.0);
        assert!(x > 0.13786 && x < 0.14774, "X_Nd at 700 C = {}", x);
    }

    #[test]
    fn test_liquidus_increases_with_temperature() {
        let dataset = ActivityDataset::new();
        let liquidus = Mg3NdLiquidus::from_dataset(&dataset);
        let (_, xs) = liquidus.smooth(645.0, 779.0, 100);
        for w in xs.as_slice().windows(2) {
            assert!(w[1] > w[0]);
        }
    }
}

use crate::error::GridError;
use crate::grid3d::Grid3D;

/// Linear interpolation over a uniformly-spaced 1D table, indexed directly by the table's
/// abscissa (not by bin index) — used for tabulated pair potentials keyed on squared distance.
#[derive(Clone, Debug)]
pub struct RegularLinearInterpolator {
    values: Vec<f64>,
    x_min: f64,
    x_max: f64,
    step: f64,
}

impl RegularLinearInterpolator {
    pub fn new(values: Vec<f64>, x_min: f64, x_max: f64) -> Result<Self, GridError> {
        if values.len() < 2 {
            return Err(GridError::NotEnoughSamples(values.len()));
        }
        if !(x_min < x_max) {
            return Err(GridError::InvalidRange { min: x_min, max: x_max });
        }
        let step = (x_max - x_min) / (values.len() - 1) as f64;
        Ok(RegularLinearInterpolator { values, x_min, x_max, step })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn evaluate(&self, x: f64) -> Result<f64, GridError> {
        if x < self.x_min || x > self.x_max {
            return Err(GridError::InterpolatorOutOfRange {
                value: x,
                min: self.x_min,
                max: self.x_max,
            });
        }
        let float_idx = (x - self.x_min) / self.step;
        let lo = (float_idx.floor() as usize).min(self.values.len() - 2);
        let frac = float_idx - lo as f64;
        Ok(self.values[lo] * (1.0 - frac) + self.values[lo + 1] * frac)
    }
}

/// Trilinear interpolation over a uniform `(R, s, cos φ)` grid, feeding the isotropic tabulated
/// three-body surface.
#[derive(Clone, Debug)]
pub struct TrilinearInterpolator {
    grid: Grid3D,
    mins: [f64; 3],
    maxs: [f64; 3],
    steps: [f64; 3],
}

impl TrilinearInterpolator {
    pub fn new(grid: Grid3D, mins: [f64; 3], maxs: [f64; 3]) -> Result<Self, GridError> {
        let shape = grid.shape();
        let mut steps = [0.0; 3];
        for axis in 0..3 {
            if !(mins[axis] < maxs[axis]) {
                return Err(GridError::InvalidRange { min: mins[axis], max: maxs[axis] });
            }
            if shape[axis] < 2 {
                return Err(GridError::NotEnoughSamples(shape[axis]));
            }
            steps[axis] = (maxs[axis] - mins[axis]) / (shape[axis] - 1) as f64;
        }
        Ok(TrilinearInterpolator { grid, mins, maxs, steps })
    }

    fn cell(&self, axis: usize, x: f64) -> Result<(usize, f64), GridError> {
        if x < self.mins[axis] || x > self.maxs[axis] {
            return Err(GridError::InterpolatorOutOfRange {
                value: x,
                min: self.mins[axis],
                max: self.maxs[axis],
            });
        }
        let n = self.grid.shape()[axis];
        let float_idx = (x - self.mins[axis]) / self.steps[axis];
        let lo = (float_idx.floor() as usize).min(n - 2);
        let frac = float_idx - lo as f64;
        Ok((lo, frac))
    }

    pub fn evaluate(&self, r: f64, s: f64, cos_phi: f64) -> Result<f64, GridError> {
        let (i0, f0) = self.cell(0, r)?;
        let (i1, f1) = self.cell(1, s)?;
        let (i2, f2) = self.cell(2, cos_phi)?;

        let c000 = self.grid.get(i0, i1, i2);
        let c100 = self.grid.get(i0 + 1, i1, i2);
        let c010 = self.grid.get(i0, i1 + 1, i2);
        let c110 = self.grid.get(i0 + 1, i1 + 1, i2);
        let c001 = self.grid.get(i0, i1, i2 + 1);
        let c101 = self.grid.get(i0 + 1, i1, i2 + 1);
        let c011 = self.grid.get(i0, i1 + 1, i2 + 1);
        let c111 = self.grid.get(i0 + 1, i1 + 1, i2 + 1);

        let c00 = c000 * (1.0 - f0) + c100 * f0;
        let c10 = c010 * (1.0 - f0) + c110 * f0;
        let c01 = c001 * (1.0 - f0) + c101 * f0;
        let c11 = c011 * (1.0 - f0) + c111 * f0;

        let c0 = c00 * (1.0 - f1) + c10 * f1;
        let c1 = c01 * (1.0 - f1) + c11 * f1;

        Ok(c0 * (1.0 - f2) + c1 * f2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_interpolator_matches_exact_samples() {
        let interp = RegularLinearInterpolator::new(vec![0.0, 1.0, 4.0, 9.0], 0.0, 3.0).unwrap();
        assert!((interp.evaluate(1.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((interp.evaluate(0.5).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn linear_interpolator_rejects_out_of_range() {
        let interp = RegularLinearInterpolator::new(vec![0.0, 1.0], 0.0, 1.0).unwrap();
        assert!(interp.evaluate(2.0).is_err());
    }

    #[test]
    fn trilinear_interpolator_reduces_to_corner_values() {
        let mut grid = Grid3D::new(2, 2, 2).unwrap();
        grid.set(0, 0, 0, 1.0);
        grid.set(1, 0, 0, 2.0);
        grid.set(0, 1, 0, 3.0);
        grid.set(0, 0, 1, 4.0);
        grid.set(1, 1, 1, 10.0);
        let interp = TrilinearInterpolator::new(grid, [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]).unwrap();
        assert!((interp.evaluate(0.0, 0.0, 0.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((interp.evaluate(1.0, 1.0, 1.0).unwrap() - 10.0).abs() < 1e-12);
        assert!((interp.evaluate(1.0, 0.0, 0.0).unwrap() - 2.0).abs() < 1e-12);
    }
}

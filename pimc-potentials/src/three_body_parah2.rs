use pimc_grids::TrilinearInterpolator;

use crate::axilrod_teller_muto::AxilrodTellerMutoPotential;

/// Converts the three pairwise side lengths of a triangle into the Jacobi coordinates
/// `(R, s, cos_phi)` used by the published isotropic three-body surface: `s` is the half-length
/// of the 1-2 side, `R` is the median length from vertex 0 to the midpoint of the 1-2 side, and
/// `cos_phi` is the cosine of the angle between that median and the 1-2 side.
fn jacobi_coordinates(dist01: f64, dist02: f64, dist12: f64) -> (f64, f64, f64) {
    let s = dist12 / 2.0;
    // Place particle 1 at the origin and particle 2 at (dist12, 0); solve for particle 0.
    let x = (dist01 * dist01 - dist02 * dist02 + dist12 * dist12) / (2.0 * dist12);
    let y_sq = (dist01 * dist01 - x * x).max(0.0);
    let y = y_sq.sqrt();

    let dx = dist12 / 2.0 - x;
    let r = (dx * dx + y * y).sqrt();
    let cos_phi = if r > 0.0 { (dx / r).clamp(-1.0, 1.0) } else { 1.0 };

    (r, s, cos_phi)
}

/// The isotropic three-body potential energy surface for para-hydrogen published in
/// J. Chem. Phys. 156, 044301 (2022): a trilinear interpolation over Jacobi coordinates
/// `(R, s, cos(phi))`, falling back to an Axilrod-Teller-Muto tail outside the tabulated range.
#[derive(Debug, Clone)]
pub struct ThreeBodyParaH2Potential {
    interpolator: TrilinearInterpolator,
    atm_potential: AxilrodTellerMutoPotential,
}

impl ThreeBodyParaH2Potential {
    pub fn new(interpolator: TrilinearInterpolator, atm_potential: AxilrodTellerMutoPotential) -> Self {
        ThreeBodyParaH2Potential { interpolator, atm_potential }
    }

    pub fn evaluate(&self, dist01: f64, dist02: f64, dist12: f64) -> f64 {
        let (r, s, cos_phi) = jacobi_coordinates(dist01, dist02, dist12);
        match self.interpolator.evaluate(r, s, cos_phi) {
            Ok(energy) => energy,
            Err(_) => self.atm_potential.evaluate(dist01, dist02, dist12),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_grids::Grid3D;

    #[test]
    fn jacobi_coordinates_recover_equilateral_triangle() {
        let (r, s, cos_phi) = jacobi_coordinates(2.0, 2.0, 2.0);
        assert!((s - 1.0).abs() < 1e-12);
        // median of an equilateral triangle of side 2 has length sqrt(3)
        assert!((r - 3f64.sqrt()).abs() < 1e-9);
        assert!(cos_phi.abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_atm_outside_table() {
        let grid = Grid3D::new(2, 2, 2).unwrap();
        let interpolator =
            TrilinearInterpolator::new(grid, [0.1, 0.1, -0.1], [0.2, 0.2, 0.1]).unwrap();
        let atm = AxilrodTellerMutoPotential::new(1.0).unwrap();
        let pot = ThreeBodyParaH2Potential::new(interpolator, atm);
        let e = pot.evaluate(5.0, 5.0, 5.0);
        assert!(e.is_finite());
        assert!(e > 0.0);
    }
}

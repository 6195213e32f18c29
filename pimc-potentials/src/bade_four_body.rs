use pimc_geometry::Point;

use crate::error::PotentialError;

struct MagnitudeAndDirection<const NDIM: usize> {
    direction: Point<NDIM>,
    magnitude: f64,
}

fn magnitude_and_direction<const NDIM: usize>(point: Point<NDIM>) -> MagnitudeAndDirection<NDIM> {
    let magnitude = point.norm();
    MagnitudeAndDirection { direction: point / magnitude, magnitude }
}

fn dot<const NDIM: usize>(a: &Point<NDIM>, b: &Point<NDIM>) -> f64 {
    let mut sum = 0.0;
    for d in 0..NDIM {
        sum += a[d] * b[d];
    }
    sum
}

fn quadruplet_contribution<const NDIM: usize>(
    vec_ij: &MagnitudeAndDirection<NDIM>,
    vec_jk: &MagnitudeAndDirection<NDIM>,
    vec_kl: &MagnitudeAndDirection<NDIM>,
    vec_li: &MagnitudeAndDirection<NDIM>,
) -> f64 {
    let prod_of_mags = vec_ij.magnitude * vec_jk.magnitude * vec_kl.magnitude * vec_li.magnitude;
    let denominator = prod_of_mags * prod_of_mags * prod_of_mags;

    let prod_ijjk = dot(&vec_ij.direction, &vec_jk.direction);
    let prod_ijkl = dot(&vec_ij.direction, &vec_kl.direction);
    let prod_ijli = dot(&vec_ij.direction, &vec_li.direction);
    let prod_jkkl = dot(&vec_jk.direction, &vec_kl.direction);
    let prod_jkli = dot(&vec_jk.direction, &vec_li.direction);
    let prod_klli = dot(&vec_kl.direction, &vec_li.direction);

    let numerator = -1.0
        + prod_ijjk * prod_ijjk
        + prod_ijkl * prod_ijkl
        + prod_ijli * prod_ijli
        + prod_jkkl * prod_jkkl
        + prod_jkli * prod_jkli
        + prod_klli * prod_klli
        - 3.0 * (prod_ijjk * prod_jkkl * prod_ijkl)
        - 3.0 * (prod_ijjk * prod_jkli * prod_ijli)
        - 3.0 * (prod_ijkl * prod_klli * prod_ijli)
        - 3.0 * (prod_jkkl * prod_klli * prod_jkli)
        + 9.0 * (prod_ijjk * prod_jkkl * prod_klli * prod_ijli);

    2.0 * numerator / denominator
}

/// The Bade four-body dispersion potential: sums three symmetric triple-dipole-like
/// contributions over the six directed edges of a tetrahedron of particles, each rescaled by
/// the inverse-cube product of the four edge-pair magnitudes entering it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourBodyDispersionPotential {
    bade_coefficient: f64,
}

impl FourBodyDispersionPotential {
    pub fn new(bade_coefficient: f64) -> Result<Self, PotentialError> {
        if bade_coefficient < 0.0 {
            return Err(PotentialError::NegativeBadeCoefficient(bade_coefficient));
        }
        Ok(FourBodyDispersionPotential { bade_coefficient })
    }

    pub fn evaluate<const NDIM: usize>(
        &self,
        point0: Point<NDIM>,
        point1: Point<NDIM>,
        point2: Point<NDIM>,
        point3: Point<NDIM>,
    ) -> f64 {
        let vec10 = magnitude_and_direction(point1 - point0);
        let vec20 = magnitude_and_direction(point2 - point0);
        let vec30 = magnitude_and_direction(point3 - point0);
        let vec21 = magnitude_and_direction(point2 - point1);
        let vec31 = magnitude_and_direction(point3 - point1);
        let vec32 = magnitude_and_direction(point3 - point2);

        let total_energy = quadruplet_contribution(&vec30, &vec32, &vec21, &vec10)
            + quadruplet_contribution(&vec20, &vec32, &vec31, &vec10)
            + quadruplet_contribution(&vec20, &vec21, &vec31, &vec30);

        -self.bade_coefficient * total_energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_coefficient() {
        assert!(FourBodyDispersionPotential::new(-1.0).is_err());
    }

    #[test]
    fn regular_tetrahedron_is_finite() {
        let pot = FourBodyDispersionPotential::new(1.0).unwrap();
        let p0 = Point::new([1.0, 1.0, 1.0]);
        let p1 = Point::new([1.0, -1.0, -1.0]);
        let p2 = Point::new([-1.0, 1.0, -1.0]);
        let p3 = Point::new([-1.0, -1.0, 1.0]);
        let e = pot.evaluate(p0, p1, p2, p3);
        assert!(e.is_finite());
    }
}

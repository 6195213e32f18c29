use pimc_geometry::Point;
use pimc_potentials::FourBodyDispersionPotential;

use crate::smoothstep::{mean_of_six, smooth_01};

/// Reconstructs four Cartesian points (in an arbitrary but consistent frame) realizing the six
/// pairwise distances `(d01, d02, d03, d12, d13, d23)`, by standard distance-geometry
/// triangulation: `p0` at the origin, `p1` on the x-axis, `p2` in the xy-plane, `p3` completing
/// the tetrahedron. The reference implementation calls an (unfound, presumably external)
/// `six_side_lengths_to_cartesian` helper for this; this reconstruction is the direct
/// Cayley-Menger-style embedding it would have to perform.
pub fn tetrahedron_from_six_distances(
    d01: f64,
    d02: f64,
    d03: f64,
    d12: f64,
    d13: f64,
    d23: f64,
) -> [Point<3>; 4] {
    let p0 = Point::<3>::new([0.0, 0.0, 0.0]);
    let p1 = Point::<3>::new([d01, 0.0, 0.0]);

    let x2 = (d01 * d01 + d02 * d02 - d12 * d12) / (2.0 * d01);
    let y2 = (d02 * d02 - x2 * x2).max(0.0).sqrt();
    let p2 = Point::<3>::new([x2, y2, 0.0]);

    let x3 = (d01 * d01 + d03 * d03 - d13 * d13) / (2.0 * d01);
    let y3 = if y2 > 0.0 {
        (d02 * d02 + d03 * d03 - d23 * d23 - 2.0 * x2 * x3) / (2.0 * y2)
    } else {
        0.0
    };
    let z3 = (d03 * d03 - x3 * x3 - y3 * y3).max(0.0).sqrt();
    let p3 = Point::<3>::new([x3, y3, z3]);

    [p0, p1, p2, p3]
}

/// Mixes the Bade analytic dispersion potential with an ab-initio-regime energy across the
/// long-range bracket `[long_range_cutoff_begin, long_range_cutoff_end]`.
#[derive(Debug, Clone, Copy)]
pub struct LongRangeEnergyCorrector {
    dispersion_potential: FourBodyDispersionPotential,
    long_range_cutoff_begin: f64,
    long_range_cutoff_end: f64,
}

impl LongRangeEnergyCorrector {
    pub fn new(
        dispersion_potential: FourBodyDispersionPotential,
        long_range_cutoff_begin: f64,
        long_range_cutoff_end: f64,
    ) -> Self {
        LongRangeEnergyCorrector { dispersion_potential, long_range_cutoff_begin, long_range_cutoff_end }
    }

    pub fn dispersion_from_points(&self, points: [Point<3>; 4]) -> f64 {
        self.dispersion_potential.evaluate(points[0], points[1], points[2], points[3])
    }

    pub fn dispersion(&self, pair_distances: &[f64; 6]) -> f64 {
        let points = tetrahedron_from_six_distances(
            pair_distances[0],
            pair_distances[1],
            pair_distances[2],
            pair_distances[3],
            pair_distances[4],
            pair_distances[5],
        );
        self.dispersion_from_points(points)
    }

    pub fn mixed(&self, abinitio_energy: f64, pair_distances: &[f64; 6]) -> f64 {
        let dispersion_energy = self.dispersion(pair_distances);
        let average_sidelength = mean_of_six(pair_distances);
        self.mix(dispersion_energy, abinitio_energy, average_sidelength)
    }

    fn mix(&self, dispersion_energy: f64, abinitio_energy: f64, average_sidelength: f64) -> f64 {
        let frac_dispersion = smooth_01(average_sidelength, self.long_range_cutoff_begin, self.long_range_cutoff_end);
        let frac_abinitio = 1.0 - frac_dispersion;
        frac_dispersion * dispersion_energy + frac_abinitio * abinitio_energy
    }
}

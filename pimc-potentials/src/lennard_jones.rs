use crate::error::PotentialError;

/// The classic 12-6 Lennard-Jones pair potential, parametrized by well depth `epsilon` and
/// particle size `sigma`: `4*epsilon*[(sigma/r)^12 - (sigma/r)^6]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LennardJonesPotential {
    well_depth_4: f64,
    particle_size: f64,
}

impl LennardJonesPotential {
    pub fn new(well_depth: f64, particle_size: f64) -> Result<Self, PotentialError> {
        if well_depth <= 0.0 {
            return Err(PotentialError::NonPositiveWellDepth(well_depth));
        }
        if particle_size <= 0.0 {
            return Err(PotentialError::NonPositiveParticleSize(particle_size));
        }
        Ok(LennardJonesPotential { well_depth_4: 4.0 * well_depth, particle_size })
    }

    /// Parameters for the H2-H2 Lennard-Jones potential fitted by Warnecke et al., Eur. Phys.
    /// J. D 56, 353-358 (2010), paragraph 3 of page 354. Original units are Kelvin/Angstrom,
    /// converted here to wavenumbers and Angstrom.
    pub fn warnecke2010() -> Self {
        LennardJonesPotential::new(23.77, 2.96).expect("hard-coded literature parameters")
    }

    pub fn evaluate(&self, distance: f64) -> f64 {
        let s = self.particle_size / distance;
        let s3 = s * s * s;
        let s6 = s3 * s3;
        let s12 = s6 * s6;
        self.well_depth_4 * (s12 - s6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(LennardJonesPotential::new(0.0, 1.0).is_err());
        assert!(LennardJonesPotential::new(1.0, -1.0).is_err());
    }

    #[test]
    fn minimum_at_sigma_times_2_to_1_6() {
        let lj = LennardJonesPotential::new(1.0, 1.0).unwrap();
        let r_min = 2f64.powf(1.0 / 6.0);
        assert!((lj.evaluate(r_min) - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn warnecke2010_matches_literature_constants() {
        let lj = LennardJonesPotential::warnecke2010();
        assert_eq!(lj.well_depth_4, 4.0 * 23.77);
        assert_eq!(lj.particle_size, 2.96);
    }
}

use crate::error::PotentialError;

/// Three-body dispersion potential of Axilrod, Teller and Muto: the textbook
/// `C9 * (1 + 3*cos(t1)*cos(t2)*cos(t3)) / (r01*r02*r12)^3` form, expressed directly in terms
/// of the three pairwise distances via the law of cosines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxilrodTellerMutoPotential {
    c9_coefficient: f64,
}

impl AxilrodTellerMutoPotential {
    pub fn new(c9_coefficient: f64) -> Result<Self, PotentialError> {
        if c9_coefficient < 0.0 {
            return Err(PotentialError::NegativeC9Coefficient(c9_coefficient));
        }
        Ok(AxilrodTellerMutoPotential { c9_coefficient })
    }

    pub fn evaluate(&self, dist01: f64, dist02: f64, dist12: f64) -> f64 {
        let dist01_sq = dist01 * dist01;
        let dist02_sq = dist02 * dist02;
        let dist12_sq = dist12 * dist12;

        let cos1_numer = dist01_sq + dist02_sq - dist12_sq;
        let cos2_numer = dist01_sq + dist12_sq - dist02_sq;
        let cos3_numer = dist02_sq + dist12_sq - dist01_sq;

        let cos_denom = 8.0 * dist01_sq * dist12_sq * dist02_sq;
        let fterm = 3.0 * cos1_numer * cos2_numer * cos3_numer / cos_denom;

        let denom = dist01_sq * dist02_sq * dist12_sq + dist01 * dist02 * dist12;

        self.c9_coefficient * (1.0 + fterm) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_coefficient() {
        assert!(AxilrodTellerMutoPotential::new(-1.0).is_err());
    }

    #[test]
    fn equilateral_triangle_is_repulsive_for_positive_c9() {
        let pot = AxilrodTellerMutoPotential::new(1.0).unwrap();
        let e = pot.evaluate(3.0, 3.0, 3.0);
        assert!(e > 0.0);
    }
}

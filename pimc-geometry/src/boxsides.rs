use crate::error::GeometryError;
use crate::point::Point;

/// A rectangular periodic simulation cell with strictly positive side lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSides<const NDIM: usize> {
    sides: [f64; NDIM],
}

impl<const NDIM: usize> BoxSides<NDIM> {
    /// Builds a box from its side lengths, rejecting any non-positive side.
    pub fn new(sides: [f64; NDIM]) -> Result<Self, GeometryError> {
        for (axis, &side) in sides.iter().enumerate() {
            if side <= 0.0 {
                return Err(GeometryError::NonPositiveSide { axis, side });
            }
        }
        Ok(BoxSides { sides })
    }

    pub fn sides(&self) -> &[f64; NDIM] {
        &self.sides
    }

    /// The largest radius at which periodic pairwise distances remain unambiguous.
    pub fn box_cutoff_distance(&self) -> f64 {
        self.sides
            .iter()
            .cloned()
            .fold(f64::INFINITY, f64::min)
            / 2.0
    }

    pub fn box_cutoff_distance_squared(&self) -> f64 {
        let c = self.box_cutoff_distance();
        c * c
    }

    /// Whether `point` lies within `±sides[k]/2` of the origin on every axis.
    pub fn is_point_inside_box_around_origin(&self, point: &Point<NDIM>) -> bool {
        (0..NDIM).all(|k| point[k].abs() <= self.sides[k] / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_is_half_the_smallest_side() {
        let b = BoxSides::new([4.0, 6.0, 10.0]).unwrap();
        assert_eq!(b.box_cutoff_distance(), 2.0);
        assert_eq!(b.box_cutoff_distance_squared(), 4.0);
    }

    #[test]
    fn rejects_non_positive_sides() {
        assert!(BoxSides::new([4.0, 0.0, 10.0]).is_err());
        assert!(BoxSides::new([4.0, -1.0, 10.0]).is_err());
    }

    #[test]
    fn inside_box_check() {
        let b = BoxSides::new([2.0, 2.0]).unwrap();
        assert!(b.is_point_inside_box_around_origin(&Point::<2>::new([0.9, -0.9])));
        assert!(!b.is_point_inside_box_around_origin(&Point::<2>::new([1.1, 0.0])));
    }
}

use pimc_geometry::{distance, distance_periodic, distance_squared_periodic, shift_points_together, BoxSides, Point};

/// Adapts a distance-based pair potential to a pair of non-periodic points.
#[derive(Debug, Clone)]
pub struct TwoBodyPointPotential<P> {
    potential: P,
}

impl<P> TwoBodyPointPotential<P>
where
    P: Fn(f64) -> f64,
{
    pub fn new(potential: P) -> Self {
        TwoBodyPointPotential { potential }
    }

    pub fn evaluate<const NDIM: usize>(&self, p0: &Point<NDIM>, p1: &Point<NDIM>) -> f64 {
        (self.potential)(distance(p0, p1))
    }
}

/// Adapts a distance-based pair potential to a pair of points under periodic boundary
/// conditions, with a cheap `within_box_cutoff` rejection using the minimum-image cutoff.
#[derive(Debug, Clone)]
pub struct PeriodicTwoBodyPointPotential<P, const NDIM: usize> {
    potential: P,
    box_sides: BoxSides<NDIM>,
    cutoff_distance: f64,
}

impl<P, const NDIM: usize> PeriodicTwoBodyPointPotential<P, NDIM>
where
    P: Fn(f64) -> f64,
{
    pub fn new(potential: P, box_sides: BoxSides<NDIM>) -> Self {
        let cutoff_distance = box_sides.box_cutoff_distance();
        PeriodicTwoBodyPointPotential { potential, box_sides, cutoff_distance }
    }

    pub fn evaluate(&self, p0: &Point<NDIM>, p1: &Point<NDIM>) -> f64 {
        (self.potential)(distance_periodic(p0, p1, &self.box_sides))
    }

    pub fn within_box_cutoff(&self, p0: &Point<NDIM>, p1: &Point<NDIM>) -> f64 {
        let distance = distance_periodic(p0, p1, &self.box_sides);
        if distance < self.cutoff_distance {
            (self.potential)(distance)
        } else {
            0.0
        }
    }
}

/// Same as [`PeriodicTwoBodyPointPotential`] but for potentials keyed on squared distance.
#[derive(Debug, Clone)]
pub struct PeriodicTwoBodySquaredPointPotential<P, const NDIM: usize> {
    potential: P,
    box_sides: BoxSides<NDIM>,
    cutoff_distance_squared: f64,
}

impl<P, const NDIM: usize> PeriodicTwoBodySquaredPointPotential<P, NDIM>
where
    P: Fn(f64) -> f64,
{
    pub fn new(potential: P, box_sides: BoxSides<NDIM>) -> Self {
        let cutoff_distance_squared = box_sides.box_cutoff_distance_squared();
        PeriodicTwoBodySquaredPointPotential { potential, box_sides, cutoff_distance_squared }
    }

    pub fn evaluate(&self, p0: &Point<NDIM>, p1: &Point<NDIM>) -> f64 {
        (self.potential)(distance_squared_periodic(p0, p1, &self.box_sides))
    }

    pub fn within_box_cutoff(&self, p0: &Point<NDIM>, p1: &Point<NDIM>) -> f64 {
        let distance_squared = distance_squared_periodic(p0, p1, &self.box_sides);
        if distance_squared < self.cutoff_distance_squared {
            (self.potential)(distance_squared)
        } else {
            0.0
        }
    }
}

/// Adapts a triplet-distance potential to three non-periodic points.
#[derive(Debug, Clone)]
pub struct TripletDistancePotential<P> {
    potential: P,
}

impl<P> TripletDistancePotential<P>
where
    P: Fn(f64, f64, f64) -> f64,
{
    pub fn new(potential: P) -> Self {
        TripletDistancePotential { potential }
    }

    pub fn evaluate<const NDIM: usize>(
        &self,
        p0: &Point<NDIM>,
        p1: &Point<NDIM>,
        p2: &Point<NDIM>,
    ) -> f64 {
        (self.potential)(distance(p0, p1), distance(p0, p2), distance(p1, p2))
    }
}

/// Adapts a triplet-distance potential to three points under periodic boundary conditions.
///
/// `within_box_cutoff` centres the triple on `p0` and folds the remaining two points into
/// minimum-image before measuring, rejecting the triple if any resulting side exceeds the
/// cutoff. This is the corrected form of the Attard minimum-image convention for triplets: the
/// upstream implementation left this branch commented out as "wrong" and never returned a value.
#[derive(Debug, Clone)]
pub struct PeriodicTripletDistancePotential<P, const NDIM: usize> {
    potential: P,
    box_sides: BoxSides<NDIM>,
    cutoff_distance: f64,
}

impl<P, const NDIM: usize> PeriodicTripletDistancePotential<P, NDIM>
where
    P: Fn(f64, f64, f64) -> f64,
{
    pub fn new(potential: P, box_sides: BoxSides<NDIM>) -> Self {
        let cutoff_distance = box_sides.box_cutoff_distance();
        PeriodicTripletDistancePotential { potential, box_sides, cutoff_distance }
    }

    pub fn evaluate(&self, p0: &Point<NDIM>, p1: &Point<NDIM>, p2: &Point<NDIM>) -> f64 {
        (self.potential)(distance(p0, p1), distance(p0, p2), distance(p1, p2))
    }

    pub fn within_box_cutoff(&self, p0: &Point<NDIM>, p1: &Point<NDIM>, p2: &Point<NDIM>) -> f64 {
        let points = [*p0, *p1, *p2];
        let points = shift_points_together(0, &self.box_sides, &points);

        let dist01 = points[1].norm();
        let dist02 = points[2].norm();
        let dist12 = distance(&points[1], &points[2]);

        if dist01 < self.cutoff_distance && dist02 < self.cutoff_distance && dist12 < self.cutoff_distance {
            (self.potential)(dist01, dist02, dist12)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_body_point_potential_applies_plain_distance() {
        let pot = TwoBodyPointPotential::new(|r: f64| r * 2.0);
        let p0 = Point::<2>::new([0.0, 0.0]);
        let p1 = Point::<2>::new([3.0, 4.0]);
        assert_eq!(pot.evaluate(&p0, &p1), 10.0);
    }

    #[test]
    fn periodic_pair_within_box_cutoff_rejects_far_pairs() {
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let pot = PeriodicTwoBodyPointPotential::new(|r: f64| r, box_sides);
        let p0 = Point::<2>::new([0.0, 0.0]);
        let far = Point::<2>::new([4.99, 0.0]);
        assert!(pot.within_box_cutoff(&p0, &far) > 0.0);
    }

    #[test]
    fn periodic_triplet_within_box_cutoff_rejects_when_any_side_too_long() {
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let pot = PeriodicTripletDistancePotential::new(|a, b, c| a + b + c, box_sides);
        let p0 = Point::<2>::new([0.0, 0.0]);
        let p1 = Point::<2>::new([1.0, 0.0]);
        let p2 = Point::<2>::new([4.99, 0.0]);
        assert!(pot.within_box_cutoff(&p0, &p1, &p2) > 0.0);
        let p3 = Point::<2>::new([4.999999, 0.0]);
        let far = Point::<2>::new([9.9, 0.0]);
        assert_eq!(pot.within_box_cutoff(&p0, &p3, &far), 0.0);
    }
}

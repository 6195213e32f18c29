use crate::boxsides::BoxSides;
use crate::point::Point;

/// Folds a single periodic separation component into `(-L/2, L/2]`.
///
/// `f64::round` already rounds half-integer inputs away from zero (not to even), so a
/// separation sitting exactly at `L/2` folds to `-L/2`'s mirror deterministically without the
/// epsilon nudge the reference implementation used to dodge round-half-to-even.
pub fn periodic_fold(separation: f64, side_length: f64) -> f64 {
    separation - side_length * (separation / side_length).round()
}

pub fn distance_squared<const NDIM: usize>(p: &Point<NDIM>, q: &Point<NDIM>) -> f64 {
    (0..NDIM).map(|k| (p[k] - q[k]).powi(2)).sum()
}

pub fn distance<const NDIM: usize>(p: &Point<NDIM>, q: &Point<NDIM>) -> f64 {
    distance_squared(p, q).sqrt()
}

pub fn distance_squared_periodic<const NDIM: usize>(
    p: &Point<NDIM>,
    q: &Point<NDIM>,
    box_sides: &BoxSides<NDIM>,
) -> f64 {
    (0..NDIM)
        .map(|k| periodic_fold(p[k] - q[k], box_sides.sides()[k]).powi(2))
        .sum()
}

pub fn distance_periodic<const NDIM: usize>(
    p: &Point<NDIM>,
    q: &Point<NDIM>,
    box_sides: &BoxSides<NDIM>,
) -> f64 {
    distance_squared_periodic(p, q, box_sides).sqrt()
}

/// Subtracts `points[i]` from every point and folds the result into `(-L/2, L/2]` per axis.
///
/// Used to centre a group of points (e.g. a three- or four-body cluster) before evaluating a
/// potential that expects its arguments already co-located, so plain Euclidean distances between
/// the shifted points equal the true minimum-image distances.
pub fn shift_points_together<const NDIM: usize>(
    i: usize,
    box_sides: &BoxSides<NDIM>,
    points: &[Point<NDIM>],
) -> Vec<Point<NDIM>> {
    let origin = points[i];
    points
        .iter()
        .map(|p| {
            let mut shifted = Point::<NDIM>::origin();
            for k in 0..NDIM {
                shifted[k] = periodic_fold(p[k] - origin[k], box_sides.sides()[k]);
            }
            shifted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_integer_separation_rounds_away_from_zero() {
        // separation exactly at L/2 must fold consistently, not depend on round-to-even parity
        assert_eq!(periodic_fold(5.0, 10.0), -5.0);
        assert_eq!(periodic_fold(-5.0, 10.0), 5.0);
        assert_eq!(periodic_fold(15.0, 10.0), -5.0);
    }

    #[test]
    fn periodic_distance_is_shift_invariant() {
        let b = BoxSides::new([10.0, 10.0, 10.0]).unwrap();
        let p = Point::<3>::new([1.0, 2.0, 3.0]);
        let q = Point::<3>::new([9.5, 1.0, -4.0]);
        let base = distance_squared_periodic(&p, &q, &b);
        for shift in [-20.0, -10.0, 10.0, 30.0] {
            let q_shifted = Point::<3>::new([q[0] + shift, q[1] + shift, q[2] + shift]);
            let shifted = distance_squared_periodic(&p, &q_shifted, &b);
            assert!((base - shifted).abs() < 1e-10);
        }
    }

    #[test]
    fn box_cutoff_matches_definition() {
        let b = BoxSides::new([4.0, 6.0]).unwrap();
        assert_eq!(b.box_cutoff_distance(), 2.0);
    }

    #[test]
    fn shift_points_together_centres_on_reference() {
        let b = BoxSides::new([1.0, 1.0]).unwrap();
        let points = vec![
            Point::<2>::new([-0.1, 0.0]),
            Point::<2>::new([0.1, 0.0]),
            Point::<2>::new([0.0, 0.1]),
        ];
        let shifted = shift_points_together(0, &b, &points);
        assert_eq!(shifted[0], Point::<2>::origin());
        assert!((distance(&shifted[0], &shifted[1]) - 0.2).abs() < 1e-12);
        assert!((distance(&shifted[0], &shifted[2]) - 0.02f64.sqrt()).abs() < 1e-12);
        assert!((distance(&shifted[1], &shifted[2]) - 0.02f64.sqrt()).abs() < 1e-12);
    }
}

use crate::adjacency::AdjacencyMatrix;
use crate::worldlines::Worldlines;
use pimc_geometry::{distance_squared_periodic, BoxSides};

/// Rebuilds `adjacency` from the particles' current centroids.
///
/// Clears every row, then for each unordered pair `(i, j)` whose periodic centroid distance is
/// within `cutoff`, records `j` in `i`'s row and `i` in `j`'s row. This is the only globally
/// synchronizing step inside a simulation block: every interaction handler shares this refresh
/// protocol, just with its own cutoff.
pub fn refresh_centroid_adjacency<const NDIM: usize>(
    worldlines: &Worldlines<NDIM>,
    box_sides: &BoxSides<NDIM>,
    adjacency: &mut AdjacencyMatrix,
    cutoff: f64,
) {
    let n_particles = worldlines.n_particles();
    let centroids: Vec<_> = (0..n_particles).map(|i| worldlines.centroid(i)).collect();

    adjacency.clear_all();

    let cutoff_sq = cutoff * cutoff;
    for i in 0..n_particles.saturating_sub(1) {
        for j in (i + 1)..n_particles {
            let dist_sq = distance_squared_periodic(&centroids[i], &centroids[j], box_sides);
            if dist_sq <= cutoff_sq {
                adjacency
                    .add_symmetric(i, j)
                    .expect("adjacency row capacity equals particle count");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_geometry::Point;

    #[test]
    fn refresh_matches_brute_force_oracle() {
        let positions = vec![
            Point::<2>::new([0.0, 0.0]),
            Point::<2>::new([1.0, 0.0]),
            Point::<2>::new([0.0, 1.0]),
            Point::<2>::new([5.0, 5.0]),
        ];
        let worldlines = Worldlines::<2>::from_initial_positions(1, positions.clone()).unwrap();
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let mut adjacency = AdjacencyMatrix::new(4);
        refresh_centroid_adjacency(&worldlines, &box_sides, &mut adjacency, 1.5);

        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    continue;
                }
                let dist_sq = distance_squared_periodic(&positions[i], &positions[j], &box_sides);
                let expect_neighbour = dist_sq <= 1.5 * 1.5;
                let is_neighbour = adjacency.neighbours(i).contains(&j);
                assert_eq!(is_neighbour, expect_neighbour, "pair ({i},{j})");
            }
        }
    }

    #[test]
    fn refresh_is_symmetric() {
        let positions = vec![
            Point::<2>::new([0.0, 0.0]),
            Point::<2>::new([0.2, 0.0]),
            Point::<2>::new([9.0, 9.0]),
        ];
        let worldlines = Worldlines::<2>::from_initial_positions(1, positions).unwrap();
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let mut adjacency = AdjacencyMatrix::new(3);
        refresh_centroid_adjacency(&worldlines, &box_sides, &mut adjacency, 3.0);

        for i in 0..3 {
            for &j in adjacency.neighbours(i) {
                assert!(adjacency.neighbours(j).contains(&i));
            }
        }
    }
}

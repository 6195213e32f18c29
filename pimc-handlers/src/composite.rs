use pimc_geometry::BoxSides;
use pimc_worldlines::{AdjacencyMatrix, Worldlines};

use crate::trait_worldline_energy::{RefreshableHandler, WorldlineEnergy};

/// Bundles the pair, triplet and (optional) quadruplet handlers configured for a run and returns
/// their sum. `adjacency_matrix(order)` exposes the underlying centroid adjacency matrix of the
/// handler responsible for interaction order `order` (2, 3 or 4), for diagnostics or for the
/// driver to inspect neighbour counts; handlers that don't cache one (the `Full*` family) report
/// `None`.
pub struct CompositeHandler<H2, H3, H4> {
    pair: H2,
    triplet: Option<H3>,
    quadruplet: Option<H4>,
}

impl<H2, H3, H4> CompositeHandler<H2, H3, H4> {
    pub fn new(pair: H2, triplet: Option<H3>, quadruplet: Option<H4>) -> Self {
        CompositeHandler { pair, triplet, quadruplet }
    }
}

impl<H2, H3, H4, const NDIM: usize> WorldlineEnergy<NDIM> for CompositeHandler<H2, H3, H4>
where
    H2: WorldlineEnergy<NDIM>,
    H3: WorldlineEnergy<NDIM>,
    H4: WorldlineEnergy<NDIM>,
{
    fn bead_energy(&self, worldlines: &Worldlines<NDIM>, i: usize, t: usize) -> f64 {
        let mut sum = self.pair.bead_energy(worldlines, i, t);
        if let Some(triplet) = &self.triplet {
            sum += triplet.bead_energy(worldlines, i, t);
        }
        if let Some(quadruplet) = &self.quadruplet {
            sum += quadruplet.bead_energy(worldlines, i, t);
        }
        sum
    }
}

impl<H2, H3, H4, const NDIM: usize> RefreshableHandler<NDIM> for CompositeHandler<H2, H3, H4>
where
    H2: RefreshableHandler<NDIM>,
    H3: RefreshableHandler<NDIM>,
    H4: RefreshableHandler<NDIM>,
{
    fn refresh(&mut self, worldlines: &Worldlines<NDIM>, box_sides: &BoxSides<NDIM>) {
        self.pair.refresh(worldlines, box_sides);
        if let Some(triplet) = &mut self.triplet {
            triplet.refresh(worldlines, box_sides);
        }
        if let Some(quadruplet) = &mut self.quadruplet {
            quadruplet.refresh(worldlines, box_sides);
        }
    }
}

impl<H2, H3, H4> CompositeHandler<H2, H3, H4> {
    /// The adjacency matrix backing interaction order `order` (2, 3 or 4), if that order is
    /// configured and caches one.
    pub fn adjacency_matrix<const NDIM: usize>(&self, order: u8) -> Option<&AdjacencyMatrix>
    where
        H2: RefreshableHandler<NDIM>,
        H3: RefreshableHandler<NDIM>,
        H4: RefreshableHandler<NDIM>,
    {
        match order {
            2 => self.pair.adjacency_matrix(),
            3 => self.triplet.as_ref().and_then(|h| h.adjacency_matrix()),
            4 => self.quadruplet.as_ref().and_then(|h| h.adjacency_matrix()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::full_pair::FullPairHandler;
    use pimc_potentials::PeriodicTwoBodyPointPotential;

    #[test]
    fn pair_only_composite_matches_pair_handler() {
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let pair = FullPairHandler::new(PeriodicTwoBodyPointPotential::new(|r: f64| r, box_sides));
        let composite: CompositeHandler<_, FullPairHandler<fn(f64) -> f64, 2>, FullPairHandler<fn(f64) -> f64, 2>> =
            CompositeHandler::new(pair, None, None);

        let positions = vec![
            pimc_geometry::Point::<2>::new([0.0, 0.0]),
            pimc_geometry::Point::<2>::new([1.0, 0.0]),
        ];
        let wl = Worldlines::<2>::from_initial_positions(1, positions).unwrap();
        assert!((composite.bead_energy(&wl, 0, 0) - 1.0).abs() < 1e-12);
    }
}

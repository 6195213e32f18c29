use std::any::Any;
use std::marker::PhantomData;

use pimc_geometry::BoxSides;
use pimc_handlers::{RefreshableHandler, WorldlineEnergy};
use pimc_sim::Observer;
use pimc_worldlines::Worldlines;

/// Sums an interaction handler's energy over every timeslice of every particle for one block.
///
/// Handlers report `bead_energy(i, t)` as the energy of particle `i` at timeslice `t` due to
/// every *other* particle sharing that timeslice; summing over all `i` therefore counts every
/// cluster of `order` particles exactly `order` times (once per member acting as the summed-over
/// particle), so the raw handler total is divided by `order` to recover the physical total.
pub struct PotentialEnergyEstimator<H, const NDIM: usize> {
    handler: H,
    order: f64,
    name: String,
    values: Vec<f64>,
    _marker: PhantomData<[(); NDIM]>,
}

impl<H, const NDIM: usize> PotentialEnergyEstimator<H, NDIM>
where
    H: WorldlineEnergy<NDIM>,
{
    pub fn new(handler: H, order: usize, name: impl Into<String>) -> Self {
        PotentialEnergyEstimator {
            handler,
            order: order as f64,
            name: name.into(),
            values: Vec::new(),
            _marker: PhantomData,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn drain_values(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.values)
    }

    /// Rebuilds this estimator's own copy of the handler's adjacency, independently of whatever
    /// handler instance the move performers use. Called once per block alongside the rest of the
    /// driver's refresh protocol.
    pub fn refresh(&mut self, worldlines: &Worldlines<NDIM>, box_sides: &BoxSides<NDIM>)
    where
        H: RefreshableHandler<NDIM>,
    {
        self.handler.refresh(worldlines, box_sides);
    }
}

impl<H, const NDIM: usize> Observer for PotentialEnergyEstimator<H, NDIM>
where
    H: WorldlineEnergy<NDIM>,
{
    type S = Worldlines<NDIM>;

    fn observe(&mut self, worldlines: &Worldlines<NDIM>) {
        let total = self.handler.total_energy(worldlines) / self.order;
        self.values.push(total);
    }

    fn flush(&mut self) {
        self.values.clear();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_geometry::{BoxSides, Point};
    use pimc_handlers::FullPairHandler;
    use pimc_potentials::PeriodicTwoBodyPointPotential;

    #[test]
    fn pair_order_divides_out_the_double_count() {
        let box_sides = BoxSides::<2>::new([50.0, 50.0]).unwrap();
        let handler = FullPairHandler::new(PeriodicTwoBodyPointPotential::new(|_: f64| 1.0, box_sides));
        let positions = vec![Point::<2>::new([0.0, 0.0]), Point::<2>::new([5.0, 5.0])];
        let wl = Worldlines::<2>::from_initial_positions(3, positions).unwrap();

        let mut est = PotentialEnergyEstimator::new(handler, 2, "pair");
        est.observe(&wl);
        // each of the 2 particles sees 1 neighbour at every one of the 3 timeslices: raw total = 6, /2 = 3
        assert_eq!(est.values()[0], 3.0);
    }
}

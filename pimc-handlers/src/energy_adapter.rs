use std::ops::Range;

use pimc_sim::Energy;
use pimc_worldlines::Worldlines;

use crate::trait_worldline_energy::WorldlineEnergy;

/// Adapts a [`WorldlineEnergy`] handler to [`pimc_sim::Energy`], so it can drive a generic
/// `pimc_montecarlo::Sampler` (whose `run_simulation` only knows about whole-particle and
/// whole-range energies, not individual beads).
pub struct HandlerEnergy<H> {
    handler: H,
    name: String,
}

impl<H> HandlerEnergy<H> {
    pub fn new(handler: H, name: impl Into<String>) -> Self {
        HandlerEnergy { handler, name: name.into() }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

impl<H, const NDIM: usize> Energy<Worldlines<NDIM>> for HandlerEnergy<H>
where
    H: WorldlineEnergy<NDIM>,
{
    fn energy(&self, system: &Worldlines<NDIM>) -> f64 {
        self.handler.total_energy(system)
    }

    fn energy_by_pos(&self, system: &Worldlines<NDIM>, pos: usize) -> f64 {
        self.handler.worldline_energy(system, pos)
    }

    fn energy_by_range(&self, system: &Worldlines<NDIM>, range: &Range<usize>) -> f64 {
        range.clone().map(|i| self.handler.worldline_energy(system, i)).sum()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::full_pair::FullPairHandler;
    use pimc_geometry::{BoxSides, Point};
    use pimc_potentials::PeriodicTwoBodyPointPotential;

    #[test]
    fn energy_by_pos_matches_worldline_energy() {
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let handler = FullPairHandler::new(PeriodicTwoBodyPointPotential::new(|r: f64| r, box_sides));
        let adapted = HandlerEnergy::new(handler, "pair");

        let positions = vec![Point::<2>::new([0.0, 0.0]), Point::<2>::new([1.0, 0.0])];
        let wl = Worldlines::<2>::from_initial_positions(2, positions).unwrap();
        assert_eq!(adapted.energy_by_pos(&wl, 0), 2.0);
        assert_eq!(adapted.name(), "pair");
    }
}

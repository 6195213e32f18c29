//! Two-, three- and four-body interaction potentials and their periodic point-potential wrappers.

mod axilrod_teller_muto;
mod bade_four_body;
mod error;
mod lennard_jones;
mod point_wrappers;
mod tabulated_pair;
mod three_body_parah2;

pub use axilrod_teller_muto::AxilrodTellerMutoPotential;
pub use bade_four_body::FourBodyDispersionPotential;
pub use error::PotentialError;
pub use lennard_jones::LennardJonesPotential;
pub use point_wrappers::{
    PeriodicTripletDistancePotential, PeriodicTwoBodyPointPotential,
    PeriodicTwoBodySquaredPointPotential, TripletDistancePotential, TwoBodyPointPotential,
};
pub use tabulated_pair::{FshPairPotential, LongRangeCheck};
pub use three_body_parah2::ThreeBodyParaH2Potential;

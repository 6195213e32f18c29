//! Energy and structural estimators for worldline configurations, each implementing
//! `pimc_sim::Observer` so the driver can collect them through a single `ObserversSet`.

mod centroid_distance_estimator;
mod error;
mod kinetic_estimator;
mod potential_estimator;
mod rdf_estimator;

pub use centroid_distance_estimator::CentroidDistanceEstimator;
pub use error::EstimatorError;
pub use kinetic_estimator::PrimitiveKineticEstimator;
pub use potential_estimator::PotentialEnergyEstimator;
pub use rdf_estimator::RadialDistributionEstimator;

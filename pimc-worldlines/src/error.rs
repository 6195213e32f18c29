use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldlineError {
    #[error("timeslice index {index} out of range, have {n_timeslices} timeslices")]
    TimesliceOutOfRange { index: usize, n_timeslices: usize },

    #[error("particle index {index} out of range, have {n_particles} particles")]
    ParticleOutOfRange { index: usize, n_particles: usize },

    #[error("snapshot has {found} beads, expected {expected}")]
    SnapshotSizeMismatch { found: usize, expected: usize },

    #[error("adjacency particle index {index} out of range for {n_particles} particles")]
    AdjacencyIndexOutOfRange { index: usize, n_particles: usize },

    #[error("particle {particle} already has {n_particles} neighbours recorded, its row is full")]
    AdjacencyRowFull { particle: usize, n_particles: usize },
}

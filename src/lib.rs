pub mod config;
pub mod geometry;
pub mod mcmc;
pub mod simulation;
pub mod spins;
pub mod statistics;

pub use config::{LatticeConfig, RunConfig};
pub use geometry::Lattice;
pub use simulation::{run, run_ensemble, EnsembleMember};
pub use spins::SpinSystem;
pub use statistics::{History, Snapshot};

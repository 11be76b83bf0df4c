pub mod metropolis;

pub use metropolis::{flip_delta, metropolis_step};

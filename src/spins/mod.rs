pub mod energy;

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use validator::Validate;

use crate::config::LatticeConfig;
use crate::geometry::Lattice;

/// One spin configuration plus the physical constants acting on it.
///
/// `field`, `coupling` and `temperature` are plain public fields so a front
/// end can adjust them between driver calls; the spin array itself is only
/// mutated through [`flip`](Self::flip), keeping every cell in {-1, +1}.
pub struct SpinSystem {
    pub lattice: Lattice,
    spins: Vec<i8>,
    /// External field B.
    pub field: f64,
    /// Nearest-neighbor coupling J.
    pub coupling: f64,
    /// Thermal energy scale kT.
    pub temperature: f64,
}

impl SpinSystem {
    /// Build a system from a validated configuration.
    ///
    /// Each cell is set to +1 with independent probability `p_up`, else -1.
    /// Identical seed and parameters always yield an identical initial array.
    pub fn new(config: &LatticeConfig) -> Result<Self, String> {
        config.validate().map_err(|e| format!("{e}"))?;

        let lattice = Lattice::new(config.n_dims, config.side);
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
            None => Xoshiro256StarStar::from_entropy(),
        };
        let spins = (0..lattice.n_spins)
            .map(|_| if rng.gen::<f64>() < config.p_up { 1i8 } else { -1i8 })
            .collect();

        Ok(Self {
            lattice,
            spins,
            field: config.field,
            coupling: config.coupling,
            temperature: config.temperature,
        })
    }

    /// Read-only view of the spin array, row-major.
    #[inline]
    pub fn spins(&self) -> &[i8] {
        &self.spins
    }

    #[inline]
    pub fn spin(&self, site: usize) -> i8 {
        self.spins[site]
    }

    /// Flip one spin in place. Flipping the same site twice restores the
    /// original configuration exactly.
    #[inline]
    pub fn flip(&mut self, site: usize) {
        self.spins[site] = -self.spins[site];
    }

    /// Occurrence count of each spin value present. Counts sum to `n_spins`.
    pub fn spin_counts(&self) -> HashMap<i8, usize> {
        let mut counts = HashMap::new();
        for &s in &self.spins {
            *counts.entry(s).or_insert(0) += 1;
        }
        counts
    }
}

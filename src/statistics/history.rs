use std::collections::HashMap;

use crate::spins::SpinSystem;

/// Per-iteration observable series, one entry per recorded iteration in
/// iteration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    pub energies: Vec<f64>,
    pub magnetizations: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            energies: Vec::with_capacity(n),
            magnetizations: Vec::with_capacity(n),
        }
    }

    /// Append one sample to both series.
    pub fn record_sample(&mut self, energy: f64, magnetization: f64) {
        self.energies.push(energy);
        self.magnetizations.push(magnetization);
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// The series as recorded plus spin counts taken from the current state.
    /// Read-only; the system is not touched.
    pub fn snapshot(&self, system: &SpinSystem) -> Snapshot {
        Snapshot {
            energies: self.energies.clone(),
            magnetizations: self.magnetizations.clone(),
            spin_counts: system.spin_counts(),
        }
    }
}

/// Point-in-time view of a simulation's observables.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub energies: Vec<f64>,
    pub magnetizations: Vec<f64>,
    pub spin_counts: HashMap<i8, usize>,
}

use validator::{Validate, ValidationError};

fn validate_lattice_config(cfg: &LatticeConfig) -> Result<(), ValidationError> {
    if cfg.n_dims < 1 || cfg.n_dims > 3 {
        return Err(ValidationError::new("n_dims must be between 1 and 3"));
    }
    if cfg.side < 1 {
        return Err(ValidationError::new("side must be >= 1"));
    }
    if !(0.0..=1.0).contains(&cfg.p_up) {
        return Err(ValidationError::new("p_up must be within [0, 1]"));
    }
    if !(cfg.temperature > 0.0) {
        return Err(ValidationError::new("temperature must be positive"));
    }
    Ok(())
}

/// Parameters for building a [`SpinSystem`](crate::SpinSystem).
///
/// `seed = None` means system entropy (non-reproducible runs).
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_lattice_config"))]
pub struct LatticeConfig {
    /// Number of spatial dimensions, 1 to 3.
    pub n_dims: usize,
    /// Extent along every dimension; total site count is `side^n_dims`.
    pub side: usize,
    /// Probability that a cell starts as +1.
    pub p_up: f64,
    pub seed: Option<u64>,
    /// External field B.
    pub field: f64,
    /// Nearest-neighbor coupling J.
    pub coupling: f64,
    /// Thermal energy scale kT.
    pub temperature: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            n_dims: 2,
            side: 20,
            p_up: 0.5,
            seed: None,
            field: 0.0,
            coupling: 1.0,
            temperature: 1.0,
        }
    }
}

/// Parameters for one call to [`run`](crate::run).
///
/// The seed drives both random streams of the driver (acceptance uniforms
/// and site coordinates); re-running requires a fresh seed from the caller.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub n_iters: usize,
    pub seed: Option<u64>,
    /// Record average energy and magnetization after every iteration.
    pub record: bool,
    /// Track the recorded energy incrementally instead of rescanning the
    /// whole lattice each iteration. Output-equivalent to the full scan.
    pub incremental_energy: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n_iters: 0,
            seed: None,
            record: true,
            incremental_energy: false,
        }
    }
}

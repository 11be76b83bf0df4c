use crate::spins::energy::local_energy;
use crate::spins::SpinSystem;

/// Energy change of flipping `site`, field included.
///
/// The site's contribution enters the Hamiltonian linearly in its spin, so
/// flipping negates it: `dE = -2 * E_local`.
#[inline]
pub fn flip_delta(system: &SpinSystem, site: usize) -> f64 {
    -2.0 * local_energy(system, site, true)
}

/// One Metropolis trial at `site` with `accept_draw` uniform over [0, 1).
///
/// The acceptance ratio `exp(-dE/kT)` saturates to `+inf` for strongly
/// favorable moves; `min` clamps it to probability 1. Accepts iff the
/// probability exceeds the draw, flipping the spin in place.
///
/// Returns whether the flip was applied.
pub fn metropolis_step(system: &mut SpinSystem, site: usize, accept_draw: f64) -> bool {
    assert!(
        system.temperature > 0.0,
        "temperature must be positive, got {}",
        system.temperature
    );

    let delta_e = flip_delta(system, site);
    let p_accept = (-delta_e / system.temperature).exp().min(1.0);
    let accept = p_accept > accept_draw;
    if accept {
        system.flip(site);
    }
    accept
}

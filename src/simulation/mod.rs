use std::sync::atomic::{AtomicBool, Ordering};

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rayon::prelude::*;

use crate::config::{LatticeConfig, RunConfig};
use crate::mcmc;
use crate::spins::{energy, SpinSystem};
use crate::statistics::History;

fn stream(seed: Option<u64>) -> Xoshiro256StarStar {
    match seed {
        Some(seed) => Xoshiro256StarStar::seed_from_u64(seed),
        None => Xoshiro256StarStar::from_entropy(),
    }
}

/// Run the Metropolis loop for `config.n_iters` single-spin trials.
///
/// Randomness comes from two streams seeded with the same value and drawn in
/// bulk before the loop: `n_iters` acceptance uniforms, then
/// `n_iters * n_dims` coordinate integers in `[0, side)`, consumed in
/// iteration order. Identical seeds reproduce the identical trial sequence
/// whether or not recording is enabled.
///
/// `interrupted` is checked once per iteration; a raised flag stops the run
/// after the current iteration and returns the history recorded so far.
/// `on_iter` is invoked after every completed iteration.
///
/// The returned history is empty when `config.record` is off; the mutated
/// system is the other observable output.
pub fn run(
    system: &mut SpinSystem,
    config: &RunConfig,
    interrupted: &AtomicBool,
    on_iter: &(dyn Fn() + Sync),
) -> Result<History, String> {
    if !(system.temperature > 0.0) {
        return Err(format!(
            "temperature must be positive, got {}",
            system.temperature
        ));
    }

    let n_dims = system.lattice.n_dims;
    let side = system.lattice.side;
    let n_spins = system.lattice.n_spins as f64;

    let mut accept_rng = stream(config.seed);
    let mut site_rng = stream(config.seed);
    let accept_draws: Vec<f64> = (0..config.n_iters).map(|_| accept_rng.gen()).collect();
    let site_draws: Vec<usize> = (0..config.n_iters * n_dims)
        .map(|_| site_rng.gen_range(0..side))
        .collect();

    let mut history = if config.record {
        History::with_capacity(config.n_iters)
    } else {
        History::new()
    };

    // Running total in the same double-counted scan semantics as
    // `average_energy`, updated by the exact flip delta on accepts.
    let mut running_total = if config.record && config.incremental_energy {
        Some(energy::average_energy(system) * n_spins)
    } else {
        None
    };

    let mut coords = vec![0usize; n_dims];
    for iter in 0..config.n_iters {
        if interrupted.load(Ordering::Relaxed) {
            break;
        }

        coords.copy_from_slice(&site_draws[iter * n_dims..(iter + 1) * n_dims]);
        let site = system.lattice.flatten(&coords);

        let delta = running_total
            .is_some()
            .then(|| energy::total_flip_delta(system, site));
        let accepted = mcmc::metropolis_step(system, site, accept_draws[iter]);

        if accepted {
            if let (Some(total), Some(delta)) = (running_total.as_mut(), delta) {
                *total += delta;
            }
        }

        if config.record {
            let avg_energy = match running_total {
                Some(total) => total / n_spins,
                None => energy::average_energy(system),
            };
            history.record_sample(avg_energy, energy::average_magnetization(system));
        }

        on_iter();
    }

    Ok(history)
}

/// Outcome of one member of a temperature ensemble.
pub struct EnsembleMember {
    pub temperature: f64,
    pub system: SpinSystem,
    pub history: History,
}

fn run_member(
    base: &LatticeConfig,
    run_config: &RunConfig,
    index: usize,
    temperature: f64,
    interrupted: &AtomicBool,
    on_iter: &(dyn Fn() + Sync),
) -> Result<EnsembleMember, String> {
    let config = LatticeConfig {
        temperature,
        seed: base.seed.map(|s| s + index as u64),
        ..base.clone()
    };
    let mut system = SpinSystem::new(&config)?;

    let run_config = RunConfig {
        seed: run_config.seed.map(|s| s + index as u64),
        ..run_config.clone()
    };
    let history = run(&mut system, &run_config, interrupted, on_iter)?;

    Ok(EnsembleMember {
        temperature,
        system,
        history,
    })
}

/// Run independent simulations over a temperature ladder in parallel.
///
/// Member `i` derives its lattice and run seeds as `seed + i`, so each chain
/// is reproducible on its own. Chains never share a lattice; only whole
/// simulations run concurrently. For a single temperature the call is made
/// directly, skipping rayon thread-pool overhead.
pub fn run_ensemble(
    base: &LatticeConfig,
    temperatures: &[f64],
    run_config: &RunConfig,
    interrupted: &AtomicBool,
    on_iter: &(dyn Fn() + Sync),
) -> Result<Vec<EnsembleMember>, String> {
    if let [temperature] = *temperatures {
        return Ok(vec![run_member(
            base,
            run_config,
            0,
            temperature,
            interrupted,
            on_iter,
        )?]);
    }

    temperatures
        .par_iter()
        .enumerate()
        .map(|(index, &temperature)| {
            run_member(base, run_config, index, temperature, interrupted, on_iter)
        })
        .collect()
}

use std::sync::atomic::AtomicBool;

use ising_mc::spins::energy;
use ising_mc::{run, LatticeConfig, RunConfig, SpinSystem};

fn evolve(lattice_seed: u64, run_seed: u64, n_iters: usize) -> (SpinSystem, ising_mc::History) {
    let config = LatticeConfig {
        seed: Some(lattice_seed),
        ..Default::default()
    };
    let mut system = SpinSystem::new(&config).unwrap();

    let run_config = RunConfig {
        n_iters,
        seed: Some(run_seed),
        ..Default::default()
    };
    let history = run(&mut system, &run_config, &AtomicBool::new(false), &|| {}).unwrap();
    (system, history)
}

#[test]
fn identical_seeds_reproduce_the_full_trajectory() {
    // The original driver scenario: 2D, side 20, p_up 0.5, B=0, J=1, kT=1,
    // 2^4 * side^2 iterations.
    let n_iters = 16 * 400;

    let (system_a, history_a) = evolve(0, 0, n_iters);
    let (system_b, history_b) = evolve(0, 0, n_iters);

    assert_eq!(system_a.spins(), system_b.spins());
    assert_eq!(history_a, history_b);
    assert_eq!(history_a.len(), n_iters);
}

#[test]
fn observables_stay_within_physical_bounds() {
    let (system, history) = evolve(1, 2, 1000);

    assert!(system.spins().iter().all(|&s| s == 1 || s == -1));
    assert!(history.magnetizations.iter().all(|&m| (-1.0..=1.0).contains(&m)));

    let snapshot = history.snapshot(&system);
    assert_eq!(
        snapshot.spin_counts.values().sum::<usize>(),
        system.lattice.n_spins
    );
    assert_eq!(
        snapshot.magnetizations.last().copied(),
        Some(energy::average_magnetization(&system))
    );
}

#[test]
fn different_seeds_diverge() {
    let (system_a, _) = evolve(0, 0, 500);
    let (system_b, _) = evolve(0, 99, 500);
    assert_ne!(system_a.spins(), system_b.spins());
}

use std::sync::atomic::AtomicBool;

use indicatif::{ProgressBar, ProgressStyle};
use ising_mc::spins::energy;
use ising_mc::{run, LatticeConfig, RunConfig, SpinSystem};

const K_ITERS: u32 = 4;

fn print_summary(label: &str, system: &SpinSystem) {
    println!("{label}");
    println!("  avg energy:        {:.4}", energy::average_energy(system));
    println!(
        "  avg magnetization: {:.4}",
        energy::average_magnetization(system)
    );
    let counts = system.spin_counts();
    println!(
        "  counts:            up {} / down {}",
        counts.get(&1).copied().unwrap_or(0),
        counts.get(&-1).copied().unwrap_or(0)
    );
}

fn main() {
    let config = LatticeConfig {
        seed: Some(0),
        ..Default::default()
    };
    let mut system = SpinSystem::new(&config).unwrap();
    let n_iters = (1usize << K_ITERS) * system.lattice.n_spins;

    println!(
        "Lattice: {}^{}  |  B: {}  |  J: {}  |  kT: {}  |  Iterations: {}",
        config.side, config.n_dims, config.field, config.coupling, config.temperature, n_iters
    );
    print_summary("BEFORE", &system);

    let pb = ProgressBar::new(n_iters as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )
        .unwrap()
        .progress_chars("=> "),
    );
    pb.set_message("iterations");

    let run_config = RunConfig {
        n_iters,
        seed: Some(0),
        ..Default::default()
    };
    let interrupted = AtomicBool::new(false);
    let history = run(&mut system, &run_config, &interrupted, &|| pb.inc(1)).unwrap();
    pb.finish();

    print_summary("AFTER", &system);
    if let (Some(energy), Some(magnetization)) =
        (history.energies.last(), history.magnetizations.last())
    {
        println!(
            "  final sample:      E {:.4}, m {:.4}  ({} recorded)",
            energy,
            magnetization,
            history.len()
        );
    }
}

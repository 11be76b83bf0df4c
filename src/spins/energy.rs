use super::SpinSystem;

/// Energy of a single site: `-J * s_i * s_j` over both periodic neighbors of
/// every axis, plus `-B * s_i` once when `include_field` is set.
///
/// In a 2-site ring both directions land on the same neighbor; both terms
/// still count.
pub fn local_energy(system: &SpinSystem, site: usize, include_field: bool) -> f64 {
    let lattice = &system.lattice;
    let si = system.spin(site) as f64;

    let mut e = if include_field {
        -system.field * si
    } else {
        0.0
    };
    for dim in 0..lattice.n_dims {
        for forward in [true, false] {
            let sj = system.spin(lattice.neighbor(site, dim, forward)) as f64;
            e -= system.coupling * si * sj;
        }
    }
    e
}

/// Average energy per spin.
///
/// The field term enters the total once per site via the global spin sum;
/// the per-site scan then runs with the field excluded. Each bond is visited
/// from both of its endpoints, so bond energy is counted twice relative to
/// the textbook convention.
pub fn average_energy(system: &SpinSystem) -> f64 {
    let spin_sum: i64 = system.spins().iter().map(|&s| s as i64).sum();
    let mut total = -system.field * spin_sum as f64;
    for site in 0..system.lattice.n_spins {
        total += local_energy(system, site, false);
    }
    total / system.lattice.n_spins as f64
}

/// Mean spin value, in [-1, 1].
pub fn average_magnetization(system: &SpinSystem) -> f64 {
    let spin_sum: i64 = system.spins().iter().map(|&s| s as i64).sum();
    spin_sum as f64 / system.lattice.n_spins as f64
}

/// Change in the summed (per-site-scanned) total energy if `site` were
/// flipped now.
///
/// The site's field term appears once in the global sum and its bond terms
/// twice (once from each endpoint), hence `-2*E_field - 4*E_bond`. Requires
/// `side >= 2`; in a 1-site ring a site is its own neighbor and the bond
/// terms are flip-invariant.
pub fn total_flip_delta(system: &SpinSystem, site: usize) -> f64 {
    let field_term = -system.field * system.spin(site) as f64;
    let bond_term = local_energy(system, site, false);
    -2.0 * field_term - 4.0 * bond_term
}

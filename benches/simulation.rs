extern crate orrery;

#[path = "../tests/common/mod.rs"]
#[allow(dead_code)]
mod common;

#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use orrery::constants::DAY;
use orrery::{Gravity, Integrator, Silent, TrajectoryDriver, VelocityVerlet};

fn criterion_benchmark_gravity(c: &mut Criterion) {
    let gravity = Gravity::new();
    let mut group = c.benchmark_group("gravity_forces");
    for n_particles in [2, 9, 27].iter() {
        let ensemble = common::bodies::cube_subset(*n_particles);
        group.bench_with_input(BenchmarkId::from_parameter(n_particles), &ensemble, |b, ensemble| {
            b.iter(|| gravity.forces(&ensemble.masses, &ensemble.positions))
        });
    }
    group.finish();
}

fn criterion_benchmark_integrator(c: &mut Criterion) {
    let cube = common::bodies::uniform_cube();
    let integrator = VelocityVerlet::new();
    c.bench_function("velocity_verlet_advance", |b| b.iter(|| integrator.advance(&cube.masses, &cube.positions, &cube.velocities, DAY)));

    let earth_sun = common::bodies::earth_sun();
    let driver = TrajectoryDriver::new();
    c.bench_function("earth_sun_one_year", |b| b.iter(|| driver.run_ensemble(&earth_sun, 365.*DAY, DAY, &mut Silent)));
}

criterion_group!(benches, criterion_benchmark_gravity, criterion_benchmark_integrator);
criterion_main!(benches);

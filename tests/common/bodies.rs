use orrery::constants::{AU, M_EARTH, M_SUN};
use orrery::{Axes, Ensemble};

/// Sun and Earth in the plane z=0, positions in meters and velocities in m/s.
pub fn earth_sun() -> Ensemble {
    let masses = vec![M_SUN, M_EARTH];
    let positions = vec![Axes::new(-3.0e-6*AU, 0., 0.), Axes::new(0.999997*AU, 0., 0.)];
    let velocities = vec![Axes::new(0., -8.94e-2, 0.), Axes::new(0., 2.98e4, 0.)];
    Ensemble::new(masses, positions, velocities).unwrap()
}

/// Two masses on a circular orbit around their barycenter.
pub fn circular_binary(mass_a: f64, mass_b: f64, separation: f64) -> Ensemble {
    let total_mass = mass_a + mass_b;
    let relative_velocity = (orrery::constants::G_SI * total_mass / separation).sqrt();
    let masses = vec![mass_a, mass_b];
    let positions = vec![
        Axes::new(-separation * mass_b / total_mass, 0., 0.),
        Axes::new(separation * mass_a / total_mass, 0., 0.),
    ];
    let velocities = vec![
        Axes::new(0., -relative_velocity * mass_b / total_mass, 0.),
        Axes::new(0., relative_velocity * mass_a / total_mass, 0.),
    ];
    Ensemble::new(masses, positions, velocities).unwrap()
}

/// 3x3x3 grid of particles with slightly different masses and small random-looking velocities.
pub fn uniform_cube() -> Ensemble {
    let spacing = 1.0e11; // m
    let mut masses = Vec::new();
    let mut positions = Vec::new();
    let mut velocities = Vec::new();
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                let index = (9*i + 3*j + k) as f64;
                masses.push(1.0e28 * (1. + 0.1 * index));
                positions.push(Axes::new(i as f64 * spacing, j as f64 * spacing, k as f64 * spacing));
                velocities.push(Axes::new(10. * (index % 5.) - 20., 7. * (index % 3.) - 7., 3. * (index % 4.) - 4.5));
            }
        }
    }
    Ensemble::new(masses, positions, velocities).unwrap()
}

/// The first `n_particles` particles of the cube.
pub fn cube_subset(n_particles: usize) -> Ensemble {
    let cube = uniform_cube();
    Ensemble::new(cube.masses[..n_particles].to_vec(),
                  cube.positions[..n_particles].to_vec(),
                  cube.velocities[..n_particles].to_vec()).unwrap()
}

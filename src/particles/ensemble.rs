use super::super::error::{Error, Result};
use super::super::gravity::Gravity;
use super::{Axes, Particle};

/// Snapshot of the whole system: masses plus positions and velocities.
///
/// Index `i` refers to the same physical particle in the three vectors and
/// across every snapshot of a run. Quantities are S.I. (kg, m, m/s).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ensemble {
    pub masses: Vec<f64>,
    pub positions: Vec<Axes>,
    pub velocities: Vec<Axes>,
}

/// Verify that masses, positions and velocities describe the same non-empty set of particles.
pub fn check_shapes(masses: &[f64], positions: &[Axes], velocities: &[Axes]) -> Result<usize> {
    let n_particles = positions.len();
    if n_particles == 0 {
        return Err(Error::shape("particles (at least)", 1, 0));
    }
    if masses.len() != n_particles {
        return Err(Error::shape("masses", n_particles, masses.len()));
    }
    if velocities.len() != n_particles {
        return Err(Error::shape("velocities", n_particles, velocities.len()));
    }
    Ok(n_particles)
}

impl Ensemble {
    pub fn new(masses: Vec<f64>, positions: Vec<Axes>, velocities: Vec<Axes>) -> Result<Ensemble> {
        check_shapes(&masses, &positions, &velocities)?;
        for (i, mass) in masses.iter().enumerate() {
            if !(mass.is_finite() && *mass > 0.) {
                return Err(Error::InvalidParameter(format!("particle {} has a non-positive mass ({} kg)", i, mass)));
            }
        }
        Ok(Ensemble { masses, positions, velocities })
    }

    pub fn from_particles(particles: &[Particle]) -> Result<Ensemble> {
        let masses = particles.iter().map(|p| p.mass).collect();
        let positions = particles.iter().map(|p| p.position).collect();
        let velocities = particles.iter().map(|p| p.velocity).collect();
        Ensemble::new(masses, positions, velocities)
    }

    pub fn particles(&self) -> Vec<Particle> {
        self.masses.iter().zip(self.positions.iter()).zip(self.velocities.iter())
            .map(|((mass, position), velocity)| Particle::new(*mass, *position, *velocity))
            .collect()
    }

    pub fn n_particles(&self) -> usize {
        self.masses.len()
    }

    /// First pair of particles found at exactly the same position.
    ///
    /// The force law is singular for such a pair, so callers preparing a run
    /// use this to reject the initial conditions up front.
    pub fn check_coincident(&self) -> Result<()> {
        for (i, position_a) in self.positions.iter().enumerate() {
            for (j, position_b) in self.positions.iter().enumerate().skip(i+1) {
                if position_a == position_b {
                    return Err(Error::DegenerateConfiguration { first: i, second: j });
                }
            }
        }
        Ok(())
    }

    pub fn kinetic_energy(&self) -> f64 {
        let mut e_kin = 0.;
        for (mass, velocity) in self.masses.iter().zip(self.velocities.iter()) {
            e_kin += 0.5 * mass * velocity.norm_2();
        }
        e_kin
    }

    /// Newtonian potential energy (no softening).
    pub fn potential_energy(&self) -> f64 {
        self.potential_energy_with(&Gravity::new())
    }

    pub fn potential_energy_with(&self, gravity: &Gravity) -> f64 {
        gravity.potential_energy(&self.masses, &self.positions)
    }

    pub fn total_energy(&self) -> f64 {
        self.total_energy_with(&Gravity::new())
    }

    /// Kinetic plus potential energy, the latter from the same force law that drives the particles.
    pub fn total_energy_with(&self, gravity: &Gravity) -> f64 {
        self.kinetic_energy() + self.potential_energy_with(gravity)
    }

    pub fn total_momentum(&self) -> Axes {
        let mut momentum = Axes::zeros();
        for (mass, velocity) in self.masses.iter().zip(self.velocities.iter()) {
            momentum += *mass * *velocity;
        }
        momentum
    }

    /// Total angular momentum (L) with respect to the origin.
    pub fn total_angular_momentum(&self) -> Axes {
        let mut angular_momentum = Axes::zeros();
        for ((mass, position), velocity) in self.masses.iter().zip(self.positions.iter()).zip(self.velocities.iter()) {
            angular_momentum += *mass * position.cross(velocity);
        }
        angular_momentum
    }

    /// Center of mass position and velocity.
    pub fn center_of_mass(&self) -> (Axes, Axes) {
        let mut center_of_mass_position = Axes::zeros();
        let mut center_of_mass_velocity = Axes::zeros();
        let mut center_of_mass_mass = 0.;
        for ((mass, position), velocity) in self.masses.iter().zip(self.positions.iter()).zip(self.velocities.iter()) {
            center_of_mass_position += *mass * *position;
            center_of_mass_velocity += *mass * *velocity;
            center_of_mass_mass += mass;
        }
        if center_of_mass_mass > 0. {
            center_of_mass_position = center_of_mass_position / center_of_mass_mass;
            center_of_mass_velocity = center_of_mass_velocity / center_of_mass_mass;
        }
        (center_of_mass_position, center_of_mass_velocity)
    }

    /// Same particles seen from the center of mass frame (barycentric).
    pub fn to_barycentric(&self) -> Ensemble {
        let (center_of_mass_position, center_of_mass_velocity) = self.center_of_mass();
        Ensemble {
            masses: self.masses.clone(),
            positions: self.positions.iter().map(|p| *p - center_of_mass_position).collect(),
            velocities: self.velocities.iter().map(|v| *v - center_of_mass_velocity).collect(),
        }
    }
}

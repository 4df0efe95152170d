use super::constants::G_SI;
use super::error::{Error, Result};
use super::particles::Axes;

/// Direct all-pairs Newtonian gravity.
///
/// The net force on particle `i` is
///
/// ```text
/// F[i] = G * m[i] * sum_{j != i} m[j] * (r[j] - r[i]) / |r[j] - r[i]|^3
/// ```
///
/// Every unordered pair is visited once and its contribution is added to one
/// particle and subtracted from the other, so the pairwise forces are exactly
/// antisymmetric and the internal forces sum to zero.
///
/// Two particles at the same position have no defined force between them. With
/// the default (zero) softening the result for such a pair is not finite and
/// it propagates into the rest of the simulation; the configuration is
/// considered invalid input (see `Ensemble::check_coincident`).
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gravity {
    pub g: f64,
    pub softening: f64, // m
}

impl Default for Gravity {
    fn default() -> Gravity {
        Gravity::new()
    }
}

impl Gravity {
    pub fn new() -> Gravity {
        Gravity { g: G_SI, softening: 0. }
    }

    /// Plummer softening: pair distances become `sqrt(|d|^2 + softening^2)`.
    pub fn with_softening(softening: f64) -> Gravity {
        Gravity { g: G_SI, softening }
    }

    /// Net gravitational force (N) on every particle.
    pub fn forces(&self, masses: &[f64], positions: &[Axes]) -> Result<Vec<Axes>> {
        let n_particles = positions.len();
        if n_particles == 0 {
            return Err(Error::shape("particles (at least)", 1, 0));
        }
        if masses.len() != n_particles {
            return Err(Error::shape("masses", n_particles, masses.len()));
        }

        let softening_2 = self.softening * self.softening;
        let mut forces = vec![Axes::zeros(); n_particles];
        for (i, (position_a, mass_a)) in positions.iter().zip(masses.iter()).enumerate() {
            if let Some((force_a, forces_b)) = forces[i..].split_first_mut() {
                for ((force_b, position_b), mass_b) in forces_b.iter_mut()
                                                        .zip(positions[i+1..].iter())
                                                        .zip(masses[i+1..].iter()) {
                    // Points from a to b, hence attractive for a
                    let separation = *position_b - *position_a;
                    let distance_2 = separation.norm_2() + softening_2;
                    let distance = distance_2.sqrt();
                    let prefact = self.g * mass_a * mass_b / (distance_2 * distance);
                    let pair_force = separation * prefact;
                    *force_a += pair_force;
                    *force_b -= pair_force;
                }
            }
        }
        Ok(forces)
    }

    /// Gravitational potential energy (J) of the whole configuration.
    pub fn potential_energy(&self, masses: &[f64], positions: &[Axes]) -> f64 {
        let softening_2 = self.softening * self.softening;
        let mut e_pot = 0.;
        for (i, (position_a, mass_a)) in positions.iter().zip(masses.iter()).enumerate() {
            for (position_b, mass_b) in positions[i+1..].iter().zip(masses[i+1..].iter()) {
                let distance = ((*position_b - *position_a).norm_2() + softening_2).sqrt();
                e_pot -= self.g * mass_a * mass_b / distance;
            }
        }
        e_pot
    }
}

/// Force law used by the integrators.
pub trait ForceModel {
    fn forces(&self, masses: &[f64], positions: &[Axes]) -> Result<Vec<Axes>>;

    /// Force divided by the particle's own mass (m/s^2).
    fn accelerations(&self, masses: &[f64], positions: &[Axes]) -> Result<Vec<Axes>> {
        let forces = self.forces(masses, positions)?;
        Ok(forces.into_iter().zip(masses.iter()).map(|(force, mass)| force / *mass).collect())
    }
}

impl ForceModel for Gravity {
    fn forces(&self, masses: &[f64], positions: &[Axes]) -> Result<Vec<Axes>> {
        Gravity::forces(self, masses, positions)
    }
}

/// Net force on every particle with the S.I. gravitational constant and no softening.
pub fn calculate_forces(masses: &[f64], positions: &[Axes]) -> Result<Vec<Axes>> {
    Gravity::new().forces(masses, positions)
}

use super::Integrator;
use super::super::error::Result;
use super::super::gravity::{ForceModel, Gravity};
use super::super::particles::Axes;
use super::super::particles::ensemble::check_shapes;

/// Velocity-Verlet is a second order symplectic integrator (kick-drift-kick
/// leapfrog written in synchronized form).
///
/// Positions are advanced with the acceleration at the start of the step and
/// velocities with the average of the accelerations at both ends:
///
/// ```text
/// a0 = F(x) / m
/// x' = x + v*dt + 0.5*a0*dt^2
/// a1 = F(x') / m
/// v' = v + 0.5*(a0 + a1)*dt
/// ```
///
/// The energy error oscillates instead of drifting. Each step costs exactly
/// two force evaluations.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct VelocityVerlet<F = Gravity> {
    pub force_model: F,
}

impl VelocityVerlet<Gravity> {
    pub fn new() -> VelocityVerlet<Gravity> {
        VelocityVerlet { force_model: Gravity::new() }
    }
}

impl<F: ForceModel> VelocityVerlet<F> {
    pub fn with_force_model(force_model: F) -> VelocityVerlet<F> {
        VelocityVerlet { force_model }
    }
}

impl<F: ForceModel> Integrator for VelocityVerlet<F> {
    fn advance(&self, masses: &[f64], positions: &[Axes], velocities: &[Axes], time_step: f64) -> Result<(Vec<Axes>, Vec<Axes>)> {
        check_shapes(masses, positions, velocities)?;

        let starting_accelerations = self.force_model.accelerations(masses, positions)?;

        let ending_positions: Vec<Axes> = positions.iter()
                                            .zip(velocities.iter())
                                            .zip(starting_accelerations.iter())
                                            .map(|((position, velocity), acceleration)| {
                                                let nudge = *velocity * time_step + *acceleration * 0.5 * (time_step * time_step);
                                                *position + nudge
                                            }).collect();

        let ending_accelerations = self.force_model.accelerations(masses, &ending_positions)?;

        let ending_velocities: Vec<Axes> = velocities.iter()
                                            .zip(starting_accelerations.iter())
                                            .zip(ending_accelerations.iter())
                                            .map(|((velocity, starting_acceleration), ending_acceleration)| {
                                                *velocity + (*ending_acceleration + *starting_acceleration) * 0.5 * time_step
                                            }).collect();

        Ok((ending_positions, ending_velocities))
    }
}

/// One velocity-Verlet step with S.I. Newtonian gravity.
pub fn advance(masses: &[f64], positions: &[Axes], velocities: &[Axes], time_step: f64) -> Result<(Vec<Axes>, Vec<Axes>)> {
    VelocityVerlet::new().advance(masses, positions, velocities, time_step)
}

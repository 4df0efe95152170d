mod verlet;
pub mod trajectory;
pub mod output;

pub use self::verlet::*;
pub use self::trajectory::{Trajectory, TrajectoryDriver, Progress, Silent};

use super::error::Result;
use super::particles::{Axes, Ensemble};


/// A fixed time step integrator: a pure map from one snapshot to the next.
///
/// The caller owns both the input and the output snapshot, nothing is kept
/// between calls.
pub trait Integrator {
    fn advance(&self, masses: &[f64], positions: &[Axes], velocities: &[Axes], time_step: f64) -> Result<(Vec<Axes>, Vec<Axes>)>;

    fn advance_ensemble(&self, ensemble: &Ensemble, time_step: f64) -> Result<Ensemble> {
        let (positions, velocities) = self.advance(&ensemble.masses, &ensemble.positions, &ensemble.velocities, time_step)?;
        Ok(Ensemble { masses: ensemble.masses.clone(), positions, velocities })
    }
}

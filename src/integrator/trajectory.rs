use ndarray::Array3;
use super::{Integrator, VelocityVerlet};
use super::super::error::{Error, Result};
use super::super::logging::ConsoleProgress;
use super::super::particles::{Axes, Ensemble};
use super::super::gravity::Gravity;
use super::super::particles::ensemble::check_shapes;

const N_AXES : usize = 3;

/// Observer notified once per recorded time step.
///
/// `step` grows monotonically from 0 to `last_step` (both included).
pub trait Progress {
    fn on_step(&mut self, step: usize, last_step: usize);
}

/// Progress observer that ignores every notification.
#[derive(Debug, Copy, Clone, Default)]
pub struct Silent;

impl Progress for Silent {
    fn on_step(&mut self, _step: usize, _last_step: usize) {}
}

impl<F: FnMut(usize, usize)> Progress for F {
    fn on_step(&mut self, step: usize, last_step: usize) {
        self(step, last_step)
    }
}

impl Progress for ConsoleProgress {
    fn on_step(&mut self, step: usize, last_step: usize) {
        self.report(step, last_step);
    }
}

/// Full history of a run.
///
/// `positions` and `velocities` are indexed by (particle, spatial axis, time
/// step); `times[k]` is the time in seconds of step `k`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trajectory {
    pub masses: Vec<f64>,
    pub times: Vec<f64>,
    pub positions: Array3<f64>,
    pub velocities: Array3<f64>,
}

impl Trajectory {
    fn allocate(masses: &[f64], n_steps: usize) -> Result<Trajectory> {
        let n_particles = masses.len();
        let fits_in_memory = n_particles.checked_mul(N_AXES)
                                .and_then(|n| n.checked_mul(n_steps))
                                .and_then(|n| n.checked_mul(std::mem::size_of::<f64>()))
                                .map_or(false, |n_bytes| n_bytes <= isize::MAX as usize);
        if !fits_in_memory {
            return Err(Error::InvalidParameter(format!("{} time steps for {} particles do not fit in memory", n_steps, n_particles)));
        }
        Ok(Trajectory {
            masses: masses.to_vec(),
            times: Vec::with_capacity(n_steps),
            positions: Array3::zeros((n_particles, N_AXES, n_steps)),
            velocities: Array3::zeros((n_particles, N_AXES, n_steps)),
        })
    }

    /// Verify that masses, times and both histories agree with each other,
    /// as needed for a trajectory read back from disk.
    pub fn check_shapes(&self) -> Result<()> {
        let n_particles = self.n_particles();
        let n_steps = self.n_steps();
        if n_particles == 0 {
            return Err(Error::shape("particles (at least)", 1, 0));
        }
        if n_steps == 0 {
            return Err(Error::shape("time steps (at least)", 1, 0));
        }
        for history in [&self.positions, &self.velocities].iter() {
            let (rows, axes, steps) = history.dim();
            if rows != n_particles {
                return Err(Error::shape("particle rows", n_particles, rows));
            }
            if axes != N_AXES {
                return Err(Error::shape("spatial axes", N_AXES, axes));
            }
            if steps != n_steps {
                return Err(Error::shape("recorded steps", n_steps, steps));
            }
        }
        Ok(())
    }

    fn record(&mut self, step: usize, current_time: f64, positions: &[Axes], velocities: &[Axes]) {
        self.times.push(current_time);
        for (i, (position, velocity)) in positions.iter().zip(velocities.iter()).enumerate() {
            for axis in 0..N_AXES {
                self.positions[[i, axis, step]] = position.component(axis);
                self.velocities[[i, axis, step]] = velocity.component(axis);
            }
        }
    }

    pub fn n_particles(&self) -> usize {
        self.masses.len()
    }

    pub fn n_steps(&self) -> usize {
        self.times.len()
    }

    pub fn position(&self, particle: usize, step: usize) -> Axes {
        Axes::new(self.positions[[particle, 0, step]], self.positions[[particle, 1, step]], self.positions[[particle, 2, step]])
    }

    pub fn velocity(&self, particle: usize, step: usize) -> Axes {
        Axes::new(self.velocities[[particle, 0, step]], self.velocities[[particle, 1, step]], self.velocities[[particle, 2, step]])
    }

    pub fn snapshot(&self, step: usize) -> Ensemble {
        let n_particles = self.n_particles();
        Ensemble {
            masses: self.masses.clone(),
            positions: (0..n_particles).map(|i| self.position(i, step)).collect(),
            velocities: (0..n_particles).map(|i| self.velocity(i, step)).collect(),
        }
    }

    pub fn final_snapshot(&self) -> Ensemble {
        self.snapshot(self.n_steps() - 1)
    }

    /// Total mechanical energy (J) at every recorded step, the potential
    /// term computed with `gravity` (use the one the run was made with).
    pub fn total_energies(&self, gravity: &Gravity) -> Vec<f64> {
        (0..self.n_steps()).map(|step| self.snapshot(step).total_energy_with(gravity)).collect()
    }

    /// Relative change of the total energy between the first and the last step.
    pub fn energy_drift(&self, gravity: &Gravity) -> f64 {
        let initial_energy = self.snapshot(0).total_energy_with(gravity);
        let final_energy = self.final_snapshot().total_energy_with(gravity);
        (final_energy - initial_energy) / initial_energy.abs()
    }
}

/// Number of recorded time points for a run: `floor(time_evolution/time_step) + 1`.
pub fn n_steps(time_evolution: f64, time_step: f64) -> Result<usize> {
    if !time_step.is_finite() || time_step == 0. {
        return Err(Error::InvalidParameter(format!("time step must be finite and non-zero ({} s)", time_step)));
    }
    if !time_evolution.is_finite() {
        return Err(Error::InvalidParameter(format!("time evolution must be finite ({} s)", time_evolution)));
    }
    let ratio = time_evolution / time_step;
    if ratio < 0. {
        return Err(Error::InvalidParameter(format!("time evolution ({} s) and time step ({} s) point in opposite directions", time_evolution, time_step)));
    }
    if !(ratio < usize::MAX as f64) {
        return Err(Error::InvalidParameter(format!("time evolution ({} s) needs too many steps of {} s", time_evolution, time_step)));
    }
    (ratio.floor() as usize).checked_add(1)
        .ok_or_else(|| Error::InvalidParameter(format!("time evolution ({} s) needs too many steps of {} s", time_evolution, time_step)))
}

/// Repeatedly applies an integrator to build a trajectory.
#[derive(Debug, Copy, Clone, Default)]
pub struct TrajectoryDriver<I = VelocityVerlet> {
    pub integrator: I,
}

impl TrajectoryDriver<VelocityVerlet> {
    pub fn new() -> TrajectoryDriver<VelocityVerlet> {
        TrajectoryDriver { integrator: VelocityVerlet::new() }
    }
}

impl<I: Integrator> TrajectoryDriver<I> {
    pub fn with_integrator(integrator: I) -> TrajectoryDriver<I> {
        TrajectoryDriver { integrator }
    }

    /// Evolve the initial snapshot from t=0 to `time_evolution` (inclusive)
    /// recording every step.
    ///
    /// Each step starts from the snapshot produced by the previous one. Any
    /// failure aborts the run, a partial trajectory is never returned.
    pub fn run<P: Progress>(&self, masses: &[f64], initial_positions: &[Axes], initial_velocities: &[Axes], time_evolution: f64, time_step: f64, progress: &mut P) -> Result<Trajectory> {
        check_shapes(masses, initial_positions, initial_velocities)?;
        let n_steps = n_steps(time_evolution, time_step)?;
        let last_step = n_steps - 1;

        let mut trajectory = Trajectory::allocate(masses, n_steps)?;
        trajectory.record(0, 0., initial_positions, initial_velocities);
        progress.on_step(0, last_step);

        let mut positions = initial_positions.to_vec();
        let mut velocities = initial_velocities.to_vec();
        for step in 1..n_steps {
            let (ending_positions, ending_velocities) = self.integrator.advance(masses, &positions, &velocities, time_step)?;
            positions = ending_positions;
            velocities = ending_velocities;
            trajectory.record(step, step as f64 * time_step, &positions, &velocities);
            progress.on_step(step, last_step);
        }
        Ok(trajectory)
    }

    pub fn run_ensemble<P: Progress>(&self, ensemble: &Ensemble, time_evolution: f64, time_step: f64, progress: &mut P) -> Result<Trajectory> {
        self.run(&ensemble.masses, &ensemble.positions, &ensemble.velocities, time_evolution, time_step, progress)
    }
}

/// Velocity-Verlet trajectory with S.I. Newtonian gravity and no progress output.
pub fn run(masses: &[f64], initial_positions: &[Axes], initial_velocities: &[Axes], time_evolution: f64, time_step: f64) -> Result<Trajectory> {
    TrajectoryDriver::new().run(masses, initial_positions, initial_velocities, time_evolution, time_step, &mut Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_of_steps_includes_both_ends() {
        assert_eq!(n_steps(10., 1.).unwrap(), 11);
        assert_eq!(n_steps(10., 3.).unwrap(), 4);
        assert_eq!(n_steps(0., 1.).unwrap(), 1);
        assert_eq!(n_steps(-10., -2.5).unwrap(), 5);
    }

    #[test]
    fn invalid_time_parameters() {
        assert!(matches!(n_steps(10., 0.), Err(Error::InvalidParameter(_))));
        assert!(matches!(n_steps(10., f64::NAN), Err(Error::InvalidParameter(_))));
        assert!(matches!(n_steps(f64::INFINITY, 1.), Err(Error::InvalidParameter(_))));
        assert!(matches!(n_steps(-10., 1.), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn overwhelming_step_counts_are_rejected() {
        // Both finite, but the ratio is not
        assert!(matches!(n_steps(1.0e300, 1.0e-300), Err(Error::InvalidParameter(_))));
        assert!(matches!(n_steps(1.0e30, 1.), Err(Error::InvalidParameter(_))));
        // Representable number of steps, but the history would not fit in memory
        assert_eq!(n_steps(1.0e18, 1.).unwrap(), 1_000_000_000_000_000_001);
        let result = run(&[1., 1.], &[Axes::zeros(), Axes::new(1., 0., 0.)], &[Axes::zeros(); 2], 1.0e18, 1.);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn inconsistent_histories_are_detected() {
        let trajectory = run(&[1., 1.], &[Axes::zeros(), Axes::new(1., 0., 0.)], &[Axes::zeros(); 2], 2., 1.).unwrap();
        assert!(trajectory.check_shapes().is_ok());

        let mut missing_time = trajectory.clone();
        missing_time.times.pop();
        assert!(matches!(missing_time.check_shapes(), Err(Error::ShapeMismatch { what: "recorded steps", expected: 2, found: 3 })));

        let mut no_times = trajectory.clone();
        no_times.times.clear();
        assert!(matches!(no_times.check_shapes(), Err(Error::ShapeMismatch { .. })));

        let mut extra_mass = trajectory;
        extra_mass.masses.push(1.);
        assert!(matches!(extra_mass.check_shapes(), Err(Error::ShapeMismatch { what: "particle rows", expected: 3, found: 2 })));
    }

    #[test]
    fn history_axes_are_particle_axis_step() {
        let trajectory = run(&[1., 1.], &[Axes::zeros(), Axes::new(1., 2., 3.)], &[Axes::zeros(); 2], 4., 2.).unwrap();
        assert_eq!(trajectory.positions.shape(), &[2, 3, 3]);
        assert_eq!(trajectory.velocities.shape(), &[2, 3, 3]);
        assert_eq!(trajectory.positions[[1, 2, 0]], 3.);
        assert_eq!(trajectory.times, vec![0., 2., 4.]);
    }

    #[test]
    fn closures_observe_every_step() {
        let mut seen = Vec::new();
        let mut observer = |step: usize, last_step: usize| seen.push((step, last_step));
        TrajectoryDriver::new().run(&[1.], &[Axes::zeros()], &[Axes::new(1., 0., 0.)], 3., 1., &mut observer).unwrap();
        assert_eq!(seen, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);
    }
}

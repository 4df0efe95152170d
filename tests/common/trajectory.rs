use assert_approx_eq::assert_approx_eq;
use orrery::{Axes, Trajectory};

pub fn assert_axes_approx_eq(a: Axes, b: Axes, precision: f64) {
    assert_approx_eq!(a.x, b.x, precision);
    assert_approx_eq!(a.y, b.y, precision);
    assert_approx_eq!(a.z, b.z, precision);
}

/// Every recorded position and velocity of both trajectories agree within `precision`.
pub fn assert_same_history(trajectory: &Trajectory, other: &Trajectory, precision: f64) {
    assert_eq!(trajectory.times.len(), other.times.len());
    assert_eq!(trajectory.positions.shape(), other.positions.shape());
    for (a, b) in trajectory.positions.iter().zip(other.positions.iter()) {
        assert!((a - b).abs() <= precision * a.abs().max(1.), "{} != {}", a, b);
    }
    for (a, b) in trajectory.velocities.iter().zip(other.velocities.iter()) {
        assert!((a - b).abs() <= precision * a.abs().max(1.), "{} != {}", a, b);
    }
}

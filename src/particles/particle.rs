use super::{Axes};

/// One row of initial conditions: a point mass with its position and velocity.
///
/// Units are whatever the producer declares (see `units::Units`), the
/// ensemble built from it is always in S.I.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Particle {
    pub mass: f64,
    pub position: Axes,
    pub velocity: Axes,
}

impl Particle {
    pub fn new(mass: f64, position: Axes, velocity: Axes) -> Particle {
        Particle { mass, position, velocity }
    }

    pub fn at_rest(mass: f64, position: Axes) -> Particle {
        Particle { mass, position, velocity: Axes::zeros() }
    }
}

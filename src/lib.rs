extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate bincode;
extern crate csv;
extern crate ndarray;
extern crate time;

#[macro_use]
pub mod logging;
pub mod constants;
pub mod error;
pub use self::error::{Error, Result};

mod particles;
pub use self::particles::Axes;
pub use self::particles::Particle;
pub use self::particles::Ensemble;

pub mod gravity;
pub use self::gravity::{Gravity, ForceModel, calculate_forces};

mod integrator;
pub use self::integrator::*;

pub mod units;
pub mod initial_conditions;
pub mod case;
pub use self::case::Case;


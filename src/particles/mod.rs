mod particle;
mod axes;
pub mod ensemble;

pub use self::particle::Particle;
pub use self::ensemble::Ensemble;
pub use self::axes::Axes;

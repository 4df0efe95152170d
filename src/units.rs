use super::constants::{AU, DAY, KM, YEAR};
use super::error::Result;
use super::particles::{Axes, Ensemble, Particle};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum LengthUnit {
    Meter,
    Kilometer,
    AstronomicalUnit,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum VelocityUnit {
    MeterPerSecond,
    KilometerPerSecond,
    AstronomicalUnitPerDay,
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub enum TimeUnit {
    Second,
    Day,
    Year,
}

impl LengthUnit {
    /// Size of one unit in meters.
    pub fn in_si(&self) -> f64 {
        match self {
            LengthUnit::Meter => 1.,
            LengthUnit::Kilometer => KM,
            LengthUnit::AstronomicalUnit => AU,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::AstronomicalUnit => "AU",
        }
    }
}

impl VelocityUnit {
    /// Size of one unit in meters per second.
    pub fn in_si(&self) -> f64 {
        match self {
            VelocityUnit::MeterPerSecond => 1.,
            VelocityUnit::KilometerPerSecond => KM,
            VelocityUnit::AstronomicalUnitPerDay => AU/DAY,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::KilometerPerSecond => "km/s",
            VelocityUnit::AstronomicalUnitPerDay => "AU/day",
        }
    }
}

impl TimeUnit {
    /// Size of one unit in seconds.
    pub fn in_si(&self) -> f64 {
        match self {
            TimeUnit::Second => 1.,
            TimeUnit::Day => DAY,
            TimeUnit::Year => YEAR,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Day => "days",
            TimeUnit::Year => "years",
        }
    }
}

/// Units in which a case describes its particles and times.
///
/// Masses are always kilograms. Positions and velocities are converted
/// independently, some data sets give positions in AU and velocities in m/s.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Units {
    pub length: LengthUnit,
    pub velocity: VelocityUnit,
    pub time: TimeUnit,
}

impl Default for Units {
    fn default() -> Units {
        Units::si()
    }
}

impl Units {
    pub fn si() -> Units {
        Units { length: LengthUnit::Meter, velocity: VelocityUnit::MeterPerSecond, time: TimeUnit::Second }
    }

    pub fn position_to_si(&self, position: Axes) -> Axes {
        position * self.length.in_si()
    }

    pub fn position_from_si(&self, position: Axes) -> Axes {
        position / self.length.in_si()
    }

    pub fn velocity_to_si(&self, velocity: Axes) -> Axes {
        velocity * self.velocity.in_si()
    }

    pub fn velocity_from_si(&self, velocity: Axes) -> Axes {
        velocity / self.velocity.in_si()
    }

    pub fn time_to_si(&self, time: f64) -> f64 {
        time * self.time.in_si()
    }

    pub fn time_from_si(&self, time: f64) -> f64 {
        time / self.time.in_si()
    }

    /// S.I. ensemble from particles described in these units.
    pub fn ensemble_to_si(&self, particles: &[Particle]) -> Result<Ensemble> {
        let converted: Vec<Particle> = particles.iter()
                                        .map(|p| Particle::new(p.mass, self.position_to_si(p.position), self.velocity_to_si(p.velocity)))
                                        .collect();
        Ensemble::from_particles(&converted)
    }
}

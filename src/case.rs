use std::fs::File;
use std::io::{Read, BufReader};
use std::path::{Path, PathBuf};
use super::error::{Error, Result};
use super::gravity::Gravity;
use super::initial_conditions;
use super::particles::{Ensemble, Particle};
use super::units::Units;

/// Where the particles of a case come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum InitialConditions {
    /// Whitespace-delimited table, relative paths are resolved against the case file.
    File { path: PathBuf },
    Inline { particles: Vec<Particle> },
}

/// JSON description of a simulation.
///
/// `time_evolution` and `time_step` are expressed in `units.time`, particle
/// positions and velocities in `units.length` and `units.velocity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub time_evolution: f64,
    pub time_step: f64,
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub softening: f64, // m
    pub initial_conditions: InitialConditions,
    #[serde(skip)]
    base_directory: Option<PathBuf>,
}

impl Case {
    pub fn new(particles: Vec<Particle>, time_evolution: f64, time_step: f64, units: Units) -> Case {
        Case {
            time_evolution,
            time_step,
            units,
            softening: 0.,
            initial_conditions: InitialConditions::Inline { particles },
            base_directory: None,
        }
    }

    pub fn from_json(json_encoded: &str) -> Result<Case> {
        let case: Case = serde_json::from_str(json_encoded)?;
        case.validate()?;
        Ok(case)
    }

    pub fn load(case_path: &Path) -> Result<Case> {
        let mut json_encoded = String::new();
        BufReader::new(File::open(case_path)?).read_to_string(&mut json_encoded)?;
        let mut case = Case::from_json(&json_encoded)?;
        case.base_directory = case_path.parent().map(|p| p.to_path_buf());
        Ok(case)
    }

    fn validate(&self) -> Result<()> {
        if !(self.softening.is_finite() && self.softening >= 0.) {
            return Err(Error::InvalidParameter(format!("softening must be a non-negative length ({} m)", self.softening)));
        }
        // Same checks as the trajectory driver, but reported before any file is read
        super::integrator::trajectory::n_steps(self.time_evolution, self.time_step)?;
        Ok(())
    }

    /// Particles exactly as described by the case (case units).
    pub fn particles(&self) -> Result<Vec<Particle>> {
        match &self.initial_conditions {
            InitialConditions::Inline { particles } => Ok(particles.clone()),
            InitialConditions::File { path } => {
                let resolved_path = match &self.base_directory {
                    Some(base_directory) if path.is_relative() => base_directory.join(path),
                    _ => path.clone(),
                };
                initial_conditions::load(&resolved_path)
            },
        }
    }

    /// S.I. ensemble ready for the integrator.
    pub fn ensemble(&self) -> Result<Ensemble> {
        let particles = self.particles()?;
        self.units.ensemble_to_si(&particles)
    }

    pub fn gravity(&self) -> Gravity {
        Gravity::with_softening(self.softening)
    }

    pub fn time_evolution_seconds(&self) -> f64 {
        self.units.time_to_si(self.time_evolution)
    }

    pub fn time_step_seconds(&self) -> f64 {
        self.units.time_to_si(self.time_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::particles::Axes;
    use super::super::units::{LengthUnit, TimeUnit};

    #[test]
    fn inline_particles_with_units() {
        let json_encoded = r#"{
            "time_evolution": 1000.0,
            "time_step": 0.1,
            "units": { "length": "AstronomicalUnit", "time": "Day" },
            "initial_conditions": { "particles": [
                { "mass": 1.989e30, "position": {"x": -3e-6, "y": 0.0, "z": 0.0}, "velocity": {"x": 0.0, "y": -8.94e-2, "z": 0.0} },
                { "mass": 5.972e24, "position": {"x": 0.999997, "y": 0.0, "z": 0.0}, "velocity": {"x": 0.0, "y": 2.98e4, "z": 0.0} }
            ]}
        }"#;
        let case = Case::from_json(json_encoded).unwrap();
        assert_eq!(case.units.length, LengthUnit::AstronomicalUnit);
        assert_eq!(case.units.time, TimeUnit::Day);
        assert_eq!(case.softening, 0.);
        assert_eq!(case.time_evolution_seconds(), 1000. * 86400.);
        let ensemble = case.ensemble().unwrap();
        assert_eq!(ensemble.n_particles(), 2);
        assert_eq!(ensemble.positions[1], Axes::new(0.999997 * 1.496e11, 0., 0.));
        assert_eq!(ensemble.velocities[1], Axes::new(0., 2.98e4, 0.));
    }

    #[test]
    fn file_reference_is_parsed() {
        let case = Case::from_json(r#"{"time_evolution": 10, "time_step": 1, "initial_conditions": {"path": "Data/kepler16.txt"}}"#).unwrap();
        assert_eq!(case.initial_conditions, InitialConditions::File { path: PathBuf::from("Data/kepler16.txt") });
        assert_eq!(case.units, Units::si());
    }

    #[test]
    fn invalid_time_step_is_rejected_early() {
        let result = Case::from_json(r#"{"time_evolution": 10, "time_step": 0, "initial_conditions": {"particles": []}}"#);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn negative_softening_is_rejected() {
        let result = Case::from_json(r#"{"time_evolution": 10, "time_step": 1, "softening": -1, "initial_conditions": {"particles": []}}"#);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}

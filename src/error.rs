use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while preparing or running a simulation.
///
/// The numerical core only ever produces `ShapeMismatch` and
/// `InvalidParameter`; the remaining variants belong to the case loading and
/// output layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Masses, positions and velocities do not describe the same particles.
    #[error("shape mismatch: expected {expected} {what}, found {found}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Two particles share the same position, the pairwise force is singular there.
    #[error("degenerate configuration: particles {first} and {second} are at the same position")]
    DegenerateConfiguration { first: usize, second: usize },

    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

impl Error {
    pub(crate) fn shape(what: &'static str, expected: usize, found: usize) -> Error {
        Error::ShapeMismatch { what, expected, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_names_the_quantity() {
        let e = Error::shape("velocities", 3, 2);
        let msg = format!("{}", e);
        assert!(msg.contains("shape mismatch"));
        assert!(msg.contains("3 velocities"));
        assert!(msg.contains("found 2"));
    }

    #[test]
    fn degenerate_configuration_names_both_particles() {
        let e = Error::DegenerateConfiguration { first: 0, second: 4 };
        let msg = format!("{}", e);
        assert!(msg.contains("particles 0 and 4"));
    }
}

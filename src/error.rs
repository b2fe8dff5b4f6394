use std::{error::Error, fmt::Display};

/// Invalid input passed to one of the [crate::Spline] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Spline needs at least two control points.
    TooFewControlPoints { count: usize },
    /// Length of `name` sequence does not match number of values.
    LengthMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::TooFewControlPoints { count } => write!(
                f,
                "Spline must have at least 2 control points, {} given",
                count
            ),
            ConfigurationError::LengthMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "Length of values and {} don't match, {} != {}",
                name, expected, found
            ),
        }
    }
}

impl Error for ConfigurationError {}

/// Derivatives system could not be solved, elimination met a zero pivot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverError {
    pub boundary: &'static str,
    pub dimension: usize,
    pub row: usize,
}

impl Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Singular {} system for dimension {} at row {}",
            self.boundary, self.dimension, self.row
        )
    }
}

impl Error for SolverError {}

/// Error returned when [crate::Spline] can not be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplineError {
    Configuration(ConfigurationError),
    Solver(SolverError),
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::Configuration(error) => write!(f, "Error in Spline: {}", error),
            SplineError::Solver(error) => write!(f, "Error in Spline: {}", error),
        }
    }
}

impl Error for SplineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SplineError::Configuration(error) => Some(error),
            SplineError::Solver(error) => Some(error),
        }
    }
}

impl From<ConfigurationError> for SplineError {
    fn from(error: ConfigurationError) -> Self {
        SplineError::Configuration(error)
    }
}

impl From<SolverError> for SplineError {
    fn from(error: SolverError) -> Self {
        SplineError::Solver(error)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<EvolutionError> for GenericError {
    fn from(value: EvolutionError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

/// Specifies errors which can be raised while evolving a population of tours.
/// None of them is recoverable by retrying: they signal either a misconfigured search or a
/// broken tour invariant.
#[derive(Clone, Debug, PartialEq)]
pub enum EvolutionError {
    /// Algorithm parameters or input data are malformed.
    Configuration(String),
    /// A weight lookup was requested for an out of range city or for a city paired with itself.
    InvalidIndex {
        /// Source city.
        from: usize,
        /// Target city.
        to: usize,
    },
    /// A population is too small to select a donor tour.
    InsufficientPopulation(usize),
}

/// A type alias for result type with `EvolutionError`.
pub type EvolutionResult<T> = Result<T, EvolutionError>;

impl std::fmt::Display for EvolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::InvalidIndex { from, to } => write!(f, "invalid city index pair: ({from}, {to})"),
            Self::InsufficientPopulation(size) => {
                write!(f, "insufficient population: at least 2 tours are required, got {size}")
            }
        }
    }
}

impl std::error::Error for EvolutionError {}

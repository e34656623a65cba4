use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unable to parse '{0}' as a rpm version identifier")]
    ValidationFailure(String),

    #[error("unable to parse '{0}' as a rpm query line")]
    MalformedQueryLine(String),
}

impl Error {
    /// The input that was rejected
    pub fn input(&self) -> &str {
        match self {
            Error::ValidationFailure(input) | Error::MalformedQueryLine(input) => input,
        }
    }
}

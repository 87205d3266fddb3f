use std::fmt;

/// Errors returned by network construction, training, and inference.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A dataset (or one of its rows) is malformed.
    InvalidData(String),
    /// Hyperparameters are out of range, or the network is used before it is ready.
    InvalidConfig(String),
    /// A vector length does not match the layer it is fed into.
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn uninitialized(op: &str) -> Self {
        Error::InvalidConfig(format!(
            "{op} called before initialize(): the network has no neurons"
        ))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::InvalidShape(msg) => write!(f, "invalid shape: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidData(format!("json: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_error_kind() {
        let err = Error::InvalidShape("inputs len 3 does not match input_size 2".to_owned());
        assert_eq!(
            err.to_string(),
            "invalid shape: inputs len 3 does not match input_size 2"
        );
    }

    #[test]
    fn uninitialized_is_a_config_error() {
        assert!(matches!(
            Error::uninitialized("forward"),
            Error::InvalidConfig(msg) if msg.starts_with("forward")
        ));
    }
}

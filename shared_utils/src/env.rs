use thiserror::Error;

/// Errors produced while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum EnvError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    Missing(String),

    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value for {name}: {message}")]
    Invalid {
        /// The name of the offending environment variable.
        name: String,
        /// What was wrong with the value.
        message: String,
    },
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, EnvError> {
    std::env::var(name).map_err(|_| EnvError::Missing(name.to_string()))
}

/// Reads an optional environment variable and parses it, falling back to
/// `default` when the variable is unset.
///
/// A set-but-unparseable value is an [`EnvError::Invalid`], not a silent
/// fallback, so typos in deployment config fail loudly.
pub fn get_env_var_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, EnvError> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| EnvError::Invalid {
            name: name.to_string(),
            message: format!("cannot parse {raw:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_is_structured() {
        let err = get_env_var("SHARED_UTILS_TEST_DOES_NOT_EXIST").unwrap_err();
        assert!(matches!(err, EnvError::Missing(_)));
    }

    #[test]
    fn parsed_var_falls_back_to_default() {
        let v: u64 = get_env_var_parsed("SHARED_UTILS_TEST_DOES_NOT_EXIST", 10).unwrap();
        assert_eq!(v, 10);
    }
}

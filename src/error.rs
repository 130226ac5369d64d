use thiserror::Error;

/// Startup-time failures. The route handlers themselves are infallible;
/// these only surface from configuration loading and socket binding, so
/// they terminate the process rather than map to an HTTP response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display_names_the_source() {
        let err = AppError::from(config::ConfigError::Message("bad port".to_string()));

        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("bad port"));
    }

    #[test]
    fn io_error_converts_to_internal_error() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = AppError::from(io);

        assert!(matches!(err, AppError::InternalError(_)));
        assert!(err.to_string().contains("address in use"));
    }
}

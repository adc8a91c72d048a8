use std::path::PathBuf;

use thiserror::Error;

/// All errors produced while configuring or mounting the portfolio effects.
#[derive(Debug, Error)]
pub enum FxError {
    /// A configuration value is out of its accepted range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Config JSON could not be parsed or serialized.
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),

    /// The host page rejected an operation (missing window, failed DOM call).
    #[error("host: {0}")]
    Host(String),

    /// File access from the CLI.
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FxError>;

/// Shorthand constructors.
impl FxError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = FxError::io(
            "site/fx.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("site/fx.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: FxError = parse.unwrap_err().into();
        assert!(matches!(err, FxError::Json(_)));
        assert!(err.to_string().starts_with("config json:"));
    }
}

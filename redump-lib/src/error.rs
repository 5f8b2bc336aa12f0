use thiserror::Error;

/// Errors that can occur while writing a submission report.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No record was supplied
    #[error("Submission information was missing")]
    MissingSubmission,

    /// Writing into the output buffer failed
    #[error("write error: {0}")]
    Write(#[from] std::fmt::Error),

    /// The record was in a shape the formatter could not render
    #[error("{0}")]
    Internal(String),
}

impl FormatError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Errors that can occur while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file parsed but isn't shaped like a settings document
    #[error("invalid settings file: {0}")]
    Invalid(String),
}

impl SettingsError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    /// Whether the error just means no settings file exists yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

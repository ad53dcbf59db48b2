use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings Error: {0}")]
    Error(String),

    #[error("Invalid theme color: {0}")]
    InvalidThemeColor(String),

    #[error("Unsupported action: {0}")]
    InvalidAction(String),
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Logging Error: {0}")]
    Error(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read storage file: {0}")]
    ReadError(String),

    #[error("Failed to write storage file: {0}")]
    WriteError(String),

    #[error("Error serializing data")]
    SerializationError,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Error serializing user")]
    SerializationError,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("{0}")]
    Validation(String),

    #[error("{label} {id} not found")]
    NotFound { label: String, id: String },

    #[error("Cannot {action} a {label} that is {status}")]
    InvalidTransition {
        label: String,
        action: String,
        status: String,
    },
}

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Access denied: {module}.{action}")]
    Forbidden { module: String, action: String },

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

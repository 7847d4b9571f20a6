use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Default logger is already initialized")]
    AlreadyInitialized,

    #[error("Invalid boolean value: '{0}'")]
    InvalidBool(String),

    #[error("Failed to install log facade: {0}")]
    FacadeInstalled(#[from] log::SetLoggerError),
}

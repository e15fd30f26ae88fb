use storyboard::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid log level '{0}'")]
    LogLevel(String),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] gate_config::ConfigError),

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Identity source error: {0}")]
    Auth(#[from] gate_auth::AuthError),

    #[error("Classification gateway error: {0}")]
    Classify(#[from] gate_classify::ClassifyError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    /// The caller routed a classification to a mapper for a different type.
    #[error("[{service}] type mismatch: mapper handles '{expected}', got '{actual}'")]
    TypeMismatch {
        service: String,
        expected: String,
        actual: String,
    },

    /// An enum attribute carries a value the known domain cannot resolve.
    #[error(
        "[{service}] unknown {domain} value for '{attribute}': ordinal {ordinal}{}",
        .symbolic_name.as_deref().map(|s| format!(" ({})", s)).unwrap_or_default()
    )]
    UnknownEnumValue {
        service: String,
        attribute: String,
        domain: String,
        ordinal: i32,
        symbolic_name: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MapperError>;

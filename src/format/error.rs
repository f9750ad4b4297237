use rust_i18n::t;
use crate::core::error::CoreError;

#[derive(Debug)]
pub enum FormatError {
    Json(serde_json::Error),
    UnsupportedVersion(String),
    InvalidData(String),
    InvalidConfig(String),
    Core(CoreError),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::Json(err) => write!(f, "{}", t!("error.json", err = err.to_string())),
            FormatError::UnsupportedVersion(v) => write!(f, "{}", t!("error.unsupported_version", version = v)),
            FormatError::InvalidData(msg) => write!(f, "{}", t!("error.invalid_data", msg = msg)),
            FormatError::InvalidConfig(err) => write!(f, "{}", t!("error.invalid_config", err = err)),
            FormatError::Core(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Json(err) => Some(err),
            FormatError::Core(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self { FormatError::Json(err) }
}

impl From<CoreError> for FormatError {
    fn from(err: CoreError) -> Self { FormatError::Core(err) }
}

pub type Result<T> = std::result::Result<T, FormatError>;

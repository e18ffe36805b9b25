use thiserror::Error;

pub type LineformTuiResult<T> = Result<T, LineformTuiError>;

#[derive(Error, Debug)]
pub enum LineformTuiError {
    #[error("lineform_tui: IO error: {}", _0)]
    IoError(std::io::Error),
    #[error("lineform_tui: logging: {}", _0)]
    Logging(String),
}

impl From<std::io::Error> for LineformTuiError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}

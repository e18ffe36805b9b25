use thiserror::Error;

pub type ThreadResult = Result<(), ThreadError>;

#[derive(Error, Debug)]
pub enum ThreadError {
    #[error("panicked: {}", _0)]
    Panic(String),
    #[error("terminal IO failed: {}", _0)]
    Io(#[from] std::io::Error),
}

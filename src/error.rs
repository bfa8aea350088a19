use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A classification token absent from the pruned index was requested.
    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("invalid: {0}")]
    Invalid(String),

    #[error("render: {0}")]
    Render(String),

    #[error("runloop: {0}")]
    RunLoop(String),

    #[error("encode: {0}")]
    Encode(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::RunLoop(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Encode(e.to_string())
    }
}

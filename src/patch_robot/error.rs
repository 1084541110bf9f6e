use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("no <head> line to anchor the insertion")]
    AnchorNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, PatchError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BannerError {
    #[error("banner not found: {0}")]
    NotFound(String),
    #[error("read error: {0}")]
    Read(String),
    #[error("invalid alignment: {0}")]
    InvalidAlignment(String),
    #[error("write error: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, BannerError>;

use thiserror::Error;

use crate::wire::request::Request;

pub type Result<T> = std::result::Result<T, VgaError>;

#[derive(Debug, Error)]
pub enum VgaError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("could not open {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ioctl({request}) failed: {source}")]
    Device {
        request: Request,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

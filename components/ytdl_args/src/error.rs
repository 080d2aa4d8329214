// components/ytdl_args/src/error.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown format: {0:?} (expected audio, video or custom)")]
    UnknownFormat(String),

    #[error("Unknown quality: {0:?} (expected high or low)")]
    UnknownQuality(String),
}

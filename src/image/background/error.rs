//! Per-file processing errors.

use image::ImageError;
use thiserror::Error;

/// Failure while removing the background of a single file.
///
/// All variants are the same kind of failure from the caller's point of
/// view; they differ only in the message.
// NOTE: No #[source] here - callers print `{err}` and the message already embeds the cause
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{0}")]
    Decode(ImageError),

    #[error("failed to encode png: {0}")]
    Encode(ImageError),

    #[error("{0}")]
    Write(std::io::Error),
}

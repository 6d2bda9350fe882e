//! Remove flat backgrounds from sprite images.
//!
//! The top-left pixel is taken as the background color. Every pixel whose
//! R, G and B are each within a fixed tolerance of it is replaced with
//! transparent white, and the result is written back as PNG.

mod batch;
mod color;
mod detect;
mod error;
mod process;

pub use batch::{FileReport, process_all};

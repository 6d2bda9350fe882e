//! Image processing utilities.
//!
//! # Modules
//!
//! - [`background`]: Background removal (nobg)

pub mod background;

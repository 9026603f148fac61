//! Line rasterization.
//!
//! # Algorithms
//!
//! - **Trivial**: slope-intercept walk along the dominant axis, rounding the
//!   secondary coordinate to the nearest pixel
//! - **Antialiased**: Wu-style coverage splitting between the two pixels
//!   straddling the ideal line
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod line;

pub use line::{coverage, LineRasterizer};

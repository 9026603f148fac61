//! # raster-kernel
//!
//! 2D rasterization and polygon geometry on a pixel raster.
//!
//! The kernel turns points, lines and polygons into pixel writes on any
//! [`raster::Raster`] surface, and clips polygons before they are drawn.
//!
//! ## Features
//!
//! - **Line rasterization**: trivial (nearest pixel) and antialiased (coverage
//!   splitting), both with endpoint color gradients
//! - **Polygon clipping**: Sutherland–Hodgman against a convex boundary
//! - **Scanline fill**: even-odd parity with solid or checkerboard paint
//! - **Seed fill**: 4-connected flood fill in background and border modes
//! - **Export**: 8-bit RGBA PNG
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_kernel::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! let triangle: Polygon = [(4, 4), (60, 4), (32, 60)].into_iter().map(Point::from).collect();
//!
//! ScanLine::new(&triangle, Rgba::RED, false).fill(&mut fb);
//! LineRasterizer::Antialiased.rasterize(&mut fb, (0, 63), (63, 0), Rgba::WHITE, Rgba::BLUE);
//!
//! assert_eq!(fb.get_pixel(32, 20), Some(Rgba::RED));
//! # Ok::<(), raster_kernel::Error>(())
//! ```
//!
//! ## References
//!
//! - Sutherland, I. E., & Hodgman, G. W. (1974). "Reentrant Polygon Clipping."
//!   Communications of the ACM 17(1).
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Pixel coordinates move between i32, u32, usize and f64 constantly
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and interpolation.
pub mod color;

/// Geometric primitives (points, lines, edges, polygons).
pub mod geometry;

/// The raster surface trait.
pub mod raster;

/// Owned in-memory RGBA raster.
pub mod framebuffer;

// ============================================================================
// Kernel Modules
// ============================================================================

/// Line rasterization strategies.
pub mod render;

/// Polygon clipping.
pub mod clip;

/// Scanline and seed fills.
pub mod fill;

// ============================================================================
// Composition and Output
// ============================================================================

/// Scene composition and replay.
pub mod scene;

/// Render settings loaded from YAML.
pub mod config;

/// Image export.
pub mod output;

/// Logger setup for binaries.
pub mod logging;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-kernel operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_kernel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip, clip_polygon};
    pub use crate::color::Rgba;
    pub use crate::config::RenderSettings;
    pub use crate::error::{Error, Result};
    pub use crate::fill::{FillMode, Filler, ScanLine, SeedFill, SeedMode};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Edge, Line, Point, Polygon};
    pub use crate::output::PngEncoder;
    pub use crate::raster::Raster;
    pub use crate::render::LineRasterizer;
    pub use crate::scene::Scene;
}

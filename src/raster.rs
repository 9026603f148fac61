//! The raster surface boundary.
//!
//! Every kernel operation writes through the [`Raster`] trait. Implementors
//! provide unsigned, bounds-checked access; the provided methods add the
//! signed-coordinate helpers the rasterizers and fillers need, so geometry that
//! strays off the surface is silently clipped.

use crate::color::Rgba;

/// An addressable 2D pixel store.
///
/// Writes outside `[0, width) × [0, height)` must be ignored and reads outside
/// must return `None`.
pub trait Raster {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Color at `(x, y)`, or `None` when out of bounds.
    fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba>;

    /// Set the color at `(x, y)`. Does nothing when out of bounds.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba);

    /// Check whether a signed coordinate lies on the surface.
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Color at a signed coordinate, or `None` when off the surface.
    #[inline]
    fn pixel_at(&self, x: i32, y: i32) -> Option<Rgba> {
        if self.contains(x, y) {
            self.get_pixel(x as u32, y as u32)
        } else {
            None
        }
    }

    /// Write a pixel at a signed coordinate, dropping it when off the surface.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if self.contains(x, y) {
            self.set_pixel(x as u32, y as u32, color);
        }
    }

    /// Set every pixel to `color`.
    fn clear(&mut self, color: Rgba) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_pixel(x, y, color);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingRaster;
    use super::*;

    #[test]
    fn test_contains() {
        let raster = RecordingRaster::new(10, 5);
        assert!(raster.contains(0, 0));
        assert!(raster.contains(9, 4));
        assert!(!raster.contains(10, 4));
        assert!(!raster.contains(9, 5));
        assert!(!raster.contains(-1, 0));
        assert!(!raster.contains(0, -1));
    }

    #[test]
    fn test_plot_drops_out_of_bounds() {
        let mut raster = RecordingRaster::new(4, 4);
        raster.plot(-1, 2, Rgba::RED);
        raster.plot(2, 4, Rgba::RED);
        raster.plot(i32::MIN, i32::MAX, Rgba::RED);
        assert!(raster.writes.is_empty());

        raster.plot(3, 3, Rgba::RED);
        assert_eq!(raster.writes, vec![(3, 3, Rgba::RED)]);
    }

    #[test]
    fn test_pixel_at() {
        let mut raster = RecordingRaster::new(4, 4);
        raster.plot(1, 1, Rgba::BLUE);
        assert_eq!(raster.pixel_at(1, 1), Some(Rgba::BLUE));
        assert_eq!(raster.pixel_at(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(raster.pixel_at(-3, 1), None);
    }

    #[test]
    fn test_default_clear_writes_every_pixel() {
        let mut raster = RecordingRaster::new(3, 2);
        raster.clear(Rgba::GREEN);
        assert_eq!(raster.writes.len(), 6);
        assert!(raster.writes.iter().all(|&(_, _, c)| c == Rgba::GREEN));
    }
}

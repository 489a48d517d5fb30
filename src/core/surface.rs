use crate::error::{Error, Result};
use crate::math::Color;

/// 2D drawing operations for the pixel surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Fill entire surface with color
    Clear(Color),

    /// Draw line from (x0, y0) to (x1, y1) inclusive
    Line { x0: i32, y0: i32, x1: i32, y1: i32, color: Color },
}

/// Reinterpret packed pixels as bytes for upload
///
/// Each cell is B, G, R, A in memory on little-endian targets.
pub fn pixel_bytes(pixels: &[Color]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

/// CPU pixel grid, row-major, one packed ARGB value per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl PixelSurface {
    /// Create a zeroed surface; both dimensions must be non-zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len > 0)
            .ok_or(Error::InvalidDimension { width, height })?;

        Ok(Self {
            pixels: vec![Color::default(); len],
            width,
            height,
        })
    }

    /// Execute a single draw operation
    pub fn apply(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.clear(color),
            DrawOp::Line { x0, y0, x1, y1, color } => self.draw_line(x0, y0, x1, y1, color),
        }
    }

    /// Fill every cell with color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Set the cell at (x, y); out-of-range coordinates are ignored
    pub fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Draw line using Bresenham's algorithm
    ///
    /// Both endpoints are plotted. Pixels falling outside the surface are
    /// dropped by [`plot`](Self::plot), so callers never need to clip.
    /// Swapping the endpoints yields the same pixel set.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        // Error terms tie-break differently per direction; always walk from the smaller endpoint
        let ((x0, y0), (x1, y1)) = if (x0, y0) <= (x1, y1) {
            ((x0, y0), (x1, y1))
        } else {
            ((x1, y1), (x0, y0))
        };
        let (mut x, mut y) = (x0, y0);

        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = (i64::from(y1) - i64::from(y0)).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Read the cell at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Row-major pixel grid
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel grid as bytes; see [`pixel_bytes`]
    pub fn as_bytes(&self) -> &[u8] {
        pixel_bytes(&self.pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    fn lit(surface: &PixelSurface) -> Vec<(i32, i32)> {
        let (w, h) = surface.dimensions();
        (0..h as i32)
            .flat_map(|y| (0..w as i32).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.get(x, y) != Some(Color::default()))
            .collect()
    }

    #[test]
    fn surface_creation() {
        let surface = PixelSurface::new(100, 50).unwrap();
        assert_eq!(surface.dimensions(), (100, 50));
        assert_eq!(surface.pixels().len(), 100 * 50);
        assert_eq!(surface.as_bytes().len(), 100 * 50 * 4);
    }

    #[test]
    fn surface_rejects_zero_dimensions() {
        assert_eq!(
            PixelSurface::new(0, 10),
            Err(Error::InvalidDimension { width: 0, height: 10 })
        );
        assert!(PixelSurface::new(10, 0).is_err());
        assert!(PixelSurface::new(0, 0).is_err());
    }

    #[test]
    fn surface_clear() {
        let mut surface = PixelSurface::new(10, 10).unwrap();
        surface.apply(&DrawOp::Clear(RED));
        assert!(surface.pixels().iter().all(|&c| c == RED));
    }

    #[test]
    fn surface_plot_negative_is_ignored() {
        let mut surface = PixelSurface::new(4, 4).unwrap();
        surface.plot(-1, 0, RED);
        surface.plot(0, -1, RED);
        surface.plot(4, 0, RED);
        surface.plot(0, 4, RED);
        assert!(lit(&surface).is_empty());
    }

    #[test]
    fn surface_bytes_are_bgra() {
        let mut surface = PixelSurface::new(1, 1).unwrap();
        surface.plot(0, 0, Color::rgb(0x11, 0x22, 0x33));
        if cfg!(target_endian = "little") {
            assert_eq!(surface.as_bytes(), &[0x33, 0x22, 0x11, 0xFF]);
        }
    }

    #[test]
    fn pixel_bytes_match_surface_bytes() {
        let mut surface = PixelSurface::new(3, 2).unwrap();
        surface.draw_line(0, 0, 2, 1, RED);
        assert_eq!(pixel_bytes(surface.pixels()), surface.as_bytes());
        assert_eq!(pixel_bytes(&[]).len(), 0);
    }

    #[test]
    fn line_horizontal() {
        let mut surface = PixelSurface::new(10, 10).unwrap();
        surface.draw_line(2, 5, 6, 5, RED);
        assert_eq!(lit(&surface), vec![(2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn line_diagonal() {
        let mut surface = PixelSurface::new(10, 10).unwrap();
        surface.apply(&DrawOp::Line { x0: 0, y0: 0, x1: 3, y1: 3, color: RED });
        assert_eq!(lit(&surface), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn line_shallow_slope() {
        let mut surface = PixelSurface::new(10, 10).unwrap();
        surface.draw_line(0, 0, 4, 2, RED);
        // One pixel per column for slopes below 1
        let points = lit(&surface);
        assert_eq!(points.len(), 5);
        assert!(points.contains(&(0, 0)));
        assert!(points.contains(&(4, 2)));
    }

    #[test]
    fn line_partially_offscreen() {
        let mut surface = PixelSurface::new(5, 5).unwrap();
        surface.draw_line(-3, 2, 7, 2, RED);
        assert_eq!(lit(&surface), vec![(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]);
    }
}

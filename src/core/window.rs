/// Window dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Minimised windows report a zero extent and cannot back a swapchain
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for WindowDimensions {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_from_physical_size() {
        let dims = WindowDimensions::from(winit::dpi::PhysicalSize::new(800u32, 600u32));
        assert_eq!(dims, WindowDimensions::new(800, 600));
    }

    #[test]
    fn test_is_drawable() {
        assert!(WindowDimensions::new(1, 1).is_drawable());
        assert!(!WindowDimensions::new(0, 600).is_drawable());
        assert!(!WindowDimensions::new(800, 0).is_drawable());
    }
}

/// Packed 32-bit color, laid out as 0xAARRGGBB
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(255, r, g, b)
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> u32 {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let color = Color::rgb(10, 20, 30);
        assert!(color.is_opaque());
        assert_eq!(color.0, 0xFF0A141E);
    }

    #[test]
    fn test_channels() {
        let color = Color::argb(0x80, 0x11, 0x22, 0x33);
        assert_eq!(color.a(), 0x80);
        assert_eq!(color.r(), 0x11);
        assert_eq!(color.g(), 0x22);
        assert_eq!(color.b(), 0x33);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Color::BLACK.0, 0xFF000000);
        assert_eq!(Color::WHITE.0, 0xFFFFFFFF);
        assert_eq!(Color::default().0, 0);
    }
}

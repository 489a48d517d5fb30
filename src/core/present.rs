use crate::math::Color;

/// Makes a finished pixel grid visible
///
/// `pixels` is row-major with `width * height` cells. Implementations must be
/// done reading `pixels` before returning; the next frame overwrites it.
pub trait Presenter {
    fn present(&mut self, pixels: &[Color], width: u32, height: u32) -> anyhow::Result<()>;
}

/// Presenter for runs without a window: counts frames and remembers the last one's coverage
#[derive(Debug, Default, Clone)]
pub struct HeadlessPresenter {
    frames: u64,
    last_lit: usize,
    background: Color,
}

impl HeadlessPresenter {
    /// Pixels different from `background` count as lit
    pub fn new(background: Color) -> Self {
        Self {
            frames: 0,
            last_lit: 0,
            background,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Lit pixel count of the most recent frame
    pub fn last_lit(&self) -> usize {
        self.last_lit
    }
}

impl Presenter for HeadlessPresenter {
    fn present(&mut self, pixels: &[Color], width: u32, height: u32) -> anyhow::Result<()> {
        let expected = width as usize * height as usize;
        anyhow::ensure!(
            pixels.len() == expected,
            "Invalid pixel buffer size: expected {} cells, got {}",
            expected,
            pixels.len()
        );

        self.frames += 1;
        self.last_lit = pixels.iter().filter(|&&c| c != self.background).count();
        Ok(())
    }
}

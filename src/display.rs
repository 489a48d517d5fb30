use crate::core::{Presenter, SpinningQuad};

/// Display combines the animated quad with a presenter
pub struct Display<P: Presenter> {
    quad: SpinningQuad,
    presenter: P,
}

impl<P: Presenter> Display<P> {
    /// Create new display with quad and presenter
    pub fn new(quad: SpinningQuad, presenter: P) -> Self {
        Self { quad, presenter }
    }

    /// Full frame cycle: advance animation → rasterize → present
    pub fn draw(&mut self) -> anyhow::Result<()> {
        self.quad.tick();

        let surface = self.quad.surface();
        self.presenter
            .present(surface.pixels(), surface.width(), surface.height())
    }

    /// Access the animated quad
    pub fn quad(&self) -> &SpinningQuad {
        &self.quad
    }

    /// Access presenter
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Access mutable presenter
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

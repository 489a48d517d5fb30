use glam::{IVec2, Vec2};

use crate::error::{Error, Result};

/// Map a world X value onto a screen axis of `screen_extent` pixels centred at `screen_center`
pub fn world_to_screen_x(
    wx: f32,
    world_min: f32,
    world_max: f32,
    screen_center: f32,
    screen_extent: f32,
) -> f32 {
    let world_center = (world_min + world_max) / 2.0;
    let scale = screen_extent / (world_max - world_min);
    screen_center + (wx - world_center) * scale
}

/// Same as [`world_to_screen_x`] with the axis flipped: world Y grows up, screen Y grows down
pub fn world_to_screen_y(
    wy: f32,
    world_min: f32,
    world_max: f32,
    screen_center: f32,
    screen_extent: f32,
) -> f32 {
    let world_center = (world_min + world_max) / 2.0;
    let scale = screen_extent / (world_max - world_min);
    screen_center - (wy - world_center) * scale
}

/// Visible rectangle of world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldWindow {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldWindow {
    /// Validated window; each axis must be finite with `min < max`
    pub fn new(min: Vec2, max: Vec2) -> Result<Self> {
        for (lo, hi) in [(min.x, max.x), (min.y, max.y)] {
            if !lo.is_finite() || !hi.is_finite() || lo >= hi {
                return Err(Error::InvalidWorldWindow { min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }

    /// Square window `[min, max]` on both axes
    pub fn square(min: f32, max: f32) -> Result<Self> {
        Self::new(Vec2::splat(min), Vec2::splat(max))
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

impl Default for WorldWindow {
    fn default() -> Self {
        Self {
            min: Vec2::splat(-5.0),
            max: Vec2::splat(5.0),
        }
    }
}

/// World-to-screen mapping for a fixed window and screen size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    window: WorldWindow,
    screen: Vec2,
}

impl ScreenTransform {
    pub fn new(window: WorldWindow, screen_width: u32, screen_height: u32) -> Self {
        Self {
            window,
            screen: Vec2::new(screen_width as f32, screen_height as f32),
        }
    }

    /// Pixels per world unit on each axis
    pub fn scale(&self) -> Vec2 {
        self.screen / self.window.size()
    }

    pub fn screen_center(&self) -> Vec2 {
        self.screen / 2.0
    }

    /// Continuous screen position of a world point
    pub fn map(&self, world: Vec2) -> Vec2 {
        let center = self.screen_center();
        Vec2::new(
            world_to_screen_x(world.x, self.window.min.x, self.window.max.x, center.x, self.screen.x),
            world_to_screen_y(world.y, self.window.min.y, self.window.max.y, center.y, self.screen.y),
        )
    }

    /// Screen pixel of a world point, truncated toward zero
    pub fn to_pixel(&self, world: Vec2) -> IVec2 {
        let screen = self.map(world);
        IVec2::new(screen.x as i32, screen.y as i32)
    }
}

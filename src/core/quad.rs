use glam::{IVec2, Mat2, Vec2};

use super::animation::{AnimationConfig, AnimationState};
use super::surface::{DrawOp, PixelSurface};
use crate::error::Result;
use crate::math::{Color, ScreenTransform, WorldWindow};

/// Unit square corners in drawing order
pub const UNIT_SQUARE: [Vec2; 4] = [
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
];

pub const BACKGROUND: Color = Color::BLACK;
pub const OUTLINE: Color = Color::WHITE;

/// Screen-space corners of the unit square after pulsation and rotation
pub fn quad_corners(angle: f32, pulse: f32, transform: &ScreenTransform) -> [IVec2; 4] {
    let rotation = Mat2::from_angle(angle);
    UNIT_SQUARE.map(|corner| transform.to_pixel(rotation * (corner * pulse)))
}

/// Edge draw operations closing the polygon: corner i to corner (i + 1) mod 4
pub fn outline_ops(corners: &[IVec2; 4], color: Color) -> [DrawOp; 4] {
    std::array::from_fn(|i| {
        let from = corners[i];
        let to = corners[(i + 1) % corners.len()];
        DrawOp::Line {
            x0: from.x,
            y0: from.y,
            x1: to.x,
            y1: to.y,
            color,
        }
    })
}

/// Draw operations for one frame: clear, then the four outline edges
pub fn frame_ops(
    state: &AnimationState,
    config: &AnimationConfig,
    transform: &ScreenTransform,
) -> Vec<DrawOp> {
    let corners = quad_corners(state.angle, state.pulse(config), transform);
    std::iter::once(DrawOp::Clear(BACKGROUND))
        .chain(outline_ops(&corners, OUTLINE))
        .collect()
}

/// The animated quad: owns its surface and animation state
#[derive(Debug, Clone)]
pub struct SpinningQuad {
    surface: PixelSurface,
    state: AnimationState,
    config: AnimationConfig,
    transform: ScreenTransform,
}

impl SpinningQuad {
    pub fn new(width: u32, height: u32, window: WorldWindow, config: AnimationConfig) -> Result<Self> {
        config.validate()?;
        let surface = PixelSurface::new(width, height)?;
        Ok(Self {
            surface,
            state: AnimationState::default(),
            config,
            transform: ScreenTransform::new(window, width, height),
        })
    }

    /// Advance one frame and redraw the surface
    pub fn tick(&mut self) {
        self.state = self.state.advance(&self.config);
        self.redraw();
    }

    /// Redraw the surface for the current state without advancing it
    pub fn redraw(&mut self) {
        for op in frame_ops(&self.state, &self.config, &self.transform) {
            self.surface.apply(&op);
        }
    }

    /// Screen corners for the current state
    pub fn corners(&self) -> [IVec2; 4] {
        quad_corners(self.state.angle, self.state.pulse(&self.config), &self.transform)
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }
}

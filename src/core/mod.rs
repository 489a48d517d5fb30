pub mod animation;
pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod present;
pub mod quad;
pub mod surface;
pub mod surface_renderer;
pub mod window;

pub use animation::{wrap_angle, AnimationConfig, AnimationState};
pub use clock::{Clock, FpsCounter};
pub use controller::{Button, Controller};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use present::{HeadlessPresenter, Presenter};
pub use quad::{frame_ops, outline_ops, quad_corners, SpinningQuad, BACKGROUND, OUTLINE, UNIT_SQUARE};
pub use surface::{pixel_bytes, DrawOp, PixelSurface};
pub use surface_renderer::SurfaceRenderer;
pub use window::WindowDimensions;

//! Render-side types: geometry, frames, and the render view the coordinator
//! configures.

mod frame;
mod geometry;
mod offscreen;
mod view;

pub use frame::{Frame, FrameSink, PaintCallback, PixelFormat};
pub use geometry::{Point, Rect, Size, Vector2d};
pub use offscreen::{OffscreenRenderView, OffscreenViewParams, MAX_FRAME_RATE};
pub use view::{RenderView, ViewId};

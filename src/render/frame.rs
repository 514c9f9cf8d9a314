use crate::render::{Rect, Size};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8 bits per channel, premultiplied alpha, BGRA byte order.
    PreMulBgra8,
    Rgba8,
}

/// A painted frame as delivered to the off-screen callback.
#[derive(Clone)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub size: Size,
    pub stride: u32,
    pub format: PixelFormat,
    /// Part of the frame that changed since the previous delivery.
    pub dirty: Rect,
}

impl Frame {
    /// Builds a frame that is dirty in its entirety.
    ///
    /// Panics when `pixels` is smaller than `height * stride`.
    pub fn from_raw(pixels: Vec<u8>, size: Size, stride: u32, format: PixelFormat) -> Self {
        assert!(
            pixels.len() >= (size.height as usize) * (stride as usize),
            "pixel buffer too small for frame dimensions"
        );

        Self {
            pixels,
            size,
            stride,
            format,
            dirty: Rect::from_size(size),
        }
    }

    /// Narrows the dirty region, clipped to the frame.
    pub fn with_dirty(mut self, dirty: Rect) -> Self {
        let x = dirty.x.clamp(0, i32::try_from(self.size.width).unwrap_or(i32::MAX));
        let y = dirty.y.clamp(0, i32::try_from(self.size.height).unwrap_or(i32::MAX));
        let width = dirty.width.min(self.size.width - x as u32);
        let height = dirty.height.min(self.size.height - y as u32);
        self.dirty = Rect::new(x, y, width, height);
        self
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("size", &self.size)
            .field("dirty", &self.dirty)
            .field("format", &self.format)
            .field("len", &self.pixels.len())
            .finish()
    }
}

/// Receives the frames of an off-screen view instead of a window surface.
///
/// Calls happen on the UI thread that owns the view.
pub trait FrameSink {
    fn on_paint(&self, frame: &Frame) -> anyhow::Result<()>;
}

impl<F> FrameSink for F
where
    F: Fn(&Frame) -> anyhow::Result<()>,
{
    fn on_paint(&self, frame: &Frame) -> anyhow::Result<()> {
        self(frame)
    }
}

/// Paint callback shared between a coordinator and every view it creates.
pub type PaintCallback = Rc<dyn FrameSink>;

//! Geometry for off-screen views.
//!
//! A [`Size`] is what a native window reports and what a render view is
//! resized to. A [`Rect`] is what a render view reports as its bounds. Both
//! default to zero, which is also what the coordinator hands out when the
//! window or the view it would ask is not there.
//!
//! # Examples
//!
//! ```
//! use gosub_offscreen::render::{Rect, Size};
//!
//! let size = Size::new(800, 600);
//! let rect = Rect::from_size(size);
//! assert_eq!(rect.size(), size);
//! ```

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A point in view coordinates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An offset, e.g. between the cursor and the top-left corner of a drag image.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Vector2d {
    pub dx: i32,
    pub dy: i32,
}

impl Vector2d {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Position and size of a view.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct Rect {
    /// Horizontal offset in pixels from the origin.
    pub x: i32,

    /// Vertical offset in pixels from the origin.
    pub y: i32,

    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect {{ x: {}, y: {}, width: {}, height: {} }}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl Rect {
    /// Creates a new [`Rect`] with the given position and size.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// A rect anchored at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

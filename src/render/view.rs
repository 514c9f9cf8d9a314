use crate::render::{Rect, Size};
use std::any::Any;
use std::rc::Rc;
use uuid::Uuid;

/// Opaque identifier of a render view.
///
/// The [`Uuid`] inside is an implementation detail; treat `ViewId` as an
/// opaque handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(Uuid);

impl ViewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

/// The renderable target of a single widget, as the coordinator sees it.
///
/// Views are shared through `Rc` and mutated through `&self`; everything runs
/// on the UI thread.
pub trait RenderView: Any {
    fn id(&self) -> ViewId;

    fn set_size(&self, size: Size);

    /// Switches the view to a transparent background if it was created transparent.
    fn install_transparency(&self);

    fn set_painting(&self, painting: bool);
    fn is_painting(&self) -> bool;

    fn set_frame_rate(&self, frame_rate: u32);
    fn frame_rate(&self) -> u32;

    fn view_bounds(&self) -> Rect;

    fn as_any(&self) -> &dyn Any;
    fn as_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
}

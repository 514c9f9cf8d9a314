//! The render view created for off-screen contents.
//!
//! An [`OffscreenRenderView`] never presents to a window. Frames handed to
//! [`OffscreenRenderView::paint`] go to the shared [`PaintCallback`] as long
//! as painting is enabled, and are dropped otherwise.
//!
//! Views are created by the coordinator's factory. On construction a view
//! attaches itself to its widget; the widget keeps it alive and the view only
//! keeps weak references to the widget and to its parent.

use crate::host::{RenderWidgetHost, WidgetId};
use crate::render::{Frame, PaintCallback, Rect, RenderView, Size, ViewId};
use std::any::Any;
use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Upper bound for the frame rate of an off-screen view.
pub const MAX_FRAME_RATE: u32 = 240;

/// Background colours, RGBA.
const OPAQUE_BACKGROUND: [u8; 4] = [255, 255, 255, 255];
const TRANSPARENT_BACKGROUND: [u8; 4] = [0, 0, 0, 0];

/// Everything a view is configured with at construction.
pub struct OffscreenViewParams {
    pub transparent: bool,
    pub painting: bool,
    pub frame_rate: u32,
    pub callback: PaintCallback,
    pub widget: Rc<dyn RenderWidgetHost>,
    /// Set for popups only.
    pub parent: Option<Rc<dyn RenderView>>,
    pub size: Size,
}

pub struct OffscreenRenderView {
    id: ViewId,
    transparent: bool,
    painting: Cell<bool>,
    frame_rate: Cell<u32>,
    size: Cell<Size>,
    background: Cell<[u8; 4]>,
    callback: PaintCallback,
    widget_id: WidgetId,
    widget: Weak<dyn RenderWidgetHost>,
    parent: Option<Weak<dyn RenderView>>,
    frames_delivered: Cell<u64>,
}

impl OffscreenRenderView {
    /// Creates the view and attaches it to `params.widget`.
    pub fn new(params: OffscreenViewParams) -> Rc<Self> {
        let background = if params.transparent { TRANSPARENT_BACKGROUND } else { OPAQUE_BACKGROUND };
        let view = Rc::new(Self {
            id: ViewId::new(),
            transparent: params.transparent,
            painting: Cell::new(params.painting),
            frame_rate: Cell::new(clamp_frame_rate(params.frame_rate)),
            size: Cell::new(params.size),
            background: Cell::new(background),
            callback: params.callback,
            widget_id: params.widget.id(),
            widget: Rc::downgrade(&params.widget),
            parent: params.parent.as_ref().map(Rc::downgrade),
            frames_delivered: Cell::new(0),
        });

        params.widget.set_view(Some(view.clone()));

        log::debug!(
            "OffscreenView[{:?}]: created for widget {:?} (popup: {}, painting: {}, fps: {}, size: {:?})",
            view.id,
            view.widget_id,
            view.is_popup(),
            view.painting.get(),
            view.frame_rate.get(),
            view.size.get()
        );

        view
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn is_popup(&self) -> bool {
        self.parent.is_some()
    }

    /// The parent view of a popup, while it is alive.
    pub fn parent(&self) -> Option<Rc<dyn RenderView>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn widget_id(&self) -> WidgetId {
        self.widget_id
    }

    pub fn widget(&self) -> Option<Rc<dyn RenderWidgetHost>> {
        self.widget.upgrade()
    }

    pub fn background_color(&self) -> [u8; 4] {
        self.background.get()
    }

    pub fn frames_delivered(&self) -> u64 {
        self.frames_delivered.get()
    }

    /// Hands a frame to the paint callback.
    ///
    /// Returns `false` when painting is disabled and the frame was dropped.
    /// Sink failures are logged and still count as delivered.
    pub fn paint(&self, frame: &Frame) -> bool {
        if !self.painting.get() {
            log::trace!("OffscreenView[{:?}]: painting disabled, dropping frame", self.id);
            return false;
        }

        if let Err(e) = self.callback.on_paint(frame) {
            log::error!("OffscreenView[{:?}]: paint callback failed: {:#}", self.id, e);
        }

        self.frames_delivered.set(self.frames_delivered.get() + 1);
        true
    }
}

impl RenderView for OffscreenRenderView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn set_size(&self, size: Size) {
        log::trace!("OffscreenView[{:?}]: resize to {:?}", self.id, size);
        self.size.set(size);
    }

    fn install_transparency(&self) {
        if self.transparent {
            self.background.set(TRANSPARENT_BACKGROUND);
        }
    }

    fn set_painting(&self, painting: bool) {
        self.painting.set(painting);
    }

    fn is_painting(&self) -> bool {
        self.painting.get()
    }

    fn set_frame_rate(&self, frame_rate: u32) {
        self.frame_rate.set(clamp_frame_rate(frame_rate));
    }

    fn frame_rate(&self) -> u32 {
        self.frame_rate.get()
    }

    fn view_bounds(&self) -> Rect {
        Rect::from_size(self.size.get())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

fn clamp_frame_rate(frame_rate: u32) -> u32 {
    frame_rate.clamp(1, MAX_FRAME_RATE)
}

//! In-process host implementations.
//!
//! These back the host contracts with plain state instead of a real window
//! system or renderer. They are what a headless embedder (or a test) plugs
//! into a [`ViewCoordinator`](crate::coordinator::ViewCoordinator) when there
//! is no native platform underneath.

use crate::host::{
    NativeWindow, ObserverId, RenderWidgetHost, WebContents, WebContentsDelegate, WidgetId, WindowObserver,
    WindowObservers,
};
use crate::render::{RenderView, Size};
use raw_window_handle::RawWindowHandle;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// A window that only exists as a size and an observer list.
pub struct HeadlessWindow {
    size: Cell<Size>,
    handle: Option<RawWindowHandle>,
    observers: WindowObservers,
}

impl HeadlessWindow {
    pub fn new(size: Size) -> Rc<Self> {
        Self::with_handle(size, None)
    }

    /// A window that reports `handle` as both its native view and native window.
    pub fn with_handle(size: Size, handle: Option<RawWindowHandle>) -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(size),
            handle,
            observers: WindowObservers::new(),
        })
    }

    /// Changes the size and notifies observers.
    pub fn resize(&self, size: Size) {
        self.size.set(size);
        self.observers.notify_resize();
    }

    /// Notifies observers that the window is closing.
    pub fn close(&self) {
        self.observers.notify_closed();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn is_observed_by(&self, id: ObserverId) -> bool {
        self.observers.contains(id)
    }
}

impl NativeWindow for HeadlessWindow {
    fn size(&self) -> Size {
        self.size.get()
    }

    fn native_view(&self) -> Option<RawWindowHandle> {
        self.handle
    }

    fn native_window(&self) -> Option<RawWindowHandle> {
        self.handle
    }

    fn add_observer(&self, id: ObserverId, observer: Weak<dyn WindowObserver>) {
        self.observers.add(id, observer);
    }

    fn remove_observer(&self, id: ObserverId) {
        self.observers.remove(id);
    }
}

/// A widget that just holds on to its view.
pub struct HeadlessWidget {
    id: WidgetId,
    view: RefCell<Option<Rc<dyn RenderView>>>,
}

impl HeadlessWidget {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            id: WidgetId::new(),
            view: RefCell::new(None),
        })
    }
}

impl RenderWidgetHost for HeadlessWidget {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn view(&self) -> Option<Rc<dyn RenderView>> {
        self.view.borrow().clone()
    }

    fn set_view(&self, view: Option<Rc<dyn RenderView>>) {
        *self.view.borrow_mut() = view;
    }
}

/// Contents with a single main widget, an optional outer contents and delegate.
///
/// Host hook invocations are counted so embedders can observe them.
pub struct HeadlessContents {
    main_widget: Rc<HeadlessWidget>,
    outer: RefCell<Option<Weak<dyn WebContents>>>,
    delegate: RefCell<Option<Rc<dyn WebContentsDelegate>>>,
    views_created: Cell<usize>,
    ended_drags: RefCell<Vec<WidgetId>>,
}

impl HeadlessContents {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            main_widget: HeadlessWidget::new(),
            outer: RefCell::new(None),
            delegate: RefCell::new(None),
            views_created: Cell::new(0),
            ended_drags: RefCell::new(Vec::new()),
        })
    }

    pub fn main_widget(&self) -> Rc<HeadlessWidget> {
        self.main_widget.clone()
    }

    /// Embeds these contents as a guest of `outer`.
    pub fn set_outer_contents(&self, outer: &Rc<dyn WebContents>) {
        *self.outer.borrow_mut() = Some(Rc::downgrade(outer));
    }

    pub fn set_delegate(&self, delegate: Option<Rc<dyn WebContentsDelegate>>) {
        *self.delegate.borrow_mut() = delegate;
    }

    /// How often the host hook for a created render view fired.
    pub fn render_views_created(&self) -> usize {
        self.views_created.get()
    }

    /// Source widgets of every drag that was ended through the host.
    pub fn ended_drags(&self) -> Vec<WidgetId> {
        self.ended_drags.borrow().clone()
    }
}

impl WebContents for HeadlessContents {
    fn render_view(&self) -> Option<Rc<dyn RenderView>> {
        self.main_widget.view()
    }

    fn outer_contents(&self) -> Option<Rc<dyn WebContents>> {
        self.outer.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn delegate(&self) -> Option<Rc<dyn WebContentsDelegate>> {
        self.delegate.borrow().clone()
    }

    fn render_view_created(&self) {
        self.views_created.set(self.views_created.get() + 1);
    }

    fn system_drag_ended(&self, source: &dyn RenderWidgetHost) {
        self.ended_drags.borrow_mut().push(source.id());
    }
}

//! Off-screen view coordinator.
//!
//! A [`ViewCoordinator`] stands in for the on-screen view of a web contents.
//! It binds to a native window for size and lifecycle events, creates the
//! [`OffscreenRenderView`]s the host asks for, and routes their frames to a
//! paint callback instead of a window surface.
//!
//! Render views come and go independently of the coordinator. Painting state
//! and frame rate are therefore forwarded to the current view when there is
//! one, and cached until the next view is created when there is not.
//!
//! # Examples
//!
//! ```
//! use gosub_offscreen::config::ViewConfig;
//! use gosub_offscreen::coordinator::{ViewCoordinator, WebContentsView};
//! use gosub_offscreen::host::{HeadlessContents, HeadlessWindow, NativeWindow, RenderWidgetHost, WebContents};
//! use gosub_offscreen::render::{Frame, PaintCallback, RenderView, Size};
//! use std::rc::Rc;
//!
//! let callback: PaintCallback = Rc::new(|_: &Frame| -> anyhow::Result<()> { Ok(()) });
//! let coordinator = ViewCoordinator::new(ViewConfig::default(), callback);
//!
//! let contents = HeadlessContents::new();
//! let contents_dyn: Rc<dyn WebContents> = contents.clone();
//! coordinator.attach_web_contents(&contents_dyn);
//!
//! let window: Rc<dyn NativeWindow> = HeadlessWindow::new(Size::new(800, 600));
//! coordinator.bind_native_window(Some(&window));
//!
//! // Configured before any view exists, applied when it is created.
//! coordinator.set_frame_rate(30);
//!
//! let widget: Rc<dyn RenderWidgetHost> = contents.main_widget();
//! let view = coordinator.create_view_for_widget(&widget).unwrap();
//! assert_eq!(view.frame_rate(), 30);
//! assert_eq!(coordinator.view_bounds().size(), Size::new(800, 600));
//! ```

mod binding;
mod contract;
mod factory;
mod paint_cache;
mod platform;

pub use contract::WebContentsView;
pub use platform::{NoopPlatformHooks, PlatformHooks};

use crate::config::ViewConfig;
use crate::drag::{self, DragEventSourceInfo, DragImage, DragOperations, DragOutcome, DragSession, DropData};
use crate::errors::ViewError;
use crate::host::{NativeWindow, ObserverId, RenderWidgetHost, WebContents, WindowObserver};
use crate::render::{OffscreenRenderView, PaintCallback, Rect, RenderView, Size, Vector2d};
use binding::NativeWindowBinding;
use factory::RenderViewFactory;
use paint_cache::PaintStateCache;
use raw_window_handle::RawWindowHandle;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub struct ViewCoordinator {
    /// Handed to windows as the observer registration.
    this: Weak<ViewCoordinator>,
    cache: PaintStateCache,
    binding: NativeWindowBinding,
    factory: RenderViewFactory,
    contents: RefCell<Option<Weak<dyn WebContents>>>,
    platform: Box<dyn PlatformHooks>,
}

impl ViewCoordinator {
    pub fn new(config: ViewConfig, callback: PaintCallback) -> Rc<Self> {
        Self::with_platform_hooks(config, callback, Box::new(NoopPlatformHooks))
    }

    pub fn with_platform_hooks(config: ViewConfig, callback: PaintCallback, platform: Box<dyn PlatformHooks>) -> Rc<Self> {
        let coordinator = Rc::new_cyclic(|this| Self {
            this: this.clone(),
            cache: PaintStateCache::new(&config),
            binding: NativeWindowBinding::new(),
            factory: RenderViewFactory::new(config.transparent, callback),
            contents: RefCell::new(None),
            platform,
        });

        coordinator.platform.on_create();
        log::debug!(
            "ViewCoordinator[{:?}]: created (transparent: {})",
            coordinator.binding.observer_id(),
            coordinator.cache.transparent()
        );

        coordinator
    }

    /// Identifies this coordinator in window observer lists.
    pub fn observer_id(&self) -> ObserverId {
        self.binding.observer_id()
    }

    pub fn is_transparent(&self) -> bool {
        self.cache.transparent()
    }

    /// Attaches the hosted page. The coordinator keeps a weak reference only.
    pub fn attach_web_contents(&self, contents: &Rc<dyn WebContents>) {
        *self.contents.borrow_mut() = Some(Rc::downgrade(contents));
        log::debug!("ViewCoordinator[{:?}]: web contents attached", self.observer_id());

        self.render_view_created();
    }

    pub fn web_contents(&self) -> Option<Rc<dyn WebContents>> {
        self.contents.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Binds to `window`, or unbinds with `None`, then re-applies the size.
    pub fn bind_native_window(&self, window: Option<&Rc<dyn NativeWindow>>) {
        let observer: Weak<dyn WindowObserver> = self.this.clone();
        self.binding.bind(window, observer);

        self.apply_size();
    }

    pub fn has_native_window(&self) -> bool {
        self.binding.is_bound()
    }

    /// Size of the bound window, zero when there is none.
    pub fn size(&self) -> Size {
        self.binding.size()
    }

    /// The current render view of the attached contents.
    pub fn view(&self) -> Option<Rc<dyn RenderView>> {
        self.web_contents().and_then(|contents| contents.render_view())
    }

    pub fn set_painting(&self, painting: bool) {
        match self.view() {
            Some(view) => view.set_painting(painting),
            None => self.cache.set_painting(painting),
        }
    }

    pub fn is_painting(&self) -> bool {
        match self.view() {
            Some(view) => view.is_painting(),
            None => self.cache.painting(),
        }
    }

    /// Passed through unchanged; callers hand in host-validated values.
    pub fn set_frame_rate(&self, frame_rate: u32) {
        match self.view() {
            Some(view) => view.set_frame_rate(frame_rate),
            None => self.cache.set_frame_rate(frame_rate),
        }
    }

    pub fn frame_rate(&self) -> u32 {
        match self.view() {
            Some(view) => view.frame_rate(),
            None => self.cache.frame_rate(),
        }
    }

    /// Pushes the current window size into the view, if there is one.
    fn apply_size(&self) {
        if let Some(view) = self.view() {
            view.set_size(self.size());
        }
    }

    /// View that popups of the attached contents hang off.
    ///
    /// Guest contents use the view of the contents embedding them.
    fn popup_parent(&self) -> Option<Rc<dyn RenderView>> {
        let contents = self.web_contents()?;
        match contents.outer_contents() {
            Some(outer) => outer.render_view(),
            None => contents.render_view(),
        }
    }
}

impl WindowObserver for ViewCoordinator {
    /// Ignored once the window is gone.
    fn on_window_resize(&self) {
        if !self.binding.is_bound() {
            log::trace!("ViewCoordinator[{:?}]: resize without a window, ignoring", self.observer_id());
            return;
        }
        self.apply_size();
    }

    fn on_window_closed(&self) {
        log::debug!("ViewCoordinator[{:?}]: window closed", self.observer_id());
        self.binding.unbind();
    }
}

impl WebContentsView for ViewCoordinator {
    type View = OffscreenRenderView;

    fn native_view(&self) -> Option<RawWindowHandle> {
        self.binding.native_view()
    }

    fn content_native_view(&self) -> Option<RawWindowHandle> {
        self.binding.native_view()
    }

    fn top_level_native_window(&self) -> Option<RawWindowHandle> {
        self.binding.native_window()
    }

    fn container_bounds(&self) -> Rect {
        self.view_bounds()
    }

    fn view_bounds(&self) -> Rect {
        self.view().map(|view| view.view_bounds()).unwrap_or_default()
    }

    fn size_contents(&self, _size: Size) {}

    // Off-screen views have no native focus.
    fn focus(&self) {}
    fn set_initial_focus(&self) {}
    fn store_focus(&self) {}
    fn restore_focus(&self) {}
    fn focus_through_tab_traversal(&self, _reverse: bool) {}

    fn drop_data(&self) -> Option<DropData> {
        None
    }

    fn create_view(&self, _initial_size: Size) {}

    fn create_view_for_widget(&self, widget: &Rc<dyn RenderWidgetHost>) -> Result<Rc<OffscreenRenderView>, ViewError> {
        self.factory
            .create_for_widget(widget, self.cache.painting(), self.frame_rate(), self.size())
    }

    fn create_view_for_popup_widget(
        &self,
        widget: &Rc<dyn RenderWidgetHost>,
    ) -> Result<Rc<OffscreenRenderView>, ViewError> {
        let parent = self.popup_parent().ok_or(ViewError::MissingParentView(widget.id()))?;
        Ok(self.factory.create_for_popup(widget, parent, self.size()))
    }

    fn set_page_title(&self, _title: &str) {}

    fn render_view_created(&self) {
        if let Some(view) = self.view() {
            view.install_transparency();
        }

        if let Some(contents) = self.web_contents() {
            contents.render_view_created();
            self.platform.on_render_view_created(contents.as_ref());
        }
    }

    fn render_view_ready(&self) {}

    fn render_view_host_changed(&self, _old_host: Option<&dyn RenderWidgetHost>, _new_host: &dyn RenderWidgetHost) {}

    fn set_overscroll_controller_enabled(&self, _enabled: bool) {}

    fn start_dragging(
        &self,
        drop_data: DropData,
        allowed_ops: DragOperations,
        image: DragImage,
        image_offset: Vector2d,
        source_info: DragEventSourceInfo,
        source_widget: &dyn RenderWidgetHost,
    ) -> DragOutcome {
        let session = DragSession {
            drop_data,
            allowed_ops,
            image,
            image_offset,
        };

        drag::start_dragging(self.web_contents().as_deref(), session, source_info, source_widget)
    }

    fn update_drag_cursor(&self, _operation: DragOperations) {}
}

impl Drop for ViewCoordinator {
    fn drop(&mut self) {
        self.binding.unbind();
        self.platform.on_destroy();
        log::debug!("ViewCoordinator[{:?}]: destroyed", self.binding.observer_id());
    }
}

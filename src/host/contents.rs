use crate::drag::DragSessionSink;
use crate::host::RenderWidgetHost;
use crate::render::RenderView;
use std::rc::Rc;

/// The hosted page as seen by the off-screen coordinator.
pub trait WebContents {
    /// View of the main widget, if the host created one yet.
    fn render_view(&self) -> Option<Rc<dyn RenderView>>;

    /// Embedding contents when these contents are a guest view.
    fn outer_contents(&self) -> Option<Rc<dyn WebContents>>;

    fn delegate(&self) -> Option<Rc<dyn WebContentsDelegate>>;

    /// Host hook fired once per attachment, after the coordinator has
    /// configured the current view.
    fn render_view_created(&self);

    /// Tells the host the system-level drag started by `source` is over.
    fn system_drag_ended(&self, source: &dyn RenderWidgetHost);
}

/// Optional collaborator of a [`WebContents`] that can intercept behaviour.
pub trait WebContentsDelegate {
    /// Capability to take over drag sessions started in off-screen mode.
    fn offscreen_drag_sink(&self) -> Option<&dyn DragSessionSink> {
        None
    }
}

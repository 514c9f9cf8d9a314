use crate::render::RenderView;
use std::rc::Rc;
use uuid::Uuid;

/// Opaque identifier of a host-managed widget (main frame, sub-frame or popup).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(Uuid);

impl WidgetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// A render target inside a page, owned by the host.
///
/// The widget holds the view attached to it; views only keep a weak
/// reference back.
pub trait RenderWidgetHost {
    fn id(&self) -> WidgetId;

    /// The view currently attached to this widget, if any.
    fn view(&self) -> Option<Rc<dyn RenderView>>;

    fn set_view(&self, view: Option<Rc<dyn RenderView>>);
}

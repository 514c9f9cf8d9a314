use crate::drag::{DragEventSourceInfo, DragImage, DragOperations, DragOutcome, DropData};
use crate::errors::ViewError;
use crate::host::RenderWidgetHost;
use crate::render::{Rect, RenderView, Size, Vector2d};
use raw_window_handle::RawWindowHandle;
use std::rc::Rc;

/// What the rendering host expects from the view of a web contents.
pub trait WebContentsView {
    type View: RenderView;

    fn native_view(&self) -> Option<RawWindowHandle>;
    fn content_native_view(&self) -> Option<RawWindowHandle>;
    fn top_level_native_window(&self) -> Option<RawWindowHandle>;

    fn container_bounds(&self) -> Rect;
    fn view_bounds(&self) -> Rect;
    fn size_contents(&self, size: Size);

    fn focus(&self);
    fn set_initial_focus(&self);
    fn store_focus(&self);
    fn restore_focus(&self);
    fn focus_through_tab_traversal(&self, reverse: bool);

    fn drop_data(&self) -> Option<DropData>;

    fn create_view(&self, initial_size: Size);
    fn create_view_for_widget(&self, widget: &Rc<dyn RenderWidgetHost>) -> Result<Rc<Self::View>, ViewError>;
    fn create_view_for_popup_widget(&self, widget: &Rc<dyn RenderWidgetHost>) -> Result<Rc<Self::View>, ViewError>;

    fn set_page_title(&self, title: &str);
    fn render_view_created(&self);
    fn render_view_ready(&self);
    fn render_view_host_changed(&self, old_host: Option<&dyn RenderWidgetHost>, new_host: &dyn RenderWidgetHost);
    fn set_overscroll_controller_enabled(&self, enabled: bool);

    fn start_dragging(
        &self,
        drop_data: DropData,
        allowed_ops: DragOperations,
        image: DragImage,
        image_offset: Vector2d,
        source_info: DragEventSourceInfo,
        source_widget: &dyn RenderWidgetHost,
    ) -> DragOutcome;
    fn update_drag_cursor(&self, operation: DragOperations);
}

use crate::errors::ViewError;
use crate::host::RenderWidgetHost;
use crate::render::{OffscreenRenderView, OffscreenViewParams, PaintCallback, RenderView, Size};
use std::rc::Rc;

/// Builds the render views of one coordinator.
///
/// Every view gets the coordinator's transparency flag and paint callback.
/// Primary views take the painting state and frame rate handed in by the
/// coordinator; popups always paint and follow their parent's frame rate.
pub(crate) struct RenderViewFactory {
    transparent: bool,
    callback: PaintCallback,
}

impl RenderViewFactory {
    pub(crate) fn new(transparent: bool, callback: PaintCallback) -> Self {
        Self { transparent, callback }
    }

    /// Returns the widget's view if it has one, otherwise creates it.
    pub(crate) fn create_for_widget(
        &self,
        widget: &Rc<dyn RenderWidgetHost>,
        painting: bool,
        frame_rate: u32,
        size: Size,
    ) -> Result<Rc<OffscreenRenderView>, ViewError> {
        if let Some(existing) = widget.view() {
            return downcast_view(&**widget, existing);
        }

        Ok(OffscreenRenderView::new(OffscreenViewParams {
            transparent: self.transparent,
            painting,
            frame_rate,
            callback: self.callback.clone(),
            widget: widget.clone(),
            parent: None,
            size,
        }))
    }

    /// Always creates a new popup view under `parent`.
    pub(crate) fn create_for_popup(
        &self,
        widget: &Rc<dyn RenderWidgetHost>,
        parent: Rc<dyn RenderView>,
        size: Size,
    ) -> Rc<OffscreenRenderView> {
        OffscreenRenderView::new(OffscreenViewParams {
            transparent: self.transparent,
            painting: true,
            frame_rate: parent.frame_rate(),
            callback: self.callback.clone(),
            widget: widget.clone(),
            parent: Some(parent),
            size,
        })
    }
}

/// All views of a widget are expected to come from an off-screen coordinator.
fn downcast_view(
    widget: &dyn RenderWidgetHost,
    view: Rc<dyn RenderView>,
) -> Result<Rc<OffscreenRenderView>, ViewError> {
    let view_id = view.id();
    view.as_any_rc().downcast::<OffscreenRenderView>().map_err(|_| {
        log::warn!("ViewFactory: widget {:?} carries foreign view {:?}", widget.id(), view_id);
        ViewError::ForeignView {
            widget: widget.id(),
            view: view_id,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessWidget;
    use crate::render::Frame;

    fn factory(transparent: bool) -> RenderViewFactory {
        RenderViewFactory::new(transparent, Rc::new(|_: &Frame| -> anyhow::Result<()> { Ok(()) }))
    }

    #[test]
    fn primary_view_takes_the_given_state() {
        let widget: Rc<dyn RenderWidgetHost> = HeadlessWidget::new();

        let view = factory(true).create_for_widget(&widget, false, 12, Size::new(10, 20)).unwrap();

        assert!(view.is_transparent());
        assert!(!view.is_painting());
        assert_eq!(view.frame_rate(), 12);
        assert_eq!(view.view_bounds().size(), Size::new(10, 20));
        assert!(view.parent().is_none());
    }

    #[test]
    fn popup_ignores_the_primary_state() {
        let factory = factory(false);
        let main: Rc<dyn RenderWidgetHost> = HeadlessWidget::new();
        let parent = factory.create_for_widget(&main, false, 30, Size::new(100, 100)).unwrap();
        parent.set_frame_rate(60);

        let popup_widget: Rc<dyn RenderWidgetHost> = HeadlessWidget::new();
        let popup = factory.create_for_popup(&popup_widget, parent.clone(), Size::new(100, 100));

        assert!(popup.is_painting());
        assert_eq!(popup.frame_rate(), 60);
        assert!(!popup.is_transparent());
    }

    #[test]
    fn existing_view_is_returned_untouched() {
        let factory = factory(false);
        let widget: Rc<dyn RenderWidgetHost> = HeadlessWidget::new();
        let first = factory.create_for_widget(&widget, true, 30, Size::new(10, 10)).unwrap();

        let second = factory.create_for_widget(&widget, false, 90, Size::new(20, 20)).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.frame_rate(), 30);
        assert!(second.is_painting());
    }
}

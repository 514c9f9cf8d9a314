//! Drag handoff for off-screen contents.
//!
//! An off-screen view has no native surface to draw drag feedback on, so a
//! drag started by the page is either handed to the contents' delegate (when
//! it can take over drag sessions) or ended on the spot. A drag is never left
//! running without an owner.

use crate::host::{RenderWidgetHost, WebContents};
use crate::render::{Point, Size, Vector2d};
use bitflags::bitflags;
use std::cell::RefCell;
use std::fmt::Display;

bitflags! {
    /// Operations the drag source allows.
    pub struct DragOperations: u32 {
        const COPY    = 0b0000_0001;
        const LINK    = 0b0000_0010;
        const GENERIC = 0b0000_0100;
        const PRIVATE = 0b0000_1000;
        const MOVE    = 0b0001_0000;
        const DELETE  = 0b0010_0000;
    }
}

impl Display for DragOperations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            (DragOperations::COPY, "Copy"),
            (DragOperations::LINK, "Link"),
            (DragOperations::GENERIC, "Generic"),
            (DragOperations::PRIVATE, "Private"),
            (DragOperations::MOVE, "Move"),
            (DragOperations::DELETE, "Delete"),
        ];

        let parts: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Payload of a drag started by the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropData {
    pub url: Option<String>,
    pub url_title: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub filenames: Vec<String>,
}

/// Feedback image for a drag, RGBA8.
#[derive(Clone, Default, PartialEq)]
pub struct DragImage {
    pub pixels: Vec<u8>,
    pub size: Size,
}

impl std::fmt::Debug for DragImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragImage")
            .field("size", &self.size)
            .field("len", &self.pixels.len())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragEventSource {
    #[default]
    Mouse,
    Touch,
}

/// Where and how the drag was started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragEventSourceInfo {
    pub location: Point,
    pub source: DragEventSource,
}

/// Everything a delegate needs to run a drag on behalf of an off-screen view.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub drop_data: DropData,
    pub allowed_ops: DragOperations,
    pub image: DragImage,
    pub image_offset: Vector2d,
}

/// Delegate capability for taking over off-screen drag sessions.
///
/// The sink becomes responsible for drag feedback and for eventually
/// resolving the drag.
pub trait DragSessionSink {
    fn begin_drag(&self, session: DragSession);
}

/// A [`DragSessionSink`] that parks the session until the embedder collects it.
#[derive(Default)]
pub struct DragCapture {
    pending: RefCell<Option<DragSession>>,
}

impl DragCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn pending(&self) -> Option<DragSession> {
        self.pending.borrow().clone()
    }

    /// Takes the pending session, ending the capture.
    pub fn take(&self) -> Option<DragSession> {
        self.pending.borrow_mut().take()
    }
}

impl DragSessionSink for DragCapture {
    fn begin_drag(&self, session: DragSession) {
        *self.pending.borrow_mut() = Some(session);
    }
}

/// How a drag start was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The delegate took the session.
    HandedOff,
    /// The drag was ended through the host.
    EndedLocally,
    /// No contents attached; nothing to hand off to or end.
    Dropped,
}

/// Routes a drag start to the delegate capability of `contents`, or ends it.
pub(crate) fn start_dragging(
    contents: Option<&dyn WebContents>,
    session: DragSession,
    source_info: DragEventSourceInfo,
    source_widget: &dyn RenderWidgetHost,
) -> DragOutcome {
    let Some(contents) = contents else {
        log::debug!("DragHandoff: no contents attached, ignoring drag from widget {:?}", source_widget.id());
        return DragOutcome::Dropped;
    };

    if let Some(delegate) = contents.delegate() {
        if let Some(sink) = delegate.offscreen_drag_sink() {
            log::debug!(
                "DragHandoff: handing drag ({}) from widget {:?} at {:?} to delegate",
                session.allowed_ops,
                source_widget.id(),
                source_info.location
            );
            sink.begin_drag(session);
            return DragOutcome::HandedOff;
        }
    }

    log::debug!("DragHandoff: no drag sink, ending drag from widget {:?}", source_widget.id());
    contents.system_drag_ended(source_widget);
    DragOutcome::EndedLocally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HeadlessContents, HeadlessWidget, WebContentsDelegate};
    use std::rc::Rc;

    struct CapturingDelegate {
        capture: DragCapture,
    }

    impl WebContentsDelegate for CapturingDelegate {
        fn offscreen_drag_sink(&self) -> Option<&dyn DragSessionSink> {
            Some(&self.capture)
        }
    }

    struct PlainDelegate;

    impl WebContentsDelegate for PlainDelegate {}

    fn session() -> DragSession {
        DragSession {
            drop_data: DropData {
                text: Some("dragged".into()),
                ..Default::default()
            },
            allowed_ops: DragOperations::COPY | DragOperations::MOVE,
            image: DragImage {
                pixels: vec![255; 4 * 4 * 4],
                size: Size::new(4, 4),
            },
            image_offset: Vector2d::new(-2, -2),
        }
    }

    #[test]
    fn capable_delegate_receives_the_session() {
        let contents = HeadlessContents::new();
        let delegate = Rc::new(CapturingDelegate { capture: DragCapture::new() });
        contents.set_delegate(Some(delegate.clone()));
        let widget = HeadlessWidget::new();

        let outcome = start_dragging(Some(&*contents), session(), DragEventSourceInfo::default(), &*widget);

        assert_eq!(outcome, DragOutcome::HandedOff);
        assert_eq!(delegate.capture.pending(), Some(session()));
        assert!(contents.ended_drags().is_empty());
    }

    #[test]
    fn missing_delegate_ends_the_drag_once() {
        let contents = HeadlessContents::new();
        let widget = HeadlessWidget::new();

        let outcome = start_dragging(Some(&*contents), session(), DragEventSourceInfo::default(), &*widget);

        assert_eq!(outcome, DragOutcome::EndedLocally);
        assert_eq!(contents.ended_drags(), vec![widget.id()]);
    }

    #[test]
    fn delegate_without_capability_ends_the_drag() {
        let contents = HeadlessContents::new();
        contents.set_delegate(Some(Rc::new(PlainDelegate)));
        let widget = HeadlessWidget::new();

        let outcome = start_dragging(Some(&*contents), session(), DragEventSourceInfo::default(), &*widget);

        assert_eq!(outcome, DragOutcome::EndedLocally);
        assert_eq!(contents.ended_drags().len(), 1);
    }

    #[test]
    fn capture_take_clears_the_session() {
        let capture = DragCapture::new();
        capture.begin_drag(session());
        assert!(capture.is_dragging());
        assert_eq!(capture.take(), Some(session()));
        assert!(!capture.is_dragging());
    }

    #[test]
    fn operations_display() {
        assert_eq!(DragOperations::empty().to_string(), "None");
        assert_eq!((DragOperations::COPY | DragOperations::MOVE).to_string(), "Copy+Move");
    }
}

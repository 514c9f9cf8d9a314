//! Contracts of the collaborators the coordinator works with, plus headless
//! implementations of them.
//!
//! - [`NativeWindow`] / [`WindowObserver`]: window size, native handles and lifecycle events.
//! - [`RenderWidgetHost`]: a widget that a render view gets attached to.
//! - [`WebContents`] / [`WebContentsDelegate`]: the hosted page and its optional delegate.

mod contents;
mod headless;
mod widget;
mod window;

pub use contents::{WebContents, WebContentsDelegate};
pub use headless::{HeadlessContents, HeadlessWidget, HeadlessWindow};
pub use widget::{RenderWidgetHost, WidgetId};
pub use window::{NativeWindow, ObserverId, WindowObserver, WindowObservers};

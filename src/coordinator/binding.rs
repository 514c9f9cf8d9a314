use crate::host::{NativeWindow, ObserverId, WindowObserver};
use crate::render::Size;
use raw_window_handle::RawWindowHandle;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Non-owning link between a coordinator and at most one native window.
///
/// Binding a window registers the observer under a fixed [`ObserverId`];
/// unbinding (explicitly, on rebind, on close or on drop of the binding)
/// removes that registration again.
pub(crate) struct NativeWindowBinding {
    observer_id: ObserverId,
    window: RefCell<Option<Weak<dyn NativeWindow>>>,
}

impl NativeWindowBinding {
    pub(crate) fn new() -> Self {
        Self {
            observer_id: ObserverId::new(),
            window: RefCell::new(None),
        }
    }

    pub(crate) fn observer_id(&self) -> ObserverId {
        self.observer_id
    }

    /// Replaces the bound window, moving the observer registration along.
    pub(crate) fn bind(&self, window: Option<&Rc<dyn NativeWindow>>, observer: Weak<dyn WindowObserver>) {
        self.unbind();

        if let Some(window) = window {
            window.add_observer(self.observer_id, observer);
            *self.window.borrow_mut() = Some(Rc::downgrade(window));
            log::debug!("WindowBinding[{:?}]: bound window of size {:?}", self.observer_id, window.size());
        }
    }

    /// Drops the registration and the reference, if any.
    pub(crate) fn unbind(&self) {
        let previous = self.window.borrow_mut().take();
        if let Some(window) = previous.and_then(|weak| weak.upgrade()) {
            window.remove_observer(self.observer_id);
            log::debug!("WindowBinding[{:?}]: unbound window", self.observer_id);
        }
    }

    /// The bound window while it is alive.
    ///
    /// A window that went away without a close notification is forgotten here.
    pub(crate) fn window(&self) -> Option<Rc<dyn NativeWindow>> {
        let upgraded = self.window.borrow().as_ref().map(Weak::upgrade);
        match upgraded {
            Some(Some(window)) => Some(window),
            Some(None) => {
                log::warn!("WindowBinding[{:?}]: window dropped without close, clearing", self.observer_id);
                *self.window.borrow_mut() = None;
                None
            }
            None => None,
        }
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.window().is_some()
    }

    pub(crate) fn size(&self) -> Size {
        self.window().map(|window| window.size()).unwrap_or_default()
    }

    pub(crate) fn native_view(&self) -> Option<RawWindowHandle> {
        self.window().and_then(|window| window.native_view())
    }

    pub(crate) fn native_window(&self) -> Option<RawWindowHandle> {
        self.window().and_then(|window| window.native_window())
    }
}

impl Drop for NativeWindowBinding {
    fn drop(&mut self) {
        self.unbind();
    }
}

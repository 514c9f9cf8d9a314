use crate::render::Size;
use raw_window_handle::RawWindowHandle;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Identifies one registration in a window's observer list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(Uuid);

impl ObserverId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObserverId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle notifications delivered by a [`NativeWindow`].
pub trait WindowObserver {
    fn on_window_resize(&self);
    fn on_window_closed(&self);
}

/// Native window abstraction the coordinator binds to but never owns.
pub trait NativeWindow {
    fn size(&self) -> Size;

    fn native_view(&self) -> Option<RawWindowHandle>;
    fn native_window(&self) -> Option<RawWindowHandle>;

    /// Registers `observer` under `id`, replacing any earlier registration with that id.
    fn add_observer(&self, id: ObserverId, observer: Weak<dyn WindowObserver>);
    fn remove_observer(&self, id: ObserverId);
}

/// Observer list for [`NativeWindow`] implementations.
///
/// Holds observers weakly. Notification works on a snapshot so an observer
/// may unregister itself (or others) while being notified.
#[derive(Default)]
pub struct WindowObservers {
    entries: RefCell<Vec<(ObserverId, Weak<dyn WindowObserver>)>>,
}

impl WindowObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, id: ObserverId, observer: Weak<dyn WindowObserver>) {
        let mut entries = self.entries.borrow_mut();
        entries.retain(|(existing, _)| *existing != id);
        entries.push((id, observer));
    }

    pub fn remove(&self, id: ObserverId) {
        self.entries.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.entries.borrow().iter().any(|(existing, _)| *existing == id)
    }

    /// Number of registrations whose observer is still alive.
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, observer)| observer.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn notify_resize(&self) {
        for observer in self.snapshot() {
            observer.on_window_resize();
        }
    }

    pub fn notify_closed(&self) {
        for observer in self.snapshot() {
            observer.on_window_closed();
        }
    }

    fn snapshot(&self) -> Vec<Rc<dyn WindowObserver>> {
        let mut entries = self.entries.borrow_mut();
        entries.retain(|(_, observer)| observer.strong_count() > 0);
        entries.iter().filter_map(|(_, observer)| observer.upgrade()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Counting {
        resized: Cell<usize>,
        closed: Cell<usize>,
    }

    impl WindowObserver for Counting {
        fn on_window_resize(&self) {
            self.resized.set(self.resized.get() + 1);
        }
        fn on_window_closed(&self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    fn weak(observer: &Rc<Counting>) -> Weak<dyn WindowObserver> {
        let observer: Rc<dyn WindowObserver> = observer.clone();
        Rc::downgrade(&observer)
    }

    #[test]
    fn re_adding_an_id_replaces_the_registration() {
        let list = WindowObservers::new();
        let a = Rc::new(Counting::default());
        let id = ObserverId::new();

        list.add(id, weak(&a));
        list.add(id, weak(&a));
        assert_eq!(list.len(), 1);

        list.notify_resize();
        assert_eq!(a.resized.get(), 1);
    }

    #[test]
    fn removed_observers_are_not_notified() {
        let list = WindowObservers::new();
        let a = Rc::new(Counting::default());
        let id = ObserverId::new();

        list.add(id, weak(&a));
        list.remove(id);
        list.notify_closed();

        assert_eq!(a.closed.get(), 0);
        assert!(!list.contains(id));
    }

    #[test]
    fn dropped_observers_are_pruned() {
        let list = WindowObservers::new();
        let a = Rc::new(Counting::default());
        list.add(ObserverId::new(), weak(&a));
        drop(a);

        assert!(list.is_empty());
        list.notify_resize();
    }

    struct SelfRemoving {
        id: ObserverId,
        list: Rc<WindowObservers>,
        closed: Cell<bool>,
    }

    impl WindowObserver for SelfRemoving {
        fn on_window_resize(&self) {}
        fn on_window_closed(&self) {
            self.list.remove(self.id);
            self.closed.set(true);
        }
    }

    #[test]
    fn observers_may_unregister_during_notification() {
        let list = Rc::new(WindowObservers::new());
        let id = ObserverId::new();
        let observer = Rc::new(SelfRemoving { id, list: list.clone(), closed: Cell::new(false) });
        let as_dyn: Rc<dyn WindowObserver> = observer.clone();
        list.add(id, Rc::downgrade(&as_dyn));

        list.notify_closed();

        assert!(observer.closed.get());
        assert!(!list.contains(id));
    }
}

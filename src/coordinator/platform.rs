use crate::host::WebContents;

/// Per-platform extras around a coordinator's lifetime.
///
/// Some platforms need to set up native state when an off-screen view is
/// created, tear it down afterwards, or tell the renderer it is running
/// off-screen once a view exists. Those steps live behind this trait instead
/// of being conditionally compiled into the coordinator.
pub trait PlatformHooks {
    fn on_create(&self) {}

    fn on_destroy(&self) {}

    /// Runs after the host hook whenever contents get attached.
    fn on_render_view_created(&self, _contents: &dyn WebContents) {}
}

/// Hooks for platforms that need none.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPlatformHooks;

impl PlatformHooks for NoopPlatformHooks {}

use crate::host::WidgetId;
use crate::render::ViewId;

/// Errors raised by the render view factory.
///
/// Everything else in the coordinator treats a missing collaborator as a
/// well-defined default; these two cases are broken host preconditions.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Widget {widget:?} already carries view {view:?} that was not created off-screen")]
    ForeignView { widget: WidgetId, view: ViewId },

    #[error("No parent view available for popup widget {0:?}")]
    MissingParentView(WidgetId),
}

/// Errors raised while loading or validating a [`ViewConfig`](crate::config::ViewConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("frame_rate must be at least 1")]
    ZeroFrameRate,

    #[error("frame_rate {0} is out of range (expected 1..={})", crate::render::MAX_FRAME_RATE)]
    FrameRateTooHigh(u32),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

use crate::config::ViewConfig;
use std::cell::Cell;

/// Paint configuration held while no render view exists.
///
/// Mirrors the configuration surface of a render view. The factory copies it
/// into a view exactly once, at construction; after that the view is
/// authoritative and these values go stale until a view has to be created
/// again.
#[derive(Debug)]
pub(crate) struct PaintStateCache {
    transparent: bool,
    painting: Cell<bool>,
    frame_rate: Cell<u32>,
}

impl PaintStateCache {
    pub(crate) fn new(config: &ViewConfig) -> Self {
        Self {
            transparent: config.transparent,
            painting: Cell::new(config.painting_enabled),
            frame_rate: Cell::new(config.frame_rate),
        }
    }

    pub(crate) fn transparent(&self) -> bool {
        self.transparent
    }

    pub(crate) fn painting(&self) -> bool {
        self.painting.get()
    }

    pub(crate) fn set_painting(&self, painting: bool) {
        self.painting.set(painting);
    }

    pub(crate) fn frame_rate(&self) -> u32 {
        self.frame_rate.get()
    }

    pub(crate) fn set_frame_rate(&self, frame_rate: u32) {
        self.frame_rate.set(frame_rate);
    }
}

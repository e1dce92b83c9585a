use crate::command::DrawList;
use crate::viewport::Viewport;

/// A drawing surface that records the most recent submitted frame.
///
/// This is the reference host adapter: tests and the headless demo submit
/// frames here; a real raster or terminal backend would interpret the same
/// `DrawList`. The surface is exclusively owned by one renderer at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    viewport: Viewport,
    frames_submitted: u64,
    last_frame: Option<DrawList>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames_submitted: 0,
            last_frame: None,
        }
    }

    /// The host calls this when its layout changes; renderers pick the new
    /// size up on their next frame.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the surface contents with one frame's commands.
    pub fn submit(&mut self, frame: DrawList) {
        self.frames_submitted += 1;
        self.last_frame = Some(frame);
    }

    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }

    pub fn last_frame(&self) -> Option<&DrawList> {
        self.last_frame.as_ref()
    }
}

use crate::metrics::Metrics;

/// Drives a renderer's continuous draw cycle, one callback per host refresh
/// tick, with clean cancellation.
///
/// Contract:
/// - The callback runs at most once per `tick`; the next tick is not accepted
///   until the callback returns (frames are strictly sequential).
/// - `stop` is idempotent. After it, no further callback runs no matter how
///   many ticks elapse.
/// - A tick without an attached drawing surface is skipped silently; the loop
///   never panics on an absent surface and recovers on the next mount.
///
/// The callback receives no time argument: each renderer owns its own
/// fixed-step clock (see `foundation::time::Clock`).
#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    frame_index: u64,
    draws: u64,
    metrics: Metrics,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the loop. Ticks before `start` are ignored.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Cancels the loop. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 0-based index of the next frame to draw.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Total callbacks actually invoked. Stays constant after `stop`.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }

    /// One host refresh tick.
    ///
    /// Runs `draw` on the surface when the loop is armed and a surface is
    /// attached; returns whether a draw happened.
    pub fn tick<S, F>(&mut self, surface: Option<&mut S>, draw: F) -> bool
    where
        F: FnOnce(&mut S),
    {
        if !self.running {
            return false;
        }
        let Some(surface) = surface else {
            self.metrics.inc_counter("frames.skipped", 1);
            return false;
        };

        draw(surface);
        self.frame_index = self.frame_index.wrapping_add(1);
        self.draws += 1;
        self.metrics.inc_counter("frames.rendered", 1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::FrameLoop;

    struct FakeSurface {
        draws_seen: u32,
    }

    #[test]
    fn ticks_before_start_are_ignored() {
        let mut frame_loop = FrameLoop::new();
        let mut surface = FakeSurface { draws_seen: 0 };
        let ran = frame_loop.tick(Some(&mut surface), |s| s.draws_seen += 1);
        assert!(!ran);
        assert_eq!(surface.draws_seen, 0);
    }

    #[test]
    fn draws_once_per_tick_with_monotonic_index() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        let mut surface = FakeSurface { draws_seen: 0 };

        for expected in 1..=3u64 {
            assert!(frame_loop.tick(Some(&mut surface), |s| s.draws_seen += 1));
            assert_eq!(frame_loop.frame_index(), expected);
        }
        assert_eq!(surface.draws_seen, 3);
        assert_eq!(frame_loop.metrics().counter("frames.rendered"), 3);
    }

    #[test]
    fn absent_surface_skips_without_panic() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        let ran = frame_loop.tick(None::<&mut FakeSurface>, |_| {});
        assert!(!ran);
        assert_eq!(frame_loop.draws(), 0);
        assert_eq!(frame_loop.metrics().counter("frames.skipped"), 1);

        // Recovers on the next successful mount.
        let mut surface = FakeSurface { draws_seen: 0 };
        assert!(frame_loop.tick(Some(&mut surface), |s| s.draws_seen += 1));
    }

    #[test]
    fn stop_is_idempotent_and_final() {
        let mut frame_loop = FrameLoop::new();
        frame_loop.start();
        let mut surface = FakeSurface { draws_seen: 0 };
        frame_loop.tick(Some(&mut surface), |s| s.draws_seen += 1);

        frame_loop.stop();
        frame_loop.stop();
        let draws_at_cancel = frame_loop.draws();

        for _ in 0..5 {
            assert!(!frame_loop.tick(Some(&mut surface), |s| s.draws_seen += 1));
        }
        assert_eq!(frame_loop.draws(), draws_at_cancel);
        assert_eq!(surface.draws_seen, 1);
    }
}

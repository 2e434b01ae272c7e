//! Sentinel visibility sensing.
//!
//! The sentinel is a marker placed after the last rendered item. When at
//! least [`SENTINEL_THRESHOLD`] of it is inside the viewport the observer
//! fires once; it fires again only after leaving the viewport or after the
//! owner re-arms it (which the list controller does after every completed
//! fetch, so a sentinel that stays visible keeps pulling pages).

/// Fraction of the sentinel that must be visible to count as intersecting.
pub const SENTINEL_THRESHOLD: f32 = 0.1;

/// A window of rows currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub offset: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(offset: usize, height: usize) -> Self {
        Self { offset, height }
    }

    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.height)
    }
}

/// Visible fraction of a sentinel spanning `len` rows starting at `start`.
pub fn sentinel_ratio(viewport: Viewport, start: usize, len: usize) -> f32 {
    if len == 0 || viewport.height == 0 {
        return 0.0;
    }
    let end = start.saturating_add(len);
    let visible_start = start.max(viewport.offset);
    let visible_end = end.min(viewport.end());
    if visible_end <= visible_start {
        return 0.0;
    }
    (visible_end - visible_start) as f32 / len as f32
}

/// Observer attached to a single sentinel.
#[derive(Debug)]
pub struct SentinelObserver {
    threshold: f32,
    intersecting: bool,
    connected: bool,
}

impl SentinelObserver {
    pub fn connect(threshold: f32) -> Self {
        tracing::trace!(threshold, "sentinel observer connected");
        Self {
            threshold,
            intersecting: false,
            connected: true,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Feed the current visible fraction. Returns `true` when the callback
    /// should run: the sentinel just crossed into view.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if !self.connected {
            return false;
        }
        let now = ratio > 0.0 && ratio >= self.threshold;
        let fire = now && !self.intersecting;
        self.intersecting = now;
        fire
    }

    /// Forget the last observation so a still-visible sentinel fires again.
    pub fn rearm(&mut self) {
        self.intersecting = false;
    }

    pub fn disconnect(&mut self) {
        if self.connected {
            tracing::trace!("sentinel observer disconnected");
        }
        self.connected = false;
        self.intersecting = false;
    }
}

impl Drop for SentinelObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

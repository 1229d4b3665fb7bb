//! Deterministic host and clock for driving a [`TypewriterLoop`] in tests.
//!
//! [`FakeHost`] records every text write, frame request, cancellation and
//! listener change. [`FrameClock`] plays the part of the display refresh:
//! the test advances it explicitly and delivers frames one at a time.

use core::time::Duration;

use crate::host::Host;
use crate::runner::{TickOutcome, TypewriterLoop};

/// Failure injected into a [`FakeHost`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FakeHostError {
    #[error("frame scheduling refused")]
    FrameRefused,
    #[error("listener registration refused")]
    ListenersRefused,
}

/// In-memory [`Host`].
#[derive(Debug, Default, Clone)]
pub struct FakeHost {
    hidden: bool,
    text: String,
    writes: Vec<String>,
    next_handle: u32,
    pending: Option<u32>,
    frame_requests: usize,
    cancelled: Vec<u32>,
    listening: bool,
    detach_calls: usize,
    fail_frames: bool,
    fail_listeners: bool,
}

impl FakeHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the page being hidden or shown. Does not notify the loop;
    /// call [`TypewriterLoop::on_visibility_change`] for that.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn fail_frames(&mut self, fail: bool) {
        self.fail_frames = fail;
    }

    pub fn fail_listeners(&mut self, fail: bool) {
        self.fail_listeners = fail;
    }

    /// Current element text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Every value written to the element, in order.
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Successful and refused frame requests combined.
    #[must_use]
    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    /// Handle of the frame that would fire next.
    #[must_use]
    pub fn pending_frame(&self) -> Option<u32> {
        self.pending
    }

    #[must_use]
    pub fn cancelled(&self) -> &[u32] {
        &self.cancelled
    }

    #[must_use]
    pub fn has_listeners(&self) -> bool {
        self.listening
    }

    #[must_use]
    pub fn detach_calls(&self) -> usize {
        self.detach_calls
    }
}

impl Host for FakeHost {
    type FrameHandle = u32;
    type Error = FakeHostError;

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes.push(text.to_owned());
    }

    fn request_frame(&mut self) -> Result<u32, FakeHostError> {
        self.frame_requests += 1;
        if self.fail_frames {
            return Err(FakeHostError::FrameRefused);
        }
        self.next_handle += 1;
        self.pending = Some(self.next_handle);
        Ok(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: u32) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled.push(handle);
    }

    fn attach_listeners(&mut self) -> Result<(), FakeHostError> {
        if self.fail_listeners {
            return Err(FakeHostError::ListenersRefused);
        }
        self.listening = true;
        Ok(())
    }

    fn detach_listeners(&mut self) {
        self.listening = false;
        self.detach_calls += 1;
    }
}

/// Host-controlled monotonic frame clock.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    now: Duration,
}

impl FrameClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Set current monotonic time.
    pub fn set(&mut self, now: Duration) {
        self.now = now;
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Deliver the pending frame at the current time.
    ///
    /// Returns [`TickOutcome::Stop`] without touching the loop when no frame
    /// is pending, mirroring a browser that has nothing queued.
    pub fn fire(&self, lp: &mut TypewriterLoop<FakeHost>) -> TickOutcome {
        if lp.host_mut().pending.take().is_none() {
            return TickOutcome::Stop;
        }
        lp.on_frame(self.now)
    }

    /// Deliver up to `frames` frames spaced `dt` apart, starting with one at
    /// the current time. Stops early when nothing is pending or the loop
    /// stops; returns the number of frames delivered.
    pub fn run(&mut self, lp: &mut TypewriterLoop<FakeHost>, dt: Duration, frames: usize) -> usize {
        for delivered in 0..frames {
            if delivered > 0 {
                self.advance(dt);
            }
            if lp.host().pending_frame().is_none() {
                return delivered;
            }
            if self.fire(lp) == TickOutcome::Stop {
                return delivered + 1;
            }
        }
        frames
    }
}

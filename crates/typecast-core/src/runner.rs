//! Typewriter loop: mount, per-frame, visibility and teardown contracts.
//!
//! [`TypewriterLoop`] pairs a [`Typewriter`] with a [`Host`] and owns the
//! pending frame handle. The host's frame callback calls
//! [`TypewriterLoop::on_frame`], which advances the machine, renders, and
//! re-arms. The returned [`TickOutcome`] tells the caller whether another
//! frame is pending, so a harness can stop after any number of frames.
//!
//! # Invariants
//!
//! 1. [`TypewriterLoop::is_scheduled`] is true iff a frame handle is held.
//! 2. [`TypewriterLoop::teardown`] is idempotent.
//! 3. A frame delivered while unscheduled is ignored and yields
//!    [`TickOutcome::Stop`].
//! 4. Host failures are logged and never surfaced.

use core::time::Duration;

use tracing::{debug, warn};

use crate::config::TypewriterConfig;
use crate::host::Host;
use crate::motion::MotionPreference;
use crate::typewriter::{Step, Typewriter};

/// Whether the loop re-armed itself after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Another frame is scheduled.
    Continue,
    /// Nothing is scheduled; the loop is idle until remounted.
    Stop,
}

/// Result of mounting a typewriter.
#[derive(Debug)]
pub enum Mount<H: Host> {
    /// No mount element; nothing happened.
    Absent,
    /// No phrases to show; the element was left untouched.
    Idle(H),
    /// Reduced motion: the first phrase was rendered once, no loop.
    Static(H),
    /// The animation is live.
    Running(TypewriterLoop<H>),
}

impl<H: Host> Mount<H> {
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }

    /// The live loop, if the mount started one.
    #[must_use]
    pub fn into_running(self) -> Option<TypewriterLoop<H>> {
        match self {
            Self::Running(lp) => Some(lp),
            _ => None,
        }
    }
}

/// A typewriter bound to a host.
#[derive(Debug)]
pub struct TypewriterLoop<H: Host> {
    host: H,
    typewriter: Typewriter,
    frame: Option<H::FrameHandle>,
    listening: bool,
}

impl<H: Host> TypewriterLoop<H> {
    /// Initialize the typewriter on `target`.
    ///
    /// `target` is `None` when the mount element does not exist.
    pub fn mount(
        target: Option<H>,
        config: &TypewriterConfig,
        motion: MotionPreference,
    ) -> Mount<H> {
        let Some(mut host) = target else {
            debug!("typewriter mount point absent");
            return Mount::Absent;
        };
        let Some(typewriter) = Typewriter::new(config) else {
            debug!("typewriter has no phrases");
            return Mount::Idle(host);
        };
        if !motion.should_animate() {
            debug!("reduced motion; rendering first phrase statically");
            host.set_text(typewriter.current_phrase().as_str());
            return Mount::Static(host);
        }

        host.set_text("");
        let mut lp = Self {
            host,
            typewriter,
            frame: None,
            listening: false,
        };
        match lp.host.attach_listeners() {
            Ok(()) => lp.listening = true,
            Err(err) => warn!(%err, "failed to attach typewriter lifecycle listeners"),
        }
        lp.schedule();
        debug!(
            phrases = lp.typewriter.phrase_count(),
            scheduled = lp.is_scheduled(),
            "typewriter running"
        );
        Mount::Running(lp)
    }

    /// Frame callback: advance by one frame at monotonic time `now`.
    pub fn on_frame(&mut self, now: Duration) -> TickOutcome {
        if self.frame.take().is_none() {
            return TickOutcome::Stop;
        }
        let hidden = self.host.is_hidden();
        if let Some(step) = self.typewriter.tick(now, hidden) {
            self.render(step);
        }
        self.schedule()
    }

    /// Page visibility toggled: drop timing so no burst follows.
    pub fn on_visibility_change(&mut self) {
        self.typewriter.reset_timing();
    }

    /// Cancel the pending frame and remove listeners. Safe to repeat.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.host.cancel_frame(handle);
        }
        if self.listening {
            self.host.detach_listeners();
            self.listening = false;
        }
    }

    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    #[must_use]
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn render(&mut self, step: Step) {
        if step.changes_text() {
            self.host.set_text(self.typewriter.visible_text());
        }
    }

    fn schedule(&mut self) -> TickOutcome {
        match self.host.request_frame() {
            Ok(handle) => {
                self.frame = Some(handle);
                TickOutcome::Continue
            }
            Err(err) => {
                warn!(%err, "failed to schedule typewriter frame");
                TickOutcome::Stop
            }
        }
    }
}

//! Host boundary for the typewriter loop.
//!
//! The loop never reaches for a window, a document, or a clock. Everything
//! platform-specific goes through [`Host`]: the browser binding in
//! `typecast-web` implements it over `web-sys`, and the test harness
//! implements it with plain fields.

use core::fmt;

/// Platform capabilities the typewriter loop runs against.
///
/// Time is not part of this trait: the host passes the frame timestamp into
/// [`crate::TypewriterLoop::on_frame`] directly, the same way
/// `requestAnimationFrame` hands one to its callback.
pub trait Host {
    /// Opaque registration returned by [`Host::request_frame`].
    type FrameHandle: Copy + fmt::Debug + PartialEq;

    /// Platform-specific error type.
    type Error: fmt::Debug + fmt::Display;

    /// Whether the page is currently hidden from the user.
    fn is_hidden(&self) -> bool;

    /// Replace the displayed text of the mount element.
    fn set_text(&mut self, text: &str);

    /// Arrange for the loop's frame callback to run before the next repaint.
    fn request_frame(&mut self) -> Result<Self::FrameHandle, Self::Error>;

    /// Cancel a frame previously returned by [`Host::request_frame`].
    fn cancel_frame(&mut self, handle: Self::FrameHandle);

    /// Register the visibility-change and unload listeners.
    fn attach_listeners(&mut self) -> Result<(), Self::Error>;

    /// Unregister everything [`Host::attach_listeners`] registered.
    fn detach_listeners(&mut self);
}

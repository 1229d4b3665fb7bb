//! [`Host`] implementation over `web-sys`.

use js_sys::Function;
use tracing::warn;
use typecast_core::Host;
use web_sys::{Document, Element, Window};

use crate::{DomError, UNLOAD_EVENT, VISIBILITY_EVENT};

/// Callbacks the host registers with the browser. They are owned by the
/// session (as `Closure`s); the host only keeps JS references to them.
#[derive(Debug, Clone)]
pub(crate) struct Callbacks {
    pub(crate) on_frame: Function,
    pub(crate) on_visibility: Function,
    pub(crate) on_unload: Function,
}

/// The mount element plus the page it lives in.
#[derive(Debug)]
pub(crate) struct DomHost {
    window: Window,
    document: Document,
    target: Element,
    callbacks: Callbacks,
}

impl DomHost {
    pub(crate) fn new(
        window: Window,
        document: Document,
        target: Element,
        callbacks: Callbacks,
    ) -> Self {
        Self {
            window,
            document,
            target,
            callbacks,
        }
    }
}

impl Host for DomHost {
    type FrameHandle = i32;
    type Error = DomError;

    fn is_hidden(&self) -> bool {
        self.document.hidden()
    }

    fn set_text(&mut self, text: &str) {
        self.target.set_text_content(Some(text));
    }

    fn request_frame(&mut self) -> Result<i32, DomError> {
        Ok(self
            .window
            .request_animation_frame(&self.callbacks.on_frame)?)
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            warn!(err = %DomError::from(err), handle, "cancelAnimationFrame failed");
        }
    }

    fn attach_listeners(&mut self) -> Result<(), DomError> {
        self.document
            .add_event_listener_with_callback(VISIBILITY_EVENT, &self.callbacks.on_visibility)?;
        if let Err(err) = self
            .window
            .add_event_listener_with_callback(UNLOAD_EVENT, &self.callbacks.on_unload)
        {
            // Leave nothing half-registered.
            let rollback = self.document.remove_event_listener_with_callback(
                VISIBILITY_EVENT,
                &self.callbacks.on_visibility,
            );
            if let Err(rollback) = rollback {
                warn!(err = %DomError::from(rollback), "removeEventListener failed");
            }
            return Err(err.into());
        }
        Ok(())
    }

    fn detach_listeners(&mut self) {
        let visibility = self
            .document
            .remove_event_listener_with_callback(VISIBILITY_EVENT, &self.callbacks.on_visibility);
        let unload = self
            .window
            .remove_event_listener_with_callback(UNLOAD_EVENT, &self.callbacks.on_unload);
        for result in [visibility, unload] {
            if let Err(err) = result {
                warn!(err = %DomError::from(err), "removeEventListener failed");
            }
        }
    }
}

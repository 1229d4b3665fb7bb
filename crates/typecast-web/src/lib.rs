#![forbid(unsafe_code)]

//! `typecast-web` binds the typewriter loop to a real page.
//!
//! Design goals:
//! - **Thin**: every timing decision lives in `typecast-core`; this crate only
//!   translates between the DOM and the core [`typecast_core::Host`] trait.
//! - **Single instance**: one typewriter session per page. Mounting again
//!   tears the previous session down first.
//! - **Silent**: a missing mount point or reduced motion degrades quietly.
//!   Only malformed host options are reported back to JavaScript.
//!
//! JS surface (wasm32 only): `mountTypewriter(optionsJson?)`,
//! `unmountTypewriter()`, `isTypewriterRunning()`. With the `autostart`
//! feature the module also mounts with default options on DOMContentLoaded,
//! unless the page already mounted one itself.

mod error;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::DomError;

#[cfg(target_arch = "wasm32")]
pub use wasm::{autostart, is_typewriter_running, mount_typewriter, unmount_typewriter};

/// Media query that signals a reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
/// Fired on `document` when the page is hidden or shown.
pub const VISIBILITY_EVENT: &str = "visibilitychange";
/// Fired on `window` when the page is about to unload.
pub const UNLOAD_EVENT: &str = "beforeunload";
/// Fired on `document` once the DOM is parsed.
pub const READY_EVENT: &str = "DOMContentLoaded";

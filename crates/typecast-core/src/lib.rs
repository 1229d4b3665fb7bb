#![forbid(unsafe_code)]

//! Core: typewriter state machine, configuration, and the host boundary.
//!
//! # Role in typecast
//! `typecast-core` owns every timing decision of the typewriter animation.
//! It never touches the DOM. Time, visibility, text output, and frame
//! scheduling all flow through the [`host::Host`] trait, so the same loop
//! runs against `typecast-web` in a browser and against the deterministic
//! [`harness`] in native tests.
//!
//! # Primary responsibilities
//! - **Typewriter**: the per-frame state machine (type, hold, erase, rotate).
//! - **TypewriterLoop**: mount/tick/visibility/teardown contracts over a host.
//! - **Config**: defaults plus host-supplied JSON options.
//! - **Motion**: reduced-motion preference and its opt-in override.

pub mod config;
pub mod host;
pub mod motion;
pub mod phrase;
pub mod runner;
pub mod time;
pub mod typewriter;

#[cfg(any(test, feature = "test-helpers"))]
pub mod harness;

pub use config::{ConfigError, TypewriterConfig};
pub use host::Host;
pub use motion::MotionPreference;
pub use runner::{Mount, TickOutcome, TypewriterLoop};
pub use typewriter::{Direction, Step, Typewriter};

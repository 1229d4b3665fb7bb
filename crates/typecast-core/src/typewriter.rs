#![forbid(unsafe_code)]

//! Typewriter: the per-frame type/hold/erase state machine.
//!
//! A [`Typewriter`] cycles through a fixed phrase list. Each phrase is typed
//! one grapheme at a time, held, erased one grapheme at a time, held again,
//! and then the next phrase starts. Pacing is wall-clock based: the host
//! reports the timestamp of every frame and the machine accumulates deltas
//! until a character interval has elapsed.
//!
//! # Invariants
//!
//! 1. `cursor()` is always within `0..=current_phrase().len()`.
//! 2. `phrase_index()` is always a valid index into the phrase list.
//! 3. At most one [`Step`] is applied per [`Typewriter::tick`], regardless of
//!    how much time elapsed since the previous frame.
//! 4. Hidden frames and active holds never touch the cursor.
//! 5. [`Typewriter::reset_timing`] touches only the timestamp and accumulator.
//!
//! # Failure Modes
//!
//! - Empty phrase list: [`Typewriter::new`] returns `None`.
//! - Timestamps going backwards: the delta saturates to zero.
//! - Zero intervals: one step per visible frame.

use core::time::Duration;

use tracing::{debug, trace};

use crate::config::TypewriterConfig;
use crate::phrase::Phrase;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which way the cursor is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Revealing characters.
    Typing,
    /// Removing characters.
    Erasing,
}

/// The single character-step applied by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One more grapheme became visible.
    Typed,
    /// One grapheme was removed.
    Erased,
    /// The phrase is complete; erasing starts after the post-type hold.
    PhraseTyped,
    /// The phrase is gone; `next` starts after the post-erase hold.
    PhraseErased { next: usize },
}

impl Step {
    /// Whether the visible text differs after this step.
    #[must_use]
    pub const fn changes_text(self) -> bool {
        matches!(self, Self::Typed | Self::Erased)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timing {
    typing: Duration,
    erasing: Duration,
    hold_after_type: Duration,
    hold_after_erase: Duration,
}

/// Typewriter animation state.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Phrase>,
    timing: Timing,
    phrase_index: usize,
    cursor: usize,
    direction: Direction,
    accumulator: Duration,
    hold_remaining: Duration,
    last_frame: Option<Duration>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Typewriter {
    /// Build a typewriter positioned at the start of the first phrase.
    ///
    /// Returns `None` when `config.phrases` is empty.
    #[must_use]
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: config.phrases.iter().map(|p| Phrase::new(p.as_str())).collect(),
            timing: Timing {
                typing: config.typing_interval,
                erasing: config.erasing_interval,
                hold_after_type: config.hold_after_type,
                hold_after_erase: config.hold_after_erase,
            },
            phrase_index: 0,
            cursor: 0,
            direction: Direction::Typing,
            accumulator: Duration::ZERO,
            hold_remaining: Duration::ZERO,
            last_frame: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl Typewriter {
    /// Phrase currently being typed or erased.
    #[must_use]
    pub fn current_phrase(&self) -> &Phrase {
        &self.phrases[self.phrase_index]
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Graphemes of the current phrase that are visible.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Time banked towards the next character-step.
    #[must_use]
    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    /// Remaining hold; zero when not holding.
    #[must_use]
    pub fn hold_remaining(&self) -> Duration {
        self.hold_remaining
    }

    #[must_use]
    pub fn is_holding(&self) -> bool {
        !self.hold_remaining.is_zero()
    }

    /// Timestamp of the last processed frame, `None` after a timing reset.
    #[must_use]
    pub fn last_frame(&self) -> Option<Duration> {
        self.last_frame
    }

    /// Text that should currently be displayed.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        self.current_phrase().prefix(self.cursor)
    }

    /// Character interval for the current direction.
    #[must_use]
    pub fn active_interval(&self) -> Duration {
        match self.direction {
            Direction::Typing => self.timing.typing,
            Direction::Erasing => self.timing.erasing,
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

impl Typewriter {
    /// Process one frame at monotonic time `now`.
    ///
    /// Returns the step applied, if any. A hidden page only records the
    /// timestamp, so no backlog builds up while nobody is watching.
    pub fn tick(&mut self, now: Duration, hidden: bool) -> Option<Step> {
        if hidden {
            self.last_frame = Some(now);
            return None;
        }

        let delta = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_sub(last));
        self.last_frame = Some(now);

        if self.is_holding() {
            self.hold_remaining = self.hold_remaining.saturating_sub(delta);
            return None;
        }

        self.accumulator = self.accumulator.saturating_add(delta);
        if self.accumulator < self.active_interval() {
            return None;
        }
        self.accumulator = Duration::ZERO;
        Some(self.step())
    }

    /// Forget frame timing so the next tick sees a zero delta.
    ///
    /// Cursor, direction, phrase index and hold are preserved.
    pub fn reset_timing(&mut self) {
        self.last_frame = None;
        self.accumulator = Duration::ZERO;
    }

    fn step(&mut self) -> Step {
        let len = self.current_phrase().len();
        match self.direction {
            Direction::Typing if self.cursor < len => {
                self.cursor += 1;
                trace!(cursor = self.cursor, "typed");
                Step::Typed
            }
            Direction::Typing => {
                self.direction = Direction::Erasing;
                self.hold_remaining = self.timing.hold_after_type;
                debug!(phrase = self.phrase_index, "phrase typed");
                Step::PhraseTyped
            }
            Direction::Erasing if self.cursor > 0 => {
                self.cursor -= 1;
                trace!(cursor = self.cursor, "erased");
                Step::Erased
            }
            Direction::Erasing => {
                self.direction = Direction::Typing;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.hold_remaining = self.timing.hold_after_erase;
                debug!(next = self.phrase_index, "phrase erased");
                Step::PhraseErased {
                    next: self.phrase_index,
                }
            }
        }
    }
}

//! Typewriter configuration.
//!
//! Defaults reproduce the stock landing-page animation. Hosts may override
//! any field with a JSON object whose keys follow JavaScript naming:
//!
//! ```json
//! {
//!   "phrases": ["FullStack Developer", "Design System"],
//!   "typingMsPerChar": 90,
//!   "erasingMsPerChar": 45,
//!   "holdAfterTypeMs": 1600,
//!   "holdAfterEraseMs": 400,
//!   "selector": ".typing",
//!   "overrideAttribute": "data-animate-typing"
//! }
//! ```

use core::time::Duration;

use serde::Deserialize;

use crate::time::checked_duration_from_millis;

/// CSS selector of the default mount point.
pub const DEFAULT_SELECTOR: &str = ".typing";
/// Attribute that opts an element back into animation under reduced motion.
pub const DEFAULT_OVERRIDE_ATTRIBUTE: &str = "data-animate-typing";

/// Errors produced while reading host-supplied options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid typewriter options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("field {field} must be a finite, non-negative millisecond count (got {value})")]
    InvalidDuration { field: &'static str, value: f64 },
    #[error("field selector must not be empty")]
    EmptySelector,
}

/// Configuration for one typewriter instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterConfig {
    /// Phrases in rotation order.
    pub phrases: Vec<String>,
    /// Delay between typed characters.
    pub typing_interval: Duration,
    /// Delay between erased characters.
    pub erasing_interval: Duration,
    /// Pause once a phrase is fully typed.
    pub hold_after_type: Duration,
    /// Pause once a phrase is fully erased, before the next one starts.
    pub hold_after_erase: Duration,
    /// CSS selector of the text element.
    pub selector: String,
    /// Attribute whose value `"true"` forces animation under reduced motion.
    pub override_attribute: String,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec!["FullStack Developer".to_owned(), "Design System".to_owned()],
            typing_interval: Duration::from_millis(90),
            erasing_interval: Duration::from_millis(45),
            hold_after_type: Duration::from_millis(1600),
            hold_after_erase: Duration::from_millis(400),
            selector: DEFAULT_SELECTOR.to_owned(),
            override_attribute: DEFAULT_OVERRIDE_ATTRIBUTE.to_owned(),
        }
    }
}

impl TypewriterConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the phrase rotation.
    pub fn phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-character typing delay.
    pub fn typing_interval(mut self, interval: Duration) -> Self {
        self.typing_interval = interval;
        self
    }

    /// Set the per-character erasing delay.
    pub fn erasing_interval(mut self, interval: Duration) -> Self {
        self.erasing_interval = interval;
        self
    }

    /// Set the pause after a phrase is fully typed.
    pub fn hold_after_type(mut self, hold: Duration) -> Self {
        self.hold_after_type = hold;
        self
    }

    /// Set the pause after a phrase is fully erased.
    pub fn hold_after_erase(mut self, hold: Duration) -> Self {
        self.hold_after_erase = hold;
        self
    }

    /// Set the mount point selector.
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Set the attribute that forces animation under reduced motion.
    pub fn override_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.override_attribute = attribute.into();
        self
    }

    /// Parse host options, filling unspecified fields from [`Default`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: OptionsJson = serde_json::from_str(json)?;
        options.resolve()
    }
}

/// Wire shape of host options. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct OptionsJson {
    phrases: Option<Vec<String>>,
    typing_ms_per_char: Option<f64>,
    erasing_ms_per_char: Option<f64>,
    hold_after_type_ms: Option<f64>,
    hold_after_erase_ms: Option<f64>,
    selector: Option<String>,
    override_attribute: Option<String>,
}

impl OptionsJson {
    fn resolve(self) -> Result<TypewriterConfig, ConfigError> {
        let mut config = TypewriterConfig::default();
        if let Some(phrases) = self.phrases {
            config.phrases = phrases;
        }
        apply_millis(
            &mut config.typing_interval,
            "typingMsPerChar",
            self.typing_ms_per_char,
        )?;
        apply_millis(
            &mut config.erasing_interval,
            "erasingMsPerChar",
            self.erasing_ms_per_char,
        )?;
        apply_millis(
            &mut config.hold_after_type,
            "holdAfterTypeMs",
            self.hold_after_type_ms,
        )?;
        apply_millis(
            &mut config.hold_after_erase,
            "holdAfterEraseMs",
            self.hold_after_erase_ms,
        )?;
        if let Some(selector) = self.selector {
            if selector.trim().is_empty() {
                return Err(ConfigError::EmptySelector);
            }
            config.selector = selector;
        }
        if let Some(attribute) = self.override_attribute {
            config.override_attribute = attribute;
        }
        Ok(config)
    }
}

fn apply_millis(
    slot: &mut Duration,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ConfigError> {
    let Some(value) = value else {
        return Ok(());
    };
    *slot = checked_duration_from_millis(value)
        .ok_or(ConfigError::InvalidDuration { field, value })?;
    Ok(())
}

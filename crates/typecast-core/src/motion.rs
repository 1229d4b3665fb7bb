//! Reduced-motion handling.

/// Platform motion preference, sampled once at mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionPreference {
    /// The user asked the platform for reduced motion.
    pub prefers_reduced_motion: bool,
    /// The element explicitly opted back into animation.
    pub force_animation: bool,
}

impl MotionPreference {
    /// No preference: animate.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            prefers_reduced_motion: false,
            force_animation: false,
        }
    }

    /// Reduced motion requested, no override.
    #[must_use]
    pub const fn reduced() -> Self {
        Self {
            prefers_reduced_motion: true,
            force_animation: false,
        }
    }

    /// Set the override flag.
    #[must_use]
    pub const fn force(mut self, force_animation: bool) -> Self {
        self.force_animation = force_animation;
        self
    }

    /// Whether the typewriter should run rather than render statically.
    #[must_use]
    pub const fn should_animate(&self) -> bool {
        !self.prefers_reduced_motion || self.force_animation
    }
}

/// Interpret the override attribute. Only the exact value `"true"` opts in.
#[must_use]
pub fn parse_override(value: Option<&str>) -> bool {
    value == Some("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_preference_animates() {
        assert!(MotionPreference::full().should_animate());
        assert!(MotionPreference::default().should_animate());
    }

    #[test]
    fn reduced_without_override_is_static() {
        assert!(!MotionPreference::reduced().should_animate());
    }

    #[test]
    fn override_wins_over_reduced() {
        assert!(MotionPreference::reduced().force(true).should_animate());
    }

    #[test]
    fn override_parsing_is_exact() {
        assert!(parse_override(Some("true")));
        assert!(!parse_override(Some("TRUE")));
        assert!(!parse_override(Some("")));
        assert!(!parse_override(Some("1")));
        assert!(!parse_override(None));
    }
}

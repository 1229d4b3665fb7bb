//! Conversions between host timestamps and [`Duration`].
//!
//! Browsers report frame times as `DOMHighResTimeStamp` (milliseconds as
//! `f64`). The core keeps everything in [`Duration`] so arithmetic saturates
//! instead of drifting into negative or NaN territory.

use core::time::Duration;

/// Convert a millisecond timestamp to a [`Duration`].
///
/// Non-finite and negative inputs clamp to zero; values beyond the
/// representable range clamp to [`Duration::MAX`].
#[must_use]
pub fn duration_from_millis(ms: f64) -> Duration {
    if !ms.is_finite() || ms <= 0.0 {
        return Duration::ZERO;
    }
    nanos_from_millis(ms).map_or(Duration::MAX, Duration::from_nanos)
}

/// Strict variant used for configuration: rejects what
/// [`duration_from_millis`] would silently clamp.
#[must_use]
pub fn checked_duration_from_millis(ms: f64) -> Option<Duration> {
    if !ms.is_finite() || ms < 0.0 {
        return None;
    }
    nanos_from_millis(ms).map(Duration::from_nanos)
}

/// Whole nanoseconds in `ms`, or `None` once they no longer fit in a `u64`.
///
/// Scaling to nanoseconds first keeps integral millisecond inputs exact.
fn nanos_from_millis(ms: f64) -> Option<u64> {
    let nanos = (ms * 1_000_000.0).round();
    (nanos < u64::MAX as f64).then_some(nanos as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_millis_round_trip() {
        assert_eq!(duration_from_millis(90.0), Duration::from_millis(90));
        assert_eq!(duration_from_millis(1600.0), Duration::from_millis(1600));
    }

    #[test]
    fn fractional_millis_keep_precision() {
        let d = duration_from_millis(16.5);
        assert_eq!(d, Duration::from_micros(16_500));
    }

    #[test]
    fn garbage_clamps_to_zero() {
        assert_eq!(duration_from_millis(f64::NAN), Duration::ZERO);
        assert_eq!(duration_from_millis(f64::NEG_INFINITY), Duration::ZERO);
        assert_eq!(duration_from_millis(-5.0), Duration::ZERO);
    }

    #[test]
    fn huge_clamps_to_max() {
        assert_eq!(duration_from_millis(f64::MAX), Duration::MAX);
        assert_eq!(checked_duration_from_millis(f64::MAX), None);
    }

    #[test]
    fn checked_rejects_negative_and_nan() {
        assert_eq!(checked_duration_from_millis(-1.0), None);
        assert_eq!(checked_duration_from_millis(f64::NAN), None);
        assert_eq!(checked_duration_from_millis(f64::INFINITY), None);
        assert_eq!(checked_duration_from_millis(0.0), Some(Duration::ZERO));
    }
}

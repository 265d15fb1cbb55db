//! Playback clock display
//!
//! Turns the media engine's raw clock (seconds as `f64`, NaN while unknown)
//! into `mm:ss` labels and a seek bar fraction.

/// Format seconds as `mm:ss`
///
/// NaN, infinite and negative input render as `00:00`. No hour field:
/// long durations keep counting minutes (`125:00`).
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let whole = seconds.floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// Format an optional duration, unknown as `00:00`
pub fn format_duration(total: Option<f64>) -> String {
    total.map_or_else(|| "00:00".to_string(), format_time)
}

/// `"elapsed / total"` label shown next to the seek bar
pub fn time_label(current: f64, total: Option<f64>) -> String {
    format!("{} / {}", format_time(current), format_duration(total))
}

/// Fraction of the track elapsed, in [0, 1]
///
/// Zero when `total` is unknown, zero or not finite.
pub fn fraction_elapsed(current: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 || !current.is_finite() {
        return 0.0;
    }
    (current / total).clamp(0.0, 1.0)
}

/// Known total duration, if the engine reported a usable one
pub(crate) fn known_duration(total: Option<f64>) -> Option<f64> {
    total.filter(|t| t.is_finite() && *t > 0.0)
}

/// Session mirror of the engine clock
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackClock {
    elapsed: f64,
    total: Option<f64>,
}

impl PlaybackClock {
    /// Elapsed seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total seconds, once known
    pub fn total(&self) -> Option<f64> {
        self.total
    }

    /// Record a clock reading
    ///
    /// Returns true if the displayed labels changed.
    pub fn update(&mut self, current: f64, total: Option<f64>) -> bool {
        let before = (self.elapsed_label(), self.total_label());
        self.elapsed = if current.is_finite() && current > 0.0 {
            current
        } else {
            0.0
        };
        self.total = known_duration(total);
        before != (self.elapsed_label(), self.total_label())
    }

    /// Elapsed back to zero, total kept
    pub fn rewind(&mut self) {
        self.elapsed = 0.0;
    }

    /// Elapsed and total both cleared (new track)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.elapsed)
    }

    pub fn total_label(&self) -> String {
        format_duration(self.total)
    }

    pub fn label(&self) -> String {
        time_label(self.elapsed, self.total)
    }

    pub fn fraction(&self) -> f64 {
        fraction_elapsed(self.elapsed, self.total.unwrap_or(0.0))
    }
}

//! Volume and mute state
//!
//! Linear level in [0.0, 1.0], the scale the platform media element expects.
//! Muting drives the level to zero and remembers what to restore.

/// Volume controller with mute memory
///
/// Invariant: `muted` implies `level == 0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f64,

    /// Mute state
    muted: bool,

    /// Level restored by unmute; `None` until a positive level is recorded
    pre_mute_level: Option<f64>,

    /// Level restored by unmute while `pre_mute_level` is unset
    unmute_fallback: f64,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (clamped to 0.0-1.0)
    /// * `unmute_fallback` - Restored on unmute if no positive level was recorded
    pub fn new(level: f64, unmute_fallback: f64) -> Self {
        Self {
            level: sanitize(level),
            muted: false,
            pre_mute_level: None,
            unmute_fallback: sanitize(unmute_fallback),
        }
    }

    /// Set volume level (clamped to 0.0-1.0)
    ///
    /// A positive level unmutes and becomes the level unmute restores.
    /// Returns `false` (and changes nothing) for NaN input.
    pub fn set_level(&mut self, level: f64) -> bool {
        if level.is_nan() {
            return false;
        }

        self.level = sanitize(level);
        if self.level > 0.0 {
            self.muted = false;
            self.pre_mute_level = Some(self.level);
        }
        true
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Volume as slider percentage (0-100)
    pub fn percent(&self) -> u8 {
        (self.level * 100.0).round() as u8
    }

    /// Set volume from slider percentage (0-100, clamped)
    pub fn set_percent(&mut self, percent: u8) {
        self.set_level(f64::from(percent.min(100)) / 100.0);
    }

    /// Toggle mute state
    ///
    /// Muting records the current level and drops to zero. Unmuting restores
    /// the recorded level, or the fallback if no level above zero was ever
    /// recorded. Once one was, a recorded zero is restored as zero.
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.level = self.pre_mute_level();
            self.muted = false;
        } else {
            if self.pre_mute_level.is_some() || self.level > 0.0 {
                self.pre_mute_level = Some(self.level);
            }
            self.level = 0.0;
            self.muted = true;
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level that unmute will restore
    pub fn pre_mute_level(&self) -> f64 {
        self.pre_mute_level.unwrap_or(self.unmute_fallback)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0, 0.1)
    }
}

fn sanitize(level: f64) -> f64 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(0.8, 0.1);
        assert_eq!(vol.level(), 0.8);
        assert!(!vol.is_muted());
    }

    #[test]
    fn set_volume_level_clamps() {
        let mut vol = Volume::new(0.5, 0.1);

        vol.set_level(0.75);
        assert_eq!(vol.level(), 0.75);

        vol.set_level(1.5);
        assert_eq!(vol.level(), 1.0);

        vol.set_level(-3.0);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn nan_level_is_ignored() {
        let mut vol = Volume::new(0.4, 0.1);
        assert!(!vol.set_level(f64::NAN));
        assert_eq!(vol.level(), 0.4);
    }

    #[test]
    fn mute_drops_level_to_zero() {
        let mut vol = Volume::new(0.6, 0.1);
        vol.toggle_mute();
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0.0);
        assert_eq!(vol.pre_mute_level(), 0.6);
    }

    #[test]
    fn toggle_mute_twice_restores_level() {
        let mut vol = Volume::new(0.37, 0.1);
        vol.toggle_mute();
        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 0.37);
    }

    #[test]
    fn unmute_from_zero_uses_fallback() {
        let mut vol = Volume::new(0.0, 0.1);
        vol.toggle_mute();
        vol.toggle_mute();
        assert_eq!(vol.level(), 0.1);
    }

    #[test]
    fn unmute_restores_zero_after_earlier_positive_level() {
        let mut vol = Volume::new(0.8, 0.1);
        vol.set_level(0.5);
        vol.set_level(0.0);

        vol.toggle_mute();
        vol.toggle_mute();
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn initial_level_counts_as_recorded_once_muted() {
        let mut vol = Volume::new(0.6, 0.1);
        vol.toggle_mute();
        vol.toggle_mute();
        vol.set_level(0.0);

        vol.toggle_mute();
        vol.toggle_mute();
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn positive_level_unmutes() {
        let mut vol = Volume::new(0.5, 0.1);
        vol.toggle_mute();
        vol.set_level(0.3);
        assert!(!vol.is_muted());
        assert_eq!(vol.level(), 0.3);

        vol.toggle_mute();
        vol.toggle_mute();
        assert_eq!(vol.level(), 0.3);
    }

    #[test]
    fn zero_level_while_muted_stays_muted() {
        let mut vol = Volume::new(0.5, 0.1);
        vol.toggle_mute();
        vol.set_level(0.0);
        assert!(vol.is_muted());
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn percent_conversion() {
        let mut vol = Volume::default();
        vol.set_percent(25);
        assert_eq!(vol.level(), 0.25);
        assert_eq!(vol.percent(), 25);

        vol.set_percent(250);
        assert_eq!(vol.percent(), 100);
    }
}

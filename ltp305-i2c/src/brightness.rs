/// Global PWM brightness, always within `0..=127`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Full brightness register value.
    pub const MAX: Self = Self(127);
    /// Brightness a freshly constructed display starts with (level 0.5).
    pub const DEFAULT: Self = Self(63);

    /// Converts a level in `0.0..=1.0` to a register value.
    ///
    /// The scaled value is truncated, not rounded: 0.5 gives 63. Inputs
    /// outside the range clamp, NaN gives 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_level(level: f32) -> Self {
        let scaled = level * 127.0;
        if scaled.is_nan() {
            return Self(0);
        }
        Self(scaled.clamp(0.0, 127.0) as u8)
    }

    /// Clamps a raw register value to the valid range.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        if raw > Self::MAX.0 {
            Self::MAX
        } else {
            Self(raw)
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

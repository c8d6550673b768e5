//! Core data types for sunrise/sunset calculations.

use crate::math::floor;

/// Zenith angle definitions for sunrise/sunset and twilight calculations.
///
/// The zenith angle is the angular distance of the sun's center from the
/// local vertical at which the event is considered to occur. A closed set
/// of the four classical thresholds; the calculation accepts no other
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zenith {
    /// Standard sunrise/sunset: 90°50' below the vertical, accounting for
    /// refraction and the sun's apparent radius.
    Official,
    /// Civil twilight (sun 6° below the horizon).
    Civil,
    /// Nautical twilight (sun 12° below the horizon).
    Nautical,
    /// Astronomical twilight (sun 18° below the horizon).
    Astronomical,
}

impl Zenith {
    /// Gets the zenith angle in degrees for this event definition.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Official => 90.83,
            Self::Civil => 96.0,
            Self::Nautical => 102.0,
            Self::Astronomical => 108.0,
        }
    }
}

/// Sunrise and sunset for one civil date, each independently optional.
///
/// An absent event is a valid terminal outcome, not a fault: at high
/// latitudes the sun may not cross the requested zenith angle at all on a
/// given date (polar day or polar night). The calculation does not record
/// which of the two conditions caused the absence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes<T> {
    sunrise: Option<T>,
    sunset: Option<T>,
}

impl<T> SunTimes<T> {
    /// Creates a result from the two independently optional events.
    #[must_use]
    pub const fn new(sunrise: Option<T>, sunset: Option<T>) -> Self {
        Self { sunrise, sunset }
    }

    /// Gets the sunrise time, if the sun rises on this date.
    pub const fn sunrise(&self) -> Option<&T> {
        self.sunrise.as_ref()
    }

    /// Gets the sunset time, if the sun sets on this date.
    pub const fn sunset(&self) -> Option<&T> {
        self.sunset.as_ref()
    }

    /// Checks whether both sunrise and sunset occurred.
    pub const fn is_regular_day(&self) -> bool {
        self.sunrise.is_some() && self.sunset.is_some()
    }

    /// Checks whether neither event occurred (polar day or polar night).
    pub const fn is_polar(&self) -> bool {
        self.sunrise.is_none() && self.sunset.is_none()
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Used for event times in the numeric API without the chrono
/// dependency. Values are hours since midnight UTC (0 UT) of the
/// request date:
/// - negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the request date itself
/// - ≥ 24.0 indicates the next day
///
/// The out-of-range cases carry the date-rollover correction the
/// algorithm applies near the date line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where `day_offset` is the
    /// whole-day shift relative to the request date (-1, 0 or +1 for
    /// values this crate produces) and `hours_in_day` is in [0, 24).
    ///
    /// # Example
    /// ```
    /// # use solar_almanac::HoursUtc;
    /// let before_midnight = HoursUtc::from_hours(-5.5);
    /// let (day_offset, hours) = before_midnight.day_and_hours();
    /// assert_eq!(day_offset, -1);
    /// assert!((hours - 18.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        if !self.0.is_finite() {
            return (0, self.0);
        }
        let days = floor(self.0 / 24.0);
        (days as i32, self.0 - days * 24.0)
    }
}

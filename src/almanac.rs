//! Sunrise/sunset calculation from the classical sunrise equation.
//!
//! Implements the approximation published in *Almanac for Computers*
//! (Nautical Almanac Office, 1990), as popularized by Ed Williams'
//! Aviation Formulary. Accuracy is on the order of a minute or two for
//! ordinary latitudes; it degrades near the polar circles, where the
//! out-of-domain hour-angle cosine is reported as an absent event
//! rather than an error.
//!
//! The sun's position on the event day is approximated from the ordinal
//! day of the year: mean anomaly, true ecliptic longitude, right
//! ascension and declination, then the local hour angle at the requested
//! zenith threshold. All intermediate angles are handled in degrees.

use crate::error::check_coordinates;
use crate::math::{
    acos_deg, asin_deg, atan_deg, cos_deg, floor, sin_deg, tan_deg, wrap_degrees_360, wrap_hours_24,
};
use crate::types::{HoursUtc, SunTimes, Zenith};
use crate::{time, Result};

#[cfg(feature = "chrono")]
use crate::Error;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Which solar event a single pass of the solve computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolarEvent {
    Rise,
    Set,
}

impl SolarEvent {
    /// Approximate local clock hour of the event, used to pick the time
    /// of day the sun's position is evaluated at.
    const fn approximate_hour(self) -> f64 {
        match self {
            Self::Rise => 6.0,
            Self::Set => 18.0,
        }
    }
}

/// Calculates sunrise and sunset without the chrono dependency.
///
/// The date is a UTC civil date; returned times are hours since its
/// midnight UTC. An [`HoursUtc`] value outside [0, 24) carries the
/// date-rollover correction applied near the date line (negative means
/// the event falls on the previous civil day, ≥ 24 on the next).
///
/// # Errors
/// Returns `InvalidLatitude`/`InvalidLongitude` for out-of-range or
/// non-finite coordinates and `InvalidDate` for impossible dates.
/// Polar day/night is not an error; the affected events are absent.
///
/// # Example
/// ```
/// use solar_almanac::{almanac, Zenith};
///
/// // London, June solstice
/// let times = almanac::sun_times_utc(2023, 6, 21, 51.5074, -0.1278, Zenith::Official).unwrap();
/// assert!(times.is_regular_day());
///
/// let sunrise = times.sunrise().unwrap();
/// let sunset = times.sunset().unwrap();
/// assert!(sunset.hours() > sunrise.hours());
/// ```
pub fn sun_times_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SunTimes<HoursUtc>> {
    check_coordinates(latitude, longitude)?;
    time::check_date(year, month, day)?;

    let day_of_year = f64::from(time::day_of_year(year, month, day));
    Ok(sun_times_for_ordinal(day_of_year, latitude, longitude, zenith))
}

/// Calculates sunrise and sunset as UTC timestamps for a chrono date.
///
/// The [`NaiveDate`] is interpreted as a UTC civil date, both for
/// day-of-year extraction and for final timestamp assembly. Timestamps
/// have second granularity; fractional seconds are truncated. Near the
/// date line the assigned civil date may differ from the request date by
/// one day.
///
/// # Errors
/// Returns `InvalidLatitude`/`InvalidLongitude` for out-of-range or
/// non-finite coordinates, and `InvalidDate` if the rollover shifts the
/// date outside chrono's representable range.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use solar_almanac::{almanac, Zenith};
///
/// let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
/// let times = almanac::sun_times(date, 51.5074, -0.1278, Zenith::Official).unwrap();
///
/// let sunrise = times.sunrise().unwrap();
/// let sunset = times.sunset().unwrap();
/// assert_eq!(sunrise.date_naive(), date);
/// assert!(sunset > sunrise);
/// ```
#[cfg(feature = "chrono")]
pub fn sun_times(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> Result<SunTimes<DateTime<Utc>>> {
    check_coordinates(latitude, longitude)?;

    let times = sun_times_for_ordinal(f64::from(date.ordinal()), latitude, longitude, zenith);

    let sunrise = times
        .sunrise()
        .map(|&hours| assemble_timestamp(date, hours))
        .transpose()?;
    let sunset = times
        .sunset()
        .map(|&hours| assemble_timestamp(date, hours))
        .transpose()?;
    Ok(SunTimes::new(sunrise, sunset))
}

/// Runs the solve for both events on an already-validated input.
fn sun_times_for_ordinal(
    day_of_year: f64,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> SunTimes<HoursUtc> {
    let sunrise = event_hours_utc(day_of_year, latitude, longitude, zenith, SolarEvent::Rise);
    let sunset = event_hours_utc(day_of_year, latitude, longitude, zenith, SolarEvent::Set);
    SunTimes::new(
        sunrise.map(HoursUtc::from_hours),
        sunset.map(HoursUtc::from_hours),
    )
}

/// Solves one event of the sunrise equation.
///
/// Returns hours since midnight UTC of the request date, including the
/// rollover shift (may be negative or ≥ 24), or `None` when the sun
/// does not cross the zenith threshold that day.
fn event_hours_utc(
    day_of_year: f64,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
    event: SolarEvent,
) -> Option<f64> {
    // Longitude as an hour-angle offset from the Greenwich meridian.
    let lng_hour = longitude / 15.0;

    // Approximate time of the event, in fractional days of the year.
    let t = day_of_year + ((event.approximate_hour() - lng_hour) / 24.0);

    // Sun's mean anomaly.
    let m = 0.9856 * t - 3.289;

    // Sun's true ecliptic longitude, corrected for the equation of center.
    let l = wrap_degrees_360(m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634);

    // Right ascension, put into the same 90° quadrant as L (atan loses
    // the quadrant), then converted to hours.
    let ra = wrap_degrees_360(atan_deg(0.91764 * tan_deg(l)));
    let l_quadrant = floor(l / 90.0) * 90.0;
    let ra_quadrant = floor(ra / 90.0) * 90.0;
    let ra_hours = (ra + (l_quadrant - ra_quadrant)) / 15.0;

    // Sun's declination.
    let sin_dec = 0.39782 * sin_deg(l);
    let cos_dec = cos_deg(asin_deg(sin_dec));

    // Local hour angle of the event. Out of [-1, 1] means the sun never
    // reaches the threshold that day: polar night (> 1) or polar day
    // (< -1).
    let cos_h = (cos_deg(zenith.degrees()) - sin_dec * sin_deg(latitude))
        / (cos_dec * cos_deg(latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    let h = match event {
        SolarEvent::Rise => (360.0 - acos_deg(cos_h)) / 15.0,
        SolarEvent::Set => acos_deg(cos_h) / 15.0,
    };

    // Local mean time of the event, then UTC.
    let local_mean = h + ra_hours - 0.06571 * t - 6.622;
    let ut = wrap_hours_24(local_mean - lng_hour);

    // The approximation references solar time near the event's meridian;
    // close to the date line the UTC result can land on the wrong civil
    // day. Shift it by one day in the documented direction. The
    // heuristic is the classical one and is kept as-is, including its
    // known roughness very close to ±180°.
    let hours = match event {
        SolarEvent::Rise if lng_hour > 0.0 && ut > 12.0 => ut - 24.0,
        SolarEvent::Set if lng_hour < 0.0 && ut < 12.0 => ut + 24.0,
        _ => ut,
    };
    Some(hours)
}

/// Builds a UTC timestamp from the request date and an event's hours.
#[cfg(feature = "chrono")]
fn assemble_timestamp(date: NaiveDate, hours: HoursUtc) -> Result<DateTime<Utc>> {
    let (day_offset, hours_in_day) = hours.day_and_hours();
    let event_date = date
        .checked_add_signed(Duration::days(i64::from(day_offset)))
        .ok_or(Error::invalid_date("date rollover out of calendar range"))?;

    let (hour, minute, second) = time::split_hours(hours_in_day);
    event_date
        .and_hms_opt(hour, minute, second as u32)
        .map(|naive| naive.and_utc())
        .ok_or(Error::invalid_date("computed time out of range"))
}

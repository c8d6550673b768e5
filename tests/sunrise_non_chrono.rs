//! Tests for the numeric sunrise/sunset API (no chrono dependency).

use solar_almanac::{almanac, HoursUtc, Zenith};

#[test]
fn test_sun_times_utc_basic() {
    // San Francisco, June 21, 2023
    let times = almanac::sun_times_utc(2023, 6, 21, 37.7749, -122.4194, Zenith::Official).unwrap();

    let sunrise = times.sunrise().expect("sun rises in San Francisco");
    let sunset = times.sunset().expect("sun sets in San Francisco");

    // Sunrise around 12:48 UTC (05:48 PDT)
    assert!((sunrise.hours() - 12.8).abs() < 0.2, "sunrise {}", sunrise.hours());
    // Sunset around 03:35 UTC the next day (20:35 PDT same local day),
    // carried as hours ≥ 24 by the rollover correction.
    assert!((sunset.hours() - 27.58).abs() < 0.2, "sunset {}", sunset.hours());

    let (day_offset, hours_in_day) = sunset.day_and_hours();
    assert_eq!(day_offset, 1);
    assert!((hours_in_day - 3.58).abs() < 0.2);
}

#[test]
fn test_all_zenith_kinds_regular_day() {
    for zenith in [
        Zenith::Official,
        Zenith::Civil,
        Zenith::Nautical,
        Zenith::Astronomical,
    ] {
        let times = almanac::sun_times_utc(2023, 9, 23, 37.7749, -122.4194, zenith).unwrap();
        assert!(
            times.is_regular_day(),
            "expected both events for {zenith:?} at the equinox"
        );
    }
}

#[test]
fn test_astronomical_twilight_absent_in_high_summer() {
    // At 55° the sun stays within 18° of the horizon all night around the
    // June solstice: no astronomical dusk or dawn, while the official
    // sunrise/sunset still happen.
    let twilight = almanac::sun_times_utc(2023, 6, 21, 55.0, 0.0, Zenith::Astronomical).unwrap();
    assert!(twilight.is_polar());

    let official = almanac::sun_times_utc(2023, 6, 21, 55.0, 0.0, Zenith::Official).unwrap();
    assert!(official.is_regular_day());
}

#[test]
fn test_invalid_dates_rejected() {
    assert!(almanac::sun_times_utc(2023, 2, 29, 0.0, 0.0, Zenith::Official).is_err());
    assert!(almanac::sun_times_utc(2023, 13, 1, 0.0, 0.0, Zenith::Official).is_err());
    assert!(almanac::sun_times_utc(2023, 6, 0, 0.0, 0.0, Zenith::Official).is_err());

    // Leap day is fine in a leap year.
    assert!(almanac::sun_times_utc(2024, 2, 29, 0.0, 0.0, Zenith::Official).is_ok());
}

#[test]
fn test_hours_utc_day_and_hours() {
    let same_day = HoursUtc::from_hours(12.5);
    assert_eq!(same_day.day_and_hours(), (0, 12.5));

    let (day, hours) = HoursUtc::from_hours(25.5).day_and_hours();
    assert_eq!(day, 1);
    assert!((hours - 1.5).abs() < 1e-10);

    let (day, hours) = HoursUtc::from_hours(-0.5).day_and_hours();
    assert_eq!(day, -1);
    assert!((hours - 23.5).abs() < 1e-10);
}

#[test]
fn test_results_are_bit_identical_across_calls() {
    let first = almanac::sun_times_utc(2023, 11, 2, 61.2167, -149.8667, Zenith::Civil).unwrap();
    let second = almanac::sun_times_utc(2023, 11, 2, 61.2167, -149.8667, Zenith::Civil).unwrap();
    assert_eq!(first, second);
}

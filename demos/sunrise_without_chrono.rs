//! Numeric API usage: sunrise/sunset without the chrono dependency.

use solar_almanac::{almanac, Zenith};

fn main() {
    let (latitude, longitude) = (37.7749, -122.4194); // San Francisco

    let times = almanac::sun_times_utc(2023, 6, 21, latitude, longitude, Zenith::Official)
        .expect("valid coordinates and date");

    for (label, event) in [("sunrise", times.sunrise()), ("sunset", times.sunset())] {
        match event {
            Some(hours) => {
                let (day_offset, hours_in_day) = hours.day_and_hours();
                let hour = hours_in_day as u32;
                let minute = ((hours_in_day - f64::from(hour)) * 60.0) as u32;
                println!("{label}: {hour:02}:{minute:02} UTC (day offset {day_offset:+})");
            }
            None => println!("{label}: does not occur"),
        }
    }
}

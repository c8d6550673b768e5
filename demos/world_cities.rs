//! Sunrise/sunset for diverse locations, including polar outcomes.

use chrono::NaiveDate;
use solar_almanac::{almanac, SunTimes, Zenith};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
        },
        City {
            name: "London, United Kingdom",
            latitude: 51.5074,
            longitude: -0.1278,
        },
        City {
            name: "Suva, Fiji (near the date line)",
            latitude: -18.1416,
            longitude: 178.4419,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
        },
    ];

    // Winter solstice shows the most extreme variations.
    let date = NaiveDate::from_ymd_opt(2023, 12, 21).unwrap();

    for city in &cities {
        println!("{}", city.name);
        for (label, zenith) in [
            ("sunrise/sunset", Zenith::Official),
            ("civil twilight", Zenith::Civil),
        ] {
            let times = almanac::sun_times(date, city.latitude, city.longitude, zenith)?;
            print_times(label, &times);
        }
        println!();
    }

    Ok(())
}

fn print_times(label: &str, times: &SunTimes<chrono::DateTime<chrono::Utc>>) {
    match (times.sunrise(), times.sunset()) {
        (Some(sunrise), Some(sunset)) => {
            println!("  {label:15} {sunrise}  ->  {sunset}");
        }
        (None, None) => println!("  {label:15} polar day or polar night"),
        (Some(sunrise), None) => println!("  {label:15} {sunrise}  ->  (no sunset)"),
        (None, Some(sunset)) => println!("  {label:15} (no sunrise)  ->  {sunset}"),
    }
}

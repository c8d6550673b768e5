//! # Solar Almanac
//!
//! Sunrise and sunset times from the classical sunrise equation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library implements the approximation published in *Almanac for
//! Computers* (Nautical Almanac Office, 1990): a pure function mapping a
//! civil date, a geographic coordinate, and a zenith-angle definition to
//! optional sunrise and sunset instants. Accuracy is on the order of a
//! minute or two — adequate for twilight scheduling, not for ephemerides.
//!
//! ## Features
//!
//! - `std` (default): native float math via the standard library
//! - `chrono` (default): `NaiveDate`/`DateTime<Utc>` convenience API
//! - `libm`: pure-Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-almanac = "0.1"
//!
//! # Minimal std (no chrono, numeric API only)
//! solar-almanac = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-almanac = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use solar_almanac::{almanac, Zenith};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
//! let times = almanac::sun_times(date, 51.5074, -0.1278, Zenith::Official).unwrap();
//!
//! if let (Some(sunrise), Some(sunset)) = (times.sunrise(), times.sunset()) {
//!     println!("Sunrise: {sunrise}");
//!     println!("Sunset:  {sunset}");
//! } else {
//!     println!("Polar day or polar night");
//! }
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_almanac::{almanac, Zenith};
//!
//! let times = almanac::sun_times_utc(2023, 6, 21, 51.5074, -0.1278, Zenith::Civil).unwrap();
//! if let Some(dawn) = times.sunrise() {
//!     println!("Civil dawn: {:.3} hours UTC", dawn.hours());
//! }
//! ```
//!
//! ## Semantics
//!
//! - Dates are UTC civil dates; results are UTC instants at second
//!   granularity. Near the date line an event may be assigned to the
//!   adjacent civil day (the classical rollover heuristic is preserved).
//! - Polar day and polar night surface as absent events in
//!   [`SunTimes`], never as errors. Out-of-range or non-finite
//!   coordinates are rejected before any computation.
//! - Calculations are pure and stateless; concurrent use needs no
//!   coordination.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{HoursUtc, SunTimes, Zenith};

// Algorithm module
pub mod almanac;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod time;

// Internal modules
mod math;

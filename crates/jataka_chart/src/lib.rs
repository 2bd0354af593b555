//! Natal chart assembly.
//!
//! Orchestrates time normalization, ephemeris access, placement
//! classification, dosha evaluation, and the dasha engine into one
//! immutable [`Chart`] record. Pure plumbing: every domain rule lives in
//! the leaf crates, and any upstream failure aborts the request.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jataka_chart::analyze;
//!
//! let chart = analyze(&provider, "1990-05-15", "10:30", "Asia/Kolkata", 28.61, 77.20)?;
//! println!("Moon in {}", chart.moon_rashi.western_name());
//! println!("{}", chart.dosha.verdict);
//! ```

pub mod chart;
pub mod error;

pub use chart::{BodyPosition, Chart, analyze, compute_chart};
pub use error::ChartError;

// Re-export the building blocks so callers only need `use jataka_chart::*`.
pub use jataka_ephem::{EphemError, EphemerisProvider, HouseCusps, RawHouses, RawLongitude};
pub use jataka_time::TimeError;
pub use jataka_vedic::{DashaPeriod, Graha, MangalDosha, Rashi, SAPTA_GRAHAS};

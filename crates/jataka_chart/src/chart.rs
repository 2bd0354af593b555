//! The assembled natal chart record and its orchestration.

use chrono::{DateTime, Utc};

use jataka_ephem::{EphemError, EphemerisProvider, HouseCusps, adapter};
use jataka_time::{birth_instant, elapsed_years, jd_from_utc};
use jataka_vedic::{
    DashaPeriod, Graha, MangalDosha, Rashi, SAPTA_GRAHAS, current_period, house_of, mangal_dosha,
    rashi_from_longitude,
};

use crate::error::ChartError;

/// One placed body in the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyPosition {
    /// Which graha.
    pub graha: Graha,
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Sign containing the longitude.
    pub rashi: Rashi,
    /// House number in 1..12.
    pub house: u8,
}

/// The assembled chart. Created once per analysis request; immutable;
/// consumed read-only by report rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Julian Date (UT) of the birth instant.
    pub julian_day: f64,
    /// The 7 classical grahas, in [`SAPTA_GRAHAS`] order.
    pub positions: Vec<BodyPosition>,
    /// Ascendant longitude in degrees.
    pub ascendant_deg: f64,
    /// House cusp longitudes.
    pub cusps: HouseCusps,
    /// Sign containing the Moon.
    pub moon_rashi: Rashi,
    /// Mangal dosha verdict from Mars's house.
    pub dosha: MangalDosha,
    /// Active Vimshottari period at the query moment.
    pub dasha: DashaPeriod,
}

impl Chart {
    /// Position of a specific graha, if it is placed in the chart.
    pub fn position(&self, graha: Graha) -> Option<&BodyPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }
}

/// Compute a chart for a UTC birth instant at a location, with the dasha
/// evaluated against an explicit `now` reference. Deterministic: same
/// inputs give an identical chart.
///
/// Fails on the first upstream error; never returns a partial chart.
pub fn compute_chart(
    provider: &dyn EphemerisProvider,
    birth_utc: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
    now: DateTime<Utc>,
) -> Result<Chart, ChartError> {
    let jd = jd_from_utc(birth_utc);
    let (ascendant_deg, cusps) = adapter::houses(provider, jd, latitude_deg, longitude_deg)?;

    let mut positions = Vec::with_capacity(SAPTA_GRAHAS.len());
    let mut moon_lon = None;
    let mut mars_house = None;
    for graha in SAPTA_GRAHAS {
        let body_id = match graha.provider_id() {
            Some(id) => id,
            None => continue, // nodes are never queried
        };
        let lon = adapter::body_longitude(provider, jd, body_id)?;
        let house = house_of(lon, &cusps);
        if graha == Graha::Chandra {
            moon_lon = Some(lon);
        }
        if graha == Graha::Mangal {
            mars_house = Some(house);
        }
        positions.push(BodyPosition {
            graha,
            longitude_deg: lon,
            rashi: rashi_from_longitude(lon),
            house,
        });
    }

    // SAPTA_GRAHAS always contains Chandra and Mangal; report absence as
    // a provider-level fault rather than unwrapping.
    let moon_lon = moon_lon.ok_or_else(|| {
        ChartError::Ephemeris(EphemError::Provider("moon missing from body scan".to_string()))
    })?;
    let mars_house = mars_house.ok_or_else(|| {
        ChartError::Ephemeris(EphemError::Provider("mars missing from body scan".to_string()))
    })?;

    let dosha = mangal_dosha(mars_house);
    let dasha = current_period(moon_lon, elapsed_years(birth_utc, now));

    Ok(Chart {
        julian_day: jd,
        positions,
        ascendant_deg,
        cusps,
        moon_rashi: rashi_from_longitude(moon_lon),
        dosha,
        dasha,
    })
}

/// The upstream request interface: parse civil birth inputs, then compute
/// the chart with the dasha evaluated at the current wall-clock time.
pub fn analyze(
    provider: &dyn EphemerisProvider,
    date_of_birth: &str,
    time_of_birth: &str,
    timezone_name: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<Chart, ChartError> {
    let birth = birth_instant(date_of_birth, time_of_birth, timezone_name)?;
    compute_chart(provider, birth, latitude_deg, longitude_deg, Utc::now())
}

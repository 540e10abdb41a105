use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Decimal-backed coordinate pair.
///
/// Coordinates stay decimal all the way to the distance computation so that
/// repeated near-threshold comparisons are not skewed by binary floating
/// point representations of the stored values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

impl Coordinates {
    pub fn new(latitude: Decimal, longitude: Decimal) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers (haversine formula).
    ///
    /// Pure and symmetric; identical points yield exactly `0.0`. A coordinate
    /// that does not fit an `f64` degrades to `f64::NAN` rather than failing.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let lat1_deg = degrees(self.latitude);
        let lat2_deg = degrees(other.latitude);

        let lat1 = lat1_deg.to_radians();
        let lat2 = lat2_deg.to_radians();
        let delta_lat = (lat2_deg - lat1_deg).to_radians();
        let delta_lon = (degrees(other.longitude) - degrees(self.longitude)).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

fn degrees(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

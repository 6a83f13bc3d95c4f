use crate::domain::model::{BoundingBox, Location, SunTimes};
use chrono::{DateTime, Utc};

/// True iff `sunset < now < sunrise`, strict on both sides.
///
/// Only meaningful when the oracle hands back a sunset that precedes the
/// sunrise being compared against. With a same-day pair (sunrise first) this
/// stays false through the night.
pub fn is_dark(sunrise: DateTime<Utc>, sunset: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    sunset < now && now < sunrise
}

pub fn is_dark_at(times: &SunTimes, now: DateTime<Utc>) -> bool {
    is_dark(times.sunrise, times.sunset, now)
}

/// Inclusive per-axis check against a flat lat/lng box.
pub fn is_in_range(point: Location, lat_range: (f64, f64), lng_range: (f64, f64)) -> bool {
    let in_lat = lat_range.0 <= point.latitude && point.latitude <= lat_range.1;
    let in_lng = lng_range.0 <= point.longitude && point.longitude <= lng_range.1;
    in_lat && in_lng
}

pub fn is_in_box(point: Location, bbox: &BoundingBox) -> bool {
    is_in_range(point, bbox.lat_range, bbox.lng_range)
}

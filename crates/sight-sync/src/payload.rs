//! Coordinates carried in a create request body.
//!
//! The primary store's schema has no location columns, so the coordinate is
//! read from the raw body on its own. Any problem (empty body, invalid JSON,
//! non-numeric fields, out-of-range values) yields [`Coordinate::ZERO`].

use serde::Deserialize;
use sight_core::geo::Coordinate;

#[derive(Debug, Default, Deserialize)]
struct CreatePayload {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
}

/// Why a body's coordinate was replaced by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    Unreadable(String),
    OutOfRange,
}

/// Read `{latitude, longitude}` from a JSON body.
///
/// Missing fields default to zero individually.
///
/// # Errors
///
/// Returns [`Rejected`] when the body cannot be read as a coordinate; the
/// caller substitutes [`Coordinate::ZERO`].
pub fn parse_coordinate(body: &[u8]) -> Result<Coordinate, Rejected> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Coordinate::ZERO);
    }
    let payload: CreatePayload =
        serde_json::from_slice(body).map_err(|e| Rejected::Unreadable(e.to_string()))?;
    let coordinate = Coordinate::new(payload.latitude, payload.longitude);
    if coordinate.is_valid() {
        Ok(coordinate)
    } else {
        Err(Rejected::OutOfRange)
    }
}

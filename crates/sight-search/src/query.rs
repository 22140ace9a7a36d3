//! Search query parameters as they arrive on the wire.

use serde::Deserialize;
use sight_core::geo::Coordinate;

use crate::error::SearchError;

/// Raw `?latitude=..&longitude=..` values.
///
/// Kept as strings so that unparseable input reaches the search instead of
/// being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl SearchParams {
    /// Build from decoded query pairs. The first value of a repeated key wins.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "latitude" => &mut params.latitude,
                "longitude" => &mut params.longitude,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// The query point, if both values are present and form a valid coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidQuery`] describing what is wrong.
    pub fn origin(&self) -> Result<Coordinate, SearchError> {
        let (Some(latitude), Some(longitude)) = (&self.latitude, &self.longitude) else {
            return Err(SearchError::InvalidQuery(
                "latitude and longitude are both required".into(),
            ));
        };
        Coordinate::parse(latitude, longitude).ok_or_else(|| {
            SearchError::InvalidQuery(format!("not a coordinate: ({latitude}, {longitude})"))
        })
    }
}

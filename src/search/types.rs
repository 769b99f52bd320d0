use serde::Deserialize;

use crate::error::CitySuggestError;

const MAX_LNG: f64 = 180.0;
const MAX_LAT: f64 = 90.0;
/// Latitude bound of the geo index behind the search service
const MAX_LAT_INDEXED: f64 = 85.051_128_78;

/// A city suggestion returned by the search service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub country: Option<String>,
    pub score: Option<i64>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: None,
            score: None,
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// One element of the search response array
///
/// The service has shipped both shapes: bare names, and objects carrying
/// at least a `name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CityRecord {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        country: Option<String>,
        #[serde(default)]
        score: Option<i64>,
    },
}

impl From<CityRecord> for City {
    fn from(record: CityRecord) -> Self {
        match record {
            CityRecord::Name(name) => City::new(name),
            CityRecord::Detailed {
                name,
                country,
                score,
            } => City {
                name,
                country: country.filter(|c| !c.is_empty()),
                score,
            },
        }
    }
}

/// Longitude/latitude sent as `lng`/`lat` alongside the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    lng: f64,
    lat: f64,
}

impl ReferencePoint {
    /// Validate ranges; latitudes beyond the indexed band are clamped to it.
    pub fn new(lng: f64, lat: f64) -> Result<Self, CitySuggestError> {
        if !(-MAX_LNG..=MAX_LNG).contains(&lng) {
            return Err(CitySuggestError::InvalidReferencePoint(format!(
                "'lng' {} is not in valid range [-180, 180]",
                lng
            )));
        }
        if !(-MAX_LAT..=MAX_LAT).contains(&lat) {
            return Err(CitySuggestError::InvalidReferencePoint(format!(
                "'lat' {} is not in valid range [-90, 90]",
                lat
            )));
        }

        Ok(Self {
            lng,
            lat: lat.clamp(-MAX_LAT_INDEXED, MAX_LAT_INDEXED),
        })
    }

    /// Parse `"LNG,LAT"` as given on the command line
    pub fn parse(s: &str) -> Result<Self, CitySuggestError> {
        let (lng, lat) = s.split_once(',').ok_or_else(|| {
            CitySuggestError::InvalidReferencePoint(format!("expected LNG,LAT, got '{}'", s))
        })?;
        let parse = |name: &str, value: &str| {
            value.trim().parse::<f64>().map_err(|e| {
                CitySuggestError::InvalidReferencePoint(format!("'{}' {}: {}", name, value, e))
            })
        };
        Self::new(parse("lng", lng)?, parse("lat", lat)?)
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }
}

/// Request sent to the search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Correlation token, used to drop stale responses
    pub request_id: u64,
}

/// Response received from the search worker
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
    Results {
        query: String,
        request_id: u64,
        cities: Vec<City>,
    },
    Failed {
        query: String,
        request_id: u64,
        error: String,
    },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Results { request_id, .. } | SearchResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }

    pub fn query(&self) -> &str {
        match self {
            SearchResponse::Results { query, .. } | SearchResponse::Failed { query, .. } => query,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

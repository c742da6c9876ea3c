//! Report types, one per endpoint, and the pieces they share.

use serde::Serialize;
use sxd_document::dom::Element;

use crate::decode::{DecodeError, Node, error_signal, nested, optional, push, push_each, scalar};

pub mod climate;
pub mod condition;
pub mod day;

pub use climate::ClimateAverage;
pub use condition::{
    Condition, CurrentCondition, ForecastChances, ForecastCondition, LevelCondition,
    MarineCondition, SkiCondition,
};
pub use day::{Astronomy, Day, ForecastDay, MarineDay, PastDay, SkiDay, TempRange, Tide};

/// A decoded top-level response.
pub trait Report: Node + Default + Send {
    /// The message of the payload's `error/msg` node, if present.
    fn error_signal(&self) -> Option<&str>;
}

/// The query as the provider understood it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Request {
    pub query: String,
    /// E.g. "City", "LatLon", "Zipcode".
    #[serde(rename = "type")]
    pub kind: String,
}

impl Node for Request {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "query" => scalar(&mut self.query, child),
            "type" => scalar(&mut self.kind, child),
            _ => Ok(false),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Zone {
    /// Offset from UTC in hours, possibly fractional.
    pub utc_offset: f64,
}

impl Node for Zone {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "utcOffset" => scalar(&mut self.utc_offset, child),
            _ => Ok(false),
        }
    }
}

/// A location the free-form query resolved to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Area {
    pub name: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: u64,
    /// Distance between the query point and this area.
    pub distance_miles: f64,
    pub weather_url: String,
    /// Only sent when time zone information was requested.
    pub zone: Option<Zone>,
}

impl Node for Area {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "areaName" => scalar(&mut self.name, child),
            "region" => scalar(&mut self.region, child),
            "country" => scalar(&mut self.country, child),
            "latitude" => scalar(&mut self.latitude, child),
            "longitude" => scalar(&mut self.longitude, child),
            "population" => scalar(&mut self.population, child),
            "distance_miles" => scalar(&mut self.distance_miles, child),
            "weatherUrl" => scalar(&mut self.weather_url, child),
            "timezone" => optional(&mut self.zone, child),
            _ => Ok(false),
        }
    }
}

/// Local forecast (`weather` endpoint).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Local {
    pub request: Request,
    pub nearest_area: Area,
    pub current: CurrentCondition,
    pub weather: Vec<ForecastDay>,
    pub climate: Vec<ClimateAverage>,
    pub error: Option<String>,
}

impl Node for Local {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "error" => error_signal(&mut self.error, child),
            "request" => nested(&mut self.request, child),
            "nearest_area" => nested(&mut self.nearest_area, child),
            "current_condition" => nested(&mut self.current, child),
            "weather" => push(&mut self.weather, child),
            "ClimateAverages" => push_each(&mut self.climate, child, "month"),
            _ => Ok(false),
        }
    }
}

impl Report for Local {
    fn error_signal(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Marine forecast (`marine` endpoint) or past marine weather (`past-marine`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marine {
    pub request: Request,
    pub nearest_area: Area,
    pub weather: Vec<MarineDay>,
    pub error: Option<String>,
}

impl Node for Marine {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "error" => error_signal(&mut self.error, child),
            "request" => nested(&mut self.request, child),
            "nearest_area" => nested(&mut self.nearest_area, child),
            "weather" => push(&mut self.weather, child),
            _ => Ok(false),
        }
    }
}

impl Report for Marine {
    fn error_signal(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Past marine weather has the same shape as a marine forecast.
pub type PastMarine = Marine;

/// Ski forecast (`ski` endpoint).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ski {
    pub request: Request,
    pub nearest_area: Area,
    pub weather: Vec<SkiDay>,
    pub error: Option<String>,
}

impl Node for Ski {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "error" => error_signal(&mut self.error, child),
            "request" => nested(&mut self.request, child),
            "nearest_area" => nested(&mut self.nearest_area, child),
            "weather" => push(&mut self.weather, child),
            _ => Ok(false),
        }
    }
}

impl Report for Ski {
    fn error_signal(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Past local weather (`past-weather` endpoint).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PastLocal {
    pub request: Request,
    pub nearest_area: Area,
    pub weather: Vec<PastDay>,
    pub error: Option<String>,
}

impl Node for PastLocal {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "error" => error_signal(&mut self.error, child),
            "request" => nested(&mut self.request, child),
            "nearest_area" => nested(&mut self.nearest_area, child),
            "weather" => push(&mut self.weather, child),
            _ => Ok(false),
        }
    }
}

impl Report for PastLocal {
    fn error_signal(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Location search (`search` endpoint).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Search {
    pub results: Vec<Area>,
    pub error: Option<String>,
}

impl Node for Search {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "error" => error_signal(&mut self.error, child),
            "result" => push(&mut self.results, child),
            _ => Ok(false),
        }
    }
}

impl Report for Search {
    fn error_signal(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Time zone lookup (`tz` endpoint).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeZone {
    pub request: Request,
    pub nearest_area: Area,
    pub zone: Zone,
    pub error: Option<String>,
}

impl Node for TimeZone {
    fn visit(&mut self, name: &str, child: Element<'_>) -> Result<bool, DecodeError> {
        match name {
            "error" => error_signal(&mut self.error, child),
            "request" => nested(&mut self.request, child),
            "nearest_area" => nested(&mut self.nearest_area, child),
            "time_zone" => nested(&mut self.zone, child),
            _ => Ok(false),
        }
    }
}

impl Report for TimeZone {
    fn error_signal(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// One geographic location returned by `/destinations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country: String,
}

/// Current conditions returned by `/weathers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temperature: f64,
    pub weather_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
}

/// Aggregated record built from the first entry of each endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCity {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub weather: String,
    pub airport: String,
}

impl DashboardCity {
    pub fn from_parts(destination: Destination, weather: Weather, airport: Airport) -> Self {
        Self {
            city: destination.name,
            country: destination.country,
            temperature: weather.temperature,
            weather: weather.weather_description,
            airport: airport.name,
        }
    }
}

/// The three endpoints the dashboard is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Destinations,
    Weathers,
    Airports,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Destinations => "destinations",
            Resource::Weathers => "weathers",
            Resource::Airports => "airports",
        }
    }

    pub const fn all() -> &'static [Resource] {
        &[Resource::Destinations, Resource::Weathers, Resource::Airports]
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

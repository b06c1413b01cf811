use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{
    config::Config,
    error::DashboardError,
    fetch::{endpoint_url, fetch_json},
    model::{Airport, Destination, Resource, Weather},
};

/// Where destinations, weather and airports come from.
#[async_trait]
pub trait TravelSource: Send + Sync + Debug {
    async fn destinations(&self, query: &str) -> Result<Vec<Destination>, DashboardError>;
    async fn weathers(&self, query: &str) -> Result<Vec<Weather>, DashboardError>;
    async fn airports(&self, query: &str) -> Result<Vec<Airport>, DashboardError>;
}

/// Talks to the `/destinations`, `/weathers` and `/airports` JSON endpoints.
#[derive(Debug, Clone)]
pub struct HttpTravelSource {
    base_url: String,
    http: Client,
}

impl HttpTravelSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn search<T: serde::de::DeserializeOwned>(
        &self,
        resource: Resource,
        query: &str,
    ) -> Result<Vec<T>, DashboardError> {
        let url = endpoint_url(&self.base_url, resource, query)?;
        fetch_json(&self.http, url).await
    }
}

#[async_trait]
impl TravelSource for HttpTravelSource {
    async fn destinations(&self, query: &str) -> Result<Vec<Destination>, DashboardError> {
        self.search(Resource::Destinations, query).await
    }

    async fn weathers(&self, query: &str) -> Result<Vec<Weather>, DashboardError> {
        self.search(Resource::Weathers, query).await
    }

    async fn airports(&self, query: &str) -> Result<Vec<Airport>, DashboardError> {
        self.search(Resource::Airports, query).await
    }
}

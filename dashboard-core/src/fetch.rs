//! Minimal HTTP + JSON helper shared by every endpoint.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::{error::DashboardError, model::Resource};

/// Build `<base>/<resource>?search=<query>`.
///
/// The base may carry a path prefix (`http://host/api`) and may or may not
/// end with a slash; the resource is always appended under it.
pub fn endpoint_url(base_url: &str, resource: Resource, query: &str) -> Result<Url, DashboardError> {
    let normalized = format!("{}/", base_url.trim_end_matches('/'));

    let base = Url::parse(&normalized).map_err(|source| DashboardError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;

    let mut url = base.join(resource.path()).map_err(|source| DashboardError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })?;
    url.query_pairs_mut().append_pair("search", query);

    Ok(url)
}

/// GET `url` and decode the body as `T`. The shape is trusted, not validated.
pub async fn fetch_json<T: DeserializeOwned>(http: &Client, url: Url) -> Result<T, DashboardError> {
    debug!(%url, "fetching");

    let res = match http.get(url.clone()).send().await {
        Ok(res) => res,
        Err(source) => return Err(DashboardError::Network { url, source }),
    };

    let status = res.status();
    let body = match res.text().await {
        Ok(body) => body,
        Err(source) => return Err(DashboardError::Network { url, source }),
    };

    if !status.is_success() {
        return Err(DashboardError::Status { url, status, body: truncate_body(&body) });
    }

    serde_json::from_str(&body).map_err(|source| DashboardError::Decode { url, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

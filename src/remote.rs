//! External collaborators: the config and catalog services.
//!
//! Both are plain request/response exchanges. Their response shapes are the
//! only thing this crate depends on:
//!
//! - config: `{ "plugins": [{ "id", "enabled", "settings" }] }`
//! - catalog: `{ "plugins": [PluginDescriptor, ...], "globalStyle"?: locator }`
//!
//! The traits exist so the orchestrator never knows it is talking HTTP;
//! tests implement them with canned values.

use serde::Deserialize ;
use thiserror::Error ;
use url::Url ;

use crate::config::PluginConfig ;
use crate::descriptor::PluginDescriptor ;



/// Source of the host configuration.
pub trait ConfigSource {

    /// Error type for unreachable or malformed responses.
    type Error: std::error::Error ;

    /// Fetches the current plugin configuration.
    ///
    /// # Errors
    /// Implementations fail when the service is unreachable or its response
    /// cannot be decoded. The orchestrator treats this as recoverable.
    fn fetch_config( &self ) -> Result<PluginConfig, Self::Error> ;

}

/// Source of the plugin catalog.
pub trait CatalogSource {

    /// Error type for unreachable or malformed responses.
    type Error: std::error::Error ;

    /// Fetches the full plugin catalog.
    ///
    /// # Errors
    /// Implementations fail when the service is unreachable or its response
    /// cannot be decoded. The orchestrator treats this as fatal for the run.
    fn fetch_catalog( &self ) -> Result<CatalogResponse, Self::Error> ;

}

/// The catalog service's response: every available descriptor, plus an
/// optional host-wide style resource loaded once before any plugin.
#[derive( Clone, Debug, Default, Deserialize )]
#[serde( rename_all = "camelCase" )]
pub struct CatalogResponse {
    #[serde( default )]
    pub plugins: Vec<PluginDescriptor>,
    #[serde( default )]
    pub global_style: Option<String>,
}

/// Errors that can occur talking to a collaborator service over HTTP.
#[derive( Debug, Error )]
pub enum RemoteError {
    /// The request failed outright: connection refused, DNS failure, or the
    /// per-request timeout elapsed.
    #[error( "request to {0} failed: {1}" )] Request( Url, reqwest::Error ),
    /// The service answered with a non-success status.
    #[error( "{0} returned status {1}" )] Status( Url, reqwest::StatusCode ),
    /// The response body was not the expected JSON shape.
    #[error( "failed to decode response from {0}: {1}" )] Decode( Url, reqwest::Error ),
}

fn get_json<T>( client: &reqwest::blocking::Client, endpoint: &Url ) -> Result<T, RemoteError>
where
    T: serde::de::DeserializeOwned,
{
    let response = client.get( endpoint.clone() )
        .send()
        .map_err(| err | RemoteError::Request( endpoint.clone(), err ))?;
    match response.status().is_success() {
        false => Err( RemoteError::Status( endpoint.clone(), response.status() )),
        true => response.json()
            .map_err(| err | RemoteError::Decode( endpoint.clone(), err )),
    }
}

/// Fetches the configuration from an HTTP endpoint.
pub struct HttpConfigSource {
    client: reqwest::blocking::Client,
    endpoint: Url,
}

impl HttpConfigSource {
    pub fn new( client: reqwest::blocking::Client, endpoint: Url ) -> Self {
        Self { client, endpoint }
    }
}

impl ConfigSource for HttpConfigSource {
    type Error = RemoteError ;
    fn fetch_config( &self ) -> Result<PluginConfig, RemoteError> {
        get_json( &self.client, &self.endpoint )
    }
}

/// Fetches the catalog from an HTTP endpoint.
pub struct HttpCatalogSource {
    client: reqwest::blocking::Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    pub fn new( client: reqwest::blocking::Client, endpoint: Url ) -> Self {
        Self { client, endpoint }
    }
}

impl CatalogSource for HttpCatalogSource {
    type Error = RemoteError ;
    fn fetch_catalog( &self ) -> Result<CatalogResponse, RemoteError> {
        get_json( &self.client, &self.endpoint )
    }
}

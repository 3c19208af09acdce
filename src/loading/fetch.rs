use std::time::Duration ;
use thiserror::Error ;
use url::Url ;



/// Network seam of the resource loader.
///
/// Implement this trait to define how resource locators are turned into bytes.
/// The production implementation is [`HttpFetcher`]; tests substitute an
/// in-memory fake so no suite touches the network.
pub trait ResourceFetcher {

    /// Error type for failed fetches.
    type Error: std::error::Error + Send + Sync + 'static ;

    /// Fetches the resource behind `locator` and returns its raw bytes.
    ///
    /// # Errors
    /// Implementations fail when the resource cannot be retrieved in full.
    fn fetch( &mut self, locator: &str ) -> Result<Vec<u8>, Self::Error> ;

}

/// Errors that can occur fetching a resource over HTTP.
#[derive( Debug, Error )]
pub enum FetchError {
    /// The locator could not be resolved against the base address.
    #[error( "invalid resource locator `{0}`: {1}" )] InvalidLocator( String, url::ParseError ),
    /// The request failed outright: connection refused, DNS failure, or the
    /// per-request timeout elapsed.
    #[error( "request for `{0}` failed: {1}" )] Request( String, reqwest::Error ),
    /// The server answered with a non-success status.
    #[error( "request for `{0}` returned status {1}" )] Status( String, reqwest::StatusCode ),
    /// The response body could not be read in full.
    #[error( "failed to read body of `{0}`: {1}" )] Body( String, reqwest::Error ),
}

/// Fetches resources over HTTP, resolving locators against a base address.
///
/// Every request carries a bounded timeout so a hung transfer surfaces as a
/// [`FetchError::Request`] instead of stalling the pipeline indefinitely.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base: Url,
}

impl HttpFetcher {

    /// Creates a fetcher with its own HTTP client and the given per-request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new( base: Url, timeout: Duration ) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent( concat!( "pane-link/", env!( "CARGO_PKG_VERSION" )))
            .timeout( timeout )
            .build()?;
        Ok( Self { client, base })
    }

    /// Creates a fetcher sharing an existing HTTP client.
    pub fn with_client( client: reqwest::blocking::Client, base: Url ) -> Self {
        Self { client, base }
    }

}

impl ResourceFetcher for HttpFetcher {

    type Error = FetchError ;

    fn fetch( &mut self, locator: &str ) -> Result<Vec<u8>, FetchError> {

        let url = self.base.join( locator )
            .map_err(| err | FetchError::InvalidLocator( locator.to_string(), err ))?;
        tracing::debug!( %url, "fetching resource" );

        let response = self.client.get( url )
            .send()
            .map_err(| err | FetchError::Request( locator.to_string(), err ))?;

        match response.status().is_success() {
            false => Err( FetchError::Status( locator.to_string(), response.status() )),
            true => response.bytes()
                .map(| bytes | bytes.to_vec() )
                .map_err(| err | FetchError::Body( locator.to_string(), err )),
        }

    }

}

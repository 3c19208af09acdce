//! Resource loading: locator-idempotent fetch and host activation.
//!
//! The [`ResourceLoader`] owns the two seams resource loading splits into:
//!
//! 1. [`ResourceFetcher`] turns an opaque locator into bytes (network).
//! 2. [`BundleActivator`] makes executable bytes run so the plugin performs
//!    its registration side effects (host environment).
//!
//! Both operations are idempotent with respect to locator identity: a locator
//! that was already requested within this loader's lifetime is not requested
//! again, whether it originally succeeded or failed.

use std::collections::HashSet ;
use thiserror::Error ;

use crate::descriptor::PluginDescriptor ;
use crate::registry::CapabilityRegistry ;

mod fetch ;
mod activate ;

pub use fetch::{ FetchError, HttpFetcher, ResourceFetcher };
pub use activate::{ ActivateError, BundleActivator, WasmActivator };



/// Errors that can occur loading an executable resource.
#[derive( Debug, Error )]
pub enum LoadError<F: std::error::Error, A: std::error::Error> {
    /// The bundle bytes could not be fetched.
    #[error( "failed to fetch executable resource: {0}" )] Fetch( F ),
    /// The bundle was fetched but could not be activated.
    #[error( "failed to activate bundle: {0}" )] Activate( A ),
}

/// Fetches and activates plugin resources, deduplicating repeated requests
/// for the same locator.
pub struct ResourceLoader<F: ResourceFetcher, A: BundleActivator> {
    fetcher: F,
    activator: A,
    requested: HashSet<String>,
}

impl<F: ResourceFetcher, A: BundleActivator> ResourceLoader<F, A> {

    pub fn new( fetcher: F, activator: A ) -> Self {
        Self { fetcher, activator, requested: HashSet::new() }
    }

    /// Requests a style resource.
    ///
    /// Fire-and-forget: style resources have no completion contract, so
    /// failures are logged and tolerated rather than failing the plugin.
    /// Delivering the fetched style to the presentation layer is the
    /// embedder's concern.
    pub fn load_style( &mut self, locator: &str ) {

        if !self.request_once( locator ) {
            tracing::debug!( locator, "style resource already requested; skipping" );
            return ;
        }

        match self.fetcher.fetch( locator ) {
            Ok( _ ) => tracing::debug!( locator, "style resource loaded" ),
            Err( err ) => tracing::warn!( locator, error = %err, "failed to load style resource" ),
        }

    }

    /// Fetches and activates `descriptor`'s executable bundle, blocking until
    /// the bundle has finished initializing.
    ///
    /// A locator that was already requested resolves immediately without a
    /// second fetch or activation.
    ///
    /// # Errors
    /// Returns [`LoadError`] when the fetch or the activation fails; the
    /// locator still counts as requested, so a retry within the same run is
    /// a no-op.
    pub fn load_executable(
        &mut self,
        descriptor: &PluginDescriptor,
        registry: &mut CapabilityRegistry,
    ) -> Result<(), LoadError<F::Error, A::Error>> {

        if !self.request_once( &descriptor.bundle_locator ) {
            tracing::debug!(
                plugin = %descriptor.id,
                locator = %descriptor.bundle_locator,
                "executable resource already requested; skipping"
            );
            return Ok(());
        }

        let bundle = self.fetcher.fetch( &descriptor.bundle_locator )
            .map_err( LoadError::Fetch )?;
        self.activator.activate( descriptor, &bundle, registry )
            .map_err( LoadError::Activate )?;

        Ok(())

    }

    /// Marks `locator` as requested. Returns `false` if it already was.
    fn request_once( &mut self, locator: &str ) -> bool {
        self.requested.insert( locator.to_string() )
    }

}

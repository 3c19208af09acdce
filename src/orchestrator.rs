//! The top-level load pipeline.
//!
//! [`LoadOrchestrator::run`] drives one complete load: fetch the catalog and
//! the configuration, compute the dependency closure and the load order, then
//! walk the plan one plugin at a time - styles, executable bundle, capability
//! read-back, settings - collecting a [`LoadedPlugin`] per success.
//!
//! Loading is deliberately sequential. The planner's ordering guarantee only
//! holds if each plugin's publications are visible before the next plugin's
//! bundle runs, so the pipeline awaits full completion of every entry before
//! advancing. Parallelizing the loop would require per-dependency barriers
//! and explicit registry synchronization to preserve that guarantee.

use pipe_trait::Pipe ;
use tracing::{ error, info, warn };

use crate::catalog::Catalog ;
use crate::closure::build_closure ;
use crate::config::{ PluginConfig, Settings };
use crate::descriptor::PluginDescriptor ;
use crate::loading::{ BundleActivator, ResourceFetcher, ResourceLoader };
use crate::planner::plan ;
use crate::registry::{ CapabilityRegistry, Exports };
use crate::remote::{ CatalogSource, ConfigSource };



/// One successfully loaded plugin: its catalog entry, everything it published,
/// and its resolved settings. Created the instant the plugin's bundle finishes
/// loading and immutable thereafter.
#[derive( Clone, Debug )]
pub struct LoadedPlugin {
    pub descriptor: PluginDescriptor,
    pub exports: Exports,
    pub settings: Settings,
}

/// Drives the load pipeline end to end.
///
/// The orchestrator owns the capability registry and threads it through
/// activation by reference; it holds no other state across runs - closure and
/// plan are recomputed fresh on every [`run`]( Self::run ), and ownership of
/// the returned list passes entirely to the caller.
pub struct LoadOrchestrator<C, K, F, A>
where
    C: ConfigSource,
    K: CatalogSource,
    F: ResourceFetcher,
    A: BundleActivator,
{
    config_source: C,
    catalog_source: K,
    loader: ResourceLoader<F, A>,
    registry: CapabilityRegistry,
}

impl<C, K, F, A> LoadOrchestrator<C, K, F, A>
where
    C: ConfigSource,
    K: CatalogSource,
    F: ResourceFetcher,
    A: BundleActivator,
{

    pub fn new( config_source: C, catalog_source: K, loader: ResourceLoader<F, A> ) -> Self {
        Self {
            config_source,
            catalog_source,
            loader,
            registry: CapabilityRegistry::new(),
        }
    }

    /// Runs one complete load and returns the successfully loaded plugins in
    /// load order.
    ///
    /// Failure handling, from coarse to fine:
    ///
    /// - Catalog unreachable: fatal for the run. Returns an empty list
    ///   without consulting the configuration - with no catalog there is
    ///   nothing to plan.
    /// - Config unreachable: recoverable. The built-in default enablement
    ///   set is substituted and the run continues.
    /// - Dependency cycle: fatal for the run; no order satisfies the
    ///   dependencies-first guarantee.
    /// - Per-plugin resource failure: isolated. The plugin is logged and
    ///   excluded; the rest of the plan proceeds. A plugin whose dependency
    ///   failed is still attempted - capability absence is a legal state and
    ///   dependents must already tolerate an empty exports map.
    pub fn run( &mut self ) -> Vec<LoadedPlugin> {

        let response = match self.catalog_source.fetch_catalog() {
            Ok( response ) => response,
            Err( err ) => {
                error!( error = %err, "catalog service unreachable; aborting load run" );
                return Vec::with_capacity( 0 );
            },
        };

        let config = match self.config_source.fetch_config() {
            Ok( config ) => config,
            Err( err ) => {
                warn!( error = %err, "config service unreachable; using built-in default set" );
                PluginConfig::fallback()
            },
        };

        let global_style = response.global_style ;
        let ( catalog, catalog_warnings ) = response.plugins.pipe( Catalog::new );
        for warning in &catalog_warnings {
            warn!( %warning, "catalog diagnostic" );
        }

        let enabled = config.enabled_set();
        let ( closure, closure_warnings ) = build_closure( &enabled, &catalog );
        for warning in &closure_warnings {
            warn!( %warning, "closure diagnostic" );
        }

        let order = match plan( &closure, &catalog ) {
            Ok( order ) => order,
            Err( err ) => {
                error!( error = %err, "failed to plan load order; aborting load run" );
                return Vec::with_capacity( 0 );
            },
        };
        info!( enabled = enabled.len(), planned = order.len(), "load plan computed" );

        // The host-wide style loads once, before any plugin-specific resource.
        if let Some( locator ) = &global_style {
            self.loader.load_style( locator );
        }

        let mut loaded = Vec::with_capacity( order.len() );
        for descriptor in order {

            for locator in &descriptor.style_locators {
                self.loader.load_style( locator );
            }

            match self.loader.load_executable( descriptor, &mut self.registry ) {
                Ok(()) => {
                    let exports = self.registry.exports_of( &descriptor.id );
                    let settings = config.settings_for( &descriptor.id );
                    info!( plugin = %descriptor.id, exports = exports.len(), "plugin loaded" );
                    loaded.push( LoadedPlugin {
                        descriptor: descriptor.clone(),
                        exports,
                        settings,
                    });
                },
                Err( err ) => warn!(
                    plugin = %descriptor.id,
                    error = %err,
                    "plugin failed to load; continuing with the rest of the plan"
                ),
            }

        }

        info!( loaded = loaded.len(), "load run complete" );
        loaded

    }

    /// The registry holding everything loaded plugins have published so far.
    #[inline] pub fn registry( &self ) -> &CapabilityRegistry { &self.registry }

    /// Consumes the orchestrator, returning the registry.
    pub fn into_registry( self ) -> CapabilityRegistry { self.registry }

}

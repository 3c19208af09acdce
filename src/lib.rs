//! A dependency-resolving plugin loading pipeline for pane/UI plugin hosts.
//!
//! A host process declares which plugins it wants via a config service; a
//! catalog service describes every available plugin and its dependency edges.
//! `pane_link` computes the set of plugins that must load (the **closure**),
//! derives a deterministic load order in which dependencies always precede
//! dependents (the **plan**), then fetches and activates each plugin's style
//! and executable resources strictly one at a time. As each bundle runs it
//! publishes **capabilities** into a registry the orchestrator owns, so a
//! plugin can rely on everything earlier in the plan being visible by the
//! time its own bundle starts. A plugin that fails to load is logged and
//! skipped; the rest of the plan proceeds.
//!
//! # Core Concepts
//!
//! - [`PluginDescriptor`]: one catalog entry - id, version, kind, priority,
//!   dependency ids, and the locators of its style and executable resources.
//!
//! - [`Catalog`]: the id-indexed descriptor collection. Input order is kept
//!   because it is the final tie-break that makes plans reproducible.
//!
//! - [`build_closure`] / [`plan`]: the pure graph half of the pipeline.
//!   Unknown ids are diagnostics, not failures; a dependency cycle fails the
//!   plan with [`PlanError::CycleDetected`].
//!
//! - [`ResourceLoader`]: locator-idempotent fetch and activation, split at
//!   two replaceable seams - [`ResourceFetcher`] (network) and
//!   [`BundleActivator`] (host environment). The shipped implementations are
//!   [`HttpFetcher`] and [`WasmActivator`], which runs bundles as WASM
//!   components targeting the `pane:host` world.
//!
//! - [`CapabilityRegistry`]: the namespace plugins publish into, keyed by
//!   plugin id. Passed by reference, never global, so any component can be
//!   tested against a fresh registry.
//!
//! - [`LoadOrchestrator`]: ties it together and returns the loaded plugins
//!   with their [`Exports`] and resolved settings.
//!
//! # Example
//!
//! The graph half is pure and needs no host or network:
//!
//! ```
//! use pane_link::{ Catalog, PluginDescriptor, PluginId, PluginKind, build_closure, plan };
//!
//! fn shared( id: &str, dependencies: &[ &str ], priority: i32 ) -> PluginDescriptor {
//!     PluginDescriptor {
//!         id: PluginId::from( id ),
//!         version: "1.0.0".to_string(),
//!         kind: PluginKind::Shared,
//!         priority,
//!         dependencies: dependencies.iter().map(|&d| PluginId::from( d )).collect(),
//!         bundle_locator: format!( "bundles/{id}.wasm" ),
//!         style_locators: Vec::new(),
//!         render_slot: None,
//!         exported_component_name: None,
//!         pane_metadata: None,
//!     }
//! }
//!
//! let ( catalog, warnings ) = Catalog::new([
//!     shared( "core", &[], 100 ),
//!     shared( "panes", &[ "core" ], 90 ),
//! ]);
//! assert!( warnings.is_empty() );
//!
//! // Only `panes` is enabled; `core` is pulled in as its dependency.
//! let enabled = [ PluginId::from( "panes" )].into_iter().collect();
//! let ( closure, closure_warnings ) = build_closure( &enabled, &catalog );
//! assert!( closure_warnings.is_empty() );
//! assert_eq!( closure.len(), 2 );
//!
//! let order = plan( &closure, &catalog ).unwrap();
//! let ids: Vec<_> = order.iter().map(| descriptor | descriptor.id.as_str() ).collect();
//! assert_eq!( ids, [ "core", "panes" ]);
//! ```
//!
//! The full pipeline is wired through [`LoadOrchestrator`]; see `src/main.rs`
//! for a complete HTTP-backed setup.

mod descriptor ;
mod catalog ;
mod config ;
mod closure ;
mod planner ;
mod registry ;
mod loading ;
mod remote ;
mod orchestrator ;
mod util ;

pub use descriptor::{ PaneMetadata, PluginDescriptor, PluginId, PluginKind };
pub use catalog::{ Catalog, CatalogWarning };
pub use config::{ ConfigEntry, PluginConfig, Settings };
pub use closure::{ ClosureWarning, build_closure };
pub use planner::{ PlanError, plan };
pub use registry::{ Capability, CapabilityRegistry, Exports };
pub use loading::{
    ActivateError, BundleActivator, FetchError, HttpFetcher, LoadError, ResourceFetcher,
    ResourceLoader, WasmActivator,
};
pub use remote::{ CatalogResponse, CatalogSource, ConfigSource, HttpCatalogSource, HttpConfigSource, RemoteError };
pub use orchestrator::{ LoadOrchestrator, LoadedPlugin };
pub use util::PartialSuccess ;

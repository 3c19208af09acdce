//! Shared fixtures: descriptor builders and in-memory fakes for every seam of
//! the pipeline, so no test touches the network or a wasm engine.
#![allow( dead_code )]

use std::cell::RefCell ;
use std::collections::HashSet ;
use std::rc::Rc ;

use pane_link::{
    BundleActivator, Capability, CapabilityRegistry, CatalogResponse, CatalogSource, ConfigEntry,
    ConfigSource, PluginConfig, PluginDescriptor, PluginId, PluginKind, ResourceFetcher, Settings,
};

pub fn descriptor( id: &str, dependencies: &[ &str ] ) -> PluginDescriptor {
    PluginDescriptor {
        id: PluginId::from( id ),
        version: "1.0.0".to_string(),
        kind: PluginKind::Shared,
        priority: 0,
        dependencies: dependencies.iter().map(|&d| PluginId::from( d )).collect(),
        bundle_locator: format!( "bundles/{id}.wasm" ),
        style_locators: Vec::new(),
        render_slot: None,
        exported_component_name: None,
        pane_metadata: None,
    }
}

pub fn descriptor_with_priority( id: &str, dependencies: &[ &str ], priority: i32 ) -> PluginDescriptor {
    PluginDescriptor { priority, ..descriptor( id, dependencies )}
}

pub fn enabled( ids: &[ &str ] ) -> HashSet<PluginId> {
    ids.iter().map(|&id| PluginId::from( id )).collect()
}

pub fn config_enabling( ids: &[ &str ] ) -> PluginConfig {
    PluginConfig {
        plugins: ids.iter().map(|&id| ConfigEntry {
            id: PluginId::from( id ),
            enabled: true,
            settings: Settings::new(),
        }).collect(),
    }
}

/// Shared log of operations, observable after the orchestrator consumed its fakes.
#[derive( Clone, Default )]
pub struct OpLog( pub Rc<RefCell<Vec<String>>> );

impl OpLog {
    pub fn record( &self, entry: impl Into<String> ) {
        self.0.borrow_mut().push( entry.into() );
    }
    pub fn entries( &self ) -> Vec<String> {
        self.0.borrow().clone()
    }
}

#[derive( Debug, thiserror::Error )]
#[error( "resource `{0}` unavailable" )]
pub struct FakeFetchError( pub String );

/// In-memory fetcher: records every request and fails for configured locators.
#[derive( Default )]
pub struct MemoryFetcher {
    pub log: OpLog,
    failing: HashSet<String>,
}

impl MemoryFetcher {
    pub fn new( log: OpLog ) -> Self {
        Self { log, failing: HashSet::new() }
    }
    pub fn failing_for( mut self, locator: &str ) -> Self {
        self.failing.insert( locator.to_string() );
        self
    }
}

impl ResourceFetcher for MemoryFetcher {
    type Error = FakeFetchError ;
    fn fetch( &mut self, locator: &str ) -> Result<Vec<u8>, FakeFetchError> {
        self.log.record( locator );
        match self.failing.contains( locator ) {
            true => Err( FakeFetchError( locator.to_string() )),
            false => Ok( locator.as_bytes().to_vec() ),
        }
    }
}

#[derive( Debug, thiserror::Error )]
#[error( "bundle for `{0}` refused to start" )]
pub struct FakeActivateError( pub String );

/// In-memory activator: records activation order, publishes one `component`
/// capability per plugin (unless marked silent), fails for configured ids.
#[derive( Default )]
pub struct RecordingActivator {
    pub activated: OpLog,
    failing: HashSet<String>,
    silent: HashSet<String>,
}

impl RecordingActivator {
    pub fn new( activated: OpLog ) -> Self {
        Self { activated, failing: HashSet::new(), silent: HashSet::new() }
    }
    pub fn failing_for( mut self, id: &str ) -> Self {
        self.failing.insert( id.to_string() );
        self
    }
    /// The plugin loads fine but publishes nothing.
    pub fn silent_for( mut self, id: &str ) -> Self {
        self.silent.insert( id.to_string() );
        self
    }
}

impl BundleActivator for RecordingActivator {
    type Error = FakeActivateError ;
    fn activate(
        &mut self,
        descriptor: &PluginDescriptor,
        _bundle: &[u8],
        registry: &mut CapabilityRegistry,
    ) -> Result<(), FakeActivateError> {
        if self.failing.contains( descriptor.id.as_str() ) {
            return Err( FakeActivateError( descriptor.id.as_str().to_string() ));
        }
        self.activated.record( descriptor.id.as_str() );
        if !self.silent.contains( descriptor.id.as_str() ) {
            registry.publish(
                &descriptor.id,
                "component",
                Capability::from( serde_json::json!( descriptor.id.as_str() )),
            );
        }
        Ok(())
    }
}

#[derive( Debug, thiserror::Error )]
#[error( "service unreachable" )]
pub struct Unreachable ;

/// Config source that answers with a canned configuration and counts calls.
pub struct StaticConfig {
    config: PluginConfig,
    pub calls: Rc<RefCell<usize>>,
}

impl StaticConfig {
    pub fn new( config: PluginConfig ) -> Self {
        Self { config, calls: Rc::new( RefCell::new( 0 )) }
    }
}

impl ConfigSource for StaticConfig {
    type Error = Unreachable ;
    fn fetch_config( &self ) -> Result<PluginConfig, Unreachable> {
        *self.calls.borrow_mut() += 1 ;
        Ok( self.config.clone() )
    }
}

/// Config source that is always down. Counts calls so tests can assert it was
/// never consulted.
#[derive( Default )]
pub struct DownConfig {
    pub calls: Rc<RefCell<usize>>,
}

impl ConfigSource for DownConfig {
    type Error = Unreachable ;
    fn fetch_config( &self ) -> Result<PluginConfig, Unreachable> {
        *self.calls.borrow_mut() += 1 ;
        Err( Unreachable )
    }
}

/// Catalog source that answers with a canned response.
pub struct StaticCatalog( pub CatalogResponse );

impl StaticCatalog {
    pub fn of( descriptors: Vec<PluginDescriptor> ) -> Self {
        Self( CatalogResponse { plugins: descriptors, global_style: None })
    }
    pub fn with_global_style( mut self, locator: &str ) -> Self {
        self.0.global_style = Some( locator.to_string() );
        self
    }
}

impl CatalogSource for StaticCatalog {
    type Error = Unreachable ;
    fn fetch_catalog( &self ) -> Result<CatalogResponse, Unreachable> {
        Ok( self.0.clone() )
    }
}

/// Catalog source that is always down.
pub struct DownCatalog ;

impl CatalogSource for DownCatalog {
    type Error = Unreachable ;
    fn fetch_catalog( &self ) -> Result<CatalogResponse, Unreachable> {
        Err( Unreachable )
    }
}

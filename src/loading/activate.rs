use thiserror::Error ;
use wasmtime::{ Engine, Store };
use wasmtime::component::{ Component, HasSelf, Linker };

use crate::descriptor::{ PluginDescriptor, PluginId };
use crate::registry::{ Capability, CapabilityRegistry };

mod bindings {
    wasmtime::component::bindgen!({
        path: "wit",
        world: "bundle",
    });
}

use bindings::Bundle ;
use bindings::pane::host::registry as host_registry ;



/// Host-activation seam of the resource loader.
///
/// Fetching produced raw bundle bytes; activation makes them run so the plugin
/// performs its registration side effects against the capability registry.
/// One implementation exists per host environment - [`WasmActivator`] for
/// WASM component hosts - and tests substitute an in-memory fake.
pub trait BundleActivator {

    /// Error type for failed activations.
    type Error: std::error::Error + Send + Sync + 'static ;

    /// Runs `bundle` so that `descriptor`'s plugin publishes its capabilities
    /// into `registry`. Returns once the bundle has finished initializing.
    ///
    /// # Errors
    /// Implementations fail when the bundle cannot be compiled, linked,
    /// instantiated, or its initialization traps.
    fn activate(
        &mut self,
        descriptor: &PluginDescriptor,
        bundle: &[u8],
        registry: &mut CapabilityRegistry,
    ) -> Result<(), Self::Error> ;

}

/// Errors that can occur activating a WASM component bundle.
#[derive( Debug, Error )]
pub enum ActivateError {
    /// Wasmtime failed to compile the bundle (invalid binary or unsupported features).
    #[error( "failed to compile bundle for `{0}`: {1}" )] Compile( PluginId, wasmtime::Error ),
    /// The host registry interface could not be added to the linker.
    #[error( "failed to link host registry for `{0}`: {1}" )] Link( PluginId, wasmtime::Error ),
    /// Instantiation failed, e.g. the bundle imports something the host doesn't provide.
    #[error( "failed to instantiate `{0}`: {1}" )] Instantiate( PluginId, wasmtime::Error ),
    /// The bundle's `start` export trapped during initialization.
    #[error( "start export of `{0}` trapped: {1}" )] Start( PluginId, wasmtime::Error ),
}

/// Store data for one bundle activation: publications are buffered here and
/// drained into the registry once `start` returns, keeping the registry free
/// of locks.
struct HostCtx {
    plugin: PluginId,
    published: Vec<( String, Capability )>,
}

impl host_registry::Host for HostCtx {
    fn publish( &mut self, name: String, value: String ) {
        let value = serde_json::from_str( &value )
            .unwrap_or_else(|_| serde_json::Value::String( value ));
        self.published.push(( name, Capability::from( value )));
    }
}

/// Activates plugin bundles as WASM components.
///
/// A loadable bundle targets the `bundle` world: it may import
/// `pane:host/registry` and must export a `start` function that performs its
/// registration side effects.
pub struct WasmActivator {
    engine: Engine,
}

impl WasmActivator {

    pub fn new() -> Self { Self { engine: Engine::default() }}

    /// Uses a caller-configured engine, e.g. one with fuel metering enabled.
    pub fn with_engine( engine: Engine ) -> Self { Self { engine }}

}

impl Default for WasmActivator {
    fn default() -> Self { Self::new() }
}

impl BundleActivator for WasmActivator {

    type Error = ActivateError ;

    fn activate(
        &mut self,
        descriptor: &PluginDescriptor,
        bundle: &[u8],
        registry: &mut CapabilityRegistry,
    ) -> Result<(), ActivateError> {

        let component = Component::new( &self.engine, bundle )
            .map_err(| err | ActivateError::Compile( descriptor.id.clone(), err ))?;

        let mut linker = Linker::<HostCtx>::new( &self.engine );
        Bundle::add_to_linker::<_, HasSelf<HostCtx>>( &mut linker, | ctx | ctx )
            .map_err(| err | ActivateError::Link( descriptor.id.clone(), err ))?;

        let mut store = Store::new( &self.engine, HostCtx {
            plugin: descriptor.id.clone(),
            published: Vec::with_capacity( 0 ),
        });

        let instance = Bundle::instantiate( &mut store, &component, &linker )
            .map_err(| err | ActivateError::Instantiate( descriptor.id.clone(), err ))?;
        instance.call_start( &mut store )
            .map_err(| err | ActivateError::Start( descriptor.id.clone(), err ))?;

        let HostCtx { plugin, published } = store.into_data();
        tracing::debug!( plugin = %plugin, capabilities = published.len(), "bundle activated" );
        for ( name, capability ) in published {
            registry.publish( &plugin, name, capability );
        }

        Ok(())

    }

}

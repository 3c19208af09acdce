//! The capability registry.
//!
//! Plugins communicate through capabilities: opaque values a plugin publishes
//! while its bundle runs, keyed under its own id. The registry is owned by the
//! orchestrator and passed by reference into activation, never reached through
//! global state, so tests can hand a fresh registry to any component.
//!
//! No locking: the pipeline loads strictly one plugin at a time, so each
//! bundle's publications are fully visible before the next bundle starts.

use std::collections::HashMap ;
use serde::{ Deserialize, Serialize };

use crate::descriptor::PluginId ;



/// An opaque value a plugin exposes after loading: a JSON payload describing
/// a component, a service endpoint, a palette of commands - the pipeline
/// never looks inside.
#[derive( Clone, Debug, Eq, PartialEq, Serialize, Deserialize )]
#[serde( transparent )]
pub struct Capability( serde_json::Value );

impl Capability {
    /// Returns the underlying JSON payload.
    #[inline] pub fn value( &self ) -> &serde_json::Value { &self.0 }

    /// Consumes the capability, returning the payload.
    #[inline] pub fn into_value( self ) -> serde_json::Value { self.0 }
}

impl From<serde_json::Value> for Capability {
    fn from( value: serde_json::Value ) -> Self { Self( value )}
}

/// The capabilities one plugin published, keyed by capability name.
pub type Exports = HashMap<String, Capability> ;

/// Shared namespace for everything plugins publish, keyed by plugin id.
#[derive( Debug, Default )]
pub struct CapabilityRegistry {
    published: HashMap<PluginId, Exports>,
}

impl CapabilityRegistry {

    pub fn new() -> Self { Self::default() }

    /// Records one capability under `plugin`'s namespace entry. A later
    /// publication with the same name replaces the earlier one.
    pub fn publish( &mut self, plugin: &PluginId, name: impl Into<String>, capability: Capability ) {
        self.published
            .entry( plugin.clone() )
            .or_default()
            .insert( name.into(), capability );
    }

    /// Reads back everything `plugin` published.
    ///
    /// Returns an empty map when the plugin published nothing - a loaded
    /// plugin without exports is a normal outcome, not an error.
    pub fn exports_of( &self, plugin: &PluginId ) -> Exports {
        self.published.get( plugin ).cloned().unwrap_or_default()
    }

    /// Returns `true` if `plugin` has published at least one capability.
    #[inline] pub fn contains( &self, plugin: &PluginId ) -> bool {
        self.published.contains_key( plugin )
    }

}

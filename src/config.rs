//! Plugin enablement and per-plugin settings.
//!
//! The config service answers with `{ "plugins": [{ "id", "enabled",
//! "settings" }] }`. When it cannot be reached, the pipeline substitutes
//! [`PluginConfig::fallback`], a fixed set of plugins enabled out of the box
//! with empty settings.

use std::collections::{ HashMap, HashSet };
use serde::Deserialize ;

use crate::descriptor::PluginId ;



/// Arbitrary key/value settings attached to one plugin.
pub type Settings = HashMap<String, serde_json::Value> ;

/// One plugin's entry in the host configuration.
#[derive( Clone, Debug, Deserialize )]
pub struct ConfigEntry {
    pub id: PluginId,
    pub enabled: bool,
    #[serde( default )]
    pub settings: Settings,
}

/// The full host configuration: which plugins are enabled and with what settings.
#[derive( Clone, Debug, Default, Deserialize )]
pub struct PluginConfig {
    #[serde( default )]
    pub plugins: Vec<ConfigEntry>,
}

/// Plugins enabled out of the box when no configuration can be fetched.
const FALLBACK_IDS: [ &str; 16 ] = [
    "pane.ui",
    "pane.wm",
    "pane.tooltips",
    "pane.header",
    "pane.search-modal",
    "pane.app-modal",
    "pane.search-bar",
    "pane.app-launcher",
    "pane.json-tool",
    "pane.theme-engine",
    "pane.theme-manager",
    "pane.theme-import",
    "pane.layout-engine",
    "pane.settings-engine",
    "pane.layout-manager",
    "pane.settings-manager",
];

impl PluginConfig {

    /// The built-in default configuration: the fixed fallback id set, all
    /// enabled, empty settings.
    pub fn fallback() -> Self {
        Self {
            plugins: FALLBACK_IDS.iter().map(|&id| ConfigEntry {
                id: PluginId::from( id ),
                enabled: true,
                settings: Settings::new(),
            }).collect(),
        }
    }

    /// Ids of all plugins marked enabled.
    pub fn enabled_set( &self ) -> HashSet<PluginId> {
        self.plugins.iter()
            .filter(| entry | entry.enabled )
            .map(| entry | entry.id.clone() )
            .collect()
    }

    /// Settings for `id`, or an empty map if the configuration has no entry for it.
    pub fn settings_for( &self, id: &PluginId ) -> Settings {
        self.plugins.iter()
            .find(| entry | &entry.id == id )
            .map(| entry | entry.settings.clone() )
            .unwrap_or_default()
    }

}

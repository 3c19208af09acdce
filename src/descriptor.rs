//! Plugin metadata types.
//!
//! A [`PluginDescriptor`] is one catalog entry: it names a plugin, the plugins
//! it depends on, and the style and executable resources that must be fetched
//! to bring it to life. Descriptors carry presentation metadata (render slot,
//! exported component, pane details) untouched; the pipeline only interprets
//! `id`, `priority`, `dependencies`, and the resource locators.

use serde::Deserialize ;



/// Unique identifier for a plugin.
///
/// Used to reference plugins in catalog entries, dependency declarations, and
/// the capability registry. Ids are globally unique within one catalog.
#[derive( Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize )]
#[serde( transparent )]
pub struct PluginId( String );

impl PluginId {
    /// Creates a new plugin identifier.
    pub fn new( id: impl Into<String> ) -> Self { Self( id.into() )}

    /// Returns the identifier as a string slice.
    #[inline] pub fn as_str( &self ) -> &str { &self.0 }
}

impl std::fmt::Display for PluginId {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        std::fmt::Display::fmt( &self.0, f )
    }
}

impl From<&str> for PluginId {
    fn from( id: &str ) -> Self { Self( id.to_string() )}
}

impl From<String> for PluginId {
    fn from( id: String ) -> Self { Self( id )}
}

/// What role a plugin plays in the host once loaded.
///
/// The pipeline treats every kind identically; the kind is forwarded to the
/// caller, which decides where (and whether) the plugin surfaces in the UI.
#[derive( Copy, Clone, Debug, Eq, PartialEq, Deserialize )]
#[serde( rename_all = "lowercase" )]
pub enum PluginKind {
    /// A library plugin other plugins build on. Usually publishes capabilities
    /// and renders nothing itself.
    Shared,
    /// Wraps the content area of every pane (e.g. a frame or chrome layer).
    Wrapper,
    /// Contributes a fixed piece of host UI in a named render slot.
    Ui,
    /// A user-openable pane.
    Pane,
}

/// Presentation details for [`PluginKind::Pane`] plugins.
///
/// Opaque to the loading pipeline; handed to the caller for registration.
#[derive( Clone, Debug, Deserialize )]
#[serde( rename_all = "camelCase" )]
pub struct PaneMetadata {
    /// Human-readable name shown in pane pickers.
    pub display_name: String,
    #[serde( default )]
    pub icon: Option<String>,
    #[serde( default )]
    pub kind: Option<String>,
    #[serde( default )]
    pub default_placement: Option<String>,
}

/// One catalog entry describing a loadable plugin.
#[derive( Clone, Debug, Deserialize )]
#[serde( rename_all = "camelCase" )]
pub struct PluginDescriptor {
    /// Globally unique id within the catalog.
    pub id: PluginId,
    /// Version string, informational only. Dependency edges are checked for
    /// presence, never for version compatibility.
    pub version: String,
    pub kind: PluginKind,
    /// Higher-priority plugins load earlier among plugins with no dependency
    /// relationship between them.
    #[serde( default )]
    pub priority: i32,
    /// Ids of plugins that must be loaded before this one.
    #[serde( default )]
    pub dependencies: Vec<PluginId>,
    /// Locator of the executable bundle, resolved against the host's base address.
    pub bundle_locator: String,
    /// Locators of static style resources, resolved the same way.
    #[serde( default )]
    pub style_locators: Vec<String>,
    /// Name of the render slot a `ui` plugin mounts into.
    #[serde( default )]
    pub render_slot: Option<String>,
    /// Name under which the plugin publishes its main component capability.
    #[serde( default )]
    pub exported_component_name: Option<String>,
    #[serde( default )]
    pub pane_metadata: Option<PaneMetadata>,
}

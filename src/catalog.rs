//! The plugin catalog.
//!
//! A [`Catalog`] indexes descriptors by id while preserving the order in which
//! they arrived from the catalog service. That input order matters: it is the
//! final tie-break when two plugins have equal priority and no dependency
//! relationship, which keeps load plans reproducible across runs.

use std::collections::HashMap ;
use std::collections::hash_map::Entry ;
use thiserror::Error ;

use crate::descriptor::{ PluginDescriptor, PluginId };
use crate::util::PartialSuccess ;



/// Diagnostics produced while building a [`Catalog`].
#[derive( Debug, Error, PartialEq, Eq )]
pub enum CatalogWarning {
    /// Two catalog entries share an id. The first entry wins; later ones are dropped.
    #[error( "duplicate plugin id `{0}` in catalog; keeping the first entry" )]
    DuplicateId( PluginId ),
}

/// An id-unique collection of plugin descriptors in catalog input order.
#[derive( Clone, Debug, Default )]
pub struct Catalog {
    descriptors: Vec<PluginDescriptor>,
    index: HashMap<PluginId, usize>,
}

impl Catalog {

    /// Builds a catalog from descriptors in the order the catalog service
    /// returned them.
    ///
    /// # Partial Success
    /// Entries whose id was already seen are dropped and reported as
    /// [`CatalogWarning::DuplicateId`]; the catalog is still usable.
    pub fn new( descriptors: impl IntoIterator<Item = PluginDescriptor> ) -> PartialSuccess<Self, CatalogWarning> {

        let mut kept = Vec::new();
        let mut index = HashMap::new();
        let mut warnings = Vec::with_capacity( 0 );

        for descriptor in descriptors {
            match index.entry( descriptor.id.clone() ) {
                Entry::Occupied( _ ) => warnings.push( CatalogWarning::DuplicateId( descriptor.id )),
                Entry::Vacant( slot ) => {
                    slot.insert( kept.len() );
                    kept.push( descriptor );
                },
            }
        }

        ( Self { descriptors: kept, index }, warnings )

    }

    /// Returns the descriptor registered under `id`, if any.
    pub fn get( &self, id: &PluginId ) -> Option<&PluginDescriptor> {
        self.index.get( id ).map(| position | &self.descriptors[ *position ])
    }

    /// Returns `true` if a descriptor is registered under `id`.
    #[inline] pub fn contains( &self, id: &PluginId ) -> bool { self.index.contains_key( id )}

    /// Returns the input-order position of `id`, if present.
    #[inline] pub fn position( &self, id: &PluginId ) -> Option<usize> { self.index.get( id ).copied() }

    /// Iterates descriptors in catalog input order.
    #[inline] pub fn iter( &self ) -> std::slice::Iter<'_, PluginDescriptor> { self.descriptors.iter() }

    #[inline] pub fn len( &self ) -> usize { self.descriptors.len() }

    #[inline] pub fn is_empty( &self ) -> bool { self.descriptors.is_empty() }

}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PluginDescriptor ;
    type IntoIter = std::slice::Iter<'a, PluginDescriptor> ;
    fn into_iter( self ) -> Self::IntoIter { self.iter() }
}

//! Dependency closure construction.
//!
//! Given the enabled id set and the catalog, [`build_closure`] computes every
//! id that must be loaded: the enabled ids plus everything they transitively
//! depend on. The traversal is a plain depth-first walk with a visited set, so
//! it terminates even if the dependency graph contains a cycle; cycle
//! *reporting* is the planner's job, since only the planner needs an order.

use std::collections::HashSet ;
use itertools::Itertools ;
use thiserror::Error ;

use crate::catalog::Catalog ;
use crate::descriptor::PluginId ;
use crate::util::PartialSuccess ;



/// Diagnostics produced while building the closure.
///
/// Neither condition aborts the walk: unknown ids are reported and the
/// traversal continues, so one bad edge never takes down the whole run.
#[derive( Debug, Error, PartialEq, Eq )]
pub enum ClosureWarning {
    /// An enabled id has no catalog entry. It stays in the closure (the caller
    /// asked for it) but nothing can be planned for it.
    #[error( "enabled plugin `{0}` is not in the catalog" )]
    UnknownEnabledId( PluginId ),
    /// A dependency edge points at an id with no catalog entry. The edge is
    /// dropped; the dependent itself is unaffected.
    #[error( "plugin `{dependent}` depends on `{missing}`, which is not in the catalog" )]
    MissingDependency { dependent: PluginId, missing: PluginId },
}

/// Computes the set of ids that must be loaded: `enabled` plus every id
/// transitively reachable from it via dependency edges.
///
/// Pure function of its inputs; recomputed fresh on every pipeline run.
/// The result is closed under the dependency relation, except for edges
/// reported as [`ClosureWarning::MissingDependency`].
pub fn build_closure( enabled: &HashSet<PluginId>, catalog: &Catalog ) -> PartialSuccess<HashSet<PluginId>, ClosureWarning> {

    let mut closure = HashSet::new();
    let mut warnings = Vec::with_capacity( 0 );

    // Walk enabled ids in catalog order so the warning list is reproducible.
    for descriptor in catalog.iter().filter(| descriptor | enabled.contains( &descriptor.id )) {
        visit( &descriptor.id, catalog, &mut closure, &mut warnings );
    }

    for id in enabled.iter().filter(| id | !catalog.contains( id )).sorted() {
        closure.insert( id.clone() );
        warnings.push( ClosureWarning::UnknownEnabledId( id.clone() ));
    }

    ( closure, warnings )

}

fn visit(
    id: &PluginId,
    catalog: &Catalog,
    closure: &mut HashSet<PluginId>,
    warnings: &mut Vec<ClosureWarning>,
) {

    if !closure.insert( id.clone() ) { return }

    // Ids in `closure` always came through the `contains` check below (or the
    // enabled filter above), so a descriptor is guaranteed here.
    let Some( descriptor ) = catalog.get( id ) else { return };

    for dependency in &descriptor.dependencies {
        match catalog.contains( dependency ) {
            true => visit( dependency, catalog, closure, warnings ),
            false => warnings.push( ClosureWarning::MissingDependency {
                dependent: id.clone(),
                missing: dependency.clone(),
            }),
        }
    }

}

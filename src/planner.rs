//! Load order planning.
//!
//! [`plan`] turns a closure into a total order in which every dependency
//! precedes every dependent. Later pipeline stages rely on this for a
//! side-effect timing guarantee: a plugin at position *k* may assume that every
//! plugin at position < *k* has already published its capabilities into the
//! registry by the time its own bundle runs.
//!
//! Ties between plugins with no ordering constraint are broken by descending
//! priority, then by catalog input order, so the plan is deterministic for a
//! given catalog and closure.

use std::collections::{ HashMap, HashSet };
use itertools::Itertools ;
use thiserror::Error ;

use crate::catalog::Catalog ;
use crate::descriptor::{ PluginDescriptor, PluginId };



/// Errors that can occur during load order planning.
#[derive( Debug, Error, PartialEq, Eq )]
pub enum PlanError {
    /// A dependency cycle was detected. No order can satisfy the guarantee
    /// that dependencies precede dependents, so the whole plan fails rather
    /// than silently truncating the cycle at an arbitrary node.
    #[error( "dependency cycle detected through plugin `{0}`" )]
    CycleDetected( PluginId ),
}

#[derive( Copy, Clone, Debug, Eq, PartialEq )]
enum Mark {
    InProgress,
    Done,
}

/// Produces the load order for `closure`: a post-order depth-first topological
/// sort over the dependency graph.
///
/// Candidates are seeded in descending priority order (catalog input order
/// within equal priority), which fixes the tie-break among independent
/// subgraphs; the traversal then emits each candidate's dependencies before
/// the candidate itself. Closure members without a catalog entry are skipped
/// here - they were already reported when the closure was built.
///
/// # Errors
/// Returns [`PlanError::CycleDetected`] if the dependency graph contains a
/// cycle among the visited plugins.
pub fn plan<'a>(
    closure: &HashSet<PluginId>,
    catalog: &'a Catalog,
) -> Result<Vec<&'a PluginDescriptor>, PlanError> {

    let candidates = catalog.iter()
        .filter(| descriptor | closure.contains( &descriptor.id ))
        .sorted_by_key(| descriptor | std::cmp::Reverse( descriptor.priority ));

    let mut marks: HashMap<PluginId, Mark> = HashMap::new();
    let mut order = Vec::with_capacity( closure.len() );

    for candidate in candidates {
        visit( candidate, catalog, &mut marks, &mut order )?;
    }

    Ok( order )

}

fn visit<'a>(
    descriptor: &'a PluginDescriptor,
    catalog: &'a Catalog,
    marks: &mut HashMap<PluginId, Mark>,
    order: &mut Vec<&'a PluginDescriptor>,
) -> Result<(), PlanError> {

    match marks.get( &descriptor.id ) {
        Some( Mark::Done ) => return Ok(()),
        Some( Mark::InProgress ) => return Err( PlanError::CycleDetected( descriptor.id.clone() )),
        None => {},
    }

    marks.insert( descriptor.id.clone(), Mark::InProgress );

    for dependency in &descriptor.dependencies {
        // Edges to unknown ids were dropped (and warned about) during closure
        // construction; nothing to emit for them here.
        if let Some( dependency ) = catalog.get( dependency ) {
            visit( dependency, catalog, marks, order )?;
        }
    }

    marks.insert( descriptor.id.clone(), Mark::Done );
    order.push( descriptor );

    Ok(())

}

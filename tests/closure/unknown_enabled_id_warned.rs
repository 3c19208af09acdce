use pane_link::{ Catalog, ClosureWarning, PluginId, build_closure };

use crate::fixtures::{ descriptor, enabled };

#[test]
fn enabled_id_without_catalog_entry_is_kept_and_warned() {

    let ( catalog, _ ) = Catalog::new([ descriptor( "a", &[] ) ]);

    let ( closure, warnings ) = build_closure( &enabled( &[ "a", "ghost" ]), &catalog );

    // The caller asked for `ghost`, so the closure keeps it; only the planner
    // drops ids it has no descriptor for.
    assert_eq!( closure, enabled( &[ "a", "ghost" ]));
    assert_eq!( warnings, vec![ ClosureWarning::UnknownEnabledId( PluginId::from( "ghost" )) ]);

}

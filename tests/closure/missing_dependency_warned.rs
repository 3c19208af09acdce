use pane_link::{ Catalog, ClosureWarning, PluginId, build_closure };

use crate::fixtures::{ descriptor, enabled };

#[test]
fn missing_dependency_is_a_warning_not_a_failure() {

    let ( catalog, _ ) = Catalog::new([ descriptor( "x", &[ "y" ]) ]);

    let ( closure, warnings ) = build_closure( &enabled( &[ "x" ]), &catalog );

    // `x` itself is unaffected; the dangling edge is dropped.
    assert_eq!( closure, enabled( &[ "x" ]));
    assert_eq!( warnings, vec![ ClosureWarning::MissingDependency {
        dependent: PluginId::from( "x" ),
        missing: PluginId::from( "y" ),
    }]);

}

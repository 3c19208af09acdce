use pane_link::{ Catalog, build_closure };

use crate::fixtures::{ descriptor, enabled };

#[test]
fn closure_contains_enabled_and_dependencies() {

    let ( catalog, warnings ) = Catalog::new([
        descriptor( "a", &[] ),
        descriptor( "b", &[ "a" ]),
        descriptor( "c", &[ "b" ]),
    ]);
    assert!( warnings.is_empty() );

    let ( closure, closure_warnings ) = build_closure( &enabled( &[ "c" ]), &catalog );

    assert!( closure_warnings.is_empty() );
    assert_eq!( closure, enabled( &[ "a", "b", "c" ]));

    // Every member's catalog-known dependencies are members too.
    for id in &closure {
        let Some( descriptor ) = catalog.get( id ) else { continue };
        for dependency in &descriptor.dependencies {
            if catalog.contains( dependency ) {
                assert!( closure.contains( dependency ));
            }
        }
    }

}

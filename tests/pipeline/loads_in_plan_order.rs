use pane_link::{ LoadOrchestrator, ResourceLoader };

use crate::fixtures::{
    MemoryFetcher, OpLog, RecordingActivator, StaticCatalog, StaticConfig, config_enabling,
    descriptor_with_priority,
};

#[test]
fn loads_enabled_plugins_and_their_dependencies_in_order() {

    let fetched = OpLog::default();
    let activated = OpLog::default();

    let mut orchestrator = LoadOrchestrator::new(
        StaticConfig::new( config_enabling( &[ "a", "b" ])),
        StaticCatalog::of( vec![
            descriptor_with_priority( "a", &[], 100 ),
            descriptor_with_priority( "b", &[ "a" ], 90 ),
            descriptor_with_priority( "c", &[ "b" ], 50 ),
        ]),
        ResourceLoader::new(
            MemoryFetcher::new( fetched.clone() ),
            RecordingActivator::new( activated.clone() ),
        ),
    );

    let loaded = orchestrator.run();

    let ids: Vec<_> = loaded.iter().map(| p | p.descriptor.id.as_str() ).collect();
    assert_eq!( ids, [ "a", "b" ]);

    // Activation happened in plan order, and each plugin's publication was
    // read back into its exports.
    assert_eq!( activated.entries(), [ "a", "b" ]);
    for plugin in &loaded {
        let component = plugin.exports.get( "component" ).unwrap();
        assert_eq!( component.value(), &serde_json::json!( plugin.descriptor.id.as_str() ));
    }

    // Disabled `c` was never fetched.
    assert!( !fetched.entries().contains( &"bundles/c.wasm".to_string() ));

}

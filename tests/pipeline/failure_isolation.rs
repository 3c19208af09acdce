use pane_link::{ LoadOrchestrator, ResourceLoader };

use crate::fixtures::{
    MemoryFetcher, OpLog, RecordingActivator, StaticCatalog, StaticConfig, config_enabling,
    descriptor_with_priority,
};

#[test]
fn one_failing_bundle_does_not_abort_the_run() {

    let mut orchestrator = LoadOrchestrator::new(
        StaticConfig::new( config_enabling( &[ "a", "b" ])),
        StaticCatalog::of( vec![
            descriptor_with_priority( "a", &[], 100 ),
            descriptor_with_priority( "b", &[ "a" ], 90 ),
        ]),
        ResourceLoader::new(
            MemoryFetcher::new( OpLog::default() ),
            RecordingActivator::new( OpLog::default() ).failing_for( "b" ),
        ),
    );

    let loaded = orchestrator.run();

    let ids: Vec<_> = loaded.iter().map(| p | p.descriptor.id.as_str() ).collect();
    assert_eq!( ids, [ "a" ]);

}

#[test]
fn survivors_keep_their_relative_plan_order() {

    let mut orchestrator = LoadOrchestrator::new(
        StaticConfig::new( config_enabling( &[ "p", "q", "r" ])),
        StaticCatalog::of( vec![
            descriptor_with_priority( "p", &[], 30 ),
            descriptor_with_priority( "q", &[], 20 ),
            descriptor_with_priority( "r", &[], 10 ),
        ]),
        ResourceLoader::new(
            MemoryFetcher::new( OpLog::default() ),
            RecordingActivator::new( OpLog::default() ).failing_for( "q" ),
        ),
    );

    let loaded = orchestrator.run();

    let ids: Vec<_> = loaded.iter().map(| p | p.descriptor.id.as_str() ).collect();
    assert_eq!( ids, [ "p", "r" ]);

}

#[test]
fn failed_fetch_is_isolated_like_failed_activation() {

    let mut orchestrator = LoadOrchestrator::new(
        StaticConfig::new( config_enabling( &[ "a", "b" ])),
        StaticCatalog::of( vec![
            descriptor_with_priority( "a", &[], 10 ),
            descriptor_with_priority( "b", &[], 5 ),
        ]),
        ResourceLoader::new(
            MemoryFetcher::new( OpLog::default() ).failing_for( "bundles/a.wasm" ),
            RecordingActivator::new( OpLog::default() ),
        ),
    );

    let loaded = orchestrator.run();

    let ids: Vec<_> = loaded.iter().map(| p | p.descriptor.id.as_str() ).collect();
    assert_eq!( ids, [ "b" ]);

}

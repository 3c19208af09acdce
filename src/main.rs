use std::time::Duration ;

use pane_link::{
    HttpCatalogSource, HttpConfigSource, HttpFetcher, LoadOrchestrator, ResourceLoader,
    WasmActivator,
};

const CONFIG_PATH: &str = "api/config" ;
const CATALOG_PATH: &str = "api/catalog" ;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    tracing_subscriber::fmt()
        .with_env_filter( tracing_subscriber::EnvFilter::from_default_env() )
        .init();

    let base = std::env::var( "PANE_LINK_BASE_URL" )
        .unwrap_or_else(|_| "http://localhost:8000/".to_string() );
    let base = url::Url::parse( &base )?;

    let client = reqwest::blocking::Client::builder()
        .user_agent( concat!( "pane-link/", env!( "CARGO_PKG_VERSION" )))
        .timeout( Duration::from_secs( 30 ))
        .build()?;

    let mut orchestrator = LoadOrchestrator::new(
        HttpConfigSource::new( client.clone(), base.join( CONFIG_PATH )? ),
        HttpCatalogSource::new( client.clone(), base.join( CATALOG_PATH )? ),
        ResourceLoader::new( HttpFetcher::with_client( client, base ), WasmActivator::new() ),
    );

    for plugin in orchestrator.run() {
        println!(
            "{} {} ({} exports)",
            plugin.descriptor.id,
            plugin.descriptor.version,
            plugin.exports.len(),
        );
    }

    Ok(())

}

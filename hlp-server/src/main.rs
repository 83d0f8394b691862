use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hlp_server::catalog::RouteCatalog;
use hlp_server::index::RouteIndex;
use hlp_server::web::{AppState, create_router};

/// Dataset path used when HLP_DATASET is not set.
const DEFAULT_DATASET: &str = "data/routes.json";

/// Static assets directory.
const STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Materialize the catalog before anything else; a bad dataset is fatal
    let dataset_path =
        std::env::var("HLP_DATASET").unwrap_or_else(|_| DEFAULT_DATASET.to_string());
    let catalog = RouteCatalog::load(&dataset_path)
        .unwrap_or_else(|e| panic!("Failed to load route catalog from {dataset_path}: {e}"));

    let stats = catalog.stats();
    println!(
        "Loaded {} routes from {} ({} sorties, {} rentrées, {} inter-lignes)",
        stats.total, dataset_path, stats.sorties, stats.rentrees, stats.inter_lignes
    );
    if let Some(version) = catalog.version() {
        println!("Booklet edition {version}");
    }

    // Derived lookup structures; rebuilt only by restarting with new data
    let index = RouteIndex::build(Arc::new(catalog));

    let state = AppState::new(index);
    let app = create_router(state, STATIC_DIR);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("HLP Navigator listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                    - Health check");
    println!("  GET /api/origins               - Distinct origins");
    println!("  GET /api/destinations?from=    - Destinations for an origin");
    println!("  GET /api/route?from=&to=       - Exact route lookup");
    println!("  GET /api/search?q=&category=   - Free-text route search");
    println!("  GET /api/stats                 - Per-category route counts");
    println!("  GET /api/directions/classify?text=  - Classify an instruction");
    println!("  GET /api/directions/annotate?text=  - Annotate an instruction");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

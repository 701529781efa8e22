/// travel-imagery entry
/// Serves the image resolution API and the provider proxy on one port

use tracing::{error, info, warn};

use travel_imagery::app::build_router;
use travel_imagery::config::ImageryConfig;
use travel_imagery::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ImageryConfig::from_env();

    println!("travel-imagery v{}", env!("CARGO_PKG_VERSION"));
    println!("listen:      http://{}:{}", config.host, config.port);
    println!("proxy base:  {}", config.proxy_base);
    println!("timeout:     {} ms", config.timeout_ms);
    println!();

    if config.unsplash_access_key.is_none() {
        warn!("UNSPLASH_ACCESS_KEY not set, Unsplash proxy will answer 503");
    }
    if config.pixabay_api_key.is_none() {
        warn!("PIXABAY_API_KEY not set, Pixabay proxy will answer 503");
    }

    let state = match AppState::from_config(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("failed to build HTTP clients: {}", e);
            std::process::exit(1);
        }
    };

    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, build_router(state)).await {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kr_reader::config::AppConfig;
use kr_reader::content::ContentResolver;
use kr_reader::images::RandomImageProvider;
use kr_reader::state::AppState;

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kr_reader=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = AppConfig::load();

  let resolver = ContentResolver::new(&config.texts_dir).unwrap_or_else(|e| {
    panic!(
      "Failed to open lesson directory {}: {}",
      config.texts_dir.display(),
      e
    )
  });
  tracing::info!("Serving lessons from {}", resolver.root().display());

  let state = AppState::new(resolver, RandomImageProvider::new(config.image_dir()));
  let app = kr_reader::app(state, &config.static_dir);

  let bind_addr = config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config.port);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}

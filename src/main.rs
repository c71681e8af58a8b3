use std::sync::Arc;

use clinic_backend::config::Settings;
use clinic_backend::routes;
use clinic_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    let cors = settings.cors_layer();
    let addr = settings.bind_addr.clone();

    let state = Arc::new(AppState::new(settings));
    let app = routes::create_router(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("clinic chatbot backend listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

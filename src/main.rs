use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};

use todo_server::{
    app_state::AppState, data_access::data_context::DataContext, map_routes, settings::Settings,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info".into()),
        )
        .init();

    let settings = Settings::load().expect("Failed to load settings");

    let data_context =
        DataContext::new(&settings.database_path).expect("Failed to open todo database");
    tracing::info!("Database ready at {}", settings.database_path);

    let addr: SocketAddr = format!(
        "{}:{}",
        settings.tcp_socket_binding, settings.tcp_socket_port
    )
    .parse()
    .expect("Invalid tcp_socket_binding/tcp_socket_port in settings");

    let state = Arc::new(AppState {
        data_context,
        settings,
    });

    let app = map_routes(state).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    tracing::info!("Server running on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

use crate::{
    configuration::{DatabaseSettings, Settings},
    routes::greeting,
};
use axum::{
    Router,
    routing::{IntoMakeService, get},
    serve::Serve,
};
use sea_orm::{Database, DatabaseConnection, DbErr};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub fn run(
    listener: std::net::TcpListener,
) -> Result<Serve<TcpListener, IntoMakeService<Router>, Router>, std::io::Error> {
    let port = listener.local_addr()?.port();
    let app = Router::new()
        .route("/", get(greeting))
        // any other path falls through to axum's default 404
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::from_std(listener)?;
    println!(
        "Hello there. The server is running at http://localhost:{}",
        port
    );

    let server = axum::serve(listener, app.into_make_service());
    Ok(server)
}

pub async fn build(
    configuration: Settings,
) -> Result<Serve<TcpListener, IntoMakeService<Router>, Router>, std::io::Error> {
    let listener = std::net::TcpListener::bind(configuration.application.address())?;
    listener.set_nonblocking(true)?;
    run(listener)
}

// Opens the transient in-memory store. Held for the lifetime of the
// process; nothing reads or writes through it.
pub async fn get_db_connection(
    configuration: &DatabaseSettings,
) -> Result<DatabaseConnection, DbErr> {
    Database::connect(configuration.uri.as_str()).await
}

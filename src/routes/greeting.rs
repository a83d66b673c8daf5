use axum::response::IntoResponse;

// Answers `GET /`. Query parameters and headers are ignored,
// every request gets the same body.
pub async fn greeting() -> impl IntoResponse {
    "Hello World! 👋"
}

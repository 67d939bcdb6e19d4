/// Fixed greeting; no database access, succeeds regardless of connection state.
pub async fn home() -> &'static str {
    "Axum + MongoDB - Application connectée!"
}

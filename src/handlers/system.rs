pub async fn health_get() -> &'static str {
    "ok"
}

use cgiparams::server::resolve_addr;
use cgiparams::AppError;

#[test]
fn test_resolve_addr_valid() {
    let addr = resolve_addr("127.0.0.1", 8080).unwrap();
    assert_eq!(addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn test_resolve_addr_invalid_host() {
    let err = resolve_addr("not a host", 8080).unwrap_err();
    assert!(matches!(err, AppError::InvalidAddress(_)));
}

#[tokio::test]
async fn test_start_server_reports_bind_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let err = cgiparams::server::start_server("127.0.0.1", port).await.unwrap_err();
    assert!(matches!(err, AppError::Bind { .. }));
}

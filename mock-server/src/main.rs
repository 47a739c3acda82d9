use tokio::net::TcpListener;

/// Standalone runner for poking the endpoints by hand; tests embed the
/// router directly instead.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    println!("mock server on 127.0.0.1:{port}");
    mock_server::run(listener).await
}

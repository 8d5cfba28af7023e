use tokio::net::TcpListener;

// Default port matches the app's default catalog endpoint.
const DEFAULT_PORT: &str = "5000";

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("catalog mock listening on {addr}");
    mock_server::run(listener).await
}

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, and only when asked for, so the TUI stays clean.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
    }

    gallows::cli::run().await
}

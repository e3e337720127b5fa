use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(e) = zexly_lib::run().await {
        error!("Fatal: {}", e);
        std::process::exit(1);
    }
}

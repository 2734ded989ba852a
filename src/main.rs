#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    vital_watcher::run().await
}

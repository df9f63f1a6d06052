use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    popcorn_lib::run()
        .await
        .context("popcorn failed to start")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    agora_client_lib::run().await
}

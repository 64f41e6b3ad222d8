use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = vivo::cli::VivoArgs::parse();

    vivo::run(args).await
}

use cumulus_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let (_state, router) = cumulus_api::setup::initialize_app(config.clone())?;
    cumulus_api::setup::server::start_server(&config, router).await?;

    Ok(())
}

use anyhow::{Context, Result};
use eco_news_core::{
    application::{
        dto::{AddEcoNewsDtoRequest, EcoNewsDto},
        mapping::AddEcoNewsRequestMapper,
    },
    config::AppConfig,
    infrastructure::{catalog::ReferenceCatalog, time::SystemClock},
};
use std::{path::Path, sync::Arc};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

/// Maps one request against the configured catalog and prints the entity
/// that would be stored.
async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let (users, tags, languages) = ReferenceCatalog::load(config.catalog_path())
        .await?
        .into_repositories();

    let mapper = AddEcoNewsRequestMapper::new(
        Arc::new(users),
        Arc::new(tags),
        Arc::new(languages),
        Arc::new(SystemClock),
    );

    let raw = read_request(config.request_path()).await?;
    let request: AddEcoNewsDtoRequest =
        serde_json::from_str(&raw).context("malformed eco news request")?;

    let news = mapper.convert(request).await?;
    tracing::info!(
        author_id = %news.author.id,
        translations = news.translations.len(),
        "eco news request mapped"
    );

    let mut output = serde_json::to_string_pretty(&EcoNewsDto::from(news.as_ref()))?;
    output.push('\n');
    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;

    Ok(())
}

async fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read request {}", path.display())),
        None => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("failed to read request from stdin")?;
            Ok(raw)
        }
    }
}

fn init_tracing(filter: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

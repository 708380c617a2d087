use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;

use content_shuttle::cli::Args;
use content_shuttle::config::Config;
use content_shuttle::content::ContentStore;
use content_shuttle::desk::DeskContent;
use content_shuttle::sync;
use content_shuttle::transifex::Tx;
use content_shuttle::translation::TranslationStore;

const CONTENT_BACKENDS: &[&str] = &["desk"];
const TRANSLATION_BACKENDS: &[&str] = &["transifex"];

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("content_shuttle=debug".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = Config::from_env()?;

    if !CONTENT_BACKENDS.contains(&args.content.as_str()) {
        bail!("unknown content backend: {}", args.content);
    }
    if !TRANSLATION_BACKENDS.contains(&args.translation.as_str()) {
        bail!("unknown translation backend: {}", args.translation);
    }

    let request = args.into_request()?;

    info!(
        "Starting sync: {} kind(s), {} locale(s)",
        request.kinds.len(),
        request.locales.len()
    );

    let content = DeskContent::new(&config);
    let content: &dyn ContentStore = &content;

    let config_ref = &config;
    let make_translation = move |slug: &str| -> Result<Box<dyn TranslationStore>> {
        Ok(Box::new(Tx::new(config_ref, slug)))
    };

    sync::run(&request, &config, content, &make_translation)?;

    info!("Sync finished.");
    Ok(())
}

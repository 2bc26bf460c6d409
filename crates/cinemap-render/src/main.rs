//! Camera track renderer binary.
//!
//! `cinemap [PROJECT] [OUTPUT]`, see `cinemap --help`.

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cinemap_models::Project;
use cinemap_render::{
    Args, JsonLinesTarget, RenderConfig, RenderDriver, RenderError, RenderSummary,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cinemap=info,cinemap_render=info,cinemap_core=warn"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting cinemap");

    let config = RenderConfig::from_env().with_cli(args);
    info!("Render config: {:?}", config);

    match render(&config).await {
        Ok(summary) => info!(
            frames = summary.frames,
            placeholders = summary.placeholders,
            ready_timeouts = summary.ready_timeouts,
            output = %config.output_path.display(),
            "Camera track written"
        ),
        Err(e) => {
            error!("Render failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn render(config: &RenderConfig) -> anyhow::Result<RenderSummary> {
    let project_path = config.project_path.as_ref().ok_or(RenderError::MissingProject)?;

    let json = tokio::fs::read_to_string(project_path)
        .await
        .with_context(|| format!("Failed to read project {}", project_path.display()))?;
    let project = Project::from_json(&json)
        .with_context(|| format!("Invalid project {}", project_path.display()))?;

    let mut target = JsonLinesTarget::create(&config.output_path)
        .await
        .with_context(|| format!("Failed to create {}", config.output_path.display()))?;

    let summary = RenderDriver::new(config).run(&project, &mut target).await?;
    Ok(summary)
}

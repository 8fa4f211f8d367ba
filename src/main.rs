use clap::Parser;
use data_view::utils::base_from_arg;
use data_view::{FlowState, Outcome, Viewer, ViewerConfig, ViewerError};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(FlowState::Rendered) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            ::log::error!("Failed to load page: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<FlowState, ViewerError> {
    let config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from file: {}", path.display());
            ViewerConfig::from_file(path)?
        }
        None => ViewerConfig::default(),
    }
    .with_env_overrides();

    let mut viewer = Viewer::new(config);
    if let Some(base) = &args.base {
        viewer = viewer.with_base_url(&base_from_arg(base)?);
    }
    if let Some(resource) = &args.resource {
        viewer = viewer.with_resource(resource);
    }
    if let Some(template) = args.template {
        viewer = viewer.with_template(template);
    }

    let output = args.output.or_else(|| viewer.config().output.clone());
    let Outcome { state, page } = viewer.run().await?;
    ::log::info!("Flow finished in state {:?}", state);

    let html = page.to_html();
    match output {
        Some(path) => {
            tokio::fs::write(&path, html)
                .await
                .map_err(|source| ViewerError::Io {
                    path: path.clone(),
                    source,
                })?;
            ::log::info!("Rendered page written to {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(state)
}

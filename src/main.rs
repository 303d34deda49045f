// Main entry point - load a dashboard and print its render-ready grid state
use dashboard_grid::application::dashboard_service::DashboardService;
use dashboard_grid::infrastructure::config::{load_app_config, load_dashboard_definition};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stdout carries the render output)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    let path = std::env::args_os()
        .nth(1)
        .map(Into::into)
        .unwrap_or_else(|| app_config.dashboard_path.clone());
    let definition = load_dashboard_definition(&path)?;
    tracing::info!(
        "Loaded dashboard {} with {} widgets",
        path.display(),
        definition.data.widgets.len()
    );

    let service = DashboardService::new(app_config);
    let render = service.render(definition);
    println!("{}", serde_json::to_string_pretty(&render)?);

    Ok(())
}
